// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (CORS, security headers, error details).

pub mod errors;
pub mod headers;

pub use errors::expose_error_details;
pub use headers::{add_cors_headers, add_security_headers};
