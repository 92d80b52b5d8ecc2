// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Browser-side page controller.
//!
//! The controller logic is written against the [`controller::Dom`] trait so
//! it runs (and is tested) natively; the `web` feature binds it to the real
//! document. None of it talks to the API: login and profile saving are
//! local placeholders.

pub mod controller;

#[cfg(feature = "web")]
pub mod web;
