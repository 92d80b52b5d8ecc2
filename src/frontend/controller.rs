// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page navigation and form handling, addressed by element id.

use std::collections::BTreeMap;

/// Class that hides an element.
pub const HIDDEN_CLASS: &str = "hidden";

pub const LOGIN_SECTION: &str = "login-section";
pub const DASHBOARD_SECTION: &str = "dashboard-section";

/// Navigation link id → page section id.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("nav-dashboard", DASHBOARD_SECTION),
    ("nav-profile", "profile-section"),
    ("nav-events", "events-section"),
    ("nav-history", "history-section"),
    ("nav-notifications", "notifications-section"),
];

/// Every top-level page section; exactly one is visible at a time.
pub const PAGE_SECTIONS: [&str; 6] = [
    LOGIN_SECTION,
    DASHBOARD_SECTION,
    "profile-section",
    "events-section",
    "history-section",
    "notifications-section",
];

pub const LOGIN_FORM: &str = "login-form";
pub const LOGIN_EMAIL: &str = "login-email";
pub const LOGIN_PASSWORD: &str = "login-password";
/// Elements showing the signed-in user's name.
pub const USER_NAME_DISPLAYS: [&str; 2] = ["user-name", "welcome-name"];

pub const PROFILE_FORM: &str = "profile-form";
pub const PROFILE_SAVED_MESSAGE: &str = "Profile updated successfully!";

/// Field id and maximum length of each counted field. The counter element
/// id is the field id plus `-counter`.
pub const CHARACTER_COUNTERS: [(&str, usize); 4] = [
    ("full-name", 50),
    ("address1", 100),
    ("address2", 100),
    ("city", 100),
];

pub const PROFILE_IMAGE_INPUT: &str = "profile-image-input";
pub const PROFILE_IMAGE_PREVIEW: &str = "profile-image-preview";

pub const NOTIFICATION_BUTTON: &str = "notification-btn";
pub const NOTIFICATION_DOT: &str = "notification-dot";

/// The parts of the document the controller touches.
pub trait Dom {
    fn set_hidden(&mut self, id: &str, hidden: bool);
    fn is_hidden(&self, id: &str) -> bool;
    /// Current value of a form control.
    fn input_value(&self, id: &str) -> Option<String>;
    fn set_text(&mut self, id: &str, text: &str);
    fn set_image_source(&mut self, id: &str, src: &str);
    fn alert(&mut self, message: &str);
    /// Write to the browser console.
    fn log(&mut self, message: &str);
}

/// Show `section` and hide every other page section.
pub fn show_section(dom: &mut impl Dom, section: &str) {
    for id in PAGE_SECTIONS {
        dom.set_hidden(id, id != section);
    }
}

/// Handle a click on a navigation link.
///
/// Returns true when the link is mapped, meaning the default navigation
/// must be prevented.
pub fn handle_nav_click(dom: &mut impl Dom, link_id: &str) -> bool {
    let Some((_, section)) = NAV_LINKS.iter().find(|(link, _)| *link == link_id) else {
        return false;
    };
    show_section(dom, section);
    true
}

/// Part of an email address before the `@` (the whole string if none).
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Sign in locally: switch to the dashboard and greet the user.
///
/// The submission is logged to the browser console, which any extension or
/// shared screen can read, so the password is replaced by one `*` per
/// character. Only its length is visible.
pub fn handle_login_submit(dom: &mut impl Dom) {
    let email = dom.input_value(LOGIN_EMAIL).unwrap_or_default();
    let password = dom.input_value(LOGIN_PASSWORD).unwrap_or_default();

    let masked = "*".repeat(password.chars().count());
    dom.log(&format!("Login submitted: email={email} password={masked}"));

    show_section(dom, DASHBOARD_SECTION);

    let name = local_part(&email);
    for id in USER_NAME_DISPLAYS {
        dom.set_text(id, name);
    }
}

/// Collect submitted profile fields into a map; later duplicates win.
pub fn handle_profile_submit<I>(dom: &mut impl Dom, fields: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let profile: BTreeMap<String, String> = fields.into_iter().collect();

    match serde_json::to_string(&profile) {
        Ok(json) => dom.log(&format!("Profile submitted: {json}")),
        Err(e) => dom.log(&format!("Profile submitted (unserializable: {e})")),
    }
    dom.alert(PROFILE_SAVED_MESSAGE);

    profile
}

/// Counter text for a field. Length is counted in UTF-16 code units, as
/// the browser does.
pub fn character_count_text(value: &str, max: usize) -> String {
    format!("{}/{} characters", value.encode_utf16().count(), max)
}

/// Refresh the counter paired with `field_id`. Returns false for fields
/// without a counter.
pub fn handle_counter_input(dom: &mut impl Dom, field_id: &str) -> bool {
    let Some((_, max)) = CHARACTER_COUNTERS.iter().find(|(id, _)| *id == field_id) else {
        return false;
    };

    let value = dom.input_value(field_id).unwrap_or_default();
    dom.set_text(
        &format!("{field_id}-counter"),
        &character_count_text(&value, *max),
    );
    true
}

/// Show a selected profile image once it has been read as a data URL.
pub fn handle_image_loaded(dom: &mut impl Dom, data_url: &str) {
    dom.set_image_source(PROFILE_IMAGE_PREVIEW, data_url);
}

pub fn toggle_notification_dot(dom: &mut impl Dom) {
    let hidden = dom.is_hidden(NOTIFICATION_DOT);
    dom.set_hidden(NOTIFICATION_DOT, !hidden);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[derive(Default)]
    struct FakeDom {
        hidden: HashSet<String>,
        values: HashMap<String, String>,
        texts: HashMap<String, String>,
        images: HashMap<String, String>,
        alerts: Vec<String>,
        logs: Vec<String>,
    }

    impl FakeDom {
        fn with_value(mut self, id: &str, value: &str) -> Self {
            self.values.insert(id.to_string(), value.to_string());
            self
        }

        fn visible_sections(&self) -> Vec<&str> {
            PAGE_SECTIONS
                .into_iter()
                .filter(|id| !self.hidden.contains(*id))
                .collect()
        }
    }

    impl Dom for FakeDom {
        fn set_hidden(&mut self, id: &str, hidden: bool) {
            if hidden {
                self.hidden.insert(id.to_string());
            } else {
                self.hidden.remove(id);
            }
        }

        fn is_hidden(&self, id: &str) -> bool {
            self.hidden.contains(id)
        }

        fn input_value(&self, id: &str) -> Option<String> {
            self.values.get(id).cloned()
        }

        fn set_text(&mut self, id: &str, text: &str) {
            self.texts.insert(id.to_string(), text.to_string());
        }

        fn set_image_source(&mut self, id: &str, src: &str) {
            self.images.insert(id.to_string(), src.to_string());
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn log(&mut self, message: &str) {
            self.logs.push(message.to_string());
        }
    }

    #[test]
    fn test_nav_click_shows_exactly_one_section() {
        let mut dom = FakeDom::default();

        for (link, section) in NAV_LINKS {
            assert!(handle_nav_click(&mut dom, link));
            assert_eq!(dom.visible_sections(), vec![section]);
        }
    }

    #[test]
    fn test_unmapped_link_is_ignored() {
        let mut dom = FakeDom::default();
        dom.set_hidden("profile-section", true);

        assert!(!handle_nav_click(&mut dom, "nav-logout"));
        assert!(dom.is_hidden("profile-section"));
        assert!(!dom.is_hidden(LOGIN_SECTION));
    }

    #[test]
    fn test_login_switches_to_dashboard_and_greets() {
        let mut dom = FakeDom::default()
            .with_value(LOGIN_EMAIL, "maria.lopez@example.org")
            .with_value(LOGIN_PASSWORD, "hunter2");

        handle_login_submit(&mut dom);

        assert_eq!(dom.visible_sections(), vec![DASHBOARD_SECTION]);
        assert_eq!(dom.texts["user-name"], "maria.lopez");
        assert_eq!(dom.texts["welcome-name"], "maria.lopez");
        assert_eq!(dom.logs.len(), 1);
        assert!(dom.logs[0].contains("maria.lopez@example.org"));
        assert!(!dom.logs[0].contains("hunter2"));
        assert!(dom.logs[0].ends_with("password=*******"));
    }

    #[test]
    fn test_local_part() {
        assert_eq!(local_part("a.b@example.com"), "a.b");
        assert_eq!(local_part("no-at-sign"), "no-at-sign");
        assert_eq!(local_part("@example.com"), "");
        assert_eq!(local_part(""), "");
    }

    #[test]
    fn test_profile_submit_collects_fields_and_alerts() {
        let mut dom = FakeDom::default();
        let fields = vec![
            ("fullName".to_string(), "Maria Lopez".to_string()),
            ("city".to_string(), "Austin".to_string()),
            ("city".to_string(), "Houston".to_string()),
        ];

        let profile = handle_profile_submit(&mut dom, fields);

        assert_eq!(profile.len(), 2);
        assert_eq!(profile["city"], "Houston");
        assert_eq!(dom.alerts, vec![PROFILE_SAVED_MESSAGE]);
        assert!(dom.logs[0].contains(r#""fullName":"Maria Lopez""#));
    }

    #[test]
    fn test_character_count_text() {
        assert_eq!(character_count_text("", 50), "0/50 characters");
        assert_eq!(character_count_text("Houston", 100), "7/100 characters");
        // One astral-plane character is two UTF-16 units.
        assert_eq!(character_count_text("🙂", 50), "2/50 characters");
    }

    #[test]
    fn test_counter_input_updates_paired_counter() {
        let mut dom = FakeDom::default().with_value("address1", "12 Elm St");

        assert!(handle_counter_input(&mut dom, "address1"));
        assert_eq!(dom.texts["address1-counter"], "9/100 characters");

        assert!(!handle_counter_input(&mut dom, "zip-code"));
        assert!(!dom.texts.contains_key("zip-code-counter"));
    }

    #[test]
    fn test_image_loaded_sets_preview() {
        let mut dom = FakeDom::default();
        handle_image_loaded(&mut dom, "data:image/png;base64,AAAA");
        assert_eq!(
            dom.images[PROFILE_IMAGE_PREVIEW],
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn test_notification_dot_toggles() {
        let mut dom = FakeDom::default();

        toggle_notification_dot(&mut dom);
        assert!(dom.is_hidden(NOTIFICATION_DOT));

        toggle_notification_dot(&mut dom);
        assert!(!dom.is_hidden(NOTIFICATION_DOT));
    }
}
