//! Browser Alerts
//!
//! Blocking message box for backend messages and request failures.

use leptos::prelude::window;

pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        log::warn!("[ALERT] could not show alert: {}", message);
    }
}
