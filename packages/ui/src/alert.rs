//! Blocking user-facing alerts.

use dioxus::prelude::*;

/// Show `message` in the platform's native alert dialog.
pub fn show_alert(message: &str) {
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    let _ = document::eval(&format!("alert({literal});"));
}
