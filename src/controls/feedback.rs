//! Feedback form submit gating.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use crate::consts::FEEDBACK_MIN_MESSAGE_CHARS;

/// Contact type meaning "do not contact me"; no username is needed.
pub const NO_CONTACT: &str = "None";

/// Submit button state and the classes for the two hint lines under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitGate<'a> {
    pub disabled: bool,
    /// Class for the "message too short" hint.
    pub message_hint_class: &'a str,
    /// Class for the "contact username required" hint.
    pub contact_hint_class: &'a str,
}

/// Submit needs a message longer than the minimum and, unless the contact
/// type is `None`, a contact username. Satisfied hints are hidden.
///
/// Length is measured in UTF-16 code units, as the browser reports it.
#[must_use]
pub fn submit_gate<'a>(message: &str, contact_type: &str, contact_user: &str, hidden_class: &'a str) -> SubmitGate<'a> {
    let message_ok = message.encode_utf16().count() > FEEDBACK_MIN_MESSAGE_CHARS;
    let contact_ok = contact_type == NO_CONTACT || !contact_user.is_empty();
    SubmitGate {
        disabled: !(message_ok && contact_ok),
        message_hint_class: if message_ok { hidden_class } else { "" },
        contact_hint_class: if contact_ok { hidden_class } else { "" },
    }
}
