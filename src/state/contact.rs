//! Contact form validation and the single inline message slot.
//!
//! Submission never leaves the page: a valid form is acknowledged and
//! cleared, an invalid one keeps its input and shows why.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Field values read from the form at submit time. Missing inputs read as
/// `None`, which validates the same as an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Why a submission was refused. `Display` is the text shown to the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email")]
    InvalidEmail,
}

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|value| !value.is_empty());
        if !(filled(&self.name) && filled(&self.email) && filled(&self.message)) {
            return Err(ValidationError::MissingField);
        }
        if !self.email.as_deref().is_some_and(is_valid_email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// The `\s` class of a JS regex: Unicode White_Space plus the BOM.
fn is_js_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

/// Permissive address check: `local@domain.tld` where no part contains
/// whitespace or a second `@`, and the domain has a `.` with text on both
/// sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Inline style for the message box.
    pub fn css_text(self) -> String {
        let (background, color) = match self {
            Self::Success => ("rgba(34, 197, 94, 0.1)", "#22c55e"),
            Self::Error => ("rgba(239, 68, 68, 0.1)", "#ef4444"),
        };
        format!(
            "padding: 1rem; border-radius: 0.5rem; margin-top: 1rem; \
             background: {background}; color: {color}; border: 1px solid {color};"
        )
    }
}

/// Outcome of a submit: what to show and whether to clear the fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub kind: MessageKind,
    pub text: String,
    pub reset_form: bool,
}

pub fn submit(submission: &ContactSubmission) -> SubmitOutcome {
    match submission.validate() {
        Ok(()) => SubmitOutcome { kind: MessageKind::Success, text: SUCCESS_MESSAGE.to_owned(), reset_form: true },
        Err(err) => SubmitOutcome { kind: MessageKind::Error, text: err.to_string(), reset_form: false },
    }
}

/// Holds at most one visible message. Each message gets a ticket so a
/// dismissal timer for a replaced message cannot remove its successor.
#[derive(Debug)]
pub struct MessageSlot<T> {
    current: Option<(u64, T)>,
    next_ticket: u64,
}

impl<T> Default for MessageSlot<T> {
    fn default() -> Self {
        Self { current: None, next_ticket: 0 }
    }
}

impl<T> MessageSlot<T> {
    /// Install `item` as the visible message. Returns its ticket and the
    /// message it displaced, which the caller must remove from the page.
    pub fn replace(&mut self, item: T) -> (u64, Option<T>) {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let previous = self.current.replace((ticket, item)).map(|(_, item)| item);
        (ticket, previous)
    }

    /// Take the message back out if `ticket` is still the visible one.
    pub fn expire(&mut self, ticket: u64) -> Option<T> {
        match &self.current {
            Some((current, _)) if *current == ticket => self.current.take().map(|(_, item)| item),
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref().map(|(_, item)| item)
    }
}
