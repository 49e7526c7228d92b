use super::*;

fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    ContactSubmission {
        name: Some(name.to_owned()),
        email: Some(email.to_owned()),
        message: Some(message.to_owned()),
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_message_is_rejected_and_form_kept() {
    let outcome = submit(&submission("Ada", "a@b.co", ""));
    assert_eq!(outcome.kind, MessageKind::Error);
    assert_eq!(outcome.text, "Please fill in all fields");
    assert!(!outcome.reset_form);
}

#[test]
fn missing_input_counts_as_empty() {
    let form = ContactSubmission { name: Some("Ada".to_owned()), email: None, message: Some("hi".to_owned()) };
    assert_eq!(form.validate(), Err(ValidationError::MissingField));
}

#[test]
fn bad_email_is_rejected() {
    let outcome = submit(&submission("Ada", "not-an-email", "hi"));
    assert_eq!(outcome.kind, MessageKind::Error);
    assert_eq!(outcome.text, "Please enter a valid email");
    assert!(!outcome.reset_form);
}

#[test]
fn valid_submission_succeeds_and_resets() {
    let outcome = submit(&submission("Ada", "a@b.co", "hi"));
    assert_eq!(outcome.kind, MessageKind::Success);
    assert_eq!(outcome.text, SUCCESS_MESSAGE);
    assert!(outcome.reset_form);
}

#[test]
fn whitespace_only_fields_count_as_filled() {
    assert_eq!(submission(" ", "a@b.co", " ").validate(), Ok(()));
}

#[test]
fn email_pattern_accepts_permissive_addresses() {
    for email in ["a@b.co", "first.last@sub.example.org", "x@y.z", "a@b..c"] {
        assert!(is_valid_email(email), "{email} should pass");
    }
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    for email in ["", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.de", "a@b@c.de", "a@b.c ", "ab.co", "a\u{FEFF}b@c.de", "a@b.c\u{00A0}de"] {
        assert!(!is_valid_email(email), "{email} should fail");
    }
}

#[test]
fn byte_order_mark_counts_as_whitespace() {
    assert!(!is_valid_email("\u{FEFF}a@b.co"));
    assert!(!is_valid_email("a@b.co\u{FEFF}"));
    assert!(is_valid_email("a@b.co"));
}

// =============================================================
// Message styling
// =============================================================

#[test]
fn message_kinds_have_distinct_styles() {
    assert_eq!(MessageKind::Success.class_name(), "success");
    assert_eq!(MessageKind::Error.class_name(), "error");
    assert!(MessageKind::Success.css_text().contains("#22c55e"));
    assert!(MessageKind::Error.css_text().contains("#ef4444"));
}

// =============================================================
// MessageSlot
// =============================================================

#[test]
fn slot_holds_at_most_one_message() {
    let mut slot = MessageSlot::default();
    let (first, displaced) = slot.replace("error");
    assert_eq!(displaced, None);

    let (second, displaced) = slot.replace("success");
    assert_eq!(displaced, Some("error"));
    assert_ne!(first, second);
    assert_eq!(slot.current(), Some(&"success"));
}

#[test]
fn expiry_removes_current_message() {
    let mut slot = MessageSlot::default();
    let (ticket, _) = slot.replace("success");
    assert_eq!(slot.expire(ticket), Some("success"));
    assert_eq!(slot.current(), None);
}

#[test]
fn stale_expiry_does_not_remove_newer_message() {
    let mut slot = MessageSlot::default();
    let (old, _) = slot.replace("error");
    let (new, _) = slot.replace("success");

    assert_eq!(slot.expire(old), None);
    assert_eq!(slot.current(), Some(&"success"));
    assert_eq!(slot.expire(new), Some("success"));
}

#[test]
fn expiring_twice_is_harmless() {
    let mut slot = MessageSlot::default();
    let (ticket, _) = slot.replace(1);
    assert_eq!(slot.expire(ticket), Some(1));
    assert_eq!(slot.expire(ticket), None);
}
