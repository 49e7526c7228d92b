use super::*;

#[test]
fn loading_waits_for_dom_content_loaded() {
    assert!(!dom_parsed("loading"));
}

#[test]
fn interactive_and_complete_mount_immediately() {
    assert!(dom_parsed("interactive"));
    assert!(dom_parsed("complete"));
}
