use super::*;

#[test]
fn origin_css_modifiers() {
    assert_eq!(Origin::User.css_modifier(), "user");
    assert_eq!(Origin::Assistant.css_modifier(), "assistant");
}

#[test]
fn message_accessors() {
    let msg = ConversationMessage::new(7, Origin::User, "hello");
    assert_eq!(msg.id(), 7);
    assert_eq!(msg.origin(), Origin::User);
    assert_eq!(msg.text(), "hello");
    assert!(msg.is_user());
}
