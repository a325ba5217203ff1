use super::*;

fn identity(display_name: Option<&str>, email: Option<&str>) -> Identity {
    Identity {
        id: "u1".to_owned(),
        email: email.map(str::to_owned),
        role: "customer".to_owned(),
        display_name: display_name.map(str::to_owned),
        avatar_url: None,
    }
}

#[test]
fn role_defaults_to_customer_when_missing() {
    let parsed: Identity = serde_json::from_str(r#"{"id":"u1","email":"a@b.c","display_name":null,"avatar_url":null}"#)
        .expect("identity should parse");
    assert_eq!(parsed.role, "customer");
}

#[test]
fn role_is_preserved_when_present() {
    let parsed: Identity =
        serde_json::from_str(r#"{"id":"u1","email":null,"role":"admin","display_name":null,"avatar_url":null}"#)
            .expect("identity should parse");
    assert_eq!(parsed.role, "admin");
}

#[test]
fn display_label_prefers_display_name() {
    let user = identity(Some("Alice"), Some("alice@example.com"));
    assert_eq!(user.display_label(), "Alice");
}

#[test]
fn display_label_falls_back_to_email() {
    let user = identity(None, Some("alice@example.com"));
    assert_eq!(user.display_label(), "alice@example.com");
}

#[test]
fn display_label_falls_back_to_id() {
    let user = identity(None, None);
    assert_eq!(user.display_label(), "u1");
}

#[test]
fn display_label_skips_empty_display_name() {
    let user = identity(Some(""), Some("alice@example.com"));
    assert_eq!(user.display_label(), "alice@example.com");
}
