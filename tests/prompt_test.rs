use fastapi_helper::error::Error;
use fastapi_helper::prompt::{required, DefaultPrompter, Prompter};

#[test]
fn test_default_prompter_text() {
    let prompt = DefaultPrompter::new();

    assert_eq!(prompt.text("Database host", Some("localhost"), None).unwrap(), "localhost");
    assert_eq!(
        prompt.text("Database host", Some("localhost"), Some(&required)).unwrap(),
        "localhost"
    );
}

#[test]
fn test_default_prompter_without_default() {
    let prompt = DefaultPrompter::new();

    match prompt.text("Module name", None, None) {
        Err(Error::ValidationError(msg)) => assert!(msg.contains("Module name")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_default_prompter_validates_default() {
    let prompt = DefaultPrompter::new();
    assert!(matches!(
        prompt.text("Database name", Some(" "), Some(&required)),
        Err(Error::ValidationError(_))
    ));
}

#[test]
fn test_default_prompter_choice() {
    let prompt = DefaultPrompter::new();

    assert_eq!(prompt.choice("Package tool", &["poetry", "uv"], 1).unwrap(), "uv");
    assert!(prompt.choice("Package tool", &["poetry", "uv"], 2).is_err());
}
