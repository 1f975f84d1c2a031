use optional::{config::FallbackConfig, summary::summarize, Optional, Record};

#[test]
fn test_record_accessors() {
    let mut record = Record::new("mary", "mary@gmail.com");
    assert_eq!(record.name(), "mary");
    assert_eq!(record.email(), "mary@gmail.com");
    assert!(record.position().is_empty());

    record.set_name("lisa");
    record.set_email("lisa@gmail.com");
    record.set_position(Some("developer".to_string()));
    assert_eq!(record.name(), "lisa");
    assert_eq!(record.email(), "lisa@gmail.com");
    assert_eq!(record.position(), Optional::present("developer"));

    // 传入 None 清除职位
    record.set_position(None);
    assert!(record.position().is_empty());
}

#[test]
fn test_record_position_deserializes_missing_as_empty() {
    let record: Record = serde_yaml::from_str("name: mary\nemail: mary@gmail.com\n").unwrap();
    assert!(record.position().is_empty());

    let record: Record =
        serde_yaml::from_str("name: mary\nemail: mary@gmail.com\nposition: null\n").unwrap();
    assert!(record.position().is_empty());

    let record: Record =
        serde_yaml::from_str("name: mary\nemail: mary@gmail.com\nposition: developer\n").unwrap();
    assert_eq!(record.position(), Optional::present("developer"));
}

#[test]
fn test_summarize_uses_fallbacks() {
    let record = Record::new("mary", "mary@gmail.com");
    let summary = summarize(&record, &FallbackConfig::default(), false).unwrap();

    assert_eq!(summary.name, "mary");
    assert_eq!(summary.email, "mary@gmail.com");
    assert_eq!(summary.position, "default");
    assert!(summary.email_valid);
    assert_eq!(summary.position_display, "Optional.empty");
}

#[test]
fn test_summarize_with_position() {
    let mut record = Record::new("mary", "mary@gmail.com");
    record.set_position(Some("developer".to_string()));
    let summary = summarize(&record, &FallbackConfig::default(), true).unwrap();

    assert_eq!(summary.position, "developer");
    assert_eq!(summary.position_display, "Optional[developer]");
}

#[test]
fn test_summarize_flags_invalid_email() {
    let record = Record::new("lisa", "lisa.gmail.com");
    let summary = summarize(&record, &FallbackConfig::default(), false).unwrap();
    assert!(!summary.email_valid);
}

#[test]
fn test_summarize_requires_position() {
    let record = Record::new("mary", "mary@gmail.com");
    let result = summarize(&record, &FallbackConfig::default(), true);
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("has no position"));
    } else {
        panic!("Expected Config error for missing position");
    }
}
