//! Observable behavior of the closure chain through the public API

use std::sync::Arc;

use rstest::rstest;

use scopechain::application::services::ScopeService;
use scopechain::infrastructure::traits::{Alert, RecordingAlert, WriterAlert};
use scopechain::util::testing;
use scopechain::{lines, Greeting};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_default_greeting_when_running_then_prints_exact_four_lines() {
    // Arrange
    let alert = WriterAlert::new(Vec::new());

    // Act
    scopechain::outer(&Greeting::default(), |line| alert.alert(line)).expect("run chain");

    // Assert
    let written = String::from_utf8(alert.into_inner()).unwrap();
    assert_eq!(
        written,
        "Welcome\nWelcome Holberton\nWelcome Holberton!\nWelcome Holberton\n"
    );
}

#[rstest]
#[case("Hello")]
#[case("Bienvenue")]
#[case("")]
fn given_changed_welcome_when_running_then_only_leading_token_changes(#[case] welcome: &str) {
    let base = lines(&Greeting::default()).unwrap();
    let changed = lines(&Greeting::new(welcome, "Holberton", "!")).unwrap();

    assert_eq!(changed.len(), 4);
    for (b, c) in base.iter().zip(&changed) {
        let rest_b = b.strip_prefix("Welcome").expect("base starts with welcome");
        let rest_c = c.strip_prefix(welcome).expect("changed starts with welcome");
        assert_eq!(rest_b, rest_c);
    }
}

#[rstest]
#[case("Rust")]
#[case("School")]
fn given_changed_course_when_running_then_first_line_is_unchanged(#[case] course: &str) {
    let base = lines(&Greeting::default()).unwrap();
    let changed = lines(&Greeting::new("Welcome", course, "!")).unwrap();

    assert_eq!(changed[0], base[0]);
    assert_eq!(changed[1], format!("Welcome {}", course));
    assert_eq!(changed[2], format!("Welcome {}!", course));
    assert_eq!(changed[3], format!("Welcome {}", course));
}

#[test]
fn given_default_greeting_when_running_then_middle_lines_have_no_punctuation() {
    let result = lines(&Greeting::default()).unwrap();

    assert_eq!(result[1], result[3]);
    assert!(!result[1].ends_with('!'));
    assert!(result[2].ends_with("Holberton!"));
    assert!(!result[2].contains(" !"));
}

#[test]
fn given_service_when_run_twice_then_each_run_emits_four_lines() {
    let alert = Arc::new(RecordingAlert::default());
    let service = ScopeService::new(alert.clone());

    service.run(&Greeting::default()).unwrap();
    assert_eq!(alert.lines().len(), 4);

    service.run(&Greeting::default()).unwrap();
    assert_eq!(alert.lines().len(), 8);
    assert_eq!(alert.lines()[4], "Welcome");
}
