use link_metadata::{extract_input, Error, ExtractionInput, Options, TitleSource};

#[test]
fn validated_input_round_trips_through_extraction() {
    let input = ExtractionInput::new("<h1>Launch Day</h1>", "https://example.com/2021/04/05/launch")
        .expect("valid input");

    let result = extract_input(&input, &Options::default());
    assert_eq!(result.title.as_deref(), Some("Launch Day"));
    assert_eq!(result.title_source, TitleSource::Heading);
    assert_eq!(result.date, "2021-04-05");
}

#[test]
fn input_rejects_urls_the_host_should_never_fetch() {
    assert!(matches!(ExtractionInput::new("", ""), Err(Error::InvalidUrl { .. })));
    assert!(matches!(ExtractionInput::new("", "example.com/page"), Err(Error::InvalidUrl { .. })));
    assert!(matches!(
        ExtractionInput::new("", "mailto:someone@example.com"),
        Err(Error::UnsupportedScheme(_))
    ));
}

#[test]
fn error_messages_name_the_problem() {
    let err = ExtractionInput::new("", "javascript:alert(1)").unwrap_err();
    assert_eq!(err.to_string(), "unsupported URL scheme: javascript");
}
