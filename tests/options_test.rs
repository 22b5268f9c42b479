use chrono::NaiveDate;
use link_metadata::{extract, extract_with_options, DateSource, Options};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert!(options.reference_date.is_none());
}

#[test]
fn reference_date_only_affects_final_fallback() {
    let options = Options {
        reference_date: NaiveDate::from_ymd_opt(2011, 11, 11),
    };

    let dated = r#"<meta name="date" content="2019-09-09">"#;
    assert_eq!(extract_with_options(dated, "https://example.com/x", &options).date, "2019-09-09");

    let undated = "<p>undated</p>";
    let result = extract_with_options(undated, "https://example.com/x", &options);
    assert_eq!(result.date, "2011-11-11");
    assert_eq!(result.date_source, DateSource::Today);
}

#[test]
fn extract_matches_extract_with_default_options_when_page_is_dated() {
    let html = r#"<title>Same</title><time datetime="2012-12-12"></time>"#;
    let url = "https://example.com/same";
    assert_eq!(extract(html, url), extract_with_options(html, url, &Options::default()));
}
