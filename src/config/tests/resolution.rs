//! Tests for resolving typed values out of [`ReviewConfig`].

use std::time::Duration;

use rstest::rstest;

use crate::ReviewConfig;
use crate::api::ReviewError;
use crate::config::OperationMode;
use crate::session::DisplayMode;

#[rstest]
fn missing_server_url_is_a_configuration_error() {
    let error = ReviewConfig::default()
        .require_server_locator()
        .expect_err("server URL is required");
    assert!(matches!(error, ReviewError::Configuration { .. }));
}

#[rstest]
#[case::blank("   ")]
#[case::empty("")]
fn blank_server_url_is_missing(#[case] value: &str) {
    let config = ReviewConfig {
        server_url: Some(value.to_owned()),
        ..Default::default()
    };
    assert!(matches!(
        config.require_server_locator(),
        Err(ReviewError::Configuration { .. })
    ));
}

#[rstest]
fn malformed_server_url_is_invalid() {
    let config = ReviewConfig {
        server_url: Some("not a url".to_owned()),
        ..Default::default()
    };
    assert!(matches!(
        config.require_server_locator(),
        Err(ReviewError::InvalidUrl(_))
    ));
}

#[rstest]
fn server_url_resolves_to_normalised_locator() {
    let config = ReviewConfig {
        server_url: Some("https://review.example.org/app".to_owned()),
        ..Default::default()
    };
    let locator = config.require_server_locator().expect("URL should parse");
    assert_eq!(locator.base().as_str(), "https://review.example.org/app/");
}

#[rstest]
#[case(None, DisplayMode::Normal)]
#[case(Some("d"), DisplayMode::DiffOnly)]
#[case(Some("rendered"), DisplayMode::Rendered)]
fn display_mode_resolves(#[case] value: Option<&str>, #[case] expected: DisplayMode) {
    let config = ReviewConfig {
        display_mode: value.map(str::to_owned),
        ..Default::default()
    };
    assert_eq!(config.display_mode(), Ok(expected));
}

#[rstest]
fn unknown_display_mode_is_rejected() {
    let config = ReviewConfig {
        display_mode: Some("sideways".to_owned()),
        ..Default::default()
    };
    assert!(matches!(
        config.display_mode(),
        Err(ReviewError::Configuration { .. })
    ));
}

#[rstest]
fn blank_session_cookie_is_ignored() {
    let config = ReviewConfig {
        session_cookie: Some("  ".to_owned()),
        ..Default::default()
    };
    assert!(config.session_cookie().is_none());
}

#[rstest]
fn session_cookie_is_trimmed() {
    let config = ReviewConfig {
        session_cookie: Some(" session=abc ".to_owned()),
        ..Default::default()
    };
    let cookie = config.session_cookie().expect("cookie should be kept");
    assert_eq!(cookie.value(), "session=abc");
}

#[rstest]
#[case(0, None)]
#[case(30, Some(Duration::from_secs(30)))]
fn request_timeout_treats_zero_as_disabled(
    #[case] seconds: u64,
    #[case] expected: Option<Duration>,
) {
    let config = ReviewConfig {
        request_timeout_seconds: seconds,
        ..Default::default()
    };
    assert_eq!(config.request_timeout(), expected);
}

#[rstest]
fn custom_viewer_base_is_used() {
    let config = ReviewConfig {
        viewer_base_url: Some("https://test.wikipedia.org/w/index.php".to_owned()),
        ..Default::default()
    };
    let viewer = config.diff_viewer().expect("viewer base should parse");
    let url = viewer.url_for(crate::api::EditId::new(3), DisplayMode::Normal);
    assert_eq!(
        url.as_str(),
        "https://test.wikipedia.org/w/index.php?action=view&diff=3"
    );
}

#[rstest]
#[case(false, OperationMode::Line)]
#[case(true, OperationMode::Tui)]
fn operation_mode_follows_tui_flag(#[case] tui: bool, #[case] expected: OperationMode) {
    let config = ReviewConfig {
        tui,
        ..Default::default()
    };
    assert_eq!(config.operation_mode(), expected);
}
