use hash_router_rs::router::DEFAULT_WILDCARD;
use hash_router_rs::{Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError};

#[test]
fn router_options_when_defaults_then_decode_and_case_sensitive() {
    let options = RouterOptions::default();
    assert!(options.decode_uri);
    assert!(options.case_sensitive);
    assert_eq!(options.wildcard, DEFAULT_WILDCARD);
    assert!(options.validate().is_ok());
}

#[test]
fn router_options_when_all_fields_customized_then_values_are_assigned() {
    let options = RouterOptionsBuilder::default()
        .decode_uri(false)
        .case_sensitive(false)
        .wildcard(":id")
        .build()
        .expect("router options should build");

    assert!(!options.decode_uri);
    assert!(!options.case_sensitive);
    assert_eq!(options.wildcard, ":id");
}

#[test]
fn router_options_when_wildcard_empty_then_returns_error() {
    let err = RouterOptions::builder()
        .wildcard("")
        .build()
        .expect_err("empty wildcard should be rejected");
    assert_eq!(err, RouterOptionsError::EmptyWildcard);
}

#[test]
fn router_options_when_wildcard_contains_slash_then_returns_error() {
    let err = RouterOptions::builder()
        .wildcard("a/b")
        .build()
        .expect_err("wildcard with slash should be rejected");
    assert_eq!(
        err,
        RouterOptionsError::WildcardContainsSlash {
            wildcard: "a/b".to_string(),
        }
    );
}

#[test]
fn router_when_try_new_given_invalid_options_then_returns_error() {
    let options = RouterOptions {
        wildcard: String::new(),
        ..RouterOptions::default()
    };

    match Router::<()>::try_new(options) {
        Err(RouterError::Options(RouterOptionsError::EmptyWildcard)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}
