use hash_router_rs::pattern::PatternError;
use hash_router_rs::registry::RegistryError;
use hash_router_rs::{Router, RouterError};

#[test]
fn router_when_bulk_routes_registered_then_returns_assigned_keys() {
    let router = Router::new(None);
    let keys = router
        .add_bulk(vec![("stats", 's'), ("login", 'l'), ("", 'm')])
        .expect("bulk insert should succeed");

    assert_eq!(keys, vec![0, 1, 2]);

    router.seal();
    assert_eq!(router.find("stats").expect("first route should match").key, 0);
    assert_eq!(router.find("login").expect("second route should match").key, 1);
    assert_eq!(router.find("").expect("third route should match").key, 2);
}

#[test]
fn router_when_bulk_routes_include_invalid_pattern_then_nothing_is_registered() {
    let router = Router::new(None);
    let err = router.add_bulk(vec![("valid".to_string(), ()), ("*/x".to_string(), ())]);

    match err.expect_err("expected invalid pattern error") {
        RouterError::Registry(RegistryError::Pattern(PatternError::WildcardResource {
            index,
            ..
        })) => assert_eq!(index, 0),
        other => panic!("unexpected error: {other:?}"),
    }

    router.seal();
    assert!(router.get_readonly().expect("router is sealed").is_empty());
}

#[test]
fn router_when_bulk_routes_added_after_seal_then_returns_error() {
    let router = Router::new(None);
    router.add("once", ()).expect("initial add should succeed");
    router.seal();

    match router
        .add_bulk(vec![("again", ())])
        .expect_err("expected bulk add while sealed error")
    {
        RouterError::BulkAddWhileSealed { count } => assert_eq!(count, 1),
        other => panic!("unexpected error: {other:?}"),
    }
}
