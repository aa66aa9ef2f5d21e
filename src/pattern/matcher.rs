use crate::pattern::{ComponentPattern, KeyPattern, RoutePattern};
use crate::types::PathComponent;

/// Checks a parsed path against a compiled pattern: same length, equal
/// resources, and keys equal unless the pattern key is a wildcard.
#[inline]
pub fn is_path_match(pattern: &RoutePattern, path: &[PathComponent], case_sensitive: bool) -> bool {
    let components = pattern.components();
    if components.len() != path.len() {
        return false;
    }

    components
        .iter()
        .zip(path)
        .all(|(expected, actual)| component_matches(expected, actual, case_sensitive))
}

#[inline]
pub fn component_matches(
    expected: &ComponentPattern,
    actual: &PathComponent,
    case_sensitive: bool,
) -> bool {
    if !text_eq(&expected.resource, &actual.resource, case_sensitive) {
        return false;
    }

    match &expected.key {
        KeyPattern::Any => true,
        KeyPattern::Exact(key) => text_eq(key, &actual.key, case_sensitive),
    }
}

fn text_eq(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}
