use crate::path::parse_path;
use crate::pattern::{PatternError, PatternResult};
use crate::router::RouterOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPattern {
    Exact(String),
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentPattern {
    pub resource: String,
    pub key: KeyPattern,
}

/// A route pattern parsed with the same rules as a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: Box<str>,
    components: Vec<ComponentPattern>,
}

impl RoutePattern {
    #[tracing::instrument(level = "trace", skip(options), fields(pattern = %raw))]
    pub fn compile(raw: &str, options: &RouterOptions) -> PatternResult<Self> {
        let wildcard = options.wildcard.as_str();
        if wildcard.is_empty() || wildcard.contains('/') {
            return Err(PatternError::InvalidWildcard {
                wildcard: wildcard.to_string(),
            });
        }

        let mut components = Vec::new();

        for (index, component) in parse_path(raw).into_iter().enumerate() {
            if component.resource == wildcard {
                return Err(PatternError::WildcardResource {
                    pattern: raw.to_string(),
                    index,
                });
            }

            let key = if component.key == wildcard {
                KeyPattern::Any
            } else {
                KeyPattern::Exact(component.key)
            };

            components.push(ComponentPattern {
                resource: component.resource,
                key,
            });
        }

        Ok(Self {
            raw: raw.into(),
            components,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn components(&self) -> &[ComponentPattern] {
        &self.components
    }

    pub fn has_wildcard(&self) -> bool {
        self.components
            .iter()
            .any(|component| component.key == KeyPattern::Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_wildcard_keys() {
        let pattern = RoutePattern::compile("organizations/*", &RouterOptions::default()).unwrap();
        assert_eq!(pattern.raw(), "organizations/*");
        assert_eq!(
            pattern.components(),
            &[ComponentPattern {
                resource: "organizations".to_string(),
                key: KeyPattern::Any,
            }]
        );
        assert!(pattern.has_wildcard());
    }

    #[test]
    fn root_pattern_has_one_empty_component() {
        let pattern = RoutePattern::compile("", &RouterOptions::default()).unwrap();
        assert_eq!(pattern.components().len(), 1);
        assert_eq!(pattern.components()[0].resource, "");
        assert_eq!(pattern.components()[0].key, KeyPattern::Exact(String::new()));
        assert!(!pattern.has_wildcard());
    }

    #[test]
    fn honours_custom_wildcard_token() {
        let options = RouterOptions::builder().wildcard(":any").build().unwrap();
        let pattern = RoutePattern::compile("achievements/:any", &options).unwrap();
        assert!(pattern.has_wildcard());

        let literal = RoutePattern::compile("achievements/*", &options).unwrap();
        assert_eq!(literal.components()[0].key, KeyPattern::Exact("*".to_string()));
    }

    #[test]
    fn rejects_empty_wildcard_from_unvalidated_options() {
        let options = RouterOptions {
            wildcard: String::new(),
            ..RouterOptions::default()
        };
        let err = RoutePattern::compile("stats", &options).unwrap_err();
        assert_eq!(
            err,
            PatternError::InvalidWildcard {
                wildcard: String::new(),
            }
        );
    }

    #[test]
    fn rejects_wildcard_resource() {
        let err = RoutePattern::compile("organizations/1/*/2", &RouterOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            PatternError::WildcardResource {
                pattern: "organizations/1/*/2".to_string(),
                index: 1,
            }
        );
    }
}
