use crate::types::{PathComponent, PathComponents};

/// Splits a decoded fragment on `/` and pairs the pieces into
/// `(resource, key)` components. A trailing resource without a key gets `""`.
#[tracing::instrument(level = "trace", fields(path_len = path.len() as u64))]
pub fn parse_path(path: &str) -> PathComponents {
    let mut components = PathComponents::new();
    let mut pending: Option<&str> = None;

    for part in split_segments(path) {
        match pending.take() {
            None => pending = Some(part),
            Some(resource) => components.push(PathComponent::new(resource, part)),
        }
    }

    if let Some(resource) = pending {
        components.push(PathComponent::new(resource, ""));
    }

    components
}

/// Rebuilds a fragment from components. The key of the last component is
/// dropped when empty, so `"a/"` comes back as `"a"`.
pub fn join_path(components: &[PathComponent]) -> String {
    let mut out = String::new();
    let last = components.len().saturating_sub(1);

    for (idx, component) in components.iter().enumerate() {
        if idx > 0 {
            out.push('/');
        }
        out.push_str(&component.resource);
        if idx < last || !component.key.is_empty() {
            out.push('/');
            out.push_str(&component.key);
        }
    }

    out
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    let mut start = 0usize;
    memchr::memchr_iter(b'/', path.as_bytes())
        .map(Some)
        .chain(std::iter::once(None))
        .map(move |slash| {
            let end = slash.unwrap_or(path.len());
            let segment = &path[start..end];
            start = end + 1;
            segment
        })
}
