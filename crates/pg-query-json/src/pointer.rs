//! JSON Pointer (RFC 6901) rendering for error locations.

use std::borrow::Cow;

/// Escapes a path component: `~` becomes `~0` and `/` becomes `~1`.
pub(crate) fn escape_component(component: &str) -> Cow<'_, str> {
    if !component.contains(['~', '/']) {
        return Cow::Borrowed(component);
    }
    // Order matters: ~ must be escaped before /
    Cow::Owned(component.replace('~', "~0").replace('/', "~1"))
}

/// Formats path components as a JSON Pointer. The empty path is the root, `""`.
pub(crate) fn format_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for step in path {
        out.push('/');
        out.push_str(&escape_component(step));
    }
    out
}
