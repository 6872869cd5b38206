//! String-level path helpers used for display paths.

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Joins two path fragments so that exactly one separator sits between them.
///
/// An empty `base` yields `other` unchanged, an empty `other` yields `base`.
/// When both sides bring a separator one of them is dropped; when neither
/// does, `/` is inserted.
pub fn join_paths(base: &str, other: &str) -> String {
    if base.is_empty() {
        return other.to_string();
    }
    if other.is_empty() {
        return base.to_string();
    }

    let base_sep = base.ends_with(is_separator);
    let other_sep = other.starts_with(is_separator);

    match (base_sep, other_sep) {
        (true, true) => format!("{}{}", base, &other[1..]),
        (true, false) | (false, true) => format!("{base}{other}"),
        (false, false) => format!("{base}/{other}"),
    }
}

/// Builds the wildcard that selects every immediate child of `path`.
pub fn listing_pattern(path: &str) -> String {
    if path.is_empty() {
        "*".to_string()
    } else if path.ends_with(is_separator) {
        format!("{path}*")
    } else {
        format!("{path}/*")
    }
}
