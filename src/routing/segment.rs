//! Path segmentation and variable-segment parsing.
//!
//! A path is split on `/`, empty components are dropped, and the implicit
//! root segment `/` is prepended. So `""`, `"/"` and `"//"` all yield `["/"]`
//! and `"/hello/"` yields `["/", "hello"]`.

/// Text of the implicit root segment.
pub const ROOT: &str = "/";

/// Split a path into its segments, root first.
pub fn split_path(path: &str) -> Vec<&str> {
    std::iter::once(ROOT)
        .chain(path.split('/').filter(|s| !s.is_empty()))
        .collect()
}

/// Returns the variable name if `text` has the form `:name:` where `name` is
/// an ASCII letter followed by ASCII letters or digits.
pub fn variable_name(text: &str) -> Option<&str> {
    let name = text.strip_prefix(':')?.strip_suffix(':')?;
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return None,
    }
    if chars.all(|c| c.is_ascii_alphanumeric()) {
        Some(name)
    } else {
        None
    }
}

pub fn is_variable(text: &str) -> bool {
    variable_name(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path(""), vec!["/"]);
        assert_eq!(split_path("/"), vec!["/"]);
        assert_eq!(split_path("//"), vec!["/"]);
        assert_eq!(split_path("/hello"), vec!["/", "hello"]);
        assert_eq!(split_path("/hello/"), vec!["/", "hello"]);
        assert_eq!(split_path("a//b/c/"), vec!["/", "a", "b", "c"]);
    }

    #[test]
    fn test_variable_name() {
        assert_eq!(variable_name(":name:"), Some("name"));
        assert_eq!(variable_name(":var1:"), Some("var1"));
        assert_eq!(variable_name(":V:"), Some("V"));

        assert_eq!(variable_name("name"), None);
        assert_eq!(variable_name(":name"), None);
        assert_eq!(variable_name("name:"), None);
        assert_eq!(variable_name("::"), None);
        assert_eq!(variable_name(":1abc:"), None);
        assert_eq!(variable_name(":a-b:"), None);
        assert_eq!(variable_name(":a_b:"), None);
        assert_eq!(variable_name(":"), None);
    }
}
