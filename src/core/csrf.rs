use percent_encoding::percent_decode_str;

pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

/// Looks up `name` in a `document.cookie` style string (`a=1; b=2`).
///
/// The first entry whose name matches exactly wins. Its value is
/// percent-decoded; bytes that do not form valid UTF-8 after decoding are
/// replaced with U+FFFD.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.trim().is_empty() || name.is_empty() {
        return None;
    }

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| {
            cookie
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_named_cookie() {
        assert_eq!(
            get_cookie("a=1; csrftoken=XYZ; b=2", "csrftoken").as_deref(),
            Some("XYZ")
        );
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(get_cookie("a=1; b=2", "csrftoken"), None);
        assert_eq!(get_cookie("", "csrftoken"), None);
        assert_eq!(get_cookie("   ", "csrftoken"), None);
    }

    #[test]
    fn test_name_must_match_exactly() {
        assert_eq!(get_cookie("xcsrftoken=1; csrftokens=2", "csrftoken"), None);
        assert_eq!(
            get_cookie("csrftokens=2; csrftoken=3", "csrftoken").as_deref(),
            Some("3")
        );
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            get_cookie("csrftoken=first; csrftoken=second", "csrftoken").as_deref(),
            Some("first")
        );
    }

    #[test]
    fn test_value_is_percent_decoded() {
        assert_eq!(
            get_cookie("csrftoken=a%20b%3Dc", "csrftoken").as_deref(),
            Some("a b=c")
        );
        assert_eq!(
            get_cookie("csrftoken=caf%C3%A9", "csrftoken").as_deref(),
            Some("café")
        );
    }

    #[test]
    fn test_empty_value_is_present() {
        assert_eq!(get_cookie("csrftoken=; a=1", "csrftoken").as_deref(), Some(""));
    }

    #[test]
    fn test_no_whitespace_after_separator() {
        assert_eq!(get_cookie("a=1;csrftoken=Q", "csrftoken").as_deref(), Some("Q"));
    }
}
