use crate::character_sets::{is_ascii_tab_or_newline, is_c0_control_or_space};
use std::borrow::Cow;

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Remove all ASCII tab/newline code points.
/// Returns a Cow to avoid allocation when possible.
pub fn remove_tabs_and_newlines(input: &str) -> Cow<'_, str> {
    if !has_tabs_or_newline(input) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect(),
    )
}

/// Combined trim and remove tabs/newlines in single pass.
/// Removes leading/trailing C0 controls+space and internal tabs/newlines,
/// as required before a fresh parse.
pub fn clean_input(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim_matches(is_c0_control_or_space);
    if !has_tabs_or_newline(trimmed) {
        return Cow::Borrowed(trimmed);
    }
    Cow::Owned(
        trimmed
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        assert_eq!(clean_input("\t\nhello\r\n"), "hello");
        assert_eq!(clean_input("hello"), "hello");
        assert_eq!(clean_input("\t\n\r"), "");
        assert_eq!(clean_input("hel\tlo\nworld"), "helloworld");

        // Spaces are trimmed from edges but kept internally
        assert_eq!(clean_input("  hello  "), "hello");
        assert_eq!(clean_input("  hello world  "), "hello world");
        assert_eq!(clean_input("  foo.com  "), "foo.com");
    }

    #[test]
    fn test_remove_tabs_and_newlines() {
        // No edge trimming in override-mode cleaning
        assert_eq!(remove_tabs_and_newlines("  a\tb  "), "  ab  ");
        assert_eq!(remove_tabs_and_newlines("plain"), "plain");
    }
}
