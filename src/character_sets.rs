/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Check if a character is a C0 control or space (trimmed from input edges)
pub fn is_c0_control_or_space(c: char) -> bool {
    c <= ' '
}

/// Forbidden host code points (opaque hosts and domains)
/// NUL, tab, newline, CR, space, #, /, :, <, >, ?, @, [, \, ], ^, |
pub fn is_forbidden_host_code_point(c: char) -> bool {
    matches!(
        c,
        '\0' | '\t'
            | '\n'
            | '\r'
            | ' '
            | '#'
            | '/'
            | ':'
            | '<'
            | '>'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '^'
            | '|'
    )
}

/// Forbidden domain code points: forbidden host code points plus C0 controls,
/// '%' and DEL
pub fn is_forbidden_domain_code_point(c: char) -> bool {
    is_forbidden_host_code_point(c) || c.is_ascii_control() || c == '%' || c == '\u{7F}'
}

/// Windows drive letter: an ASCII alpha followed by ':' or '|'
pub fn is_windows_drive_letter(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && matches!(bytes[1], b':' | b'|')
}

/// Normalized Windows drive letter: an ASCII alpha followed by ':'
pub fn is_normalized_windows_drive_letter(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Check if a code-point sequence starts with a Windows drive letter:
/// two drive-letter code points followed by nothing, '/', '\\', '?' or '#'
pub fn starts_with_windows_drive_letter(s: &[char]) -> bool {
    s.len() >= 2
        && s[0].is_ascii_alphabetic()
        && matches!(s[1], ':' | '|')
        && (s.len() == 2 || matches!(s[2], '/' | '\\' | '?' | '#'))
}

/// Single-dot path segment: "." or a percent-encoded form of it
pub fn is_single_dot_path_segment(s: &str) -> bool {
    s == "." || s.eq_ignore_ascii_case("%2e")
}

/// Double-dot path segment: ".." or any percent-encoded form of it
pub fn is_double_dot_path_segment(s: &str) -> bool {
    match s.len() {
        2 => s == "..",
        4 => s.eq_ignore_ascii_case(".%2e") || s.eq_ignore_ascii_case("%2e."),
        6 => s.eq_ignore_ascii_case("%2e%2e"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_path_segments() {
        assert!(is_single_dot_path_segment("."));
        assert!(is_single_dot_path_segment("%2E"));
        assert!(!is_single_dot_path_segment(".."));

        assert!(is_double_dot_path_segment(".."));
        assert!(is_double_dot_path_segment(".%2e"));
        assert!(is_double_dot_path_segment("%2E."));
        assert!(is_double_dot_path_segment("%2e%2E"));
        assert!(!is_double_dot_path_segment("."));
        assert!(!is_double_dot_path_segment("..."));
    }

    #[test]
    fn test_windows_drive_letters() {
        assert!(is_windows_drive_letter("C:"));
        assert!(is_windows_drive_letter("c|"));
        assert!(!is_windows_drive_letter("C:/"));
        assert!(!is_windows_drive_letter("1:"));

        assert!(is_normalized_windows_drive_letter("C:"));
        assert!(!is_normalized_windows_drive_letter("C|"));

        let chars: Vec<char> = "C:/foo".chars().collect();
        assert!(starts_with_windows_drive_letter(&chars));
        let chars: Vec<char> = "C:x".chars().collect();
        assert!(!starts_with_windows_drive_letter(&chars));
    }

    #[test]
    fn test_forbidden_code_points() {
        assert!(is_forbidden_host_code_point(':'));
        assert!(is_forbidden_host_code_point('['));
        assert!(!is_forbidden_host_code_point('%'));

        assert!(is_forbidden_domain_code_point('%'));
        assert!(is_forbidden_domain_code_point('\u{7F}'));
        assert!(!is_forbidden_domain_code_point('a'));
    }
}
