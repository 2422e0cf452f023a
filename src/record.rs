/// The URL record: the parsed components of a URL
use crate::character_sets::is_normalized_windows_drive_letter;
use crate::host::Host;
use crate::scheme::{default_port, is_special_scheme};

/// A URL path: either a list of segments or a single opaque string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Path {
    List(Vec<String>),
    Opaque(String),
}

impl Path {
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// Parsed URL components. Strings hold percent-encoded data;
/// `port` is `None` when it equals the scheme default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlRecord {
    pub scheme: String,
    pub username: String,
    pub password: String,
    pub host: Option<Host>,
    pub port: Option<u16>,
    pub path: Path,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlRecord {
    pub fn is_special(&self) -> bool {
        is_special_scheme(&self.scheme)
    }

    pub fn includes_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.is_empty()
    }

    pub fn has_opaque_path(&self) -> bool {
        self.path.is_opaque()
    }

    pub fn default_port(&self) -> Option<u16> {
        default_port(&self.scheme)
    }

    /// Remove the last path segment, except a lone normalized Windows drive
    /// letter in a file URL, which stays put.
    pub fn shorten_path(&mut self) {
        let is_file = self.scheme == "file";
        if let Path::List(segments) = &mut self.path {
            if is_file
                && segments.len() == 1
                && is_normalized_windows_drive_letter(&segments[0])
            {
                return;
            }
            segments.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_path() {
        let mut url = UrlRecord {
            scheme: "http".to_string(),
            path: Path::List(vec!["a".to_string(), "b".to_string()]),
            ..UrlRecord::default()
        };
        url.shorten_path();
        assert_eq!(url.path, Path::List(vec!["a".to_string()]));
        url.shorten_path();
        assert_eq!(url.path, Path::List(vec![]));
        url.shorten_path();
        assert_eq!(url.path, Path::List(vec![]));
    }

    #[test]
    fn test_shorten_path_keeps_drive_letter() {
        let mut url = UrlRecord {
            scheme: "file".to_string(),
            path: Path::List(vec!["C:".to_string()]),
            ..UrlRecord::default()
        };
        url.shorten_path();
        assert_eq!(url.path, Path::List(vec!["C:".to_string()]));
    }

    #[test]
    fn test_includes_credentials() {
        let mut url = UrlRecord::default();
        assert!(!url.includes_credentials());
        url.password = "secret".to_string();
        assert!(url.includes_credentials());
    }
}
