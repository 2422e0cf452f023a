/// Conversions between file: URLs and filesystem paths
use crate::error::{ParseError, Result};
use crate::host::Host;
use crate::record::{Path, UrlRecord};
use crate::unicode::percent_encode::{PATH_SET, percent_decode_lossy, percent_encode_with_set};
use crate::url::Url;
use std::path::{Component, Path as FsPath, PathBuf};

/// Convert a file: URL to a filesystem path.
/// Any other scheme is an error.
pub fn file_url_to_path(url: &Url) -> Result<PathBuf> {
    let record = url.record();
    if record.scheme != "file" {
        return Err(ParseError::InvalidUrlScheme);
    }
    let Path::List(segments) = &record.path else {
        return Err(ParseError::InvalidUrl);
    };
    segments_to_path(&record.host, segments)
}

#[cfg(windows)]
fn segments_to_path(host: &Option<Host>, segments: &[String]) -> Result<PathBuf> {
    let mut path = String::new();
    // A non-empty host names a UNC share
    if let Some(Host::Domain(host)) = host {
        path.push_str("\\\\");
        path.push_str(host);
    }
    for segment in segments {
        path.push('\\');
        path.push_str(&percent_decode_lossy(segment));
    }
    if path.is_empty() {
        path.push('\\');
    }
    Ok(PathBuf::from(path))
}

#[cfg(not(windows))]
fn segments_to_path(host: &Option<Host>, segments: &[String]) -> Result<PathBuf> {
    // Remote file URLs have no local path
    if matches!(host, Some(Host::Domain(_) | Host::Ipv4(_) | Host::Ipv6(_))) {
        return Err(ParseError::InvalidUrl);
    }
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(&percent_decode_lossy(segment));
    }
    if path.is_empty() {
        path.push('/');
    }
    Ok(PathBuf::from(path))
}

/// Convert an absolute filesystem path to a file: URL
pub fn path_to_file_url(path: &FsPath) -> Result<Url> {
    if !path.is_absolute() {
        return Err(ParseError::InvalidUrl);
    }

    let mut segments: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                segments.pop();
            }
            Component::Prefix(prefix) => {
                segments.push(prefix.as_os_str().to_string_lossy().into_owned());
            }
            Component::Normal(name) => {
                segments.push(percent_encode_with_set(&name.to_string_lossy(), PATH_SET));
            }
        }
    }
    if segments.is_empty() {
        segments.push(String::new());
    }

    let record = UrlRecord {
        scheme: "file".to_string(),
        host: Some(Host::Empty),
        path: Path::List(segments),
        ..UrlRecord::default()
    };
    Ok(Url::from_record(record))
}
