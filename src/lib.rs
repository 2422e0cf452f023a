// Internal modules (not public API)
mod character_sets;
mod error;
mod file_path;
mod helpers;
mod host;
mod ipv4;
mod ipv6;
mod parser;
mod record;
mod scheme;
mod serialize;
mod unicode;
mod url;

// Public API
pub use error::ParseError;
pub use file_path::{file_url_to_path, path_to_file_url};
pub use host::Host;
pub use url::Url;

pub type Result<T> = core::result::Result<T, ParseError>;
