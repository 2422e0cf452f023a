/// The URL parsing state machine.
///
/// Walks the input one code point at a time with an explicit pointer that can
/// move backwards (to replay a code point in another state) or reset to the
/// start (when a tentative scheme turns out not to be one). One position past
/// the end acts as an EOF sentinel so every state sees a final empty step.
use super::state::State;
use crate::character_sets::{
    is_double_dot_path_segment, is_normalized_windows_drive_letter, is_single_dot_path_segment,
    is_windows_drive_letter, starts_with_windows_drive_letter,
};
use crate::error::{ParseError, Result};
use crate::host::{Host, parse_host};
use crate::record::{Path, UrlRecord};
use crate::scheme::is_special_scheme;
use crate::unicode::percent_encode::{
    C0_CONTROL_SET, FRAGMENT_SET, PATH_SET, QUERY_SET, SPECIAL_QUERY_SET, USERINFO_SET,
    percent_encode_char_into, percent_encode_into,
};

/// Result of a state-override parse: whether the record was mutated.
/// Structural guards reject silently instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected,
}

pub struct UrlParser<'a> {
    url: &'a mut UrlRecord,
    base: Option<&'a UrlRecord>,
    input: Vec<char>,
    state: State,
    state_override: Option<State>,
    buffer: String,
    at_sign_seen: bool,
    inside_brackets: bool,
    password_token_seen: bool,
    pointer: isize,
}

impl<'a> UrlParser<'a> {
    pub fn new(
        url: &'a mut UrlRecord,
        base: Option<&'a UrlRecord>,
        input: &str,
        state_override: Option<State>,
    ) -> Self {
        Self {
            url,
            base,
            input: input.chars().collect(),
            state: state_override.unwrap_or(State::SchemeStart),
            state_override,
            buffer: String::new(),
            at_sign_seen: false,
            inside_brackets: false,
            password_token_seen: false,
            pointer: 0,
        }
    }

    pub fn run(mut self) -> Result<Outcome> {
        while self.pointer <= self.input.len() as isize {
            let c = self.current();
            let done = match self.state {
                State::SchemeStart => self.scheme_start_state(c)?,
                State::Scheme => self.scheme_state(c)?,
                State::NoScheme => self.no_scheme_state(c)?,
                State::SpecialRelativeOrAuthority => self.special_relative_or_authority_state(c),
                State::PathOrAuthority => self.path_or_authority_state(c),
                State::Relative => self.relative_state(c)?,
                State::RelativeSlash => self.relative_slash_state(c)?,
                State::SpecialAuthoritySlashes => self.special_authority_slashes_state(c),
                State::SpecialAuthorityIgnoreSlashes => {
                    self.special_authority_ignore_slashes_state(c)
                }
                State::Authority => self.authority_state(c)?,
                State::Host | State::Hostname => self.host_state(c)?,
                State::Port => self.port_state(c)?,
                State::File => self.file_state(c),
                State::FileSlash => self.file_slash_state(c),
                State::FileHost => self.file_host_state(c)?,
                State::PathStart => self.path_start_state(c),
                State::Path => self.path_state(c),
                State::OpaquePath => self.opaque_path_state(c),
                State::Query => self.query_state(c),
                State::Fragment => self.fragment_state(c),
            };
            if let Some(outcome) = done {
                return Ok(outcome);
            }
            self.pointer += 1;
        }
        Ok(Outcome::Applied)
    }

    /// The code point under the pointer, or None at the EOF sentinel
    fn current(&self) -> Option<char> {
        usize::try_from(self.pointer)
            .ok()
            .and_then(|i| self.input.get(i).copied())
    }

    fn peek(&self, n: usize) -> Option<char> {
        usize::try_from(self.pointer)
            .ok()
            .and_then(|i| self.input.get(i + n).copied())
    }

    /// Input from the current code point to the end
    fn remaining_with_current(&self) -> &[char] {
        usize::try_from(self.pointer)
            .ok()
            .and_then(|i| self.input.get(i..))
            .unwrap_or(&[])
    }

    fn is_special(&self) -> bool {
        self.url.is_special()
    }

    fn push_path_segment(&mut self, segment: String) {
        if let Path::List(segments) = &mut self.url.path {
            segments.push(segment);
        }
    }

    fn scheme_start_state(&mut self, c: Option<char>) -> Result<Option<Outcome>> {
        match c {
            Some(c) if c.is_ascii_alphabetic() => {
                self.buffer.push(c.to_ascii_lowercase());
                self.state = State::Scheme;
            }
            _ if self.state_override.is_none() => {
                self.state = State::NoScheme;
                self.pointer -= 1;
            }
            _ => return Err(ParseError::InvalidUrl),
        }
        Ok(None)
    }

    fn scheme_state(&mut self, c: Option<char>) -> Result<Option<Outcome>> {
        match c {
            Some(c) if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') => {
                self.buffer.push(c.to_ascii_lowercase());
            }
            Some(':') => {
                if self.state_override.is_some() {
                    let url_special = self.is_special();
                    let buffer_special = is_special_scheme(&self.buffer);
                    // A scheme override cannot cross the special boundary
                    if url_special != buffer_special {
                        return Ok(Some(Outcome::Rejected));
                    }
                    if (self.url.includes_credentials() || self.url.port.is_some())
                        && self.buffer == "file"
                    {
                        return Ok(Some(Outcome::Rejected));
                    }
                    if self.url.scheme == "file" && self.url.host == Some(Host::Empty) {
                        return Ok(Some(Outcome::Rejected));
                    }
                }

                self.url.scheme = std::mem::take(&mut self.buffer);

                if self.state_override.is_some() {
                    // The previous port may be the new scheme's default
                    if self.url.port == self.url.default_port() {
                        self.url.port = None;
                    }
                    return Ok(Some(Outcome::Applied));
                }

                if self.url.scheme == "file" {
                    self.state = State::File;
                } else if self.is_special()
                    && self.base.is_some_and(|base| base.scheme == self.url.scheme)
                {
                    self.state = State::SpecialRelativeOrAuthority;
                } else if self.is_special() {
                    self.state = State::SpecialAuthoritySlashes;
                } else if self.peek(1) == Some('/') {
                    self.state = State::PathOrAuthority;
                    self.pointer += 1;
                } else {
                    self.url.path = Path::Opaque(String::new());
                    self.state = State::OpaquePath;
                }
            }
            _ if self.state_override.is_none() => {
                // Not a scheme after all: start over as a schemeless URL
                self.buffer.clear();
                self.state = State::NoScheme;
                self.pointer = -1;
            }
            _ => return Err(ParseError::InvalidUrl),
        }
        Ok(None)
    }

    fn no_scheme_state(&mut self, c: Option<char>) -> Result<Option<Outcome>> {
        let Some(base) = self.base else {
            return Err(ParseError::MissingSchemeNonRelativeUrl);
        };
        if base.has_opaque_path() {
            if c != Some('#') {
                return Err(ParseError::MissingSchemeNonRelativeUrl);
            }
            // Only the fragment can change relative to an opaque-path base
            self.url.scheme = base.scheme.clone();
            self.url.path = base.path.clone();
            self.url.query = base.query.clone();
            self.url.fragment = Some(String::new());
            self.state = State::Fragment;
        } else if base.scheme != "file" {
            self.state = State::Relative;
            self.pointer -= 1;
        } else {
            self.state = State::File;
            self.pointer -= 1;
        }
        Ok(None)
    }

    fn special_relative_or_authority_state(&mut self, c: Option<char>) -> Option<Outcome> {
        if c == Some('/') && self.peek(1) == Some('/') {
            self.state = State::SpecialAuthorityIgnoreSlashes;
            self.pointer += 1;
        } else {
            self.state = State::Relative;
            self.pointer -= 1;
        }
        None
    }

    fn path_or_authority_state(&mut self, c: Option<char>) -> Option<Outcome> {
        if c == Some('/') {
            self.state = State::Authority;
        } else {
            self.state = State::Path;
            self.pointer -= 1;
        }
        None
    }

    fn relative_state(&mut self, c: Option<char>) -> Result<Option<Outcome>> {
        let Some(base) = self.base else {
            return Err(ParseError::InvalidUrl);
        };
        self.url.scheme = base.scheme.clone();

        if c == Some('/') || (self.is_special() && c == Some('\\')) {
            self.state = State::RelativeSlash;
            return Ok(None);
        }

        self.url.username = base.username.clone();
        self.url.password = base.password.clone();
        self.url.host = base.host.clone();
        self.url.port = base.port;
        self.url.path = base.path.clone();
        self.url.query = base.query.clone();

        match c {
            Some('?') => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some('#') => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            Some(_) => {
                self.url.query = None;
                self.url.shorten_path();
                self.state = State::Path;
                self.pointer -= 1;
            }
            None => {}
        }
        Ok(None)
    }

    fn relative_slash_state(&mut self, c: Option<char>) -> Result<Option<Outcome>> {
        if self.is_special() && matches!(c, Some('/' | '\\')) {
            self.state = State::SpecialAuthorityIgnoreSlashes;
        } else if c == Some('/') {
            self.state = State::Authority;
        } else {
            let Some(base) = self.base else {
                return Err(ParseError::InvalidUrl);
            };
            self.url.username = base.username.clone();
            self.url.password = base.password.clone();
            self.url.host = base.host.clone();
            self.url.port = base.port;
            self.state = State::Path;
            self.pointer -= 1;
        }
        Ok(None)
    }

    fn special_authority_slashes_state(&mut self, c: Option<char>) -> Option<Outcome> {
        self.state = State::SpecialAuthorityIgnoreSlashes;
        if c == Some('/') && self.peek(1) == Some('/') {
            self.pointer += 1;
        } else {
            self.pointer -= 1;
        }
        None
    }

    fn special_authority_ignore_slashes_state(&mut self, c: Option<char>) -> Option<Outcome> {
        if !matches!(c, Some('/' | '\\')) {
            self.state = State::Authority;
            self.pointer -= 1;
        }
        None
    }

    fn authority_state(&mut self, c: Option<char>) -> Result<Option<Outcome>> {
        match c {
            Some('@') => {
                // Everything before the last '@' is userinfo; earlier '@'s
                // become part of it, percent-encoded
                if self.at_sign_seen {
                    self.buffer.insert_str(0, "%40");
                }
                self.at_sign_seen = true;

                let buffer = std::mem::take(&mut self.buffer);
                for ch in buffer.chars() {
                    if ch == ':' && !self.password_token_seen {
                        self.password_token_seen = true;
                        continue;
                    }
                    let target = if self.password_token_seen {
                        &mut self.url.password
                    } else {
                        &mut self.url.username
                    };
                    percent_encode_char_into(target, ch, USERINFO_SET);
                }
            }
            None | Some('/' | '?' | '#') => {
                self.end_of_authority()?;
            }
            Some('\\') if self.is_special() => {
                self.end_of_authority()?;
            }
            Some(c) => self.buffer.push(c),
        }
        Ok(None)
    }

    /// Rewind to just after the '@' (or to the authority start) and
    /// re-read the host
    fn end_of_authority(&mut self) -> Result<()> {
        if self.at_sign_seen && self.buffer.is_empty() {
            return Err(ParseError::InvalidCredentials);
        }
        self.pointer -= self.buffer.chars().count() as isize + 1;
        self.buffer.clear();
        self.state = State::Host;
        Ok(())
    }

    fn host_state(&mut self, c: Option<char>) -> Result<Option<Outcome>> {
        if self.state_override.is_some() && self.url.scheme == "file" {
            self.pointer -= 1;
            self.state = State::FileHost;
            return Ok(None);
        }

        let is_terminator =
            matches!(c, None | Some('/' | '?' | '#')) || (self.is_special() && c == Some('\\'));

        if c == Some(':') && !self.inside_brackets {
            if self.buffer.is_empty() {
                return Err(ParseError::HostMissing);
            }
            // A hostname override must not smuggle a port in
            if self.state_override == Some(State::Hostname) {
                return Ok(Some(Outcome::Rejected));
            }
            let host = parse_host(&self.buffer, !self.is_special())?;
            self.url.host = Some(host);
            self.buffer.clear();
            self.state = State::Port;
        } else if is_terminator {
            self.pointer -= 1;
            if self.is_special() && self.buffer.is_empty() {
                return Err(ParseError::HostMissing);
            }
            if self.state_override.is_some()
                && self.buffer.is_empty()
                && (self.url.includes_credentials() || self.url.port.is_some())
            {
                return Ok(Some(Outcome::Rejected));
            }
            let host = parse_host(&self.buffer, !self.is_special())?;
            self.url.host = Some(host);
            self.buffer.clear();
            self.state = State::PathStart;
            if self.state_override.is_some() {
                return Ok(Some(Outcome::Applied));
            }
        } else if let Some(c) = c {
            if c == '[' {
                self.inside_brackets = true;
            } else if c == ']' {
                self.inside_brackets = false;
            }
            self.buffer.push(c);
        }
        Ok(None)
    }

    fn port_state(&mut self, c: Option<char>) -> Result<Option<Outcome>> {
        let is_terminator =
            matches!(c, None | Some('/' | '?' | '#')) || (self.is_special() && c == Some('\\'));

        match c {
            Some(c) if c.is_ascii_digit() => self.buffer.push(c),
            _ if is_terminator || self.state_override.is_some() => {
                if !self.buffer.is_empty() {
                    let port: u32 = self
                        .buffer
                        .parse()
                        .map_err(|_| ParseError::PortOutOfRange)?;
                    if port > u32::from(u16::MAX) {
                        return Err(ParseError::PortOutOfRange);
                    }
                    let port = port as u16;
                    self.url.port = (Some(port) != self.url.default_port()).then_some(port);
                    self.buffer.clear();
                }
                if self.state_override.is_some() {
                    return Ok(Some(Outcome::Applied));
                }
                self.state = State::PathStart;
                self.pointer -= 1;
            }
            _ => return Err(ParseError::PortInvalid),
        }
        Ok(None)
    }

    fn file_state(&mut self, c: Option<char>) -> Option<Outcome> {
        self.url.scheme = "file".to_string();
        self.url.host = Some(Host::Empty);

        if matches!(c, Some('/' | '\\')) {
            self.state = State::FileSlash;
            return None;
        }

        let base = self.base.filter(|base| base.scheme == "file");
        if let Some(base) = base {
            self.url.host = base.host.clone();
            self.url.path = base.path.clone();
            self.url.query = base.query.clone();
            match c {
                Some('?') => {
                    self.url.query = Some(String::new());
                    self.state = State::Query;
                }
                Some('#') => {
                    self.url.fragment = Some(String::new());
                    self.state = State::Fragment;
                }
                Some(_) => {
                    self.url.query = None;
                    if starts_with_windows_drive_letter(self.remaining_with_current()) {
                        // A drive letter is a fresh root, not a relative segment
                        self.url.path = Path::List(Vec::new());
                    } else {
                        self.url.shorten_path();
                    }
                    self.state = State::Path;
                    self.pointer -= 1;
                }
                None => {}
            }
        } else {
            self.state = State::Path;
            self.pointer -= 1;
        }
        None
    }

    fn file_slash_state(&mut self, c: Option<char>) -> Option<Outcome> {
        if matches!(c, Some('/' | '\\')) {
            self.state = State::FileHost;
            return None;
        }

        let base = self.base.filter(|base| base.scheme == "file");
        if let Some(base) = base {
            self.url.host = base.host.clone();
            if !starts_with_windows_drive_letter(self.remaining_with_current())
                && let Path::List(segments) = &base.path
                && let Some(first) = segments.first()
                && is_normalized_windows_drive_letter(first)
            {
                // The base's drive letter carries over
                self.push_path_segment(first.clone());
            }
        }
        self.state = State::Path;
        self.pointer -= 1;
        None
    }

    fn file_host_state(&mut self, c: Option<char>) -> Result<Option<Outcome>> {
        if matches!(c, None | Some('/' | '\\' | '?' | '#')) {
            self.pointer -= 1;

            if self.state_override.is_none() && is_windows_drive_letter(&self.buffer) {
                // Not a host but a drive letter; the path state picks up
                // the buffer as its first segment
                self.state = State::Path;
            } else if self.buffer.is_empty() {
                self.url.host = Some(Host::Empty);
                if self.state_override.is_some() {
                    return Ok(Some(Outcome::Applied));
                }
                self.state = State::PathStart;
            } else {
                let mut host = parse_host(&self.buffer, !self.is_special())?;
                if matches!(&host, Host::Domain(domain) if domain == "localhost") {
                    host = Host::Empty;
                }
                self.url.host = Some(host);
                if self.state_override.is_some() {
                    return Ok(Some(Outcome::Applied));
                }
                self.buffer.clear();
                self.state = State::PathStart;
            }
        } else if let Some(c) = c {
            self.buffer.push(c);
        }
        Ok(None)
    }

    fn path_start_state(&mut self, c: Option<char>) -> Option<Outcome> {
        if self.is_special() {
            self.state = State::Path;
            if !matches!(c, Some('/' | '\\')) {
                self.pointer -= 1;
            }
        } else if self.state_override.is_none() && c == Some('?') {
            self.url.query = Some(String::new());
            self.state = State::Query;
        } else if self.state_override.is_none() && c == Some('#') {
            self.url.fragment = Some(String::new());
            self.state = State::Fragment;
        } else if c.is_some() {
            self.state = State::Path;
            if c != Some('/') {
                self.pointer -= 1;
            }
        } else if self.state_override.is_some() && self.url.host.is_none() {
            self.push_path_segment(String::new());
        }
        None
    }

    fn path_state(&mut self, c: Option<char>) -> Option<Outcome> {
        let slash_like = c == Some('/') || (self.is_special() && c == Some('\\'));
        let is_terminator = c.is_none()
            || slash_like
            || (self.state_override.is_none() && matches!(c, Some('?' | '#')));

        if !is_terminator {
            if let Some(c) = c {
                percent_encode_char_into(&mut self.buffer, c, PATH_SET);
            }
            return None;
        }

        if is_double_dot_path_segment(&self.buffer) {
            self.url.shorten_path();
            if !slash_like {
                self.push_path_segment(String::new());
            }
        } else if is_single_dot_path_segment(&self.buffer) {
            if !slash_like {
                self.push_path_segment(String::new());
            }
        } else {
            if self.url.scheme == "file"
                && matches!(&self.url.path, Path::List(segments) if segments.is_empty())
                && is_windows_drive_letter(&self.buffer)
            {
                // Normalize "C|" to "C:"
                self.buffer.replace_range(1..2, ":");
            }
            let segment = std::mem::take(&mut self.buffer);
            self.push_path_segment(segment);
        }
        self.buffer.clear();

        if c == Some('?') {
            self.url.query = Some(String::new());
            self.state = State::Query;
        } else if c == Some('#') {
            self.url.fragment = Some(String::new());
            self.state = State::Fragment;
        }
        None
    }

    fn opaque_path_state(&mut self, c: Option<char>) -> Option<Outcome> {
        match c {
            Some('?') => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some('#') => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            Some(c) => {
                if let Path::Opaque(path) = &mut self.url.path {
                    percent_encode_char_into(path, c, C0_CONTROL_SET);
                }
            }
            None => {}
        }
        None
    }

    fn query_state(&mut self, c: Option<char>) -> Option<Outcome> {
        if c.is_none() || (self.state_override.is_none() && c == Some('#')) {
            let encode_set = if self.is_special() {
                SPECIAL_QUERY_SET
            } else {
                QUERY_SET
            };
            let buffer = std::mem::take(&mut self.buffer);
            let query = self.url.query.get_or_insert_with(String::new);
            percent_encode_into(query, &buffer, encode_set);

            if c == Some('#') {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
        } else if let Some(c) = c {
            self.buffer.push(c);
        }
        None
    }

    fn fragment_state(&mut self, c: Option<char>) -> Option<Outcome> {
        if let Some(c) = c {
            let fragment = self.url.fragment.get_or_insert_with(String::new);
            percent_encode_char_into(fragment, c, FRAGMENT_SET);
        }
        None
    }
}
