use crate::compat::{String, Vec};
use crate::host::Host;
use crate::path::UrlPath;

/// Owned components of a URL record.
///
/// Every string is stored percent-encoded, exactly as it is serialized.
///
/// - `username`/`password`: `Some("")` is an explicitly empty value and still
///   produces the `@` separator, `None` produces nothing
/// - `host`: `None` only for non-special URLs without an authority
/// - `port`: kept even when it equals the scheme default
/// - `query`/`fragment`: without the leading `?`/`#`
#[derive(Debug, Clone)]
pub struct UrlComponents {
    pub scheme: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: Option<Host>,
    pub port: Option<u16>,
    pub path: UrlPath,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlComponents {
    /// Components with only a scheme and an empty hierarchical path
    pub fn new(scheme: String) -> Self {
        Self {
            scheme,
            username: None,
            password: None,
            host: None,
            port: None,
            path: UrlPath::Segments(Vec::new()),
            query: None,
            fragment: None,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }

    /// Whether a non-empty host exists to carry credentials or a port
    pub fn has_non_empty_host(&self) -> bool {
        self.host.as_ref().is_some_and(|host| !host.is_empty())
    }

    /// Copy the authority of `other`: credentials, host and port
    pub fn copy_authority_from(&mut self, other: &Self) {
        self.username.clone_from(&other.username);
        self.password.clone_from(&other.password);
        self.host.clone_from(&other.host);
        self.port = other.port;
    }

    /// Store parsed credentials. An '@' always yields a username and a ':'
    /// in the userinfo a password, even when empty, so `http://:@host`
    /// serializes back to itself.
    pub fn set_parsed_credentials(&mut self, username: String, password: Option<String>) {
        self.username = Some(username);
        self.password = password;
    }
}
