use crate::compat::{Cow, String};
use crate::error::SetError;
use crate::host::Host;

/// Component access shared by URL record types.
/// Getters borrow from the record; setters validate then commit, or fail
/// leaving the record untouched.
#[doc(hidden)] // Internal trait, not part of public API docs
pub trait UrlBase {
    // Getters

    /// Canonical serialization of the whole URL
    fn serialize(&self) -> String;

    /// Lowercase scheme without the trailing ':'
    fn scheme(&self) -> &str;

    /// Percent-encoded username, `Some("")` when explicitly empty
    fn username(&self) -> Option<&str>;

    /// Percent-encoded password, `Some("")` when explicitly empty
    fn password(&self) -> Option<&str>;

    fn host(&self) -> Option<&Host>;

    /// Serialized host, IPv6 in brackets
    fn host_str(&self) -> Option<Cow<'_, str>>;

    /// Port, unless absent or the scheme default
    fn port(&self) -> Option<u16>;

    /// Port, falling back to the scheme default
    fn port_or_known_default(&self) -> Option<u16>;

    /// Serialized path
    fn path(&self) -> Cow<'_, str>;

    /// Hierarchical path segments, `None` for an opaque path
    fn path_segments(&self) -> Option<&[String]>;

    /// Query without the leading '?'
    fn query(&self) -> Option<&str>;

    /// Fragment without the leading '#'
    fn fragment(&self) -> Option<&str>;

    // Has checks

    fn has_credentials(&self) -> bool;

    fn has_host(&self) -> bool;

    fn has_opaque_path(&self) -> bool;

    // Setters

    fn set_scheme(&mut self, scheme: &str) -> Result<(), SetError>;

    fn set_username(&mut self, username: &str) -> Result<(), SetError>;

    fn set_password(&mut self, password: &str) -> Result<(), SetError>;

    /// Replace the host only
    fn set_host(&mut self, host: &str) -> Result<(), SetError>;

    fn set_port(&mut self, port: &str) -> Result<(), SetError>;

    /// Replace `[userinfo@]host[:port]`
    fn set_host_and_port(&mut self, host_and_port: &str) -> Result<(), SetError>;

    fn set_path(&mut self, path: &str) -> Result<(), SetError>;

    /// Set the query, an empty value removes it
    fn set_query(&mut self, query: &str);

    /// Set the fragment, an empty value removes it
    fn set_fragment(&mut self, fragment: &str);
}
