//! Handle-based access to URL records.
//!
//! This is the surface a foreign-function shim wraps: an owned handle,
//! owned string copies out and integer status codes for mutations.
//! [`destroy`] consumes the handle, so a handle cannot be used or released
//! twice.

use crate::compat::{String, ToString};
use crate::error::{HostError, ParseError, SetError};
use crate::url::Url;
use core::str;

/// Owning handle to a URL record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlHandle {
    url: Url,
}

impl UrlHandle {
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl From<Url> for UrlHandle {
    fn from(url: Url) -> Self {
        Self { url }
    }
}

/// Result of a mutation through a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Ok,
    InvalidScheme,
    InvalidPort,
    InvalidIpv4,
    InvalidIpv6,
    ForbiddenHostCodePoint,
    InvalidDomain,
    EmptyHost,
    InvalidForScheme,
    CannotRemoveHost,
    InvalidUtf8,
}

impl StatusCode {
    /// Integer code: 0 for success, a distinct negative value per failure
    pub fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::InvalidScheme => -1,
            Self::InvalidPort => -2,
            Self::InvalidIpv4 => -3,
            Self::InvalidIpv6 => -4,
            Self::ForbiddenHostCodePoint => -5,
            Self::InvalidDomain => -6,
            Self::EmptyHost => -7,
            Self::InvalidForScheme => -8,
            Self::CannotRemoveHost => -9,
            Self::InvalidUtf8 => -10,
        }
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<SetError> for StatusCode {
    fn from(err: SetError) -> Self {
        match err {
            SetError::InvalidScheme => Self::InvalidScheme,
            SetError::InvalidPort => Self::InvalidPort,
            SetError::Host(HostError::InvalidIpv4) => Self::InvalidIpv4,
            SetError::Host(HostError::InvalidIpv6) => Self::InvalidIpv6,
            SetError::Host(HostError::ForbiddenCodePoint) => Self::ForbiddenHostCodePoint,
            SetError::Host(HostError::InvalidDomain) => Self::InvalidDomain,
            SetError::Host(HostError::Empty) => Self::EmptyHost,
            SetError::InvalidForScheme => Self::InvalidForScheme,
            SetError::CannotRemoveHost => Self::CannotRemoveHost,
        }
    }
}

impl From<Result<(), SetError>> for StatusCode {
    fn from(result: Result<(), SetError>) -> Self {
        result.map_or_else(Self::from, |()| Self::Ok)
    }
}

/// Settable components, for the byte-oriented [`set_bytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Scheme,
    Username,
    Password,
    Host,
    Port,
    HostAndPort,
    Path,
    Query,
    Fragment,
}

/// Parse an absolute URL into a new handle
///
/// # Errors
///
/// Returns the parse error when the input is not a valid URL.
pub fn parse(input: &str) -> Result<UrlHandle, ParseError> {
    Url::parse(input).map(UrlHandle::from)
}

/// Parse a URL from raw bytes
///
/// # Errors
///
/// [`ParseError::Other`] when the bytes are not UTF-8, otherwise the parse
/// error of [`parse`].
pub fn parse_bytes(input: &[u8]) -> Result<UrlHandle, ParseError> {
    let input = str::from_utf8(input).map_err(|_| ParseError::Other)?;
    parse(input)
}

/// Release a handle
pub fn destroy(handle: UrlHandle) {
    drop(handle);
}

pub fn serialize(handle: &UrlHandle) -> String {
    handle.url.serialize()
}

/// Always `Some`, the `Option` mirrors the nullable C getter
pub fn get_scheme(handle: &UrlHandle) -> Option<String> {
    Some(handle.url.scheme().to_string())
}

pub fn get_username(handle: &UrlHandle) -> Option<String> {
    handle.url.username().map(ToString::to_string)
}

pub fn get_password(handle: &UrlHandle) -> Option<String> {
    handle.url.password().map(ToString::to_string)
}

pub fn get_host(handle: &UrlHandle) -> Option<String> {
    handle.url.host_str().map(|host| host.into_owned())
}

/// Port, `None` when absent or equal to the scheme default
pub fn get_port(handle: &UrlHandle) -> Option<u16> {
    handle.url.port()
}

/// Always `Some`, the `Option` mirrors the nullable C getter
pub fn get_path(handle: &UrlHandle) -> Option<String> {
    Some(handle.url.path().into_owned())
}

/// Query with percent-escapes decoded
pub fn get_query(handle: &UrlHandle) -> Option<String> {
    handle.url.decoded_query().map(|query| query.into_owned())
}

/// Fragment with percent-escapes decoded
pub fn get_fragment(handle: &UrlHandle) -> Option<String> {
    handle.url.decoded_fragment().map(|fragment| fragment.into_owned())
}

pub fn set_scheme(handle: &mut UrlHandle, value: &str) -> StatusCode {
    handle.url.set_scheme(value).into()
}

pub fn set_username(handle: &mut UrlHandle, value: &str) -> StatusCode {
    handle.url.set_username(value).into()
}

pub fn set_password(handle: &mut UrlHandle, value: &str) -> StatusCode {
    handle.url.set_password(value).into()
}

pub fn set_host(handle: &mut UrlHandle, value: &str) -> StatusCode {
    handle.url.set_host(value).into()
}

pub fn set_port(handle: &mut UrlHandle, value: &str) -> StatusCode {
    handle.url.set_port(value).into()
}

pub fn set_host_and_port(handle: &mut UrlHandle, value: &str) -> StatusCode {
    handle.url.set_host_and_port(value).into()
}

pub fn set_path(handle: &mut UrlHandle, value: &str) -> StatusCode {
    handle.url.set_path(value).into()
}

pub fn set_query(handle: &mut UrlHandle, value: &str) -> StatusCode {
    handle.url.set_query(value);
    StatusCode::Ok
}

pub fn set_fragment(handle: &mut UrlHandle, value: &str) -> StatusCode {
    handle.url.set_fragment(value);
    StatusCode::Ok
}

/// Set a component from raw bytes. Invalid UTF-8 changes nothing.
pub fn set_bytes(handle: &mut UrlHandle, component: Component, value: &[u8]) -> StatusCode {
    let Ok(value) = str::from_utf8(value) else {
        return StatusCode::InvalidUtf8;
    };
    match component {
        Component::Scheme => set_scheme(handle, value),
        Component::Username => set_username(handle, value),
        Component::Password => set_password(handle, value),
        Component::Host => set_host(handle, value),
        Component::Port => set_port(handle, value),
        Component::HostAndPort => set_host_and_port(handle, value),
        Component::Path => set_path(handle, value),
        Component::Query => set_query(handle, value),
        Component::Fragment => set_fragment(handle, value),
    }
}

/// Resolve `input` against the handle's URL and serialize the result
pub fn resolve(handle: &UrlHandle, input: &str) -> Option<String> {
    handle.url.join(input).ok().map(|url| url.serialize())
}

/// Serialized common base of two URLs, empty when they share none
pub fn common_base_spec(a: &UrlHandle, b: &UrlHandle) -> String {
    a.url
        .common_base(&b.url)
        .map(|url| url.serialize())
        .unwrap_or_default()
}

/// Reference from `a` to `b`: relative when possible, else `b` in full
pub fn relative_spec(a: &UrlHandle, b: &UrlHandle) -> String {
    a.url
        .make_relative(&b.url)
        .unwrap_or_else(|| b.url.serialize())
}
