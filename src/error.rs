use thiserror::Error;

/// Errors that can occur while parsing a host substring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostError {
    /// Host ends in a number but is not a dotted-decimal IPv4 address
    #[error("invalid IPv4 address")]
    InvalidIpv4,
    /// Bracketed host is not a valid IPv6 address
    #[error("invalid IPv6 address")]
    InvalidIpv6,
    /// Host contains a forbidden host or domain code point
    #[error("forbidden code point in host")]
    ForbiddenCodePoint,
    /// IDNA processing rejected the domain
    #[error("domain to ASCII conversion failed")]
    InvalidDomain,
    /// Host is empty where a host is required
    #[error("empty host")]
    Empty,
}

/// Errors that can occur during URL parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Missing or malformed scheme
    #[error("invalid scheme")]
    InvalidScheme,
    /// Relative reference without a usable base URL
    #[error("relative URL without a base")]
    RelativeUrlWithoutBase,
    /// Port is not a decimal number in the 16-bit range
    #[error("invalid port number")]
    InvalidPort,
    /// Invalid IPv4 address
    #[error("invalid IPv4 address")]
    InvalidIpv4,
    /// Invalid IPv6 address
    #[error("invalid IPv6 address")]
    InvalidIpv6,
    /// Forbidden code point in host
    #[error("forbidden code point in host")]
    ForbiddenHostCodePoint,
    /// IDNA processing error
    #[error("invalid international domain name")]
    InvalidDomain,
    /// Special scheme (other than file) with an empty host
    #[error("empty host for a special scheme")]
    MissingHostForSpecialScheme,
    /// Credentials or a port without a host to carry them
    #[error("credentials or port require a non-empty host")]
    OpaqueHostRequired,
    /// Input is unusable for any other reason (e.g. not UTF-8)
    #[error("malformed URL")]
    Other,
}

impl From<HostError> for ParseError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::InvalidIpv4 => Self::InvalidIpv4,
            HostError::InvalidIpv6 => Self::InvalidIpv6,
            HostError::ForbiddenCodePoint => Self::ForbiddenHostCodePoint,
            HostError::InvalidDomain => Self::InvalidDomain,
            HostError::Empty => Self::MissingHostForSpecialScheme,
        }
    }
}

/// Errors returned by the component setters.
///
/// A failed setter never modifies the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("invalid scheme")]
    InvalidScheme,
    #[error("invalid port number")]
    InvalidPort,
    #[error(transparent)]
    Host(#[from] HostError),
    /// The component cannot be set on this kind of URL
    #[error("component cannot be set for this scheme")]
    InvalidForScheme,
    /// The host of this URL cannot be emptied
    #[error("host cannot be removed")]
    CannotRemoveHost,
}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
