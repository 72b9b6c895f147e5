use crate::character_sets::{is_forbidden_domain_code_point, is_forbidden_host_code_point};
use crate::checkers::ends_in_number;
use crate::compat::String;
use crate::error::HostError;
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::ipv6::{parse_ipv6, serialize_ipv6};
use crate::unicode::idna::domain_to_ascii_owned;
use crate::unicode::percent_encode::{EncodeSet, percent_decode_lossy, percent_encode};
use core::fmt;

/// A parsed host. Exactly one form holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// ASCII domain after IDNA processing. Empty only for `file` URLs.
    Domain(String),
    Ipv4([u8; 4]),
    Ipv6([u16; 8]),
    /// Percent-encoded host of a non-special URL
    Opaque(String),
}

impl Host {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Domain(s) | Self::Opaque(s) => s.is_empty(),
            Self::Ipv4(_) | Self::Ipv6(_) => false,
        }
    }

    /// Serialized host, IPv6 in brackets
    pub fn serialize(&self) -> String {
        match self {
            Self::Domain(s) | Self::Opaque(s) => s.clone(),
            Self::Ipv4(octets) => serialize_ipv4(*octets),
            Self::Ipv6(pieces) => serialize_ipv6(pieces),
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(s) | Self::Opaque(s) => f.write_str(s),
            _ => f.write_str(&self.serialize()),
        }
    }
}

/// Parse a host substring.
///
/// `is_opaque` selects the opaque-host rules used by non-special schemes.
/// The input must already be free of tabs and newlines.
pub fn parse_host(input: &str, is_opaque: bool) -> Result<Host, HostError> {
    if input.starts_with('[') {
        if !input.ends_with(']') {
            return Err(HostError::InvalidIpv6);
        }
        return parse_ipv6(input).map(Host::Ipv6);
    }

    if is_opaque {
        return parse_opaque_host(input);
    }

    let decoded = percent_decode_lossy(input);
    if decoded.chars().any(is_forbidden_domain_code_point) {
        return Err(HostError::ForbiddenCodePoint);
    }

    let ascii = domain_to_ascii_owned(&decoded)?;
    if ascii.is_empty() {
        return Err(HostError::Empty);
    }
    // Mapping can surface forbidden code points (e.g. fullwidth '%')
    if ascii.chars().any(is_forbidden_domain_code_point) {
        return Err(HostError::ForbiddenCodePoint);
    }

    if ends_in_number(&ascii) {
        return parse_ipv4(&ascii).map(Host::Ipv4);
    }

    Ok(Host::Domain(ascii))
}

fn parse_opaque_host(input: &str) -> Result<Host, HostError> {
    if input.chars().any(is_forbidden_host_code_point) {
        return Err(HostError::ForbiddenCodePoint);
    }
    Ok(Host::Opaque(percent_encode(
        input.as_bytes(),
        EncodeSet::C0Control,
    )))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[test]
    fn test_parse_domain() {
        assert_eq!(
            parse_host("Example.COM", false).unwrap(),
            Host::Domain("example.com".into())
        );
        assert_eq!(
            parse_host("ex%61mple.com", false).unwrap(),
            Host::Domain("example.com".into())
        );
        assert_eq!(
            parse_host("bücher.de", false).unwrap(),
            Host::Domain("xn--bcher-kva.de".into())
        );
    }

    #[test]
    fn test_parse_ip_hosts() {
        assert_eq!(parse_host("127.0.0.1", false).unwrap(), Host::Ipv4([127, 0, 0, 1]));
        assert_eq!(
            parse_host("[::1]", false).unwrap(),
            Host::Ipv6([0, 0, 0, 0, 0, 0, 0, 1])
        );
        // Brackets are parsed as IPv6 for opaque hosts too
        assert_eq!(
            parse_host("[::1]", true).unwrap(),
            Host::Ipv6([0, 0, 0, 0, 0, 0, 0, 1])
        );
    }

    #[test]
    fn test_ambiguous_numeric_hosts() {
        assert_eq!(parse_host("0x7f.1", false), Err(HostError::InvalidIpv4));
        assert_eq!(parse_host("127.1", false), Err(HostError::InvalidIpv4));
        assert_eq!(parse_host("010.0.0.1", false), Err(HostError::InvalidIpv4));
        assert_eq!(parse_host("foo.09", false), Err(HostError::InvalidIpv4));
        // Numbers that are not the last label are fine
        assert_eq!(
            parse_host("1.2.3.com", false).unwrap(),
            Host::Domain("1.2.3.com".into())
        );
        // Opaque hosts are never numbers
        assert_eq!(parse_host("127.1", true).unwrap(), Host::Opaque("127.1".into()));
    }

    #[test]
    fn test_invalid_hosts() {
        assert_eq!(parse_host("[::g]", false), Err(HostError::InvalidIpv6));
        assert_eq!(parse_host("[::1", false), Err(HostError::InvalidIpv6));
        assert_eq!(parse_host("exa mple.com", false), Err(HostError::ForbiddenCodePoint));
        assert_eq!(parse_host("a%25b", false), Err(HostError::ForbiddenCodePoint));
        assert_eq!(parse_host("a<b", true), Err(HostError::ForbiddenCodePoint));
        assert_eq!(parse_host("", false), Err(HostError::Empty));
    }

    #[test]
    fn test_opaque_host_encoding() {
        assert_eq!(parse_host("", true).unwrap(), Host::Opaque(String::new()));
        assert_eq!(
            parse_host("héllo%41", true).unwrap(),
            Host::Opaque("h%C3%A9llo%41".into())
        );
    }

    #[test]
    fn test_host_display() {
        assert_eq!(Host::Ipv4([10, 0, 0, 1]).to_string(), "10.0.0.1");
        assert_eq!(Host::Ipv6([0x2001, 0xdb8, 0, 0, 0, 0, 0, 1]).to_string(), "[2001:db8::1]");
        assert_eq!(Host::Domain("example.com".into()).to_string(), "example.com");
        assert!(Host::Domain(String::new()).is_empty());
        assert!(!Host::Ipv4([0; 4]).is_empty());
    }
}
