use crate::checkers::parse_port;
use crate::compat::String;
use crate::error::{ParseError, Result};
use crate::host::{Host, parse_host};
use crate::types::SchemeType;
use crate::unicode::percent_encode::{EncodeSet, percent_encode};

/// End of the authority starting at `start`: the first '/', '?' or '#'
/// (or '\' for special schemes), else the end of input
pub fn find_authority_end(bytes: &[u8], start: usize, scheme_type: SchemeType) -> usize {
    let remaining = &bytes[start..];
    let len = if scheme_type.is_special() {
        remaining
            .iter()
            .position(|&b| matches!(b, b'/' | b'?' | b'#' | b'\\'))
            .unwrap_or(remaining.len())
    } else {
        memchr::memchr3(b'/', b'?', b'#', remaining).unwrap_or(remaining.len())
    };
    start + len
}

/// Split `[userinfo@]host[:port]` on the last '@'
pub fn split_userinfo(authority: &str) -> (Option<&str>, &str) {
    match memchr::memrchr(b'@', authority.as_bytes()) {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    }
}

/// Split userinfo into username and password on the first ':'
pub fn split_credentials(userinfo: &str) -> (&str, &str) {
    match memchr::memchr(b':', userinfo.as_bytes()) {
        Some(colon) => (&userinfo[..colon], &userinfo[colon + 1..]),
        None => (userinfo, ""),
    }
}

/// Split host and port on the last ':' outside IPv6 brackets.
/// The port is `Some("")` for a trailing ':'.
pub fn split_host_port(input: &str) -> (&str, Option<&str>) {
    let mut inside_brackets = false;
    let mut colon = None;
    for (i, b) in input.bytes().enumerate() {
        match b {
            b'[' => inside_brackets = true,
            b']' => inside_brackets = false,
            b':' if !inside_brackets => colon = Some(i),
            _ => {}
        }
    }
    match colon {
        Some(colon) => (&input[..colon], Some(&input[colon + 1..])),
        None => (input, None),
    }
}

pub fn encode_userinfo(input: &str) -> String {
    percent_encode(input.as_bytes(), EncodeSet::Userinfo)
}

/// Error for an empty host in an authority that needs one
pub fn missing_host_error(scheme_type: SchemeType) -> ParseError {
    if scheme_type.is_special() {
        ParseError::MissingHostForSpecialScheme
    } else {
        ParseError::OpaqueHostRequired
    }
}

/// Parse the host of an authority of a non-file URL.
///
/// `has_carried_parts` is true when credentials or a port separator came with
/// the host, which makes an empty host an error for non-special schemes too.
pub fn parse_authority_host(
    input: &str,
    has_carried_parts: bool,
    scheme_type: SchemeType,
) -> Result<Host> {
    if input.is_empty() {
        if scheme_type.is_special() || has_carried_parts {
            return Err(missing_host_error(scheme_type));
        }
        return Ok(Host::Opaque(String::new()));
    }
    parse_host(input, !scheme_type.is_special()).map_err(ParseError::from)
}

/// Parse the text after the port separator. Empty means no port.
pub fn parse_port_input(input: &str) -> Result<Option<u16>> {
    if input.is_empty() {
        return Ok(None);
    }
    parse_port(input).map(Some).ok_or(ParseError::InvalidPort)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_userinfo_uses_last_at() {
        assert_eq!(split_userinfo("a@b@host:80"), (Some("a@b"), "host:80"));
        assert_eq!(split_userinfo("host"), (None, "host"));
        assert_eq!(split_userinfo("@host"), (Some(""), "host"));
    }

    #[test]
    fn test_split_credentials_uses_first_colon() {
        assert_eq!(split_credentials("user:pa:ss"), ("user", "pa:ss"));
        assert_eq!(split_credentials("user"), ("user", ""));
        assert_eq!(split_credentials(":"), ("", ""));
    }

    #[test]
    fn test_split_host_port() {
        assert_eq!(split_host_port("example.com:8080"), ("example.com", Some("8080")));
        assert_eq!(split_host_port("example.com"), ("example.com", None));
        assert_eq!(split_host_port("example.com:"), ("example.com", Some("")));
        assert_eq!(split_host_port("[::1]:443"), ("[::1]", Some("443")));
        assert_eq!(split_host_port("[::1]"), ("[::1]", None));
        assert_eq!(split_host_port("a:b:80"), ("a:b", Some("80")));
    }

    #[test]
    fn test_find_authority_end() {
        assert_eq!(find_authority_end(b"host\\path", 0, SchemeType::Http), 4);
        assert_eq!(find_authority_end(b"host\\path", 0, SchemeType::NotSpecial), 9);
        assert_eq!(find_authority_end(b"//host?q", 2, SchemeType::NotSpecial), 6);
    }

    #[test]
    fn test_parse_authority_host() {
        assert_eq!(
            parse_authority_host("", false, SchemeType::Http),
            Err(ParseError::MissingHostForSpecialScheme)
        );
        assert_eq!(
            parse_authority_host("", true, SchemeType::NotSpecial),
            Err(ParseError::OpaqueHostRequired)
        );
        assert_eq!(
            parse_authority_host("", false, SchemeType::NotSpecial).unwrap(),
            Host::Opaque(String::new())
        );
        assert_eq!(
            parse_authority_host("[::g]", false, SchemeType::Http),
            Err(ParseError::InvalidIpv6)
        );
    }

    #[test]
    fn test_parse_port_input() {
        assert_eq!(parse_port_input(""), Ok(None));
        assert_eq!(parse_port_input("8080"), Ok(Some(8080)));
        assert_eq!(parse_port_input("99999"), Err(ParseError::InvalidPort));
        assert_eq!(parse_port_input("80a"), Err(ParseError::InvalidPort));
    }
}
