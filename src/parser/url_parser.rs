use super::State;
use super::authority::{
    encode_userinfo, find_authority_end, missing_host_error, parse_authority_host,
    parse_port_input, split_credentials, split_host_port, split_userinfo,
};
use crate::checkers::{
    is_normalized_windows_drive_letter, is_windows_drive_letter, starts_with_windows_drive_letter,
};
use crate::compat::{String, vec};
use crate::error::{ParseError, Result};
use crate::helpers::clean_tabs_and_newlines;
use crate::host::{Host, parse_host};
use crate::path::{UrlPath, encode_opaque_path, is_path_separator, parse_path_into, shorten};
use crate::scheme::{get_scheme_type, scheme_len};
use crate::types::SchemeType;
use crate::unicode::percent_encode::{EncodeSet, percent_encode};
use crate::url::Url;
use crate::url_components::UrlComponents;
use tracing::{debug, trace};

/// Log a rejected URL and hand the error back
fn reject(component: &'static str, err: impl Into<ParseError>) -> ParseError {
    let err = err.into();
    debug!(component, error = %err, "rejected URL");
    err
}

/// Index of the first '?' or '#' at or after `start`, else the end of input
fn find_path_end(bytes: &[u8], start: usize) -> usize {
    memchr::memchr2(b'?', b'#', &bytes[start..]).map_or(bytes.len(), |pos| start + pos)
}

/// Parse a URL string, resolving it against `base` when it is relative.
///
/// # Errors
///
/// Returns an error if the input is not a valid URL according to the WHATWG
/// URL Standard. No partially parsed URL is ever returned.
pub fn parse_url(input: &str, base: Option<&Url>) -> Result<Url> {
    // Trim C0 controls and spaces, drop every tab and newline
    let input = clean_tabs_and_newlines(input);
    let input = input.as_ref();
    let bytes = input.as_bytes();

    let mut url = UrlComponents::new(String::new());
    let mut scheme_type = SchemeType::NotSpecial;
    let mut state = State::SchemeStart;
    let mut pointer = 0;

    loop {
        match state {
            State::SchemeStart => {
                let Some(len) = scheme_len(bytes) else {
                    state = State::NoScheme;
                    continue;
                };

                url.scheme = input[..len].to_ascii_lowercase();
                scheme_type = get_scheme_type(&url.scheme);
                pointer = len + 1;

                state = if scheme_type.is_file() {
                    State::File
                } else if scheme_type.is_special() {
                    // "http:path" is relative to an http base
                    if base.is_some_and(|base| base.components.scheme == url.scheme) {
                        State::SpecialRelativeOrAuthority
                    } else {
                        State::SpecialAuthoritySlashes
                    }
                } else if bytes.get(pointer) == Some(&b'/') {
                    pointer += 1;
                    State::PathOrAuthority
                } else {
                    State::OpaquePath
                };
            }

            State::NoScheme => {
                let Some(base) = base else {
                    return Err(reject("scheme", ParseError::InvalidScheme));
                };

                if base.has_opaque_path() {
                    // Only a fragment can be resolved against an opaque path
                    if bytes.first() != Some(&b'#') {
                        return Err(reject("path", ParseError::RelativeUrlWithoutBase));
                    }
                    url.scheme.clone_from(&base.components.scheme);
                    url.path = base.components.path.clone();
                    url.query.clone_from(&base.components.query);
                    scheme_type = base.scheme_type;
                    pointer = 1;
                    state = State::Fragment;
                } else if base.scheme_type.is_file() {
                    state = State::File;
                } else {
                    state = State::Relative;
                }
            }

            State::SpecialRelativeOrAuthority => {
                if bytes[pointer..].starts_with(b"//") {
                    pointer += 2;
                    state = State::SpecialAuthorityIgnoreSlashes;
                } else {
                    state = State::Relative;
                }
            }

            State::PathOrAuthority => {
                if bytes.get(pointer) == Some(&b'/') {
                    pointer += 1;
                    state = State::Authority;
                } else {
                    state = State::Path;
                }
            }

            State::Relative => {
                let Some(base) = base else {
                    return Err(reject("scheme", ParseError::RelativeUrlWithoutBase));
                };
                url.scheme.clone_from(&base.components.scheme);
                scheme_type = base.scheme_type;

                match bytes.get(pointer) {
                    Some(&b) if is_path_separator(b, scheme_type) => {
                        pointer += 1;
                        state = State::RelativeSlash;
                    }
                    next => {
                        url.copy_authority_from(&base.components);
                        url.path = base.components.path.clone();
                        url.query.clone_from(&base.components.query);

                        match next {
                            None => break,
                            Some(b'?') => {
                                url.query = None;
                                pointer += 1;
                                state = State::Query;
                            }
                            Some(b'#') => {
                                pointer += 1;
                                state = State::Fragment;
                            }
                            Some(_) => {
                                url.query = None;
                                if let UrlPath::Segments(segments) = &mut url.path {
                                    shorten(segments, scheme_type);
                                }
                                state = State::Path;
                            }
                        }
                    }
                }
            }

            State::RelativeSlash => match bytes.get(pointer) {
                Some(b'/' | b'\\') if scheme_type.is_special() => {
                    pointer += 1;
                    state = State::SpecialAuthorityIgnoreSlashes;
                }
                Some(b'/') => {
                    pointer += 1;
                    state = State::Authority;
                }
                _ => {
                    if let Some(base) = base {
                        url.copy_authority_from(&base.components);
                    }
                    state = State::Path;
                }
            },

            State::SpecialAuthoritySlashes => {
                if bytes[pointer..].starts_with(b"//") {
                    pointer += 2;
                }
                state = State::SpecialAuthorityIgnoreSlashes;
            }

            State::SpecialAuthorityIgnoreSlashes => {
                while matches!(bytes.get(pointer), Some(b'/' | b'\\')) {
                    pointer += 1;
                }
                state = State::Authority;
            }

            State::Authority => {
                trace!(pointer, "entering authority");
                let auth_end = find_authority_end(bytes, pointer, scheme_type);
                let (userinfo, host_port) = split_userinfo(&input[pointer..auth_end]);

                if let Some(userinfo) = userinfo {
                    let (username, password) = split_credentials(userinfo);
                    let password = userinfo.contains(':').then(|| encode_userinfo(password));
                    url.set_parsed_credentials(encode_userinfo(username), password);
                    if host_port.is_empty() {
                        return Err(reject("host", missing_host_error(scheme_type)));
                    }
                    pointer += userinfo.len() + 1;
                }
                state = State::Host;
            }

            State::Host => {
                trace!(pointer, "entering host");
                let host_end = find_authority_end(bytes, pointer, scheme_type);
                let (host, port) = split_host_port(&input[pointer..host_end]);

                let has_carried_parts = port.is_some() || url.has_credentials();
                let host = parse_authority_host(host, has_carried_parts, scheme_type)
                    .map_err(|err| reject("host", err))?;
                url.host = Some(host);

                if let Some(port) = port {
                    url.port = parse_port_input(port).map_err(|err| reject("port", err))?;
                }

                pointer = host_end;
                state = State::PathStart;
            }

            State::File => {
                url.scheme = String::from("file");
                scheme_type = SchemeType::File;
                url.host = Some(Host::Domain(String::new()));

                let next = bytes.get(pointer);
                if matches!(next, Some(b'/' | b'\\')) {
                    pointer += 1;
                    state = State::FileSlash;
                    continue;
                }

                let Some(base) = base.filter(|base| base.scheme_type.is_file()) else {
                    state = State::Path;
                    continue;
                };

                url.host.clone_from(&base.components.host);
                url.path = base.components.path.clone();
                url.query.clone_from(&base.components.query);

                match next {
                    None => break,
                    Some(b'?') => {
                        url.query = None;
                        pointer += 1;
                        state = State::Query;
                    }
                    Some(b'#') => {
                        pointer += 1;
                        state = State::Fragment;
                    }
                    Some(_) => {
                        url.query = None;
                        if let UrlPath::Segments(segments) = &mut url.path {
                            if starts_with_windows_drive_letter(&bytes[pointer..]) {
                                segments.clear();
                            } else {
                                shorten(segments, scheme_type);
                            }
                        }
                        state = State::Path;
                    }
                }
            }

            State::FileSlash => {
                if matches!(bytes.get(pointer), Some(b'/' | b'\\')) {
                    pointer += 1;
                    state = State::FileHost;
                    continue;
                }

                if let Some(base) = base.filter(|base| base.scheme_type.is_file()) {
                    url.host.clone_from(&base.components.host);
                    // Keep the base drive letter for "/path" style references
                    if !starts_with_windows_drive_letter(&bytes[pointer..])
                        && let Some(drive) = base
                            .components
                            .path
                            .segments()
                            .and_then(<[String]>::first)
                            .filter(|first| is_normalized_windows_drive_letter(first.as_bytes()))
                    {
                        url.path = UrlPath::Segments(vec![drive.clone()]);
                    }
                }
                state = State::Path;
            }

            State::FileHost => {
                trace!(pointer, "entering file host");
                let host_end = bytes[pointer..]
                    .iter()
                    .position(|&b| matches!(b, b'/' | b'\\' | b'?' | b'#'))
                    .map_or(bytes.len(), |pos| pointer + pos);
                let buffer = &input[pointer..host_end];

                // "file://c:/" has a drive letter where the host would be
                if is_windows_drive_letter(buffer.as_bytes()) {
                    state = State::Path;
                    continue;
                }

                if !buffer.is_empty() {
                    let host = parse_host(buffer, false).map_err(|err| reject("host", err))?;
                    url.host = Some(match host {
                        Host::Domain(domain) if domain == "localhost" => Host::Domain(String::new()),
                        host => host,
                    });
                }
                pointer = host_end;
                state = State::PathStart;
            }

            State::PathStart => {
                if scheme_type.is_special() {
                    if matches!(bytes.get(pointer), Some(b'/' | b'\\')) {
                        pointer += 1;
                    }
                    state = State::Path;
                    continue;
                }

                match bytes.get(pointer) {
                    None => break,
                    Some(b'?') => {
                        pointer += 1;
                        state = State::Query;
                    }
                    Some(b'#') => {
                        pointer += 1;
                        state = State::Fragment;
                    }
                    Some(b'/') => {
                        pointer += 1;
                        state = State::Path;
                    }
                    Some(_) => state = State::Path,
                }
            }

            State::Path => {
                trace!(pointer, "entering path");
                let path_end = find_path_end(bytes, pointer);
                if let UrlPath::Segments(segments) = &mut url.path {
                    parse_path_into(segments, &input[pointer..path_end], scheme_type);
                }

                pointer = path_end + 1;
                match bytes.get(path_end) {
                    Some(b'?') => state = State::Query,
                    Some(b'#') => state = State::Fragment,
                    _ => break,
                }
            }

            State::OpaquePath => {
                let path_end = find_path_end(bytes, pointer);
                let terminated = path_end < bytes.len();
                url.path = UrlPath::Opaque(encode_opaque_path(&input[pointer..path_end], terminated));

                pointer = path_end + 1;
                match bytes.get(path_end) {
                    Some(b'?') => state = State::Query,
                    Some(b'#') => state = State::Fragment,
                    _ => break,
                }
            }

            State::Query => {
                let query_end =
                    memchr::memchr(b'#', &bytes[pointer..]).map_or(bytes.len(), |pos| pointer + pos);
                url.query = Some(percent_encode(
                    &bytes[pointer..query_end],
                    EncodeSet::query(scheme_type.is_special()),
                ));

                if query_end == bytes.len() {
                    break;
                }
                pointer = query_end + 1;
                state = State::Fragment;
            }

            State::Fragment => {
                url.fragment = Some(percent_encode(&bytes[pointer..], EncodeSet::Fragment));
                break;
            }
        }
    }

    Ok(Url::from_components(url, scheme_type))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn href(input: &str) -> String {
        parse_url(input, None).unwrap().serialize()
    }

    fn join(base: &str, input: &str) -> String {
        let base = parse_url(base, None).unwrap();
        parse_url(input, Some(&base)).unwrap().serialize()
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(href("http://example.com"), "http://example.com/");
        assert_eq!(href("HTTP://EXAMPLE.com:80/a?b#c"), "http://example.com/a?b#c");
        assert_eq!(href("  https://example.com/\t\n "), "https://example.com/");
        assert_eq!(href("http:\\\\example.com\\a\\b"), "http://example.com/a/b");
        assert_eq!(href("https:example.com"), "https://example.com/");
    }

    #[test]
    fn test_parse_authority() {
        assert_eq!(href("http://u:p@host/"), "http://u:p@host/");
        assert_eq!(href("http://:@host/"), "http://:@host/");
        assert_eq!(href("http://u:@host/"), "http://u:@host/");
        assert_eq!(href("http://@host/"), "http://@host/");
        assert_eq!(href("http://:pw@host/"), "http://:pw@host/");
        assert_eq!(href("http://a@b@host/"), "http://a%40b@host/");
        assert_eq!(href("http://host:/"), "http://host/");
        assert_eq!(href("http://[::1]:8080/"), "http://[::1]:8080/");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_url("", None).unwrap_err(), ParseError::InvalidScheme);
        assert_eq!(parse_url("/path", None).unwrap_err(), ParseError::InvalidScheme);
        assert_eq!(parse_url("1http://x", None).unwrap_err(), ParseError::InvalidScheme);
        assert_eq!(
            parse_url("http://", None).unwrap_err(),
            ParseError::MissingHostForSpecialScheme
        );
        assert_eq!(
            parse_url("http://user@/", None).unwrap_err(),
            ParseError::MissingHostForSpecialScheme
        );
        assert_eq!(
            parse_url("foo://user@/", None).unwrap_err(),
            ParseError::OpaqueHostRequired
        );
        assert_eq!(
            parse_url("foo://:80/", None).unwrap_err(),
            ParseError::OpaqueHostRequired
        );
        assert_eq!(
            parse_url("http://host:99999/", None).unwrap_err(),
            ParseError::InvalidPort
        );
        assert_eq!(parse_url("http://[::g]/", None).unwrap_err(), ParseError::InvalidIpv6);
        assert_eq!(parse_url("http://127.1/", None).unwrap_err(), ParseError::InvalidIpv4);
        assert_eq!(
            parse_url("http://a b/", None).unwrap_err(),
            ParseError::ForbiddenHostCodePoint
        );
    }

    #[test]
    fn test_parse_non_special() {
        assert_eq!(href("foo://"), "foo://");
        assert_eq!(href("foo://host"), "foo://host");
        assert_eq!(href("foo://Host/a\\b"), "foo://Host/a\\b");
        assert_eq!(href("foo:/a/../b"), "foo:/b");
        assert_eq!(href("foo:/.//p"), "foo:/.//p");
        assert_eq!(href("mailto:User@Example.com"), "mailto:User@Example.com");
        assert_eq!(href("data:text/plain,a b ?q"), "data:text/plain,a b%20?q");
    }

    #[test]
    fn test_parse_file() {
        assert_eq!(href("file:///C|/foo"), "file:///C:/foo");
        assert_eq!(href("file://localhost/etc"), "file:///etc");
        assert_eq!(href("file://Server/share"), "file://server/share");
        assert_eq!(href("file:c:\\a\\..\\..\\b"), "file:///c:/b");
        assert_eq!(href("file:"), "file:///");
        assert_eq!(href("file://c:/x"), "file:///c:/x");
    }

    #[test]
    fn test_parse_relative() {
        let base = "http://example.com/a/b/c?q#f";
        assert_eq!(join(base, ""), "http://example.com/a/b/c?q");
        assert_eq!(join(base, "d"), "http://example.com/a/b/d");
        assert_eq!(join(base, "../d"), "http://example.com/a/d");
        assert_eq!(join(base, "/d"), "http://example.com/d");
        assert_eq!(join(base, "//other/x"), "http://other/x");
        assert_eq!(join(base, "?x"), "http://example.com/a/b/c?x");
        assert_eq!(join(base, "#g"), "http://example.com/a/b/c?q#g");
        assert_eq!(join(base, "\\d"), "http://example.com/d");
        assert_eq!(join(base, "http:d"), "http://example.com/a/b/d");
        assert_eq!(join(base, "https:d"), "https://d/");
    }

    #[test]
    fn test_parse_relative_file() {
        assert_eq!(join("file:///C:/a/b", "d"), "file:///C:/a/d");
        assert_eq!(join("file:///C:/a/b", "/d"), "file:///C:/d");
        assert_eq!(join("file:///C:/a/b", "D|/x"), "file:///D:/x");
        // A drive letter with ':' reads as a scheme
        assert_eq!(join("file:///C:/a/b", "D:/x"), "d:/x");
        assert_eq!(join("file://host/a/b", "?q"), "file://host/a/b?q");
        assert_eq!(join("file://host/a", "//other/z"), "file://other/z");
    }

    #[test]
    fn test_parse_against_opaque_base() {
        assert_eq!(join("mailto:someone", "#top"), "mailto:someone#top");
        let base = parse_url("mailto:someone", None).unwrap();
        assert_eq!(
            parse_url("other", Some(&base)).unwrap_err(),
            ParseError::RelativeUrlWithoutBase
        );
    }

    #[test]
    fn test_query_and_fragment_encoding() {
        assert_eq!(href("http://h/?a b'c#d e"), "http://h/?a%20b%27c#d%20e");
        assert_eq!(href("foo://h/?a b'c"), "foo://h/?a%20b'c");
        assert_eq!(href("http://h/#`"), "http://h/#%60");
    }
}
