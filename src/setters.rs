//! Component mutators.
//!
//! Every setter strips ASCII tabs and newlines, validates the whole new value
//! and only then writes it, so a failed call leaves the URL as it was.

use crate::compat::{Cow, String, Vec};
use crate::error::SetError;
use crate::helpers::remove_tabs_and_newlines;
use crate::host::{Host, parse_host};
use crate::parser::{
    encode_userinfo, parse_port_input, split_credentials, split_host_port, split_userinfo,
};
use crate::path::{UrlPath, parse_path_into};
use crate::scheme::{get_scheme_type, is_valid_scheme};
use crate::types::SchemeType;
use crate::unicode::percent_encode::{EncodeSet, percent_encode};
use crate::url::Url;
use tracing::debug;

fn reject(component: &'static str, err: SetError) -> SetError {
    debug!(component, error = %err, "rejected component value");
    err
}

/// Host, port and credentials need a non-empty host and a non-file scheme
fn cannot_have_credentials_or_port(url: &Url) -> bool {
    !url.components.has_non_empty_host() || url.scheme_type.is_file()
}

pub fn set_scheme(url: &mut Url, input: &str) -> Result<(), SetError> {
    let input = remove_tabs_and_newlines(input);
    let scheme = input.split(':').next().unwrap_or_default();
    if !is_valid_scheme(scheme) {
        return Err(reject("scheme", SetError::InvalidScheme));
    }

    let scheme = scheme.to_ascii_lowercase();
    let old_type = url.scheme_type;
    let new_type = get_scheme_type(&scheme);

    if old_type.is_special() != new_type.is_special()
        || (new_type.is_file() && (url.components.has_credentials() || url.components.port.is_some()))
        || (old_type.is_file() && !url.components.has_non_empty_host())
    {
        return Err(reject("scheme", SetError::InvalidForScheme));
    }

    // A default port of either scheme is dropped, it would otherwise surface
    url.components.port = url
        .components
        .port
        .filter(|&port| !old_type.is_default_port(port) && !new_type.is_default_port(port));
    url.components.scheme = scheme;
    url.scheme_type = new_type;
    Ok(())
}

pub fn set_username(url: &mut Url, input: &str) -> Result<(), SetError> {
    if cannot_have_credentials_or_port(url) {
        return Err(reject("username", SetError::InvalidForScheme));
    }
    url.components.username = Some(encode_userinfo(&remove_tabs_and_newlines(input)));
    Ok(())
}

pub fn set_password(url: &mut Url, input: &str) -> Result<(), SetError> {
    if cannot_have_credentials_or_port(url) {
        return Err(reject("password", SetError::InvalidForScheme));
    }
    url.components.password = Some(encode_userinfo(&remove_tabs_and_newlines(input)));
    // ":pw@" reads back with an empty username
    url.components.username.get_or_insert_with(String::new);
    Ok(())
}

/// Parse a host for a setter.
///
/// `keeps_carried_parts` is true when credentials or a port will remain on the
/// URL, which forbids emptying the host.
fn parse_setter_host(
    scheme_type: SchemeType,
    input: &str,
    keeps_carried_parts: bool,
) -> Result<Host, SetError> {
    if input.is_empty() {
        return match scheme_type {
            SchemeType::File => Ok(Host::Domain(String::new())),
            SchemeType::NotSpecial if !keeps_carried_parts => Ok(Host::Opaque(String::new())),
            _ => Err(SetError::CannotRemoveHost),
        };
    }

    let host = parse_host(input, !scheme_type.is_special())?;
    Ok(match host {
        Host::Domain(domain) if scheme_type.is_file() && domain == "localhost" => {
            Host::Domain(String::new())
        }
        host => host,
    })
}

pub fn set_host(url: &mut Url, input: &str) -> Result<(), SetError> {
    if url.has_opaque_path() {
        return Err(reject("host", SetError::InvalidForScheme));
    }

    let input = remove_tabs_and_newlines(input);
    let keeps_carried_parts = url.components.has_credentials() || url.components.port.is_some();
    let host = parse_setter_host(url.scheme_type, &input, keeps_carried_parts)
        .map_err(|err| reject("host", err))?;

    url.components.host = Some(host);
    Ok(())
}

pub fn set_port(url: &mut Url, input: &str) -> Result<(), SetError> {
    if cannot_have_credentials_or_port(url) {
        return Err(reject("port", SetError::InvalidForScheme));
    }

    let input = remove_tabs_and_newlines(input);
    let port = parse_port_input(&input).map_err(|_| reject("port", SetError::InvalidPort))?;
    url.components.port = port;
    Ok(())
}

pub fn set_host_and_port(url: &mut Url, input: &str) -> Result<(), SetError> {
    if url.has_opaque_path() {
        return Err(reject("host", SetError::InvalidForScheme));
    }

    let input = remove_tabs_and_newlines(input);
    let (userinfo, host_port) = split_userinfo(&input);
    let (host, port) = split_host_port(host_port);
    // "host:" leaves the stored port alone
    let port = port.filter(|port| !port.is_empty());

    if url.scheme_type.is_file() && (userinfo.is_some() || port.is_some()) {
        return Err(reject("host", SetError::InvalidForScheme));
    }

    let new_port = port
        .map(|port| parse_port_input(port).map_err(|_| reject("port", SetError::InvalidPort)))
        .transpose()?
        .flatten();

    let credentials = match userinfo {
        Some(userinfo) => {
            let (username, password) = split_credentials(userinfo);
            let password = userinfo.contains(':').then(|| encode_userinfo(password));
            Some((Some(encode_userinfo(username)), password))
        }
        // Existing credentials are kept, but explicitly emptied
        None if url.components.has_credentials() => {
            Some((Some(String::new()), Some(String::new())))
        }
        None => None,
    };

    let keeps_carried_parts = credentials.is_some() || new_port.or(url.components.port).is_some();
    let host = parse_setter_host(url.scheme_type, host, keeps_carried_parts)
        .map_err(|err| reject("host", err))?;

    url.components.host = Some(host);
    if let Some(port) = new_port {
        url.components.port = Some(port);
    }
    if let Some((username, password)) = credentials {
        url.components.username = username;
        url.components.password = password;
    }
    Ok(())
}

pub fn set_path(url: &mut Url, input: &str) -> Result<(), SetError> {
    if url.has_opaque_path() {
        return Err(reject("path", SetError::InvalidForScheme));
    }

    let input = remove_tabs_and_newlines(input);
    url.components.path = UrlPath::Segments(parse_setter_path(url.scheme_type, &input));
    Ok(())
}

/// Parse a path from the root. '?' and '#' are encoded, not delimiters.
fn parse_setter_path(scheme_type: SchemeType, input: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let rest = if scheme_type.is_special() {
        input
            .strip_prefix('/')
            .or_else(|| input.strip_prefix('\\'))
            .unwrap_or(input)
    } else if input.is_empty() {
        return segments;
    } else {
        input.strip_prefix('/').unwrap_or(input)
    };
    parse_path_into(&mut segments, rest, scheme_type);
    segments
}

/// Only an empty input removes the component, a bare prefix empties it
fn strip_and_encode(input: &str, prefix: char, encode_set: EncodeSet) -> Option<String> {
    let input: Cow<'_, str> = remove_tabs_and_newlines(input);
    if input.is_empty() {
        return None;
    }
    let value = input.strip_prefix(prefix).unwrap_or(&input);
    Some(percent_encode(value.as_bytes(), encode_set))
}

pub fn set_query(url: &mut Url, input: &str) {
    let encode_set = EncodeSet::query(url.scheme_type.is_special());
    url.components.query = strip_and_encode(input, '?', encode_set);
}

pub fn set_fragment(url: &mut Url, input: &str) {
    url.components.fragment = strip_and_encode(input, '#', EncodeSet::Fragment);
}
