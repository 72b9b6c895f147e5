use crate::compat::{String, ToString};
use crate::host::Host;
use crate::path::UrlPath;
use crate::types::SchemeType;
use crate::url_components::UrlComponents;

/// Render URL components in their canonical form
pub fn serialize(components: &UrlComponents, scheme_type: SchemeType) -> String {
    let mut out = String::with_capacity(estimate_len(components));

    out.push_str(&components.scheme);
    out.push(':');

    if let Some(host) = &components.host {
        out.push_str("//");
        if components.has_credentials() {
            out.push_str(components.username.as_deref().unwrap_or_default());
            if let Some(password) = &components.password {
                out.push(':');
                out.push_str(password);
            }
            out.push('@');
        }
        write_host(&mut out, host);
        if let Some(port) = components.port.filter(|&port| !scheme_type.is_default_port(port)) {
            out.push(':');
            out.push_str(&port.to_string());
        }
    } else if let UrlPath::Segments(segments) = &components.path {
        // "/.//p" keeps "//p" from being read as an authority
        if segments.len() > 1 && segments[0].is_empty() {
            out.push_str("/.");
        }
    }

    components.path.write_to(&mut out);

    if let Some(query) = &components.query {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = &components.fragment {
        out.push('#');
        out.push_str(fragment);
    }

    out
}

fn write_host(out: &mut String, host: &Host) {
    match host {
        Host::Domain(s) | Host::Opaque(s) => out.push_str(s),
        _ => out.push_str(&host.serialize()),
    }
}

/// Capacity hint, exact for domain hosts
fn estimate_len(components: &UrlComponents) -> usize {
    let text = |part: Option<&String>| part.map_or(0, |s| s.len() + 1);
    let path = match &components.path {
        UrlPath::Segments(segments) => segments.iter().map(|s| s.len() + 1).sum(),
        UrlPath::Opaque(path) => path.len(),
    };
    components.scheme.len()
        + 3
        + text(components.username.as_ref())
        + text(components.password.as_ref())
        + components.host.as_ref().map_or(0, |_| 41)
        + 6
        + path
        + text(components.query.as_ref())
        + text(components.fragment.as_ref())
}
