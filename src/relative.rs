use crate::checkers::is_normalized_windows_drive_letter;
use crate::compat::{String, Vec};
use crate::path::UrlPath;
use crate::url::Url;

/// Same scheme, credentials, host and port
fn same_authority(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.username() == b.username()
        && a.password() == b.password()
        && a.host() == b.host()
        && a.port() == b.port()
}

/// Length of the longest common prefix of two segment lists
fn shared_prefix_len(a: &[String], b: &[String]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl Url {
    /// The URL both `self` and `other` live under.
    ///
    /// Returns `None` unless both URLs share scheme, credentials, host and
    /// port and have hierarchical paths. The result keeps the longest
    /// common run of path segments and drops query and fragment.
    ///
    /// ```
    /// use rusturl::Url;
    ///
    /// let a = Url::parse("http://example.com/a/b/c").unwrap();
    /// let b = Url::parse("http://example.com/a/b/d?x").unwrap();
    /// assert_eq!(a.common_base(&b).unwrap().serialize(), "http://example.com/a/b");
    /// ```
    pub fn common_base(&self, other: &Self) -> Option<Self> {
        if self == other {
            return Some(self.clone());
        }
        if !same_authority(self, other) {
            return None;
        }

        let (mine, theirs) = (self.path_segments()?, other.path_segments()?);
        let shared = shared_prefix_len(mine, theirs);

        let mut base = self.clone();
        base.components.query = None;
        base.components.fragment = None;
        let mut segments: Vec<String> = mine[..shared].to_vec();
        if segments.is_empty() && self.is_special() {
            segments.push(String::new());
        }
        base.components.path = UrlPath::Segments(segments);
        Some(base)
    }

    /// A relative reference that resolves against `self` to `other`.
    ///
    /// Returns an empty string for equal URLs and `None` when no relative
    /// form exists: different scheme, credentials, host or port, an
    /// opaque or empty path on either side, or a `file` URL whose drive
    /// letter the target does not share.
    ///
    /// ```
    /// use rusturl::Url;
    ///
    /// let base = Url::parse("http://example.com/a/b/c").unwrap();
    /// let other = Url::parse("http://example.com/a/x/y?q").unwrap();
    /// let relative = base.make_relative(&other).unwrap();
    /// assert_eq!(relative, "../x/y?q");
    /// assert_eq!(base.join(&relative).unwrap(), other);
    /// ```
    pub fn make_relative(&self, other: &Self) -> Option<String> {
        if self == other {
            return Some(String::new());
        }
        if !same_authority(self, other) {
            return None;
        }

        let (mine, theirs) = (self.path_segments()?, other.path_segments()?);
        let (Some((_, base_dir)), Some((_, target_dir))) = (mine.split_last(), theirs.split_last())
        else {
            return None;
        };
        let shared = shared_prefix_len(base_dir, target_dir);
        // "../" never climbs above a file drive letter
        if self.scheme_type.is_file()
            && shared == 0
            && base_dir
                .first()
                .is_some_and(|segment| is_normalized_windows_drive_letter(segment.as_bytes()))
        {
            return None;
        }

        let mut relative = String::new();
        for _ in shared..base_dir.len() {
            relative.push_str("../");
        }

        let rest = &theirs[shared..];
        // "./" keeps an empty result, a leading empty segment or a
        // scheme-like first segment from being misread
        if relative.is_empty() && (rest[0].is_empty() || rest[0].contains(':')) {
            relative.push_str("./");
        }
        for (i, segment) in rest.iter().enumerate() {
            if i > 0 {
                relative.push('/');
            }
            relative.push_str(segment);
        }

        if let Some(query) = other.query() {
            relative.push('?');
            relative.push_str(query);
        }
        if let Some(fragment) = other.fragment() {
            relative.push('#');
            relative.push_str(fragment);
        }
        Some(relative)
    }
}
