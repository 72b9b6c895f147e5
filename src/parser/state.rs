/// Where the parser cursor is within a URL.
///
/// Each state consumes a run of input and names its successor. The names
/// follow the WHATWG URL Standard's basic URL parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Looking for `scheme:` at the start of input
    SchemeStart,
    /// Input has no scheme; only a relative reference against a base remains
    NoScheme,
    /// `http:` with an `http` base: either `//authority` or a relative path
    SpecialRelativeOrAuthority,
    /// Non-special `scheme:/`: a second `/` opens an authority
    PathOrAuthority,
    /// Relative reference with the base's scheme
    Relative,
    /// After the first `/` of a relative reference
    RelativeSlash,
    /// Expecting `//` after a special scheme
    SpecialAuthoritySlashes,
    /// Skipping any further `/` or `\` before the authority
    SpecialAuthorityIgnoreSlashes,
    /// Userinfo up to the last `@` of the authority
    Authority,
    /// Host and optional port
    Host,
    /// After `file:`
    File,
    /// After `file:/`
    FileSlash,
    /// Host of `file://host`, or a drive letter in its place
    FileHost,
    /// Separator that begins the path, if any
    PathStart,
    /// Hierarchical path segments up to `?` or `#`
    Path,
    /// Path of a URL like `mailto:` with no `/` after the scheme
    OpaquePath,
    /// Up to `#`
    Query,
    /// Rest of input
    Fragment,
}
