/// URL conformance data loader and runner
///
/// Test data uses the Web Platform Tests `urltestdata.json` layout:
/// https://github.com/web-platform-tests/wpt/tree/master/url
use rusturl::Url;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case
    UrlTest(Box<UrlTest>),
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct UrlTest {
    pub input: String,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub pathname: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub failure: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Failure {
    pub input: String,
    pub base: Option<String>,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub passed: usize,
    pub failures: Vec<Failure>,
}

impl RunResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failures.len())
    }
}

pub fn load(data: &str) -> Vec<UrlTest> {
    let cases: Vec<TestCase> = serde_json::from_str(data).expect("Failed to parse test data");
    cases
        .into_iter()
        .filter_map(|case| match case {
            TestCase::UrlTest(test) => Some(*test),
            TestCase::Comment(_) => None,
        })
        .collect()
}

fn parse(test: &UrlTest) -> Option<Url> {
    match &test.base {
        Some(base) => Url::parse(base).ok()?.join(&test.input).ok(),
        None => Url::parse(&test.input).ok(),
    }
}

/// Component values in the web `URL` getter format
fn observed(url: &Url) -> [(&'static str, String); 9] {
    let prefixed = |prefix: char, value: Option<&str>| {
        value
            .filter(|value| !value.is_empty())
            .map(|value| format!("{prefix}{value}"))
            .unwrap_or_default()
    };
    [
        ("href", url.href()),
        ("protocol", format!("{}:", url.scheme())),
        ("username", url.username().unwrap_or_default().to_string()),
        ("password", url.password().unwrap_or_default().to_string()),
        ("hostname", url.host_str().unwrap_or_default().into_owned()),
        ("port", url.port().map(|port| port.to_string()).unwrap_or_default()),
        ("pathname", url.path().into_owned()),
        ("search", prefixed('?', url.query())),
        ("hash", prefixed('#', url.fragment())),
    ]
}

fn expected(test: &UrlTest) -> [(&'static str, Option<&String>); 9] {
    [
        ("href", test.href.as_ref()),
        ("protocol", test.protocol.as_ref()),
        ("username", test.username.as_ref()),
        ("password", test.password.as_ref()),
        ("hostname", test.hostname.as_ref()),
        ("port", test.port.as_ref()),
        ("pathname", test.pathname.as_ref()),
        ("search", test.search.as_ref()),
        ("hash", test.hash.as_ref()),
    ]
}

pub fn run(tests: &[UrlTest]) -> RunResult {
    let mut result = RunResult::default();
    for test in tests {
        let failure = |field, expected: &str, actual: &str| Failure {
            input: test.input.clone(),
            base: test.base.clone(),
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        };

        let url = parse(test);
        if test.failure == Some(true) {
            match url {
                Some(url) => result.failures.push(failure("failure", "error", &url.href())),
                None => result.passed += 1,
            }
            continue;
        }
        let Some(url) = url else {
            result.failures.push(failure("href", test.href.as_deref().unwrap_or(""), "error"));
            continue;
        };

        let mut mismatches = expected(test)
            .into_iter()
            .zip(observed(&url))
            .filter_map(|((field, expected), (_, actual))| {
                expected
                    .filter(|expected| **expected != actual)
                    .map(|expected| failure(field, expected, &actual))
            })
            .peekable();
        if mismatches.peek().is_none() {
            result.passed += 1;
        }
        result.failures.extend(mismatches);
    }
    result
}
