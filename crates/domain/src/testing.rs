//! Declarative checks on booking API responses.
//!
//! A scenario lists what it expects as a [`TestSuite`] of [`Assertion`]s.
//! A runner evaluates the suite into [`TestResults`], whose
//! [`report`](TestResults::report) names every failed check.

use std::fmt::Write as _;

use serde_json::Value;

/// One expectation about a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assertion {
    /// The status code equals this value.
    Status(u16),
    /// The value at `path` (`$.a.b[0]` syntax) exists and, if given,
    /// equals `expected`.
    JsonPath {
        /// Path into the body.
        path: String,
        /// Value the path must hold.
        expected: Option<Value>,
    },
    /// The whole body is JSON equal to this document, ignoring key order
    /// and whitespace.
    BodyJson(Value),
    /// The body parses as JSON.
    IsJson,
    /// The `Content-Type` header contains this text.
    ContentType(String),
}

impl Assertion {
    /// Expects the status code `code`.
    #[must_use]
    pub const fn status(code: u16) -> Self {
        Self::Status(code)
    }

    /// Expects `path` to hold `expected`.
    #[must_use]
    pub fn json_eq(path: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self::JsonPath {
            path: path.into(),
            expected: Some(expected.into()),
        }
    }

    /// Expects `path` to exist, whatever its value.
    #[must_use]
    pub fn json_exists(path: impl Into<String>) -> Self {
        Self::JsonPath {
            path: path.into(),
            expected: None,
        }
    }

    /// Expects a `Content-Type` containing `fragment`.
    #[must_use]
    pub fn content_type(fragment: impl Into<String>) -> Self {
        Self::ContentType(fragment.into())
    }

    /// Short human-readable form used in reports.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Status(code) => format!("status is {code}"),
            Self::JsonPath {
                path,
                expected: Some(value),
            } => format!("{path} equals {value}"),
            Self::JsonPath {
                path,
                expected: None,
            } => format!("{path} exists"),
            Self::BodyJson(_) => "body equals expected JSON".to_string(),
            Self::IsJson => "body is JSON".to_string(),
            Self::ContentType(fragment) => format!("content type contains '{fragment}'"),
        }
    }
}

/// Outcome of one assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResult {
    /// The assertion evaluated.
    pub assertion: Assertion,
    /// Why it failed; `None` when it passed.
    pub error: Option<String>,
}

impl AssertionResult {
    /// A passing result.
    #[must_use]
    pub const fn pass(assertion: Assertion) -> Self {
        Self {
            assertion,
            error: None,
        }
    }

    /// A failing result with its reason.
    #[must_use]
    pub fn fail(assertion: Assertion, error: impl Into<String>) -> Self {
        Self {
            assertion,
            error: Some(error.into()),
        }
    }

    /// Whether the assertion held.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Named list of assertions checked against a single response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    /// Name shown in reports, usually the call under test.
    pub name: String,
    /// Assertions, evaluated in order.
    pub assertions: Vec<Assertion>,
}

impl TestSuite {
    /// Creates an empty suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assertions: Vec::new(),
        }
    }

    /// Appends an assertion (builder pattern).
    #[must_use]
    pub fn with_assertion(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }
}

/// Every assertion outcome of one suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResults {
    /// Suite that produced these results.
    pub suite_name: String,
    /// One entry per assertion, in suite order.
    pub results: Vec<AssertionResult>,
}

impl TestResults {
    /// Collects results for `suite_name`.
    #[must_use]
    pub fn new(suite_name: impl Into<String>, results: Vec<AssertionResult>) -> Self {
        Self {
            suite_name: suite_name.into(),
            results,
        }
    }

    /// Number of assertions that held.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    /// Whether every assertion held.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(AssertionResult::passed)
    }

    /// One summary line, then one line per failed assertion.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = format!(
            "{}: {}/{} assertions passed",
            self.suite_name,
            self.passed(),
            self.results.len()
        );
        for result in &self.results {
            if let Some(error) = &result.error {
                let description = result.assertion.description();
                let _ = write!(out, "\n  FAILED {description}: {error}");
            }
        }
        out
    }
}
