//! Evaluates assertion suites against received responses.

use booker_domain::{Assertion, AssertionResult, ResponseSpec, TestResults, TestSuite};
use serde_json::Value;

/// Checks every assertion of `suite` against `response`.
///
/// A failed assertion never stops the ones after it.
#[must_use]
pub fn run_suite(suite: &TestSuite, response: &ResponseSpec) -> TestResults {
    let results = suite
        .assertions
        .iter()
        .map(|assertion| run_assertion(assertion, response))
        .collect();
    TestResults::new(suite.name.clone(), results)
}

/// Checks one assertion against `response`.
#[must_use]
pub fn run_assertion(assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
    let outcome = match assertion {
        Assertion::Status(expected) => check_status(*expected, response.status),
        Assertion::JsonPath { path, expected } => check_path(response, path, expected.as_ref()),
        Assertion::BodyJson(expected) => check_body(response, expected),
        Assertion::IsJson => parse_body(response).map(|_| ()),
        Assertion::ContentType(fragment) => check_content_type(response, fragment),
    };

    match outcome {
        Ok(()) => AssertionResult::pass(assertion.clone()),
        Err(error) => AssertionResult::fail(assertion.clone(), error),
    }
}

fn check_status(expected: u16, actual: u16) -> Result<(), String> {
    if expected == actual {
        Ok(())
    } else {
        Err(format!("expected status {expected}, got {actual}"))
    }
}

fn parse_body(response: &ResponseSpec) -> Result<Value, String> {
    serde_json::from_str(&response.body).map_err(|e| format!("body is not JSON: {e}"))
}

fn check_path(
    response: &ResponseSpec,
    path: &str,
    expected: Option<&Value>,
) -> Result<(), String> {
    let json = parse_body(response)?;
    let actual = query_json_path(&json, path)?.ok_or_else(|| format!("{path} not found"))?;
    match expected {
        Some(expected) if actual != expected => {
            Err(format!("{path} is {actual}, expected {expected}"))
        }
        _ => Ok(()),
    }
}

fn check_body(response: &ResponseSpec, expected: &Value) -> Result<(), String> {
    let json = parse_body(response)?;
    if &json == expected {
        Ok(())
    } else {
        Err(format!("body is {json}, expected {expected}"))
    }
}

fn check_content_type(response: &ResponseSpec, fragment: &str) -> Result<(), String> {
    match response.content_type.as_deref() {
        Some(actual) if actual.contains(fragment) => Ok(()),
        Some(actual) => Err(format!("content type is '{actual}'")),
        None => Err("no content type".to_string()),
    }
}

/// Looks up `$.field.nested`, `$.list[0]` or `$[1].field` in `json`.
fn query_json_path<'a>(json: &'a Value, path: &str) -> Result<Option<&'a Value>, String> {
    let rest = path
        .trim()
        .strip_prefix('$')
        .ok_or_else(|| format!("path '{path}' must start with '$'"))?;

    let mut current = json;
    for segment in rest.split('.').filter(|s| !s.is_empty()) {
        let (name, index) = split_index(segment)?;
        if !name.is_empty() {
            match current.get(name) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        if let Some(index) = index {
            match current.get(index) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
    }
    Ok(Some(current))
}

/// Splits `name[3]` into `("name", Some(3))`.
fn split_index(segment: &str) -> Result<(&str, Option<usize>), String> {
    let Some(open) = segment.find('[') else {
        return Ok((segment, None));
    };
    let raw = segment[open + 1..]
        .strip_suffix(']')
        .ok_or_else(|| format!("unclosed '[' in '{segment}'"))?;
    let index = raw
        .parse()
        .map_err(|_| format!("bad index '{raw}' in '{segment}'"))?;
    Ok((&segment[..open], Some(index)))
}
