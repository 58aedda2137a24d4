//! HAL envelope schema and ISO datetime pattern against the real validator

use apicheck_core::{CheckStatus, Expectations, ResponseSnapshot, SchemaValidator};
use apicheck_core::{regex_iso_datetime, schema_hal};
use apicheck_runner::{Dispatch, JsonSchemaValidator, check_response};
use serde_json::{Value, json};

fn envelope() -> Value {
    json!({
        "_links": {
            "self": {"href": "/users?page=1"},
            "next": {"href": "/users?page=2"},
            "previous": null,
            "first": {"href": "/users?page=0"},
            "last": {"href": "/users?page=4"}
        },
        "_embedded": {
            "resourceList": [{"id": 1}, {"id": 2}]
        },
        "_page": {
            "size": 2,
            "totalElements": 10,
            "totalPages": 5,
            "number": 1
        }
    })
}

fn validate(instance: &Value) -> Result<(), Vec<String>> {
    JsonSchemaValidator::new().validate(instance, &schema_hal())
}

#[test]
fn conformant_envelope_passes() {
    assert_eq!(validate(&envelope()), Ok(()));
}

#[test]
fn missing_total_pages_fails() {
    let mut body = envelope();
    body["_page"]
        .as_object_mut()
        .unwrap()
        .remove("totalPages");
    let errors = validate(&body).unwrap_err();
    assert!(errors.iter().any(|e| e.contains("totalPages")), "{errors:?}");
}

#[test]
fn next_and_previous_may_be_null() {
    let mut body = envelope();
    body["_links"]["next"] = Value::Null;
    body["_links"]["previous"] = Value::Null;
    assert_eq!(validate(&body), Ok(()));
}

#[test]
fn self_link_may_not_be_null() {
    let mut body = envelope();
    body["_links"]["self"] = Value::Null;
    assert!(validate(&body).is_err());
}

#[test]
fn empty_href_fails() {
    let mut body = envelope();
    body["_links"]["first"]["href"] = json!("");
    assert!(validate(&body).is_err());
}

#[test]
fn resource_list_must_be_an_array() {
    let mut body = envelope();
    body["_embedded"]["resourceList"] = json!({"id": 1});
    assert!(validate(&body).is_err());
}

#[test]
fn page_numbers_must_be_numeric() {
    let mut body = envelope();
    body["_page"]["size"] = json!("2");
    assert!(validate(&body).is_err());
}

#[test]
fn iso_datetime_pattern_in_a_schema() {
    let schema = json!({"type": "string", "pattern": regex_iso_datetime()});
    let v = JsonSchemaValidator::new();
    for ok in ["2024-01-15T12:00:00Z", "2024-01-15T12:00:00.123Z"] {
        assert_eq!(v.validate(&json!(ok), &schema), Ok(()), "{ok}");
    }
    for bad in ["2024-01-15 12:00:00Z", "2024-01-15T12:00:00", "15-01-2024T12:00:00Z"] {
        assert!(v.validate(&json!(bad), &schema).is_err(), "{bad}");
    }
}

#[test]
fn check_response_reports_each_expectation() {
    let response = ResponseSnapshot::new(200)
        .with_header("Content-Type", "application/hal+json")
        .with_body(envelope())
        .with_elapsed_ms(120.0);
    let expect = Expectations::new()
        .status(200)
        .within_ms(100.0)
        .content_type("application/hal+json")
        .json_schema(schema_hal());

    let report = check_response(&response, &expect, Dispatch::CommonAndTime);

    let summary: Vec<(&str, CheckStatus)> = report
        .outcomes
        .iter()
        .skip(1) // body log
        .map(|o| (o.description.as_str(), o.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("should be a successful response", CheckStatus::Passed),
            ("should be of type 'application/hal+json'", CheckStatus::Passed),
            ("should match against the JSON schema", CheckStatus::Passed),
            ("should respond within 100 millisecond(s)", CheckStatus::Failed),
        ]
    );
    assert!(report.outcomes[0].description.starts_with("response body: {"));
}

#[test]
fn common_dispatch_skips_time() {
    let response = ResponseSnapshot::new(204).with_elapsed_ms(5000.0);
    let expect = Expectations::new().status(204).within_ms(100.0);
    let report = check_response(&response, &expect, Dispatch::Common);
    assert_eq!(report.outcomes.len(), 1);
    assert!(report.all_passed());
}

#[test]
fn negative_status_from_suite_file_is_a_failed_check() {
    let expect: Expectations = serde_json::from_str(r#"{"status_code": -1}"#).unwrap();
    let report = check_response(&ResponseSnapshot::new(200), &expect, Dispatch::Common);
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(
        report.outcomes[0].description,
        "should be tested against an existing status code"
    );
    assert_eq!(report.outcomes[0].status, CheckStatus::Failed);
    assert_eq!(report.exit_code(), 1);
}
