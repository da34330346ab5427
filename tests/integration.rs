//! Integration tests for the Severance Engine.
//!
//! This test suite drives the `/calculate` endpoint end to end:
//! - Dismissal without cause and constructive dismissal
//! - Resignation with unfulfilled notice
//! - Mutual agreement
//! - Dismissal for cause
//! - Notice period growth and cap
//! - Anniversary edge cases
//! - Error cases
//! - Audit trace and response fields

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use severance_engine::api::{AppState, create_router};
use severance_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/clt");
    let config = ConfigLoader::load(path).expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn calculate_ok(body: Value) -> Value {
    let (status, result) = post_calculate(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK, "Unexpected response: {}", result);
    result
}

/// Salary 3000, hired 2023-01-01, terminated 2024-01-01, one day worked in
/// January, one expired vacation period, estimated fund balance.
fn create_request(category: &str, notice_mode: &str) -> Value {
    json!({
        "monthly_salary": "3000",
        "hire_date": "2023-01-01",
        "termination_date": "2024-01-01",
        "category": category,
        "notice": { "mode": notice_mode, "unfulfilled_days_on_resignation": 0 },
        "days_worked_in_termination_month": 1,
        "vacation": {
            "expired_periods": 1,
            "proportional_months": 0,
            "count_current_month_if_at_least_15_days": false
        },
        "severance_fund": { "use_stated_balance": false, "stated_balance": "0" }
    })
}

fn amount(result: &Value, field: &str) -> Decimal {
    let raw = result["settlement"]["amounts"][field]
        .as_str()
        .unwrap_or_else(|| panic!("Missing amount {}", field));
    decimal(raw)
}

fn summary(result: &Value, field: &str) -> Value {
    result["settlement"]["summary"][field].clone()
}

fn advisories(result: &Value) -> Vec<String> {
    result["settlement"]["advisories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a.as_str().unwrap().to_string())
        .collect()
}

fn assert_amount(result: &Value, field: &str, expected: &str) {
    assert_eq!(
        amount(result, field),
        decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        amount(result, field)
    );
}

fn assert_totals_consistent(result: &Value) {
    let parts = amount(result, "accrued_salary_balance")
        + amount(result, "notice_payment")
        + amount(result, "thirteenth_salary_proration")
        + amount(result, "expired_vacation_pay")
        + amount(result, "proportional_vacation_pay")
        - amount(result, "notice_deduction");
    assert_eq!(amount(result, "total_before_fund_penalty"), parts);
    assert_eq!(
        amount(result, "total_overall"),
        amount(result, "total_before_fund_penalty") + amount(result, "fund_severance_penalty")
    );
}

// =============================================================================
// SECTION 1: Dismissal Without Cause
// =============================================================================

#[tokio::test]
async fn test_no_cause_reference_scenario() {
    let result = calculate_ok(create_request("employer_no_cause", "paid_in_lieu")).await;

    assert_eq!(summary(&result, "notice_days"), 30);
    assert_eq!(summary(&result, "projected_date"), "2024-01-31");
    assert_eq!(summary(&result, "thirteenth_months"), 1);
    assert_eq!(summary(&result, "estimated_fund_months"), 13);
    assert_eq!(summary(&result, "fund_withdrawal_percent"), 100);
    assert_eq!(summary(&result, "unemployment_insurance_eligibility"), "YES");

    assert_amount(&result, "accrued_salary_balance", "100");
    assert_amount(&result, "notice_payment", "3000");
    assert_amount(&result, "notice_deduction", "0");
    assert_amount(&result, "thirteenth_salary_proration", "250");
    assert_amount(&result, "expired_vacation_pay", "4000");
    assert_amount(&result, "proportional_vacation_pay", "0");
    assert_amount(&result, "fund_severance_penalty", "1248");
    assert_amount(&result, "total_before_fund_penalty", "7350");
    assert_amount(&result, "total_overall", "8598");
    assert_totals_consistent(&result);

    let notes = advisories(&result);
    assert_eq!(notes.len(), 1);
    assert!(notes[0].contains("estimated"));
}

#[tokio::test]
async fn test_no_cause_long_tenure_with_stated_balance() {
    let body = json!({
        "monthly_salary": "6000",
        "hire_date": "2010-03-10",
        "termination_date": "2025-06-20",
        "category": "employer_no_cause",
        "notice": { "mode": "paid_in_lieu" },
        "days_worked_in_termination_month": 20,
        "vacation": {
            "expired_periods": 0,
            "proportional_months": 2,
            "count_current_month_if_at_least_15_days": true
        },
        "severance_fund": { "use_stated_balance": true, "stated_balance": "40000" }
    });
    let result = calculate_ok(body).await;

    // 15 complete years: 30 + 3 x 14
    assert_eq!(summary(&result, "notice_days"), 72);
    assert_eq!(summary(&result, "projected_date"), "2025-08-31");
    assert_eq!(summary(&result, "thirteenth_months"), 8);

    assert_amount(&result, "accrued_salary_balance", "4000");
    assert_amount(&result, "notice_payment", "14400");
    assert_amount(&result, "thirteenth_salary_proration", "4000");
    // 6000 x 3/12 x 4/3
    assert_amount(&result, "proportional_vacation_pay", "2000");
    assert_amount(&result, "fund_severance_penalty", "16000");
    assert_amount(&result, "total_before_fund_penalty", "24400");
    assert_amount(&result, "total_overall", "40400");
    assert_totals_consistent(&result);
    assert!(advisories(&result).is_empty());
}

#[tokio::test]
async fn test_worked_notice_does_not_project() {
    let result = calculate_ok(create_request("employer_no_cause", "worked")).await;

    assert_eq!(summary(&result, "notice_days"), 30);
    assert_eq!(summary(&result, "projected_date"), "2024-01-01");
    assert_eq!(summary(&result, "thirteenth_months"), 0);
    assert_eq!(summary(&result, "estimated_fund_months"), 13);
    assert_amount(&result, "notice_payment", "0");
}

#[tokio::test]
async fn test_constructive_dismissal_matches_no_cause() {
    let no_cause = calculate_ok(create_request("employer_no_cause", "paid_in_lieu")).await;
    let constructive = calculate_ok(create_request("constructive_dismissal", "paid_in_lieu")).await;

    assert_eq!(
        no_cause["settlement"]["summary"],
        constructive["settlement"]["summary"]
    );
    assert_eq!(
        no_cause["settlement"]["amounts"],
        constructive["settlement"]["amounts"]
    );
}

// =============================================================================
// SECTION 2: Resignation
// =============================================================================

#[tokio::test]
async fn test_resignation_with_unfulfilled_notice() {
    let mut body = create_request("employee_resignation", "none");
    body["notice"]["unfulfilled_days_on_resignation"] = json!(10);
    let result = calculate_ok(body).await;

    assert_eq!(summary(&result, "notice_days"), 30);
    assert_eq!(summary(&result, "projected_date"), "2024-01-01");
    assert_eq!(summary(&result, "fund_withdrawal_percent"), 0);
    assert_eq!(summary(&result, "unemployment_insurance_eligibility"), "NO");

    assert_amount(&result, "notice_payment", "0");
    assert_amount(&result, "notice_deduction", "1000");
    assert_amount(&result, "fund_severance_penalty", "0");
    // 100 + 4000 - 1000
    assert_amount(&result, "total_before_fund_penalty", "3100");
    assert_amount(&result, "total_overall", "3100");
    assert_totals_consistent(&result);

    let notes = advisories(&result);
    assert_eq!(notes.len(), 2);
    assert!(notes[1].starts_with("Resignation"));
}

#[tokio::test]
async fn test_resignation_paid_in_lieu_has_no_payment() {
    let result = calculate_ok(create_request("employee_resignation", "paid_in_lieu")).await;

    // Resignation notice still projects the accrual date
    assert_eq!(summary(&result, "projected_date"), "2024-01-31");
    assert_amount(&result, "notice_payment", "0");
    assert_amount(&result, "notice_deduction", "0");
}

// =============================================================================
// SECTION 3: Mutual Agreement
// =============================================================================

#[tokio::test]
async fn test_mutual_agreement_halves_notice_and_penalty() {
    let result = calculate_ok(create_request("mutual_agreement", "paid_in_lieu")).await;

    assert_eq!(summary(&result, "notice_days"), 30);
    assert_eq!(decimal(summary(&result, "notice_factor").as_str().unwrap()), decimal("0.5"));
    assert_eq!(summary(&result, "fund_withdrawal_percent"), 80);
    assert_eq!(summary(&result, "unemployment_insurance_eligibility"), "NO");

    assert_amount(&result, "notice_payment", "1500");
    assert_amount(&result, "fund_severance_penalty", "624");
    assert_amount(&result, "total_before_fund_penalty", "5850");
    assert_amount(&result, "total_overall", "6474");
    assert_totals_consistent(&result);

    let notes = advisories(&result);
    assert_eq!(notes.len(), 2);
    assert!(notes[1].contains("484-A"));
}

// =============================================================================
// SECTION 4: Dismissal For Cause
// =============================================================================

#[tokio::test]
async fn test_for_cause_keeps_only_balance_and_expired_vacation() {
    let mut body = create_request("employer_for_cause", "paid_in_lieu");
    body["vacation"]["proportional_months"] = json!(7);
    body["severance_fund"] = json!({ "use_stated_balance": true, "stated_balance": "9000" });
    let result = calculate_ok(body).await;

    assert_eq!(summary(&result, "notice_days"), 0);
    assert_eq!(summary(&result, "projected_date"), "2024-01-01");
    assert_eq!(summary(&result, "thirteenth_months"), 0);
    assert_eq!(summary(&result, "fund_withdrawal_percent"), 0);

    assert_amount(&result, "notice_payment", "0");
    assert_amount(&result, "thirteenth_salary_proration", "0");
    assert_amount(&result, "proportional_vacation_pay", "0");
    assert_amount(&result, "fund_severance_penalty", "0");
    assert_amount(&result, "total_overall", "4100");

    let notes = advisories(&result);
    assert_eq!(notes.len(), 1);
    assert!(notes[0].contains("for cause"));
}

// =============================================================================
// SECTION 5: Notice Period Growth and Cap
// =============================================================================

#[tokio::test]
async fn test_notice_capped_at_ninety_days() {
    let mut body = create_request("employer_no_cause", "paid_in_lieu");
    body["hire_date"] = json!("1990-01-01");
    let result = calculate_ok(body).await;

    assert_eq!(summary(&result, "notice_days"), 90);
    // 2024 is a leap year
    assert_eq!(summary(&result, "projected_date"), "2024-03-31");
    assert_eq!(summary(&result, "thirteenth_months"), 3);
    assert_amount(&result, "notice_payment", "9000");
}

#[tokio::test]
async fn test_notice_days_for_two_complete_years() {
    let mut body = create_request("employer_no_cause", "paid_in_lieu");
    body["hire_date"] = json!("2022-01-01");
    let result = calculate_ok(body).await;

    assert_eq!(summary(&result, "notice_days"), 33);
    assert_eq!(summary(&result, "projected_date"), "2024-02-03");
    assert_amount(&result, "notice_payment", "3300");
}

// =============================================================================
// SECTION 6: Anniversary Edge Cases
// =============================================================================

#[tokio::test]
async fn test_leap_day_hire_anniversary_rolls_to_march_first() {
    let mut body = create_request("employer_no_cause", "worked");
    body["hire_date"] = json!("2020-02-29");
    body["termination_date"] = json!("2023-02-28");
    let result = calculate_ok(body).await;

    // The 2023 anniversary falls on March 1st, so only two complete years
    assert_eq!(summary(&result, "notice_days"), 33);
}

#[tokio::test]
async fn test_leap_day_hire_on_leap_year_anniversary() {
    let mut body = create_request("employer_no_cause", "worked");
    body["hire_date"] = json!("2020-02-29");
    body["termination_date"] = json!("2024-02-29");
    let result = calculate_ok(body).await;

    assert_eq!(summary(&result, "notice_days"), 39);
}

#[tokio::test]
async fn test_same_day_hire_and_termination() {
    let mut body = create_request("employer_no_cause", "worked");
    body["hire_date"] = json!("2024-01-01");
    let result = calculate_ok(body).await;

    assert_eq!(summary(&result, "notice_days"), 30);
    assert_eq!(summary(&result, "estimated_fund_months"), 1);
    // 0.4 x 3000 x 0.08
    assert_amount(&result, "fund_severance_penalty", "96");
}

// =============================================================================
// SECTION 7: Error Cases
// =============================================================================

#[tokio::test]
async fn test_negative_salary_returns_validation_error() {
    let mut body = create_request("employer_no_cause", "paid_in_lieu");
    body["monthly_salary"] = json!("-100");
    let (status, error) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "monthly_salary");
}

#[tokio::test]
async fn test_termination_before_hire_returns_validation_error() {
    let mut body = create_request("employer_no_cause", "paid_in_lieu");
    body["termination_date"] = json!("2022-12-31");
    let (status, error) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "termination_date");
}

#[tokio::test]
async fn test_too_many_expired_periods_returns_validation_error() {
    let mut body = create_request("employer_no_cause", "paid_in_lieu");
    body["vacation"]["expired_periods"] = json!(3);
    let (status, error) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_date_returns_malformed_json() {
    let mut body = create_request("employer_no_cause", "paid_in_lieu");
    body["hire_date"] = json!("2023-02-30");
    let (status, error) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_oversized_salary_returns_validation_error() {
    let mut body = create_request("employer_no_cause", "paid_in_lieu");
    body["monthly_salary"] = json!("10000000000000000000000000000");
    let (status, error) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "monthly_salary");
}

#[tokio::test]
async fn test_oversized_stated_balance_returns_validation_error() {
    let mut body = create_request("employer_no_cause", "paid_in_lieu");
    body["severance_fund"] = json!({
        "use_stated_balance": true,
        "stated_balance": "79228162514264337593543950335"
    });
    let (status, error) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert_eq!(error["details"], "severance_fund.stated_balance");
}

#[tokio::test]
async fn test_salary_at_ceiling_is_calculated() {
    let mut body = create_request("employer_no_cause", "paid_in_lieu");
    body["monthly_salary"] = json!("1000000000000000");
    let result = calculate_ok(body).await;

    // 10^15 / 30 x 30 days
    assert_amount(&result, "notice_payment", "1000000000000000");
    assert_totals_consistent(&result);
}

#[tokio::test]
async fn test_missing_severance_fund_returns_validation_error() {
    let mut body = create_request("employer_no_cause", "paid_in_lieu");
    body.as_object_mut().unwrap().remove("severance_fund");
    let (status, error) = post_calculate(create_router_for_test(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("severance_fund"));
}

// =============================================================================
// SECTION 8: Audit Trace & Response Field Validation
// =============================================================================

#[tokio::test]
async fn test_response_envelope_fields() {
    let result = calculate_ok(create_request("employer_no_cause", "paid_in_lieu")).await;

    assert!(result["calculation_id"].as_str().is_some());
    assert!(result["timestamp"].as_str().is_some());
    assert_eq!(result["engine_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(result["regime_code"], "CLT");
    assert!(result["audit_trace"]["duration_us"].as_u64().is_some());
}

#[tokio::test]
async fn test_audit_trace_records_every_rule() {
    let result = calculate_ok(create_request("employer_no_cause", "paid_in_lieu")).await;
    let steps = result["audit_trace"]["steps"].as_array().unwrap();

    let rule_ids: Vec<&str> = steps
        .iter()
        .map(|s| s["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        rule_ids,
        vec![
            "notice_period",
            "notice_projection",
            "thirteenth_salary",
            "vacation_pay",
            "salary_balance",
            "notice_settlement",
            "severance_fund"
        ]
    );
    for step in steps {
        assert!(!step["legal_ref"].as_str().unwrap().is_empty());
        assert!(!step["reasoning"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_calculation_ids_are_unique_but_settlement_is_deterministic() {
    let first = calculate_ok(create_request("mutual_agreement", "paid_in_lieu")).await;
    let second = calculate_ok(create_request("mutual_agreement", "paid_in_lieu")).await;

    assert_ne!(first["calculation_id"], second["calculation_id"]);
    assert_eq!(first["settlement"], second["settlement"]);
}
