// ABOUTME: HTTP integration tests for the calculator routes
// ABOUTME: Covers success payloads, validation errors, and the uniform error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

async fn get(uri: &str) -> (u16, Value) {
    let (app, _static_dir) = helpers::test_app();
    let response = AxumTestRequest::get(uri).send(app).await;
    let status = response.status();
    (status, response.json())
}

async fn assert_rejected(uri: &str, message: &str) {
    let (status, body) = get(uri).await;
    assert_eq!(status, 400, "{uri} should be rejected");
    assert_eq!(body, json!({ "error": message }), "{uri}");
}

// ============================================================================
// GET /bmi
// ============================================================================

#[tokio::test]
async fn test_bmi_success() {
    let (status, body) = get("/bmi?height=175&weight=70").await;

    assert_eq!(status, 200);
    assert_eq!(body["bmi"], "22.86");
    assert_eq!(body["weight"], 70.0);
}

#[tokio::test]
async fn test_bmi_accepts_decimal_and_padded_values() {
    let (status, body) = get("/bmi?height=%20180.5%20&weight=81.25").await;

    assert_eq!(status, 200);
    assert_eq!(body["bmi"], "24.94");
    assert_eq!(body["weight"], 81.25);
}

#[tokio::test]
async fn test_bmi_ignores_extra_fields() {
    let (status, body) = get("/bmi?calculator=bmi&height=175&weight=70").await;

    assert_eq!(status, 200);
    assert_eq!(body["bmi"], "22.86");
}

#[tokio::test]
async fn test_bmi_invalid_inputs() {
    for uri in [
        "/bmi?height=0&weight=70",
        "/bmi?height=180&weight=0",
        "/bmi?height=-175&weight=70",
        "/bmi?height=abc&weight=70",
        "/bmi?height=175kg&weight=70",
        "/bmi?height=NaN&weight=70",
        "/bmi?height=&weight=70",
        "/bmi?weight=70",
        "/bmi",
    ] {
        assert_rejected(uri, "Invalid height or weight values.").await;
    }
}

// ============================================================================
// GET /bodyfat
// ============================================================================

#[tokio::test]
async fn test_body_fat_female() {
    let (status, body) = get("/bodyfat?age=25&gender=female&bmi=22.5").await;

    assert_eq!(status, 200);
    assert_eq!(body["bodyFat"], "27.35");
    assert_eq!(body["bmi"], "22.50");
}

#[tokio::test]
async fn test_body_fat_male_with_browser_fields() {
    let (status, body) =
        get("/bodyfat?calculator=bodyfat&age=25&gender=male&bmi=22.5&weight=70").await;

    assert_eq!(status, 200);
    assert_eq!(body["bodyFat"], "16.55");
}

#[tokio::test]
async fn test_body_fat_invalid_inputs() {
    for uri in [
        "/bodyfat?age=25&gender=unknown&bmi=22.5",
        "/bodyfat?age=25&gender=Female&bmi=22.5",
        "/bodyfat?age=25&bmi=22.5",
        "/bodyfat?age=0&gender=male&bmi=22.5",
        "/bodyfat?age=25&gender=male&bmi=-1",
        "/bodyfat?age=old&gender=male&bmi=22.5",
    ] {
        assert_rejected(uri, "Invalid age, gender, or BMI value.").await;
    }
}

// ============================================================================
// GET /idealweight
// ============================================================================

#[tokio::test]
async fn test_ideal_weight_success() {
    let (status, body) = get("/idealweight?weight=80&bodyFat=25").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "idealWeight": "60.00" }));
}

#[tokio::test]
async fn test_ideal_weight_invalid_inputs() {
    for uri in [
        "/idealweight?weight=80&bodyFat=0",
        "/idealweight?weight=0&bodyFat=25",
        "/idealweight?weight=80",
        "/idealweight?weight=80&body_fat=25",
    ] {
        assert_rejected(uri, "Invalid weight or body fat percentage value.").await;
    }
}

// ============================================================================
// GET /caloriesburned
// ============================================================================

#[tokio::test]
async fn test_calories_burned_sedentary() {
    let (status, body) =
        get("/caloriesburned?weight=70&height=175&age=30&activityLevel=sedentary&calories=2000")
            .await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "caloriesBurned": "34.80" }));
}

#[tokio::test]
async fn test_calories_burned_clamps_to_zero() {
    let (status, body) =
        get("/caloriesburned?weight=70&height=175&age=30&activityLevel=sedentary&calories=5000")
            .await;

    assert_eq!(status, 200);
    assert_eq!(body["caloriesBurned"], "0.00");
}

#[tokio::test]
async fn test_calories_burned_without_intake_reports_tdee() {
    let (status, body) =
        get("/caloriesburned?weight=70&height=175&age=30&activityLevel=extraactive").await;

    assert_eq!(status, 200);
    // 1695.667 * 1.9
    assert_eq!(body["caloriesBurned"], "3221.77");

    let (status, body) =
        get("/caloriesburned?weight=70&height=175&age=30&activityLevel=sedentary&calories=").await;
    assert_eq!(status, 200);
    assert_eq!(body["caloriesBurned"], "2034.80");
}

#[tokio::test]
async fn test_calories_burned_invalid_activity_level() {
    assert_rejected(
        "/caloriesburned?weight=70&height=175&age=30&activityLevel=invalid&calories=2000",
        "Invalid activity level value.",
    )
    .await;
    assert_rejected(
        "/caloriesburned?weight=70&height=175&age=30&calories=2000",
        "Invalid activity level value.",
    )
    .await;
}

#[tokio::test]
async fn test_calories_burned_numeric_fields_checked_first() {
    assert_rejected(
        "/caloriesburned?weight=0&height=175&age=30&activityLevel=invalid",
        "Invalid weight, height, or age value.",
    )
    .await;
    assert_rejected(
        "/caloriesburned?weight=70&height=175&activityLevel=sedentary",
        "Invalid weight, height, or age value.",
    )
    .await;
}

#[tokio::test]
async fn test_calories_burned_invalid_intake() {
    const BASE: &str = "/caloriesburned?weight=70&height=175&age=30&activityLevel=sedentary";
    for calories in ["abc", "-100", "NaN"] {
        assert_rejected(
            &format!("{BASE}&calories={calories}"),
            "Invalid daily caloric intake value.",
        )
        .await;
    }
}

// ============================================================================
// Cross-cutting behavior
// ============================================================================

#[tokio::test]
async fn test_calculator_responses_carry_request_id() {
    let (app, _static_dir) = helpers::test_app();
    let response = AxumTestRequest::get("/bmi?height=0&weight=70")
        .header("x-request-id", "trace-me-123")
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    assert_eq!(response.header("x-request-id"), Some("trace-me-123"));
}

#[tokio::test]
async fn test_error_body_has_only_error_field() {
    let (_, body) = get("/idealweight").await;

    let object = body.as_object().expect("error body is an object");
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("error"));
}

#[tokio::test]
async fn test_extreme_measurements_never_render_infinity() {
    assert_rejected("/bmi?height=1e-200&weight=70", "Invalid height or weight values.").await;
    assert_rejected(
        "/caloriesburned?weight=1e307&height=175&age=30&activityLevel=extraactive",
        "Invalid weight, height, or age value.",
    )
    .await;

    for (uri, fields) in [
        ("/idealweight?weight=1e308&bodyFat=1", vec!["idealWeight"]),
        (
            "/bodyfat?age=25&gender=female&bmi=1e307",
            vec!["bodyFat", "bmi"],
        ),
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, 200, "{uri}");
        for field in fields {
            let rendered = body[field].as_str().expect("string result");
            let value: f64 = rendered.parse().expect("numeric result");
            assert!(value.is_finite(), "{uri} {field} = {rendered}");
            assert!(rendered.ends_with(".00"), "{uri} {field} = {rendered}");
        }
    }
}
