// ABOUTME: Calculator route handlers for BMI, body fat, ideal weight, and calories burned
// ABOUTME: Validates query strings through the metrics calculator and renders two-decimal results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator routes
//!
//! Every endpoint takes its measurements from the query string and responds
//! with a JSON object holding the computed field, formatted to two decimals,
//! plus any value echoed back so the browser can chain the next calculation.
//! Invalid input yields `400 { "error": <message> }`.

use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    format_two_decimals, BmiRequest, BodyFatRequest, CaloriesBurnedRequest, IdealWeightRequest,
};
use crate::server::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// `GET /bmi` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResponse {
    /// BMI with two decimals
    pub bmi: String,
    /// Weight as supplied, for the body fat step
    pub weight: f64,
}

/// `GET /bodyfat` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyFatResponse {
    /// Body fat percentage with two decimals
    pub body_fat: String,
    /// Input BMI with two decimals
    pub bmi: String,
}

/// `GET /idealweight` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealWeightResponse {
    /// Ideal weight in kilograms with two decimals
    pub ideal_weight: String,
}

/// `GET /caloriesburned` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaloriesBurnedResponse {
    /// Calories burned with two decimals, never negative
    pub calories_burned: String,
}

/// Calculator routes
pub struct CalculatorRoutes;

impl CalculatorRoutes {
    /// Create all calculator routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/bmi", get(Self::handle_bmi))
            .route("/bodyfat", get(Self::handle_body_fat))
            .route("/idealweight", get(Self::handle_ideal_weight))
            .route("/caloriesburned", get(Self::handle_calories_burned))
            .with_state(state)
    }

    /// Handle BMI calculation
    async fn handle_bmi(
        State(state): State<Arc<AppState>>,
        query: Result<Query<BmiRequest>, QueryRejection>,
    ) -> AppResult<Json<BmiResponse>> {
        let request = extract(query, messages::INVALID_HEIGHT_OR_WEIGHT)?;
        let result = state
            .calculator
            .bmi(&request)
            .inspect_err(|e| log_rejection("bmi", e))?;

        Ok(Json(BmiResponse {
            bmi: format_two_decimals(result.bmi),
            weight: result.weight,
        }))
    }

    /// Handle body fat calculation
    async fn handle_body_fat(
        State(state): State<Arc<AppState>>,
        query: Result<Query<BodyFatRequest>, QueryRejection>,
    ) -> AppResult<Json<BodyFatResponse>> {
        let request = extract(query, messages::INVALID_AGE_GENDER_OR_BMI)?;
        let result = state
            .calculator
            .body_fat(&request)
            .inspect_err(|e| log_rejection("bodyfat", e))?;

        Ok(Json(BodyFatResponse {
            body_fat: format_two_decimals(result.body_fat),
            bmi: format_two_decimals(result.bmi),
        }))
    }

    /// Handle ideal weight calculation
    async fn handle_ideal_weight(
        State(state): State<Arc<AppState>>,
        query: Result<Query<IdealWeightRequest>, QueryRejection>,
    ) -> AppResult<Json<IdealWeightResponse>> {
        let request = extract(query, messages::INVALID_WEIGHT_OR_BODY_FAT)?;
        let result = state
            .calculator
            .ideal_weight(&request)
            .inspect_err(|e| log_rejection("idealweight", e))?;

        Ok(Json(IdealWeightResponse {
            ideal_weight: format_two_decimals(result.ideal_weight),
        }))
    }

    /// Handle calories burned calculation
    async fn handle_calories_burned(
        State(state): State<Arc<AppState>>,
        query: Result<Query<CaloriesBurnedRequest>, QueryRejection>,
    ) -> AppResult<Json<CaloriesBurnedResponse>> {
        let request = extract(query, messages::INVALID_WEIGHT_HEIGHT_OR_AGE)?;
        let result = state
            .calculator
            .calories_burned(&request)
            .inspect_err(|e| log_rejection("caloriesburned", e))?;

        debug!(
            bmr = result.bmr,
            tdee = result.tdee,
            "Calories burned calculated"
        );

        Ok(Json(CaloriesBurnedResponse {
            calories_burned: format_two_decimals(result.calories_burned),
        }))
    }
}

/// Unwrap the query, reporting a malformed query string with the endpoint's own message
fn extract<T>(query: Result<Query<T>, QueryRejection>, message: &'static str) -> AppResult<T> {
    match query {
        Ok(Query(request)) => Ok(request),
        Err(rejection) => {
            debug!(rejection = %rejection, "Malformed query string");
            Err(AppError::invalid_input(message))
        }
    }
}

fn log_rejection(calculator: &str, error: &AppError) {
    debug!(calculator, error.message = %error.message, "Rejected measurement input");
}
