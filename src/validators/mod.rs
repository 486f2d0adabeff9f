// ABOUTME: Request validators for foods, meal templates, and meal plans
// ABOUTME: Stage-based checks batched into a single error per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request Validation
//!
//! Each validator runs its checks in independent stages (name, nutrition,
//! serving sizes, …). Every stage runs even when an earlier one fails, and
//! each stage reports at most its first violation; the stage failures are
//! then batched into one error so a client can fix a whole request in a
//! single round trip instead of discovering violations one at a time.
//!
//! Bounds come from [`crate::config::NutritionConfig`]; validators built
//! with `Default` read the global instance.

mod food;
mod meal;
mod plan;

pub use food::FoodValidator;
pub use meal::MealValidator;
pub use plan::PlanValidator;

use crate::errors::{AppError, AppResult};

/// Collapse collected stage failures into a single result.
///
/// No failures passes; one failure is returned as-is; several failures are
/// batched under one invalid-input error with per-stage details.
pub(crate) fn into_result(errors: Vec<AppError>) -> AppResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.into_iter().next().unwrap_or_else(|| {
            AppError::internal("validation error vanished while batching")
        })),
        n => {
            let details: Vec<serde_json::Value> = errors
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "code": e.code,
                        "field": e.context.field,
                        "message": e.message,
                    })
                })
                .collect();
            Err(
                AppError::invalid_input(format!("{n} validation failures"))
                    .with_details(serde_json::Value::Array(details)),
            )
        }
    }
}

/// All three validators behind one handle, sharing the same configuration
#[derive(Debug, Default)]
pub struct Validator {
    /// Food definition validator
    pub food: FoodValidator,
    /// Meal template validator
    pub meal: MealValidator,
    /// Meal plan validator
    pub plan: PlanValidator,
}

impl Validator {
    /// Create a validator set reading the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_into_result_passes_empty() {
        assert!(into_result(vec![]).is_ok());
    }

    #[test]
    fn test_into_result_single_error_kept_intact() {
        let err = into_result(vec![AppError::out_of_range("calories", "too high")]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.field.as_deref(), Some("calories"));
    }

    #[test]
    fn test_into_result_batches_multiple() {
        let err = into_result(vec![
            AppError::missing_field("name", "name cannot be empty"),
            AppError::out_of_range("calories", "too high"),
        ])
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        let details = err.context.details.as_array().unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0]["field"], "name");
    }
}
