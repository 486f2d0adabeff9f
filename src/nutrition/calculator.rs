// ABOUTME: Serving-size resolution and per-100g nutrient scaling
// ABOUTME: Pure arithmetic core the composer and validators build on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient scaling from per-100g baselines.
//!
//! A food declares its nutrient profile per 100 grams plus one or more
//! serving sizes, each mapping `amount` of a unit to a gram equivalent.
//! Scaling a consumed quantity is two steps:
//!
//! 1. resolve the consumed amount to total grams via the matching serving
//!    size: `total_grams = (amount / serving.amount) * serving.gram_equivalent`
//! 2. scale the per-100g baseline by `total_grams / 100`
//!
//! Both steps are pure; the only failure mode is a food that declares no
//! serving size for the requested unit.

use crate::errors::{AppError, AppResult};
use crate::models::{FoodItem, MacroNutrients, MicroNutrients, ServingUnit};

/// Calories and nutrient profile computed for a concrete consumed quantity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedNutrients {
    /// Scaled calories
    pub calories: f64,
    /// Scaled macro profile
    pub macros: MacroNutrients,
    /// Scaled micro profile
    pub micros: MicroNutrients,
}

/// Resolve a consumed amount of `unit` to total grams using the food's
/// declared serving sizes.
///
/// The first declared serving size matching `unit` wins; foods are expected
/// to declare one row per unit, and the food validator enforces this for
/// newly defined foods.
///
/// # Errors
///
/// Returns [`crate::errors::ErrorCode::ResourceNotFound`] when the food
/// declares no serving size for `unit`.
pub fn resolve_serving_grams(food: &FoodItem, unit: ServingUnit, amount: f64) -> AppResult<f64> {
    let serving = food.serving(unit).ok_or_else(|| {
        AppError::not_found(format!(
            "serving size '{}' for food '{}'",
            unit,
            food.display_name()
        ))
        .with_resource_id(food.id.to_string())
        .with_field("serving_unit")
    })?;

    // Serving amounts are validated positive at food creation; a zero here
    // would mean a corrupt stored food, surfaced rather than divided by.
    if serving.amount <= 0.0 {
        return Err(AppError::internal(format!(
            "food '{}' declares a non-positive serving amount for '{}'",
            food.display_name(),
            unit
        ))
        .with_resource_id(food.id.to_string()));
    }

    Ok((amount / serving.amount) * serving.gram_equivalent)
}

/// Scale a food's per-100g baseline to `total_grams`.
///
/// Zero grams yields an all-zero profile; scaling is linear in `total_grams`.
#[must_use]
pub fn scale_nutrients(food: &FoodItem, total_grams: f64) -> ComputedNutrients {
    let multiplier = total_grams / 100.0;
    ComputedNutrients {
        calories: food.calories * multiplier,
        macros: food.macros.scaled(multiplier),
        micros: food.micros.scaled(multiplier),
    }
}

/// Compute the nutrients for `amount` of `unit` of a food.
///
/// Composition of [`resolve_serving_grams`] and [`scale_nutrients`].
///
/// # Errors
///
/// Returns [`crate::errors::ErrorCode::ResourceNotFound`] when the food
/// declares no serving size for `unit`.
pub fn nutrients_for_serving(
    food: &FoodItem,
    unit: ServingUnit,
    amount: f64,
) -> AppResult<ComputedNutrients> {
    let total_grams = resolve_serving_grams(food, unit, amount)?;
    Ok(scale_nutrients(food, total_grams))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FoodCategory, FoodOrigin, LanguageCode, LocalizedText, ServingSize, Visibility,
    };
    use chrono::Utc;
    use uuid::Uuid;

    fn apple() -> FoodItem {
        FoodItem {
            id: Uuid::new_v4(),
            name: LocalizedText::new().with(LanguageCode::En, "Apple"),
            search_terms: vec![],
            description: None,
            category: FoodCategory::Fruit,
            macros: MacroNutrients {
                protein: 0.3,
                carbohydrates: 14.0,
                fat: 0.2,
                fiber: 2.4,
                sugar: 10.4,
            },
            micros: MicroNutrients::zero(),
            serving_sizes: vec![
                ServingSize::new(ServingUnit::Gram, 100.0, 100.0),
                ServingSize::new(ServingUnit::Piece, 1.0, 182.0),
                ServingSize::new(ServingUnit::Cup, 1.0, 250.0),
            ],
            calories: 52.0,
            created_by: Uuid::new_v4(),
            visibility: Visibility::Public,
            origin: FoodOrigin::User,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_gram_unit_round_trips_amount() {
        let food = apple();
        let grams = resolve_serving_grams(&food, ServingUnit::Gram, 150.0).unwrap();
        assert!((grams - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_piece_resolution() {
        let food = apple();
        let grams = resolve_serving_grams(&food, ServingUnit::Piece, 2.0).unwrap();
        assert!((grams - 364.0).abs() < 1e-9);
    }

    #[test]
    fn test_two_cups_scale() {
        let food = apple();
        let computed = nutrients_for_serving(&food, ServingUnit::Cup, 2.0).unwrap();
        // 2 cups = 500 g = 5x the per-100g baseline
        assert!((computed.calories - 260.0).abs() < 1e-9);
        assert!((computed.macros.carbohydrates - 70.0).abs() < 1e-9);
        assert!((computed.macros.fiber - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaling_is_linear() {
        let food = apple();
        let one = nutrients_for_serving(&food, ServingUnit::Piece, 1.0).unwrap();
        let three = nutrients_for_serving(&food, ServingUnit::Piece, 3.0).unwrap();
        assert!((three.calories - 3.0 * one.calories).abs() < 1e-9);
        assert!((three.macros.protein - 3.0 * one.macros.protein).abs() < 1e-9);
    }

    #[test]
    fn test_zero_amount_yields_zero_profile() {
        let food = apple();
        let computed = nutrients_for_serving(&food, ServingUnit::Gram, 0.0).unwrap();
        assert!((computed.calories).abs() < 1e-9);
        assert_eq!(computed.macros, MacroNutrients::zero());
    }

    #[test]
    fn test_undeclared_unit_is_not_found() {
        let food = apple();
        let err = resolve_serving_grams(&food, ServingUnit::Milliliter, 30.0).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ResourceNotFound);
        assert!(err.message.contains("Apple"));
        assert!(err.message.contains("ml"));
    }
}
