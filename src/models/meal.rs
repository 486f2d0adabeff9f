// ABOUTME: Meal template and in-plan meal models with computed line items
// ABOUTME: MealType, MealTemplateFoodItem, MealTemplate, MealFoodItem, and Meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::food::{FoodCategory, ServingUnit};
use super::nutrients::{MacroNutrients, MicroNutrients};
use crate::errors::AppError;

/// Type of meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Wire/database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            other => Err(AppError::invalid_input(format!(
                "invalid meal type '{other}', must be one of: breakfast, lunch, dinner, snack"
            ))),
        }
    }
}

/// A computed line item inside a meal template
///
/// Carries the nutrients computed for the requested amount, not the food's
/// per-100g baseline. Immutable once computed: there is no mutating API;
/// changing an amount means building a fresh line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplateFoodItem {
    /// Referenced food definition
    pub food_id: Uuid,
    /// Food name snapshot at composition time (denormalized)
    pub food_name: String,
    /// Requested serving unit
    pub serving_unit: ServingUnit,
    /// Requested amount in `serving_unit`
    pub amount: f64,
    /// Computed calories for this amount
    pub calories: f64,
    /// Computed macros for this amount
    pub macros: MacroNutrients,
    /// Computed micros for this amount
    #[serde(default)]
    pub micros: MicroNutrients,
}

/// A reusable meal combination with aggregated totals
///
/// The `total_*` fields are derived data: they must always equal the sum of
/// the current line items. [`MealTemplate::recompute_totals`] re-establishes
/// that invariant after any structural mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealTemplate {
    /// Unique template identifier
    pub id: Uuid,
    /// Owner reference
    pub user_id: Uuid,
    /// Template name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Meal type this template is intended for
    pub meal_type: MealType,
    /// Computed line items
    pub food_items: Vec<MealTemplateFoodItem>,
    /// Sum of line-item calories
    pub total_calories: f64,
    /// Sum of line-item macros
    pub total_macros: MacroNutrients,
    /// Sum of line-item micros
    #[serde(default)]
    pub total_micros: MicroNutrients,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Visible to other users
    pub is_public: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A computed line item inside an in-plan meal
///
/// Plan-side line items carry calories and macros only; micro totals are
/// tracked at template level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealFoodItem {
    /// Referenced food definition
    pub food_id: Uuid,
    /// Food name snapshot (denormalized)
    pub food_name: String,
    /// Food category snapshot (denormalized), when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_category: Option<FoodCategory>,
    /// Requested serving unit
    pub serving_unit: ServingUnit,
    /// Requested amount in `serving_unit`
    pub amount: f64,
    /// Computed calories for this amount
    pub calories: f64,
    /// Computed macros for this amount
    pub macros: MacroNutrients,
}

/// A single meal within a plan day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Identifier unique within the containing meal plan
    pub id: String,
    /// Type of meal
    pub meal_type: MealType,
    /// Optional time of day ("07:00")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Template this meal was instantiated from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<Uuid>,
    /// Computed line items
    pub food_items: Vec<MealFoodItem>,
    /// Sum of line-item calories
    pub calories: f64,
    /// Sum of line-item macros
    pub macros: MacroNutrients,
    /// Optional free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether the user marked this meal as eaten
    pub is_completed: bool,
}

impl Meal {
    /// Instantiate a meal from a template's line items
    ///
    /// Template micros are dropped (plan-side items track calories and
    /// macros only) and the template reference is kept for provenance.
    #[must_use]
    pub fn from_template(template: &MealTemplate, id: impl Into<String>) -> Self {
        let food_items: Vec<MealFoodItem> = template
            .food_items
            .iter()
            .map(|item| MealFoodItem {
                food_id: item.food_id,
                food_name: item.food_name.clone(),
                food_category: None,
                serving_unit: item.serving_unit,
                amount: item.amount,
                calories: item.calories,
                macros: item.macros,
            })
            .collect();
        let mut meal = Self {
            id: id.into(),
            meal_type: template.meal_type,
            time: None,
            template_id: Some(template.id),
            food_items,
            calories: 0.0,
            macros: MacroNutrients::zero(),
            notes: None,
            is_completed: false,
        };
        meal.recompute_totals();
        meal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&MealType::Breakfast).unwrap(),
            "\"breakfast\""
        );
        let parsed: MealType = serde_json::from_str("\"snack\"").unwrap();
        assert_eq!(parsed, MealType::Snack);
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_meal_from_template_carries_totals() {
        let template = MealTemplate {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Oats and fruit".into(),
            description: None,
            meal_type: MealType::Breakfast,
            food_items: vec![
                MealTemplateFoodItem {
                    food_id: Uuid::new_v4(),
                    food_name: "Oats".into(),
                    serving_unit: ServingUnit::Gram,
                    amount: 50.0,
                    calories: 194.5,
                    macros: MacroNutrients {
                        protein: 8.4,
                        carbohydrates: 33.0,
                        fat: 3.5,
                        fiber: 5.3,
                        sugar: 0.5,
                    },
                    micros: MicroNutrients::default(),
                },
                MealTemplateFoodItem {
                    food_id: Uuid::new_v4(),
                    food_name: "Apple".into(),
                    serving_unit: ServingUnit::Piece,
                    amount: 1.0,
                    calories: 116.1,
                    macros: MacroNutrients {
                        protein: 0.5,
                        carbohydrates: 25.5,
                        fat: 0.4,
                        fiber: 4.4,
                        sugar: 18.9,
                    },
                    micros: MicroNutrients::default(),
                },
            ],
            total_calories: 310.6,
            total_macros: MacroNutrients::zero(),
            total_micros: MicroNutrients::zero(),
            tags: vec![],
            is_public: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let meal = Meal::from_template(&template, "day1-breakfast");
        assert_eq!(meal.template_id, Some(template.id));
        assert_eq!(meal.food_items.len(), 2);
        assert!((meal.calories - 310.6).abs() < 1e-9);
        assert!((meal.macros.protein - 8.9).abs() < 1e-9);
        assert!(!meal.is_completed);
    }
}
