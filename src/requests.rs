// ABOUTME: Inbound request payloads for food, meal template, and meal plan operations
// ABOUTME: Deserialized from client JSON and checked by the validators before use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request payloads accepted by the engine's entry points.
//!
//! These structs carry exactly what a caller supplies. They are not trusted:
//! every payload passes through the matching validator in [`crate::validators`]
//! before the composer or a model constructor consumes it. Update payloads use
//! `Option` fields where absence means "leave unchanged".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    FoodCategory, LocalizedText, MacroNutrients, MealType, MicroNutrients, PlanGoal, PlanType,
    ServingSize, ServingUnit, Visibility,
};

/// Payload for defining a new food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFoodRequest {
    /// Localized food name (English entry required)
    pub name: LocalizedText,
    /// Free-text search terms
    #[serde(default)]
    pub search_terms: Vec<String>,
    /// Optional localized description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// Food category
    pub category: FoodCategory,
    /// Macro baseline per 100 g
    pub macros: MacroNutrients,
    /// Micro baseline per 100 g
    #[serde(default)]
    pub micros: MicroNutrients,
    /// Declared serving sizes (at least one)
    pub serving_sizes: Vec<ServingSize>,
    /// Declared calories per 100 g
    pub calories: f64,
    /// Public/private visibility
    pub visibility: Visibility,
    /// Optional image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One food line in a meal template payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateFoodItemRequest {
    /// Referenced food
    pub food_id: Uuid,
    /// Serving unit the amount is expressed in
    pub serving_unit: ServingUnit,
    /// Amount in `serving_unit`
    pub amount: f64,
}

/// Payload for creating a meal template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealTemplateRequest {
    /// Template name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Meal slot the template targets
    pub meal_type: MealType,
    /// Food lines making up the template
    pub food_items: Vec<TemplateFoodItemRequest>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the template is visible to other users
    #[serde(default)]
    pub is_public: bool,
}

/// Payload for updating a meal template; absent fields stay unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMealTemplateRequest {
    /// New template name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New meal slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    /// Replacement food lines (full replacement, totals recomputed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_items: Option<Vec<TemplateFoodItemRequest>>,
    /// Replacement tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// Payload for appending a single food line to an existing template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFoodToTemplateRequest {
    /// Referenced food
    pub food_id: Uuid,
    /// Serving unit the amount is expressed in
    pub serving_unit: ServingUnit,
    /// Amount in `serving_unit`
    pub amount: f64,
}

/// Payload for creating a meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealPlanRequest {
    /// Plan name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First day of the plan
    pub start_date: NaiveDate,
    /// Last day of the plan (exclusive of totals, must follow `start_date`)
    pub end_date: NaiveDate,
    /// Weekly or monthly cadence
    pub plan_type: PlanType,
    /// Nutrition goal the plan pursues
    pub goal: PlanGoal,
    /// Daily calorie target
    pub target_calories: f64,
    /// Daily macro targets
    pub target_macros: MacroNutrients,
}

/// Payload for updating a meal plan; absent fields stay unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMealPlanRequest {
    /// New plan name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New daily calorie target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_calories: Option<f64>,
    /// New daily macro targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_macros: Option<MacroNutrients>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_request_deserializes_wire_names() {
        let json = r#"{
            "name": "Post-workout",
            "meal_type": "snack",
            "food_items": [
                {
                    "food_id": "00000000-0000-0000-0000-000000000001",
                    "serving_unit": "cup",
                    "amount": 1.5
                }
            ]
        }"#;
        let req: CreateMealTemplateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.meal_type, MealType::Snack);
        assert_eq!(req.food_items[0].serving_unit, ServingUnit::Cup);
        assert!(req.tags.is_empty());
        assert!(!req.is_public);
    }

    #[test]
    fn test_update_request_absent_fields_are_none() {
        let req: UpdateMealTemplateRequest = serde_json::from_str(r#"{"name": "Renamed"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Renamed"));
        assert!(req.food_items.is_none());
        assert!(req.meal_type.is_none());
    }

    #[test]
    fn test_unknown_serving_unit_is_rejected() {
        let json = r#"{
            "food_id": "00000000-0000-0000-0000-000000000001",
            "serving_unit": "handful",
            "amount": 2.0
        }"#;
        assert!(serde_json::from_str::<AddFoodToTemplateRequest>(json).is_err());
    }
}
