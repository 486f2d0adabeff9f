// ABOUTME: Domain models for the nutrition engine
// ABOUTME: Nutrient vectors, food definitions, meal templates, and meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain data model.
//!
//! Value records the engine computes over: per-100g food baselines, computed
//! line items, and the template/day/plan aggregates whose totals are always
//! derived from their line items.

pub mod food;
pub mod meal;
pub mod nutrients;
pub mod plan;

pub use food::{
    FoodCategory, FoodItem, FoodOrigin, LanguageCode, LocalizedText, ServingSize, ServingUnit,
    Visibility,
};
pub use meal::{Meal, MealFoodItem, MealTemplate, MealTemplateFoodItem, MealType};
pub use nutrients::{MacroNutrients, MicroNutrients};
pub use plan::{DailyMeal, MealPlan, PlanGoal, PlanStatus, PlanType};
