// ABOUTME: Nutrition computation and consistency-validation engine for the Pierre platform
// ABOUTME: Serving-size resolution, per-100g scaling, aggregation, and request validators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Nutrition
//!
//! Deterministic nutrition arithmetic and validation for foods, meal
//! templates, and meal plans. Foods declare nutrient baselines per 100
//! grams plus serving sizes mapping household units to grams; everything
//! else is derived from those baselines.
//!
//! ## Modules
//!
//! - **models**: Foods, meal templates, meals, daily meals, and plans
//! - **nutrition**: Serving resolution, per-100g scaling, aggregation, and
//!   the meal composer
//! - **validators**: Stage-based request validation with batched failures
//! - **config**: Tunable bounds with environment overrides
//! - **errors**: Unified error codes and the [`errors::AppResult`] alias
//!
//! ## Example
//!
//! ```rust
//! use pierre_nutrition::models::{
//!     FoodCategory, FoodItem, FoodOrigin, LanguageCode, LocalizedText,
//!     MacroNutrients, MicroNutrients, ServingSize, ServingUnit, Visibility,
//! };
//! use pierre_nutrition::nutrition::nutrients_for_serving;
//!
//! let apple = FoodItem {
//!     id: uuid::Uuid::new_v4(),
//!     name: LocalizedText::new().with(LanguageCode::En, "Apple"),
//!     search_terms: vec![],
//!     description: None,
//!     category: FoodCategory::Fruit,
//!     macros: MacroNutrients {
//!         protein: 0.3,
//!         carbohydrates: 14.0,
//!         fat: 0.2,
//!         fiber: 2.4,
//!         sugar: 10.4,
//!     },
//!     micros: MicroNutrients::zero(),
//!     serving_sizes: vec![
//!         ServingSize::new(ServingUnit::Gram, 100.0, 100.0),
//!         ServingSize::new(ServingUnit::Piece, 1.0, 182.0),
//!     ],
//!     calories: 52.0,
//!     created_by: uuid::Uuid::new_v4(),
//!     visibility: Visibility::Public,
//!     origin: FoodOrigin::User,
//!     image_url: None,
//!     created_at: chrono::Utc::now(),
//!     updated_at: chrono::Utc::now(),
//! };
//!
//! // One apple weighs 182 g, so nutrients scale by 1.82
//! let computed = nutrients_for_serving(&apple, ServingUnit::Piece, 1.0).unwrap();
//! assert!((computed.calories - 94.64).abs() < 1e-9);
//! ```

pub mod config;
pub mod errors;
pub mod models;
pub mod nutrition;
pub mod requests;
pub mod validators;

pub use errors::{AppError, AppResult, ErrorCode};
pub use nutrition::{FoodSource, MealComposer};
pub use validators::{FoodValidator, MealValidator, PlanValidator, Validator};
