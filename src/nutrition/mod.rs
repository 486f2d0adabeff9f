// ABOUTME: Nutrition computation core: scaling, aggregation, and template composition
// ABOUTME: Re-exports the calculator entry points and the meal composer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod aggregate;
pub mod calculator;
pub mod composer;

pub use aggregate::{sum_macros, sum_micros};
pub use calculator::{
    nutrients_for_serving, resolve_serving_grams, scale_nutrients, ComputedNutrients,
};
pub use composer::{FoodSource, MealComposer};
