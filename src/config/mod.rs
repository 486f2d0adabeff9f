// ABOUTME: Tunable validation bounds and tolerances for the nutrition engine
// ABOUTME: Defaults, environment overrides, and a lazily-initialized global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Configuration
//!
//! Every numeric bound the validators enforce lives here rather than inline
//! in validation code. Deployments can tighten or loosen individual bounds
//! through `PIERRE_NUTRITION_*` environment variables without a rebuild.
//!
//! Use [`NutritionConfig::global`] for the process-wide instance, or build a
//! [`NutritionConfig`] by hand in tests to exercise non-default bounds.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Bounds enforced when validating food definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodValidationConfig {
    /// Maximum food name length per language (characters)
    pub max_name_length: usize,
    /// Maximum description length per language (characters)
    pub max_description_length: usize,
    /// Upper bound for each macro field (grams per 100 g)
    pub max_macro_grams: f64,
    /// Upper bound for the sum of all macro fields
    pub max_macro_sum: f64,
    /// Upper bound for declared calories per 100 g
    pub max_calories: f64,
    /// Upper bound for a serving size's gram equivalent
    pub max_gram_equivalent: f64,
    /// Maximum image URL length (characters)
    pub max_url_length: usize,
    /// Allowed absolute gap between declared and macro-derived calories
    pub calorie_tolerance: f64,
}

impl Default for FoodValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: 200,
            max_description_length: 1000,
            max_macro_grams: 100.0,
            max_macro_sum: 999.0,
            max_calories: 1000.0,
            max_gram_equivalent: 100_000.0,
            max_url_length: 2048,
            calorie_tolerance: 10.0,
        }
    }
}

/// Bounds enforced when validating meal templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealValidationConfig {
    /// Maximum template name length (characters)
    pub max_name_length: usize,
    /// Maximum description length (characters)
    pub max_description_length: usize,
    /// Maximum number of tags
    pub max_tags: usize,
    /// Maximum length of a single tag (characters)
    pub max_tag_length: usize,
    /// Maximum food lines in one template
    pub max_food_items: usize,
    /// Upper bound for a single line's serving amount
    pub max_item_amount: f64,
}

impl Default for MealValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: 200,
            max_description_length: 1000,
            max_tags: 20,
            max_tag_length: 50,
            max_food_items: 50,
            max_item_amount: 10_000.0,
        }
    }
}

/// Bounds enforced when validating meal plans
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanValidationConfig {
    /// Maximum plan name length (characters)
    pub max_name_length: usize,
    /// Maximum description length (characters)
    pub max_description_length: usize,
    /// Lower bound for the daily calorie target
    pub min_target_calories: f64,
    /// Upper bound for the daily calorie target
    pub max_target_calories: f64,
    /// Longest allowed plan span in days
    pub max_span_days: i64,
}

impl Default for PlanValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: 100,
            max_description_length: 500,
            min_target_calories: 500.0,
            max_target_calories: 5000.0,
            max_span_days: 90,
        }
    }
}

/// Top-level nutrition engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Food definition bounds
    pub food: FoodValidationConfig,
    /// Meal template bounds
    pub meal: MealValidationConfig,
    /// Meal plan bounds
    pub plan: PlanValidationConfig,
}

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an unparseable
    /// value or the resulting bounds are internally inconsistent
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate internal consistency of the bounds
    fn validate(&self) -> Result<(), ConfigError> {
        if self.food.max_macro_grams <= 0.0 {
            return Err(ConfigError::InvalidRange("max_macro_grams must be > 0"));
        }
        if self.food.max_macro_sum < self.food.max_macro_grams {
            return Err(ConfigError::InvalidRange(
                "max_macro_sum must be >= max_macro_grams",
            ));
        }
        if self.food.max_calories <= 0.0 {
            return Err(ConfigError::InvalidRange("max_calories must be > 0"));
        }
        if self.food.max_gram_equivalent <= 0.0 {
            return Err(ConfigError::InvalidRange("max_gram_equivalent must be > 0"));
        }
        if self.food.calorie_tolerance < 0.0 {
            return Err(ConfigError::InvalidRange("calorie_tolerance must be >= 0"));
        }
        if self.meal.max_food_items == 0 {
            return Err(ConfigError::InvalidRange("max_food_items must be > 0"));
        }
        if self.meal.max_item_amount <= 0.0 {
            return Err(ConfigError::InvalidRange("max_item_amount must be > 0"));
        }
        if self.plan.min_target_calories >= self.plan.max_target_calories {
            return Err(ConfigError::InvalidRange(
                "min_target_calories must be < max_target_calories",
            ));
        }
        if self.plan.max_span_days < 1 {
            return Err(ConfigError::InvalidRange("max_span_days must be >= 1"));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = std::env::var("PIERRE_NUTRITION_FOOD_CALORIE_TOLERANCE") {
            self.food.calorie_tolerance = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid PIERRE_NUTRITION_FOOD_CALORIE_TOLERANCE".into())
            })?;
        }

        if let Ok(val) = std::env::var("PIERRE_NUTRITION_FOOD_MAX_CALORIES") {
            self.food.max_calories = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid PIERRE_NUTRITION_FOOD_MAX_CALORIES".into())
            })?;
        }

        if let Ok(val) = std::env::var("PIERRE_NUTRITION_FOOD_MAX_GRAM_EQUIVALENT") {
            self.food.max_gram_equivalent = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid PIERRE_NUTRITION_FOOD_MAX_GRAM_EQUIVALENT".into())
            })?;
        }

        if let Ok(val) = std::env::var("PIERRE_NUTRITION_MEAL_MAX_FOOD_ITEMS") {
            self.meal.max_food_items = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid PIERRE_NUTRITION_MEAL_MAX_FOOD_ITEMS".into())
            })?;
        }

        if let Ok(val) = std::env::var("PIERRE_NUTRITION_MEAL_MAX_ITEM_AMOUNT") {
            self.meal.max_item_amount = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid PIERRE_NUTRITION_MEAL_MAX_ITEM_AMOUNT".into())
            })?;
        }

        if let Ok(val) = std::env::var("PIERRE_NUTRITION_PLAN_MIN_TARGET_CALORIES") {
            self.plan.min_target_calories = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid PIERRE_NUTRITION_PLAN_MIN_TARGET_CALORIES".into())
            })?;
        }

        if let Ok(val) = std::env::var("PIERRE_NUTRITION_PLAN_MAX_TARGET_CALORIES") {
            self.plan.max_target_calories = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid PIERRE_NUTRITION_PLAN_MAX_TARGET_CALORIES".into())
            })?;
        }

        if let Ok(val) = std::env::var("PIERRE_NUTRITION_PLAN_MAX_SPAN_DAYS") {
            self.plan.max_span_days = val.parse().map_err(|_| {
                ConfigError::Parse("Invalid PIERRE_NUTRITION_PLAN_MAX_SPAN_DAYS".into())
            })?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_validation() {
        let config = NutritionConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.food.calorie_tolerance - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.meal.max_food_items, 50);
        assert_eq!(config.plan.max_span_days, 90);
    }

    #[test]
    fn test_inverted_calorie_band_is_rejected() {
        let mut config = NutritionConfig::default();
        config.plan.min_target_calories = 6000.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_negative_tolerance_is_rejected() {
        let mut config = NutritionConfig::default();
        config.food.calorie_tolerance = -1.0;
        assert!(config.validate().is_err());
    }
}
