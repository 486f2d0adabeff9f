// ABOUTME: Food definition validation: names, nutrition bounds, serving sizes, URL format
// ABOUTME: Includes the calorie/macro consistency check with configurable tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use url::Url;

use crate::config::{FoodValidationConfig, NutritionConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{LocalizedText, MacroNutrients, MicroNutrients, ServingSize, ServingUnit};
use crate::requests::CreateFoodRequest;
use crate::validators::into_result;

/// Validates food creation requests against configured bounds
#[derive(Debug, Clone)]
pub struct FoodValidator {
    config: FoodValidationConfig,
}

impl Default for FoodValidator {
    fn default() -> Self {
        Self {
            config: NutritionConfig::global().food.clone(),
        }
    }
}

impl FoodValidator {
    /// Create a validator with explicit bounds
    #[must_use]
    pub const fn with_config(config: FoodValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a food creation request.
    ///
    /// Runs all stages and batches their failures; see the module docs.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing every failed stage.
    pub fn validate_create(&self, req: &CreateFoodRequest) -> AppResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_name(&req.name) {
            errors.push(e);
        }
        if let Some(description) = &req.description {
            if let Err(e) = self.validate_description(description) {
                errors.push(e);
            }
        }
        if let Err(e) = self.validate_nutrition(&req.macros, &req.micros, req.calories) {
            errors.push(e);
        }
        if let Err(e) = self.validate_serving_sizes(&req.serving_sizes) {
            errors.push(e);
        }
        if let Err(e) = self.validate_calorie_consistency(&req.macros, req.calories) {
            errors.push(e);
        }
        if let Some(image_url) = &req.image_url {
            if let Err(e) = self.validate_image_url(image_url) {
                errors.push(e);
            }
        }

        into_result(errors)
    }

    /// Compute the calories a macro profile implies.
    ///
    /// Protein and carbohydrates count 4 kcal/g, fat 9 kcal/g, fiber
    /// approximately 2 kcal/g. Sugar is already counted inside
    /// carbohydrates and contributes nothing on its own.
    #[must_use]
    pub fn expected_calories(macros: &MacroNutrients) -> f64 {
        macros.energy_kcal()
    }

    fn validate_name(&self, name: &LocalizedText) -> AppResult<()> {
        if name.is_empty() {
            return Err(AppError::missing_field(
                "name",
                "name must have at least one language",
            ));
        }
        if name.english().trim().is_empty() {
            return Err(AppError::missing_field(
                "name",
                "name must have an English (en) translation",
            ));
        }
        for (lang, value) in name.entries() {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(AppError::invalid_input(format!(
                    "name value for language '{lang}' cannot be empty"
                ))
                .with_field("name"));
            }
            if trimmed.chars().count() > self.config.max_name_length {
                return Err(AppError::out_of_range(
                    "name",
                    format!(
                        "name for language '{lang}' exceeds maximum length ({} chars)",
                        self.config.max_name_length
                    ),
                ));
            }
        }
        Ok(())
    }

    fn validate_description(&self, description: &LocalizedText) -> AppResult<()> {
        for (lang, value) in description.entries() {
            let trimmed = value.trim();
            if !trimmed.is_empty() && trimmed.chars().count() > self.config.max_description_length {
                return Err(AppError::out_of_range(
                    "description",
                    format!(
                        "description for language '{lang}' exceeds maximum length ({} chars)",
                        self.config.max_description_length
                    ),
                ));
            }
        }
        Ok(())
    }

    fn validate_nutrition(
        &self,
        macros: &MacroNutrients,
        micros: &MicroNutrients,
        calories: f64,
    ) -> AppResult<()> {
        if macros.protein == 0.0 && macros.carbohydrates == 0.0 && macros.fat == 0.0 {
            return Err(AppError::invalid_input(
                "at least one macro nutrient (protein, carbs, or fat) must be greater than 0",
            )
            .with_field("macros"));
        }

        let max = self.config.max_macro_grams;
        for (field, value) in [
            ("protein", macros.protein),
            ("carbohydrates", macros.carbohydrates),
            ("fat", macros.fat),
            ("fiber", macros.fiber),
        ] {
            if value < 0.0 || value > max {
                return Err(AppError::out_of_range(
                    field,
                    format!("{field} must be between 0 and {max:.2}g per 100g"),
                ));
            }
        }
        if macros.sugar < 0.0 {
            return Err(AppError::out_of_range("sugar", "sugar cannot be negative"));
        }

        let total = macros.protein + macros.carbohydrates + macros.fat + macros.fiber;
        if total > self.config.max_macro_sum {
            return Err(AppError::out_of_range(
                "macros",
                format!(
                    "total macros exceed maximum ({:.0}g per 100g)",
                    self.config.max_macro_sum
                ),
            ));
        }

        if calories < 0.0 {
            return Err(AppError::out_of_range(
                "calories",
                "calories cannot be negative",
            ));
        }
        if calories > self.config.max_calories {
            return Err(AppError::out_of_range(
                "calories",
                format!(
                    "calories exceed maximum ({:.2} per 100g)",
                    self.config.max_calories
                ),
            ));
        }

        for (field, value) in [
            ("vitamin_a", micros.vitamin_a),
            ("vitamin_c", micros.vitamin_c),
            ("calcium", micros.calcium),
            ("iron", micros.iron),
            ("sodium", micros.sodium),
            ("potassium", micros.potassium),
        ] {
            if value < 0.0 {
                return Err(AppError::out_of_range(
                    field,
                    format!("{field} cannot be negative"),
                ));
            }
        }

        Ok(())
    }

    fn validate_serving_sizes(&self, sizes: &[ServingSize]) -> AppResult<()> {
        if sizes.is_empty() {
            return Err(AppError::missing_field(
                "serving_sizes",
                "at least one serving size is required",
            ));
        }

        let mut has_gram_base = false;
        for (i, size) in sizes.iter().enumerate() {
            let index = i + 1;
            if size.amount <= 0.0 {
                return Err(AppError::out_of_range(
                    "serving_sizes",
                    format!("serving size {index}: amount must be greater than 0"),
                ));
            }
            if size.gram_equivalent <= 0.0 {
                return Err(AppError::out_of_range(
                    "serving_sizes",
                    format!("serving size {index}: gram_equivalent must be greater than 0"),
                ));
            }
            if size.gram_equivalent > self.config.max_gram_equivalent {
                return Err(AppError::out_of_range(
                    "serving_sizes",
                    format!(
                        "serving size {index}: gram_equivalent ({:.2}) is unreasonably large",
                        size.gram_equivalent
                    ),
                ));
            }
            // For the gram unit the mapping must be the identity
            if size.unit == ServingUnit::Gram && size.amount != size.gram_equivalent {
                return Err(AppError::invalid_input(format!(
                    "serving size {index}: for gram unit, amount ({:.2}) should equal \
                     gram_equivalent ({:.2})",
                    size.amount, size.gram_equivalent
                ))
                .with_field("serving_sizes"));
            }
            if size.is_gram_base() {
                has_gram_base = true;
            }
        }

        // Recommended but not required; advisory only
        if !has_gram_base {
            tracing::warn!("no 100g gram base serving size declared");
        }

        Ok(())
    }

    fn validate_calorie_consistency(
        &self,
        macros: &MacroNutrients,
        calories: f64,
    ) -> AppResult<()> {
        let expected = Self::expected_calories(macros);
        let diff = calories - expected;
        if diff.abs() > self.config.calorie_tolerance {
            return Err(AppError::consistency_mismatch(
                calories,
                expected,
                self.config.calorie_tolerance,
            ));
        }
        Ok(())
    }

    fn validate_image_url(&self, raw: &str) -> AppResult<()> {
        if raw.trim().is_empty() {
            return Ok(());
        }
        let parsed = Url::parse(raw)
            .map_err(|e| AppError::invalid_format("image_url", format!("invalid URL: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::invalid_format(
                "image_url",
                format!(
                    "URL must use http or https scheme, got: {}",
                    parsed.scheme()
                ),
            ));
        }
        if parsed.host_str().is_none() {
            return Err(AppError::invalid_format(
                "image_url",
                "URL must have a valid host",
            ));
        }
        if raw.chars().count() > self.config.max_url_length {
            return Err(AppError::out_of_range(
                "image_url",
                format!(
                    "image URL exceeds maximum length ({} chars)",
                    self.config.max_url_length
                ),
            ));
        }
        Ok(())
    }
}
