// ABOUTME: Meal template validation: names, tags, and food line rules
// ABOUTME: Rejects duplicate (food, unit) lines and enforces count/amount caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;
use uuid::Uuid;

use crate::config::{MealValidationConfig, NutritionConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{MealTemplate, ServingUnit};
use crate::requests::{
    AddFoodToTemplateRequest, CreateMealTemplateRequest, TemplateFoodItemRequest,
    UpdateMealTemplateRequest,
};
use crate::validators::into_result;

/// Validates meal template requests against configured bounds
#[derive(Debug, Clone)]
pub struct MealValidator {
    config: MealValidationConfig,
}

impl Default for MealValidator {
    fn default() -> Self {
        Self {
            config: NutritionConfig::global().meal.clone(),
        }
    }
}

impl MealValidator {
    /// Create a validator with explicit bounds
    #[must_use]
    pub const fn with_config(config: MealValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a template creation request.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing every failed stage.
    pub fn validate_create(&self, req: &CreateMealTemplateRequest) -> AppResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_name(&req.name) {
            errors.push(e);
        }
        if let Some(description) = &req.description {
            if let Err(e) = self.validate_description(description) {
                errors.push(e);
            }
        }
        if let Err(e) = self.validate_food_items(&req.food_items) {
            errors.push(e);
        }
        if !req.tags.is_empty() {
            if let Err(e) = self.validate_tags(&req.tags) {
                errors.push(e);
            }
        }

        into_result(errors)
    }

    /// Validate a partial template update; only provided fields are checked.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing every failed stage.
    pub fn validate_update(&self, req: &UpdateMealTemplateRequest) -> AppResult<()> {
        let mut errors = Vec::new();

        if let Some(name) = &req.name {
            if let Err(e) = self.validate_name(name) {
                errors.push(e);
            }
        }
        if let Some(description) = &req.description {
            if let Err(e) = self.validate_description(description) {
                errors.push(e);
            }
        }
        if let Some(items) = &req.food_items {
            if let Err(e) = self.validate_food_items(items) {
                errors.push(e);
            }
        }
        if let Some(tags) = &req.tags {
            if !tags.is_empty() {
                if let Err(e) = self.validate_tags(tags) {
                    errors.push(e);
                }
            }
        }

        into_result(errors)
    }

    /// Validate appending a food line to an existing template.
    ///
    /// Checks the line itself plus its effect on the template: the line
    /// must not duplicate an existing (food, unit) pair and the template
    /// must stay under the configured line cap.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing every failed check.
    pub fn validate_add_food(
        &self,
        template: &MealTemplate,
        req: &AddFoodToTemplateRequest,
    ) -> AppResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_amount(req.amount, 1) {
            errors.push(e);
        }
        if template.food_items.len() >= self.config.max_food_items {
            errors.push(AppError::out_of_range(
                "food_items",
                format!(
                    "template already holds the maximum number of food items ({})",
                    self.config.max_food_items
                ),
            ));
        }
        if template
            .food_items
            .iter()
            .any(|item| item.food_id == req.food_id && item.serving_unit == req.serving_unit)
        {
            errors.push(
                AppError::invalid_input(
                    "duplicate food item with same food_id and serving_unit",
                )
                .with_field("food_items")
                .with_resource_id(req.food_id.to_string()),
            );
        }

        into_result(errors)
    }

    fn validate_name(&self, name: &str) -> AppResult<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::missing_field("name", "name cannot be empty"));
        }
        if trimmed.chars().count() > self.config.max_name_length {
            return Err(AppError::out_of_range(
                "name",
                format!(
                    "name exceeds maximum length ({} chars)",
                    self.config.max_name_length
                ),
            ));
        }
        Ok(())
    }

    fn validate_description(&self, description: &str) -> AppResult<()> {
        if description.chars().count() > self.config.max_description_length {
            return Err(AppError::out_of_range(
                "description",
                format!(
                    "description exceeds maximum length ({} chars)",
                    self.config.max_description_length
                ),
            ));
        }
        Ok(())
    }

    fn validate_food_items(&self, items: &[TemplateFoodItemRequest]) -> AppResult<()> {
        if items.is_empty() {
            return Err(AppError::missing_field(
                "food_items",
                "at least one food item is required",
            ));
        }
        if items.len() > self.config.max_food_items {
            return Err(AppError::out_of_range(
                "food_items",
                format!(
                    "number of food items exceeds maximum ({})",
                    self.config.max_food_items
                ),
            ));
        }

        let mut seen: HashSet<(Uuid, ServingUnit)> = HashSet::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let index = i + 1;
            self.validate_amount(item.amount, index)?;
            if !seen.insert((item.food_id, item.serving_unit)) {
                return Err(AppError::invalid_input(format!(
                    "food item {index}: duplicate food item with same food_id and serving_unit"
                ))
                .with_field("food_items"));
            }
        }
        Ok(())
    }

    fn validate_tags(&self, tags: &[String]) -> AppResult<()> {
        if tags.len() > self.config.max_tags {
            return Err(AppError::out_of_range(
                "tags",
                format!("maximum number of tags is {}", self.config.max_tags),
            ));
        }
        for (i, tag) in tags.iter().enumerate() {
            let index = i + 1;
            let trimmed = tag.trim();
            if trimmed.is_empty() {
                return Err(AppError::invalid_input(format!(
                    "tag {index}: cannot be empty"
                ))
                .with_field("tags"));
            }
            if trimmed.chars().count() > self.config.max_tag_length {
                return Err(AppError::out_of_range(
                    "tags",
                    format!(
                        "tag {index}: exceeds maximum length ({} chars)",
                        self.config.max_tag_length
                    ),
                ));
            }
        }
        Ok(())
    }

    fn validate_amount(&self, amount: f64, index: usize) -> AppResult<()> {
        if amount <= 0.0 {
            return Err(AppError::out_of_range(
                "amount",
                format!("food item {index}: amount must be greater than 0"),
            ));
        }
        if amount > self.config.max_item_amount {
            return Err(AppError::out_of_range(
                "amount",
                format!(
                    "food item {index}: amount exceeds maximum ({:.0})",
                    self.config.max_item_amount
                ),
            ));
        }
        Ok(())
    }
}
