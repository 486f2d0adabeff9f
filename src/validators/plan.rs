// ABOUTME: Meal plan validation: names, date ranges, and calorie targets
// ABOUTME: Date-range checks take an explicit "today" so tests stay deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveDate, Utc};

use crate::config::{NutritionConfig, PlanValidationConfig};
use crate::errors::{AppError, AppResult};
use crate::requests::{CreateMealPlanRequest, UpdateMealPlanRequest};
use crate::validators::into_result;

/// Validates meal plan requests against configured bounds
#[derive(Debug, Clone)]
pub struct PlanValidator {
    config: PlanValidationConfig,
}

impl Default for PlanValidator {
    fn default() -> Self {
        Self {
            config: NutritionConfig::global().plan.clone(),
        }
    }
}

impl PlanValidator {
    /// Create a validator with explicit bounds
    #[must_use]
    pub const fn with_config(config: PlanValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a plan creation request against the current date.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing every failed stage.
    pub fn validate_create(&self, req: &CreateMealPlanRequest) -> AppResult<()> {
        self.validate_create_at(req, Utc::now().date_naive())
    }

    /// Validate a plan creation request against an explicit `today`.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing every failed stage.
    pub fn validate_create_at(
        &self,
        req: &CreateMealPlanRequest,
        today: NaiveDate,
    ) -> AppResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_name(&req.name) {
            errors.push(e);
        }
        if let Some(description) = &req.description {
            if let Err(e) = self.validate_description(description) {
                errors.push(e);
            }
        }
        if let Err(e) = self.validate_date_range(req.start_date, req.end_date, today) {
            errors.push(e);
        }
        if let Err(e) = self.validate_target_calories(req.target_calories) {
            errors.push(e);
        }

        into_result(errors)
    }

    /// Validate a partial plan update; only provided fields are checked.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing every failed stage.
    pub fn validate_update(&self, req: &UpdateMealPlanRequest) -> AppResult<()> {
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
        if let Some(target_calories) = req.target_calories {
            if let Err(e) = self.validate_target_calories(target_calories) {
                errors.push(e);
            }
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

    /// Date-range rules: start no earlier than `today`, end strictly after
    /// start, and the span within the configured maximum.
    fn validate_date_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<()> {
        if start_date < today {
            return Err(AppError::invalid_input("start date cannot be in the past")
                .with_field("start_date"));
        }
        if end_date <= start_date {
            return Err(
                AppError::invalid_input("end date must be after start date")
                    .with_field("end_date"),
            );
        }
        let span_days = (end_date - start_date).num_days();
        if span_days > self.config.max_span_days {
            return Err(AppError::out_of_range(
                "end_date",
                format!(
                    "date range exceeds maximum ({} days)",
                    self.config.max_span_days
                ),
            ));
        }
        Ok(())
    }

    fn validate_target_calories(&self, calories: f64) -> AppResult<()> {
        if calories < self.config.min_target_calories {
            return Err(AppError::out_of_range(
                "target_calories",
                format!(
                    "target calories ({calories:.2}) is below minimum ({:.2})",
                    self.config.min_target_calories
                ),
            ));
        }
        if calories > self.config.max_target_calories {
            return Err(AppError::out_of_range(
                "target_calories",
                format!(
                    "target calories ({calories:.2}) exceeds maximum ({:.2})",
                    self.config.max_target_calories
                ),
            ));
        }
        Ok(())
    }
}
