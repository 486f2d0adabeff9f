// ABOUTME: Meal template composition from validated requests and a food source
// ABOUTME: Builds line items by resolving servings, scaling nutrients, and snapshotting names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Turning raw template requests into fully-priced meal templates.
//!
//! The composer is the only writer of template line items. For every
//! requested line it looks the food up through a [`FoodSource`], resolves
//! the serving amount to grams, scales the per-100g baseline, and snapshots
//! the food's display name so the template stays readable if the food is
//! later renamed. Any line failing to resolve aborts the whole operation;
//! a template is never left with a partial line set.

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{FoodItem, MealTemplate, MealTemplateFoodItem};
use crate::nutrition::calculator::{resolve_serving_grams, scale_nutrients};
use crate::requests::{
    AddFoodToTemplateRequest, CreateMealTemplateRequest, TemplateFoodItemRequest,
    UpdateMealTemplateRequest,
};
use crate::validators::MealValidator;

/// Read access to food definitions by id.
///
/// Implemented by whatever store the embedding application uses; tests use
/// an in-memory map.
pub trait FoodSource {
    /// Fetch a food definition by id
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::ResourceNotFound`] when no food
    /// with that id exists.
    fn food_by_id(&self, id: Uuid) -> AppResult<FoodItem>;
}

/// Composes and mutates meal templates against a [`FoodSource`]
#[derive(Debug, Default)]
pub struct MealComposer {
    validator: MealValidator,
}

impl MealComposer {
    /// Create a composer validating against the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer with a specific validator (mostly for tests)
    #[must_use]
    pub const fn with_validator(validator: MealValidator) -> Self {
        Self { validator }
    }

    /// Build a new meal template from a creation request.
    ///
    /// Validates the request, resolves and prices every food line, and
    /// returns the template with totals already computed.
    ///
    /// # Errors
    ///
    /// Returns validation errors for a malformed request, or not-found
    /// errors when a referenced food or serving unit does not exist.
    pub fn compose_template(
        &self,
        source: &dyn FoodSource,
        user_id: Uuid,
        req: &CreateMealTemplateRequest,
    ) -> AppResult<MealTemplate> {
        self.validator.validate_create(req)?;
        let food_items = self.build_line_items(source, &req.food_items)?;

        let now = Utc::now();
        let mut template = MealTemplate {
            id: Uuid::new_v4(),
            user_id,
            name: req.name.clone(),
            description: req.description.clone(),
            meal_type: req.meal_type,
            food_items,
            total_calories: 0.0,
            total_macros: crate::models::MacroNutrients::zero(),
            total_micros: crate::models::MicroNutrients::zero(),
            tags: req.tags.clone(),
            is_public: req.is_public,
            created_at: now,
            updated_at: now,
        };
        template.recompute_totals();

        tracing::debug!(
            template_id = %template.id,
            items = template.food_items.len(),
            total_calories = template.total_calories,
            "composed meal template"
        );
        Ok(template)
    }

    /// Append a single food line to an existing template.
    ///
    /// Totals are updated incrementally from the new line alone. Callers
    /// that mutate templates from multiple tasks must serialize access
    /// themselves; the composer assumes exclusive access to the template.
    ///
    /// # Errors
    ///
    /// Returns validation errors for a malformed line, or not-found errors
    /// when the food or serving unit does not exist.
    pub fn extend_template(
        &self,
        source: &dyn FoodSource,
        template: &mut MealTemplate,
        req: &AddFoodToTemplateRequest,
    ) -> AppResult<()> {
        self.validator.validate_add_food(template, req)?;

        let line = self.build_line_item(
            source,
            &TemplateFoodItemRequest {
                food_id: req.food_id,
                serving_unit: req.serving_unit,
                amount: req.amount,
            },
        )?;

        template.total_calories += line.calories;
        template.total_macros.accumulate(&line.macros);
        template.total_micros.accumulate(&line.micros);
        template.food_items.push(line);
        template.updated_at = Utc::now();
        Ok(())
    }

    /// Apply a partial update to a template.
    ///
    /// Absent fields stay unchanged. A replacement `food_items` list is a
    /// full replacement: every line is re-resolved against the source and
    /// totals are rebuilt from scratch.
    ///
    /// # Errors
    ///
    /// Returns validation errors for malformed replacement fields, or
    /// not-found errors when a replacement line fails to resolve.
    pub fn apply_update(
        &self,
        source: &dyn FoodSource,
        template: &mut MealTemplate,
        req: &UpdateMealTemplateRequest,
    ) -> AppResult<()> {
        self.validator.validate_update(req)?;

        if let Some(name) = &req.name {
            template.name.clone_from(name);
        }
        if let Some(description) = &req.description {
            template.description = Some(description.clone());
        }
        if let Some(meal_type) = req.meal_type {
            template.meal_type = meal_type;
        }
        if let Some(tags) = &req.tags {
            template.tags.clone_from(tags);
        }
        if let Some(is_public) = req.is_public {
            template.is_public = is_public;
        }
        if let Some(items) = &req.food_items {
            template.food_items = self.build_line_items(source, items)?;
            template.recompute_totals();
        }
        template.updated_at = Utc::now();
        Ok(())
    }

    /// Resolve and price every requested line, aborting on the first failure
    fn build_line_items(
        &self,
        source: &dyn FoodSource,
        items: &[TemplateFoodItemRequest],
    ) -> AppResult<Vec<MealTemplateFoodItem>> {
        items
            .iter()
            .map(|item| self.build_line_item(source, item))
            .collect()
    }

    fn build_line_item(
        &self,
        source: &dyn FoodSource,
        item: &TemplateFoodItemRequest,
    ) -> AppResult<MealTemplateFoodItem> {
        let food = source.food_by_id(item.food_id)?;
        let total_grams = resolve_serving_grams(&food, item.serving_unit, item.amount)?;
        let computed = scale_nutrients(&food, total_grams);

        tracing::trace!(
            food_id = %food.id,
            unit = %item.serving_unit,
            amount = item.amount,
            total_grams,
            "resolved template line"
        );

        Ok(MealTemplateFoodItem {
            food_id: food.id,
            food_name: food.display_name().to_owned(),
            serving_unit: item.serving_unit,
            amount: item.amount,
            calories: computed.calories,
            macros: computed.macros,
            micros: computed.micros,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, ErrorCode};
    use crate::models::{
        FoodCategory, FoodOrigin, LanguageCode, LocalizedText, MacroNutrients, MealType,
        MicroNutrients, ServingSize, ServingUnit, Visibility,
    };
    use std::collections::HashMap;

    struct MapSource(HashMap<Uuid, FoodItem>);

    impl FoodSource for MapSource {
        fn food_by_id(&self, id: Uuid) -> AppResult<FoodItem> {
            self.0
                .get(&id)
                .cloned()
                .ok_or_else(|| AppError::not_found("food item").with_resource_id(id.to_string()))
        }
    }

    fn rice() -> FoodItem {
        FoodItem {
            id: Uuid::new_v4(),
            name: LocalizedText::new().with(LanguageCode::En, "White rice"),
            search_terms: vec![],
            description: None,
            category: FoodCategory::Grain,
            macros: MacroNutrients {
                protein: 2.7,
                carbohydrates: 28.0,
                fat: 0.3,
                fiber: 0.4,
                sugar: 0.1,
            },
            micros: MicroNutrients::zero(),
            serving_sizes: vec![
                ServingSize::new(ServingUnit::Gram, 100.0, 100.0),
                ServingSize::new(ServingUnit::Cup, 1.0, 158.0),
            ],
            calories: 130.0,
            created_by: Uuid::new_v4(),
            visibility: Visibility::Public,
            origin: FoodOrigin::User,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_request(lines: Vec<TemplateFoodItemRequest>) -> CreateMealTemplateRequest {
        CreateMealTemplateRequest {
            name: "Lunch bowl".into(),
            description: None,
            meal_type: MealType::Lunch,
            food_items: lines,
            tags: vec![],
            is_public: false,
        }
    }

    #[test]
    fn test_compose_prices_lines_and_totals() {
        let food = rice();
        let food_id = food.id;
        let source = MapSource(HashMap::from([(food_id, food)]));
        let composer = MealComposer::new();

        let template = composer
            .compose_template(
                &source,
                Uuid::new_v4(),
                &create_request(vec![TemplateFoodItemRequest {
                    food_id,
                    serving_unit: ServingUnit::Gram,
                    amount: 200.0,
                }]),
            )
            .unwrap();

        assert_eq!(template.food_items.len(), 1);
        assert_eq!(template.food_items[0].food_name, "White rice");
        assert!((template.food_items[0].calories - 260.0).abs() < 1e-9);
        assert!((template.total_calories - 260.0).abs() < 1e-9);
        assert!((template.total_macros.carbohydrates - 56.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_food_aborts_composition() {
        let source = MapSource(HashMap::new());
        let composer = MealComposer::new();

        let err = composer
            .compose_template(
                &source,
                Uuid::new_v4(),
                &create_request(vec![TemplateFoodItemRequest {
                    food_id: Uuid::new_v4(),
                    serving_unit: ServingUnit::Gram,
                    amount: 100.0,
                }]),
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_extend_matches_full_recompute() {
        let food = rice();
        let food_id = food.id;
        let source = MapSource(HashMap::from([(food_id, food)]));
        let composer = MealComposer::new();

        let mut template = composer
            .compose_template(
                &source,
                Uuid::new_v4(),
                &create_request(vec![TemplateFoodItemRequest {
                    food_id,
                    serving_unit: ServingUnit::Cup,
                    amount: 1.0,
                }]),
            )
            .unwrap();

        composer
            .extend_template(
                &source,
                &mut template,
                &AddFoodToTemplateRequest {
                    food_id,
                    serving_unit: ServingUnit::Gram,
                    amount: 50.0,
                },
            )
            .unwrap();

        let incremental_calories = template.total_calories;
        let incremental_macros = template.total_macros;
        template.recompute_totals();
        assert!((template.total_calories - incremental_calories).abs() < 1e-9);
        assert_eq!(template.total_macros, incremental_macros);
    }

    #[test]
    fn test_update_replaces_lines_and_rebuilds_totals() {
        let food = rice();
        let food_id = food.id;
        let source = MapSource(HashMap::from([(food_id, food)]));
        let composer = MealComposer::new();

        let mut template = composer
            .compose_template(
                &source,
                Uuid::new_v4(),
                &create_request(vec![TemplateFoodItemRequest {
                    food_id,
                    serving_unit: ServingUnit::Gram,
                    amount: 300.0,
                }]),
            )
            .unwrap();

        composer
            .apply_update(
                &source,
                &mut template,
                &UpdateMealTemplateRequest {
                    name: Some("Small bowl".into()),
                    food_items: Some(vec![TemplateFoodItemRequest {
                        food_id,
                        serving_unit: ServingUnit::Gram,
                        amount: 100.0,
                    }]),
                    ..UpdateMealTemplateRequest::default()
                },
            )
            .unwrap();

        assert_eq!(template.name, "Small bowl");
        assert_eq!(template.food_items.len(), 1);
        assert!((template.total_calories - 130.0).abs() < 1e-9);
    }
}
