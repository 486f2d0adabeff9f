// ABOUTME: Food definition model with multi-language names and serving-size table
// ABOUTME: FoodItem, ServingSize, ServingUnit, FoodCategory, and LocalizedText
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::nutrients::{MacroNutrients, MicroNutrients};
use crate::errors::AppError;
use crate::requests::CreateFoodRequest;

/// Supported language codes for localized text fields
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// English (mandatory for food names)
    En,
    /// Vietnamese
    Vi,
}

impl LanguageCode {
    /// Wire/database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "vi" => Ok(Self::Vi),
            other => Err(AppError::invalid_input(format!(
                "language '{other}' is not supported. Supported languages: en, vi"
            ))),
        }
    }
}

/// Text carried in one or more languages
///
/// Lookup never fails: [`LocalizedText::get`] returns an empty string for a
/// missing language. "English mandatory" is a validator rule, not a type
/// invariant, so partially-filled values can be constructed and validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<LanguageCode, String>);

impl LocalizedText {
    /// Empty text in no language
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style entry insertion
    #[must_use]
    pub fn with(mut self, lang: LanguageCode, text: impl Into<String>) -> Self {
        self.0.insert(lang, text.into());
        self
    }

    /// Insert or replace the entry for a language
    pub fn insert(&mut self, lang: LanguageCode, text: impl Into<String>) {
        self.0.insert(lang, text.into());
    }

    /// Text for a language, or `""` when that language is absent
    #[must_use]
    pub fn get(&self, lang: LanguageCode) -> &str {
        self.0.get(&lang).map_or("", String::as_str)
    }

    /// English text, or `""` when absent
    #[must_use]
    pub fn english(&self) -> &str {
        self.get(LanguageCode::En)
    }

    /// True when no language has an entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of language entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over (language, text) entries in language order
    pub fn entries(&self) -> impl Iterator<Item = (LanguageCode, &str)> {
        self.0.iter().map(|(lang, text)| (*lang, text.as_str()))
    }
}

/// Closed set of serving units a food can declare
///
/// Parsing via [`FromStr`] is the canonical membership check for this
/// enumeration; there is deliberately no other string-matching table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingUnit {
    /// Grams (the canonical base unit)
    Gram,
    /// Kilograms
    #[serde(rename = "kg")]
    Kilogram,
    /// Count of whole items
    Piece,
    /// US cup
    Cup,
    /// Milliliters
    #[serde(rename = "ml")]
    Milliliter,
    /// A packaged box/container
    Box,
}

impl ServingUnit {
    /// Wire/database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gram => "gram",
            Self::Kilogram => "kg",
            Self::Piece => "piece",
            Self::Cup => "cup",
            Self::Milliliter => "ml",
            Self::Box => "box",
        }
    }
}

impl fmt::Display for ServingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServingUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gram" => Ok(Self::Gram),
            "kg" => Ok(Self::Kilogram),
            "piece" => Ok(Self::Piece),
            "cup" => Ok(Self::Cup),
            "ml" => Ok(Self::Milliliter),
            "box" => Ok(Self::Box),
            other => Err(AppError::invalid_input(format!(
                "invalid unit '{other}'. Valid units: gram, kg, piece, cup, ml, box"
            ))),
        }
    }
}

/// Food category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Meats, fish, eggs, protein sources
    Protein,
    /// Vegetables
    Vegetable,
    /// Fruits
    Fruit,
    /// Dairy products
    Dairy,
    /// Grains and cereals
    Grain,
}

impl FoodCategory {
    /// Wire/database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Dairy => "dairy",
            Self::Grain => "grain",
        }
    }
}

impl FromStr for FoodCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "protein" => Ok(Self::Protein),
            "vegetable" => Ok(Self::Vegetable),
            "fruit" => Ok(Self::Fruit),
            "dairy" => Ok(Self::Dairy),
            "grain" => Ok(Self::Grain),
            other => Err(AppError::invalid_input(format!(
                "invalid category '{other}'. Valid categories: protein, vegetable, fruit, dairy, grain"
            ))),
        }
    }
}

/// Whether a food is visible to other users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible to every user
    Public,
    /// Visible to the creator only
    Private,
}

impl Visibility {
    /// Wire/database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl FromStr for Visibility {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            other => Err(AppError::invalid_input(format!(
                "invalid visibility '{other}'. Valid values: public, private"
            ))),
        }
    }
}

/// How a food definition entered the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FoodOrigin {
    /// Created by a user
    #[default]
    User,
    /// Bulk-imported from an external dataset
    Imported,
}

/// One row of a food's serving-size table
///
/// `gram_equivalent` is the weight in grams of `amount` units, e.g. unit
/// `cup`, amount 1, gram_equivalent 240 means "1 cup = 240 g".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSize {
    /// Measurement unit
    pub unit: ServingUnit,
    /// How many units this row describes (e.g. 1 cup, 100 gram)
    pub amount: f64,
    /// Optional human-readable description ("1 medium apple")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Weight in grams of `amount` units
    pub gram_equivalent: f64,
}

impl ServingSize {
    /// Create a serving size without a description
    #[must_use]
    pub const fn new(unit: ServingUnit, amount: f64, gram_equivalent: f64) -> Self {
        Self {
            unit,
            amount,
            description: None,
            gram_equivalent,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The recommended canonical base row: unit gram, amount 100, 100 g
    #[must_use]
    pub fn is_gram_base(&self) -> bool {
        self.unit == ServingUnit::Gram && self.amount == 100.0 && self.gram_equivalent == 100.0
    }
}

/// A food definition with per-100g nutrient baselines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique food identifier
    pub id: Uuid,
    /// Localized name (English mandatory, enforced by the food validator)
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
    /// Declared serving sizes (at least one, enforced by the food validator)
    pub serving_sizes: Vec<ServingSize>,
    /// Calories per 100 g
    pub calories: f64,
    /// Owner reference
    pub created_by: Uuid,
    /// Public/private visibility
    pub visibility: Visibility,
    /// User-created or imported
    #[serde(default)]
    pub origin: FoodOrigin,
    /// Optional image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl FoodItem {
    /// Build a food definition from an accepted creation request
    #[must_use]
    pub fn from_request(req: &CreateFoodRequest, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            search_terms: req.search_terms.clone(),
            description: req.description.clone(),
            category: req.category,
            macros: req.macros,
            micros: req.micros,
            serving_sizes: req.serving_sizes.clone(),
            calories: req.calories,
            created_by,
            visibility: req.visibility,
            origin: FoodOrigin::User,
            image_url: req.image_url.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// English name, falling back to the first available language
    #[must_use]
    pub fn display_name(&self) -> &str {
        let english = self.name.english();
        if !english.is_empty() {
            return english;
        }
        self.name.entries().next().map_or("", |(_, text)| text)
    }

    /// First serving-size row declared for a unit, if any
    #[must_use]
    pub fn serving(&self, unit: ServingUnit) -> Option<&ServingSize> {
        self.serving_sizes.iter().find(|s| s.unit == unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_text_missing_language_is_empty() {
        let name = LocalizedText::new().with(LanguageCode::En, "Apple");
        assert_eq!(name.get(LanguageCode::En), "Apple");
        assert_eq!(name.get(LanguageCode::Vi), "");
    }

    #[test]
    fn test_display_name_falls_back_to_first_language() {
        let mut food = sample_food();
        food.name = LocalizedText::new().with(LanguageCode::Vi, "Táo");
        assert_eq!(food.display_name(), "Táo");
    }

    #[test]
    fn test_serving_unit_wire_names() {
        assert_eq!(
            serde_json::to_string(&ServingUnit::Kilogram).unwrap(),
            "\"kg\""
        );
        assert_eq!(
            serde_json::to_string(&ServingUnit::Milliliter).unwrap(),
            "\"ml\""
        );
        let unit: ServingUnit = serde_json::from_str("\"gram\"").unwrap();
        assert_eq!(unit, ServingUnit::Gram);
    }

    #[test]
    fn test_serving_unit_parse_rejects_unknown() {
        assert!("spoonful".parse::<ServingUnit>().is_err());
        assert_eq!("cup".parse::<ServingUnit>().unwrap(), ServingUnit::Cup);
    }

    #[test]
    fn test_gram_base_detection() {
        assert!(ServingSize::new(ServingUnit::Gram, 100.0, 100.0).is_gram_base());
        assert!(!ServingSize::new(ServingUnit::Gram, 50.0, 50.0).is_gram_base());
        assert!(!ServingSize::new(ServingUnit::Cup, 100.0, 100.0).is_gram_base());
    }

    #[test]
    fn test_serving_lookup_first_match() {
        let food = sample_food();
        let serving = food.serving(ServingUnit::Piece).unwrap();
        assert!((serving.gram_equivalent - 182.0).abs() < 1e-9);
        assert!(food.serving(ServingUnit::Box).is_none());
    }

    fn sample_food() -> FoodItem {
        FoodItem {
            id: Uuid::new_v4(),
            name: LocalizedText::new().with(LanguageCode::En, "Apple"),
            search_terms: vec![],
            description: None,
            category: FoodCategory::Fruit,
            macros: MacroNutrients {
                protein: 0.3,
                carbohydrates: 14.0,
                fat: 0.2,
                fiber: 2.4,
                sugar: 10.4,
            },
            micros: MicroNutrients::default(),
            serving_sizes: vec![
                ServingSize::new(ServingUnit::Gram, 100.0, 100.0),
                ServingSize::new(ServingUnit::Piece, 1.0, 182.0)
                    .with_description("1 medium apple"),
            ],
            calories: 63.8,
            created_by: Uuid::new_v4(),
            visibility: Visibility::Public,
            origin: FoodOrigin::User,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}
