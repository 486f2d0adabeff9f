// ABOUTME: Macro and micro nutrient vectors with scaling and energy derivation
// ABOUTME: All values are grams (or mg/mcg for micros) per the owning entity's basis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Energy density of protein (kcal per gram)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
/// Energy density of carbohydrates (kcal per gram)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
/// Energy density of fat (kcal per gram)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
/// Approximate energy density of fiber (kcal per gram)
pub const KCAL_PER_GRAM_FIBER: f64 = 2.0;

/// Macronutrient vector
///
/// The basis depends on the owning entity: per 100 g for a food baseline,
/// absolute grams for a computed line item or aggregate total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroNutrients {
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbohydrates: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
    /// Sugar in grams
    #[serde(default)]
    pub sugar: f64,
}

impl MacroNutrients {
    /// Zero vector (identity element for aggregation)
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            protein: 0.0,
            carbohydrates: 0.0,
            fat: 0.0,
            fiber: 0.0,
            sugar: 0.0,
        }
    }

    /// Scale every field by a multiplier
    #[must_use]
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            protein: self.protein * multiplier,
            carbohydrates: self.carbohydrates * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
        }
    }

    /// Fold another vector into this one, field by field
    pub fn accumulate(&mut self, other: &Self) {
        self.protein += other.protein;
        self.carbohydrates += other.carbohydrates;
        self.fat += other.fat;
        self.fiber += other.fiber;
        self.sugar += other.sugar;
    }

    /// Energy derived from the macro profile
    ///
    /// Formula: protein x 4 + carbs x 4 + fat x 9 + fiber x 2 (kcal/g
    /// Atwater factors, fiber approximated at 2 kcal/g).
    #[must_use]
    pub fn energy_kcal(&self) -> f64 {
        self.fat.mul_add(
            KCAL_PER_GRAM_FAT,
            self.protein.mul_add(
                KCAL_PER_GRAM_PROTEIN,
                self.carbohydrates
                    .mul_add(KCAL_PER_GRAM_CARBS, self.fiber * KCAL_PER_GRAM_FIBER),
            ),
        )
    }
}

/// Micronutrient vector
///
/// All fields are optional on the wire (absence means zero); the same basis
/// convention as [`MacroNutrients`] applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroNutrients {
    /// Vitamin A (mcg)
    pub vitamin_a: f64,
    /// Vitamin C (mg)
    pub vitamin_c: f64,
    /// Calcium (mg)
    pub calcium: f64,
    /// Iron (mg)
    pub iron: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Potassium (mg)
    pub potassium: f64,
}

impl MicroNutrients {
    /// Zero vector (identity element for aggregation)
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            vitamin_a: 0.0,
            vitamin_c: 0.0,
            calcium: 0.0,
            iron: 0.0,
            sodium: 0.0,
            potassium: 0.0,
        }
    }

    /// Scale every field by a multiplier
    #[must_use]
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            vitamin_a: self.vitamin_a * multiplier,
            vitamin_c: self.vitamin_c * multiplier,
            calcium: self.calcium * multiplier,
            iron: self.iron * multiplier,
            sodium: self.sodium * multiplier,
            potassium: self.potassium * multiplier,
        }
    }

    /// Fold another vector into this one, field by field
    pub fn accumulate(&mut self, other: &Self) {
        self.vitamin_a += other.vitamin_a;
        self.vitamin_c += other.vitamin_c;
        self.calcium += other.calcium;
        self.iron += other.iron;
        self.sodium += other.sodium;
        self.potassium += other.potassium;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_kcal_from_macros() {
        let macros = MacroNutrients {
            protein: 0.3,
            carbohydrates: 14.0,
            fat: 0.2,
            fiber: 2.4,
            sugar: 10.4,
        };
        // 0.3*4 + 14*4 + 0.2*9 + 2.4*2 = 63.8
        assert!((macros.energy_kcal() - 63.8).abs() < 1e-9);
    }

    #[test]
    fn test_sugar_does_not_contribute_energy() {
        let base = MacroNutrients {
            protein: 10.0,
            carbohydrates: 20.0,
            fat: 5.0,
            fiber: 3.0,
            sugar: 0.0,
        };
        let sweet = MacroNutrients { sugar: 15.0, ..base };
        assert!((base.energy_kcal() - sweet.energy_kcal()).abs() < 1e-9);
    }

    #[test]
    fn test_scaled_is_elementwise() {
        let macros = MacroNutrients {
            protein: 2.0,
            carbohydrates: 4.0,
            fat: 1.0,
            fiber: 0.5,
            sugar: 3.0,
        };
        let doubled = macros.scaled(2.0);
        assert!((doubled.protein - 4.0).abs() < 1e-9);
        assert!((doubled.carbohydrates - 8.0).abs() < 1e-9);
        assert!((doubled.fat - 2.0).abs() < 1e-9);
        assert!((doubled.fiber - 1.0).abs() < 1e-9);
        assert!((doubled.sugar - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_micros_default_is_zero() {
        assert_eq!(MicroNutrients::default(), MicroNutrients::zero());
    }

    #[test]
    fn test_micros_deserialize_with_absent_fields() {
        let micros: MicroNutrients = serde_json::from_str(r#"{"iron": 0.12}"#).unwrap();
        assert!((micros.iron - 0.12).abs() < 1e-9);
        assert!((micros.sodium).abs() < 1e-9);
    }
}
