// ABOUTME: Nutrient aggregation across line items, meals, days, and plans
// ABOUTME: Summation helpers plus recompute_totals for every total-carrying model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Bottom-up nutrient aggregation.
//!
//! Stored totals on templates, meals, days, and plans are derived data.
//! Each level's `recompute_totals` rebuilds its totals from its children
//! in a single pass, so calling it at the plan level after any child edit
//! restores consistency at every level below. Summation is plain f64
//! addition in declaration order; an empty collection yields zeros.

use crate::models::{DailyMeal, MacroNutrients, Meal, MealPlan, MealTemplate, MicroNutrients};

/// Sum macro profiles, returning zeros for an empty iterator
pub fn sum_macros<'a, I>(items: I) -> MacroNutrients
where
    I: IntoIterator<Item = &'a MacroNutrients>,
{
    let mut total = MacroNutrients::zero();
    for item in items {
        total.accumulate(item);
    }
    total
}

/// Sum micro profiles, returning zeros for an empty iterator
pub fn sum_micros<'a, I>(items: I) -> MicroNutrients
where
    I: IntoIterator<Item = &'a MicroNutrients>,
{
    let mut total = MicroNutrients::zero();
    for item in items {
        total.accumulate(item);
    }
    total
}

impl MealTemplate {
    /// Rebuild calorie, macro, and micro totals from the food lines
    pub fn recompute_totals(&mut self) {
        self.total_calories = self.food_items.iter().map(|i| i.calories).sum();
        self.total_macros = sum_macros(self.food_items.iter().map(|i| &i.macros));
        self.total_micros = sum_micros(self.food_items.iter().map(|i| &i.micros));
    }
}

impl Meal {
    /// Rebuild calorie and macro totals from the food lines
    pub fn recompute_totals(&mut self) {
        self.calories = self.food_items.iter().map(|i| i.calories).sum();
        self.macros = sum_macros(self.food_items.iter().map(|i| &i.macros));
    }
}

impl DailyMeal {
    /// Rebuild the day's totals from its meals
    ///
    /// Each meal's own totals are recomputed first, so a day-level call
    /// repairs drift introduced by direct edits to meal line items.
    pub fn recompute_totals(&mut self) {
        for meal in &mut self.meals {
            meal.recompute_totals();
        }
        self.total_calories = self.meals.iter().map(|m| m.calories).sum();
        self.total_macros = sum_macros(self.meals.iter().map(|m| &m.macros));
    }
}

impl MealPlan {
    /// Rebuild plan-level totals from the daily meals, cascading downward
    pub fn recompute_totals(&mut self) {
        for day in &mut self.daily_meals {
            day.recompute_totals();
        }
        self.total_calories = self.daily_meals.iter().map(|d| d.total_calories).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealFoodItem, MealType, ServingUnit};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn line(calories: f64, protein: f64) -> MealFoodItem {
        MealFoodItem {
            food_id: Uuid::new_v4(),
            food_name: "test".into(),
            food_category: None,
            serving_unit: ServingUnit::Gram,
            amount: 100.0,
            calories,
            macros: MacroNutrients {
                protein,
                ..MacroNutrients::zero()
            },
        }
    }

    fn meal(lines: Vec<MealFoodItem>) -> Meal {
        let mut meal = Meal {
            id: "breakfast".into(),
            meal_type: MealType::Breakfast,
            time: None,
            template_id: None,
            food_items: lines,
            calories: 0.0,
            macros: MacroNutrients::zero(),
            notes: None,
            is_completed: false,
        };
        meal.recompute_totals();
        meal
    }

    #[test]
    fn test_empty_sum_is_zero() {
        assert_eq!(sum_macros(std::iter::empty()), MacroNutrients::zero());
        assert_eq!(sum_micros(std::iter::empty()), MicroNutrients::zero());
    }

    #[test]
    fn test_sum_is_order_independent() {
        let a = MacroNutrients {
            protein: 10.0,
            carbohydrates: 20.0,
            fat: 5.0,
            fiber: 3.0,
            sugar: 1.0,
        };
        let b = MacroNutrients {
            protein: 7.5,
            carbohydrates: 12.25,
            fat: 2.5,
            fiber: 0.5,
            sugar: 4.0,
        };
        assert_eq!(sum_macros([&a, &b]), sum_macros([&b, &a]));
    }

    #[test]
    fn test_day_totals_cascade() {
        let date = NaiveDate::from_ymd_opt(2026, 4, 6).unwrap();
        let mut day = DailyMeal::new(date);
        day.meals.push(meal(vec![line(300.0, 20.0), line(150.0, 5.0)]));
        day.meals.push(meal(vec![line(550.0, 35.0)]));
        day.recompute_totals();
        assert!((day.total_calories - 1000.0).abs() < 1e-9);
        assert!((day.total_macros.protein - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_recompute_repairs_drift() {
        let date = NaiveDate::from_ymd_opt(2026, 4, 6).unwrap();
        let mut day = DailyMeal::new(date);
        day.meals.push(meal(vec![line(400.0, 30.0)]));
        day.recompute_totals();

        // Drift: a stale stored total disagreeing with the line items
        day.meals[0].calories = 9999.0;
        day.total_calories = 9999.0;

        day.recompute_totals();
        assert!((day.total_calories - 400.0).abs() < 1e-9);
        assert!((day.meals[0].calories - 400.0).abs() < 1e-9);
    }
}
