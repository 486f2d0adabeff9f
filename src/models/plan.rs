// ABOUTME: Meal plan models spanning a date range with per-day aggregates
// ABOUTME: PlanType, PlanGoal, PlanStatus, DailyMeal, and MealPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::meal::Meal;
use super::nutrients::MacroNutrients;
use crate::errors::AppError;
use crate::requests::CreateMealPlanRequest;

/// Cadence of a meal plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Week-oriented plan
    Weekly,
    /// Month-oriented plan
    Monthly,
}

impl PlanType {
    /// Wire/database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl FromStr for PlanType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(AppError::invalid_input(format!(
                "invalid plan type '{other}'. Valid types: weekly, monthly"
            ))),
        }
    }
}

/// Dietary goal a plan is built around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanGoal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus with high protein
    MuscleGain,
    /// Caloric balance
    Maintenance,
}

impl PlanGoal {
    /// Wire/database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
        }
    }
}

impl FromStr for PlanGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight_loss" => Ok(Self::WeightLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(AppError::invalid_input(format!(
                "invalid goal '{other}'. Valid goals: weight_loss, muscle_gain, maintenance"
            ))),
        }
    }
}

/// Lifecycle state of a meal plan
///
/// Plans start as `Draft`. Transition legality is deliberately not enforced
/// here; the owning service decides when a plan may become active or
/// completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Being composed, not yet followed
    #[default]
    Draft,
    /// Currently followed
    Active,
    /// Finished
    Completed,
}

impl PlanStatus {
    /// Wire/database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl FromStr for PlanStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(AppError::invalid_input(format!(
                "invalid plan status '{other}'. Valid statuses: draft, active, completed"
            ))),
        }
    }
}

/// All meals of a single plan day with aggregated totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMeal {
    /// Calendar date of this day
    pub date: NaiveDate,
    /// Weekday label ("Mon"), denormalized for display
    pub day_of_week: String,
    /// Meals of the day
    pub meals: Vec<Meal>,
    /// Sum of meal calories
    pub total_calories: f64,
    /// Sum of meal macros
    pub total_macros: MacroNutrients,
    /// Optional free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether every meal of the day was completed
    pub is_completed: bool,
}

impl DailyMeal {
    /// Empty day for a date, with the weekday label derived from it
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_of_week: date.weekday().to_string(),
            meals: Vec::new(),
            total_calories: 0.0,
            total_macros: MacroNutrients::zero(),
            notes: None,
            is_completed: false,
        }
    }
}

/// A complete eating schedule across a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    /// Unique plan identifier
    pub id: Uuid,
    /// Owner reference
    pub user_id: Uuid,
    /// Plan name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// First day of the plan
    pub start_date: NaiveDate,
    /// Last day of the plan
    pub end_date: NaiveDate,
    /// Plan cadence
    pub plan_type: PlanType,
    /// Dietary goal
    pub goal: PlanGoal,
    /// Daily calorie target
    pub target_calories: f64,
    /// Daily macro targets
    #[serde(default)]
    pub target_macros: MacroNutrients,
    /// Per-day meal schedules
    pub daily_meals: Vec<DailyMeal>,
    /// Grand total calories across the whole period
    pub total_calories: f64,
    /// Lifecycle state
    pub status: PlanStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl MealPlan {
    /// Build a draft plan from an accepted creation request
    ///
    /// The plan starts with no daily meals; days are filled in by later
    /// composition calls.
    #[must_use]
    pub fn from_request(req: &CreateMealPlanRequest, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: req.name.clone(),
            description: req.description.clone(),
            start_date: req.start_date,
            end_date: req.end_date,
            plan_type: req.plan_type,
            goal: req.goal,
            target_calories: req.target_calories,
            target_macros: req.target_macros,
            daily_meals: Vec::new(),
            total_calories: 0.0,
            status: PlanStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Inclusive day span of the plan's date range
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
