use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::weight::{WeightSummary, WeightTotals, WeightUnit};

/// One row of the category table: a category with its aggregated weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWeightsDto {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
    pub sort_order: i32,
    #[serde(flatten)]
    pub weights: WeightSummary,
}

impl CategoryWeightsDto {
    pub fn new(category: Category, totals: WeightTotals) -> Self {
        Self {
            id: category.id.get(),
            name: category.name,
            color: category.color.map(String::from),
            sort_order: category.sort_order,
            weights: totals.into(),
        }
    }
}

/// Category listing of a bag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BagCategoriesDto {
    pub bag_id: i32,
    pub unit: WeightUnit,
    pub categories: Vec<CategoryWeightsDto>,
    pub totals: WeightSummary,
}

/// Bag totals compared against the owner's goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BagSummaryDto {
    pub id: i32,
    pub name: String,
    pub unit: WeightUnit,
    #[serde(flatten)]
    pub weights: WeightSummary,
    /// Goal converted into `unit`; absent when the owner set none.
    pub goal: Option<String>,
    /// Goal minus base weight, negative once over the goal.
    pub remaining: Option<String>,
    pub over_goal: bool,
}
