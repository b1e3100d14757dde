use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item::Item as DomainItem;
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `items` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::items)]
pub struct Item {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub weight: Option<f64>,
    pub weight_option: Option<String>,
    pub qty: i32,
    pub worn: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Item> for DomainItem {
    type Error = TypeConstraintError;

    fn try_from(item: Item) -> Result<Self, Self::Error> {
        Ok(Self {
            id: item.id.try_into()?,
            category_id: item.category_id.try_into()?,
            name: item.name,
            description: item.description,
            weight: item.weight,
            // Unrecognized units are left for the aggregator's fallback.
            weight_option: item
                .weight_option
                .as_deref()
                .and_then(|unit| unit.parse().ok()),
            qty: item.qty,
            worn: item.worn,
            sort_order: item.sort_order,
            created_at: item.created_at,
            updated_at: item.updated_at,
        })
    }
}
