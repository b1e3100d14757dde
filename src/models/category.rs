use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryColor, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub bag_id: i32,
    pub name: String,
    pub color: Option<String>,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            bag_id: category.bag_id.try_into()?,
            name: category.name,
            // A blank color is the same as no color.
            color: category.color.and_then(|color| CategoryColor::new(color).ok()),
            sort_order: category.sort_order,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}
