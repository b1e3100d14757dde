use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::bag::Bag as DomainBag;
use crate::domain::types::{BagGoal, TypeConstraintError};

/// Diesel model representing a row in the `bags` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::bags)]
pub struct Bag {
    pub id: i32,
    pub trip_id: i32,
    pub name: String,
    pub goal: f64,
    pub public: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Bag> for DomainBag {
    type Error = TypeConstraintError;

    fn try_from(bag: Bag) -> Result<Self, Self::Error> {
        Ok(Self {
            id: bag.id.try_into()?,
            trip_id: bag.trip_id.try_into()?,
            name: bag.name,
            goal: BagGoal::from_stored(bag.goal),
            public: bag.public,
            created_at: bag.created_at,
            updated_at: bag.updated_at,
        })
    }
}
