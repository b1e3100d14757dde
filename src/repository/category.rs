use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::types::BagId;
use crate::models::category::Category as DbCategory;
use crate::repository::{CategoryReader, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories(&self, bag_id: BagId) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .filter(categories::bag_id.eq(bag_id.get()))
            .order((categories::sort_order.asc(), categories::id.asc()))
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }
}
