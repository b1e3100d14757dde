use diesel::prelude::*;

use crate::domain::item::Item;
use crate::domain::types::BagId;
use crate::models::item::Item as DbItem;
use crate::repository::{DieselRepository, ItemReader, RepositoryResult};

impl ItemReader for DieselRepository {
    fn list_items_by_bag(&self, bag_id: BagId) -> RepositoryResult<Vec<Item>> {
        use crate::schema::{categories, items};

        let mut conn = self.conn()?;

        let results = items::table
            .inner_join(categories::table)
            .filter(categories::bag_id.eq(bag_id.get()))
            .order((
                categories::sort_order.asc(),
                items::sort_order.asc(),
                items::id.asc(),
            ))
            .select(items::all_columns)
            .load::<DbItem>(&mut conn)?;

        let results = results
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Item>, _>>()?;
        Ok(results)
    }
}
