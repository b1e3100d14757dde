use diesel::prelude::*;

use crate::domain::bag::Bag;
use crate::domain::types::{BagId, TypeConstraintError};
use crate::domain::user::User;
use crate::models::bag::Bag as DbBag;
use crate::models::user::User as DbUser;
use crate::repository::{BagListQuery, BagReader, DieselRepository, RepositoryResult};

impl BagReader for DieselRepository {
    fn get_bag_by_id(&self, id: BagId) -> RepositoryResult<Option<Bag>> {
        use crate::schema::bags;

        let mut conn = self.conn()?;

        let bag = bags::table
            .filter(bags::id.eq(id.get()))
            .first::<DbBag>(&mut conn)
            .optional()?;

        let bag = bag.map(TryInto::try_into).transpose()?;
        Ok(bag)
    }

    fn get_bag_owner(&self, id: BagId) -> RepositoryResult<Option<User>> {
        use crate::schema::{bags, trips, users};

        let mut conn = self.conn()?;

        let owner = bags::table
            .inner_join(trips::table.inner_join(users::table))
            .filter(bags::id.eq(id.get()))
            .select(users::all_columns)
            .first::<DbUser>(&mut conn)
            .optional()?;

        let owner = owner.map(TryInto::try_into).transpose()?;
        Ok(owner)
    }

    fn list_bags(&self, query: BagListQuery) -> RepositoryResult<(usize, Vec<(Bag, User)>)> {
        use crate::schema::{bags, trips, users};

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = bags::table
                .inner_join(trips::table.inner_join(users::table))
                .into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(public) = query.public {
                items = items.filter(bags::public.eq(public));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)?;
        let total = usize::try_from(total).unwrap_or_default();

        let mut items = query_builder();

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(i64::try_from(pagination.offset()).unwrap_or(i64::MAX))
                .limit(i64::try_from(pagination.per_page).unwrap_or(i64::MAX));
        }

        let rows = items
            .order((bags::updated_at.desc(), bags::id.desc()))
            .select((bags::all_columns, users::all_columns))
            .load::<(DbBag, DbUser)>(&mut conn)?;

        let items = rows
            .into_iter()
            .map(|(bag, user)| Ok((bag.try_into()?, user.try_into()?)))
            .collect::<Result<Vec<(Bag, User)>, TypeConstraintError>>()?;

        Ok((total, items))
    }
}
