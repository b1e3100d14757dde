use crate::db::{DbConnection, DbPool};
use crate::domain::bag::Bag;
use crate::domain::category::Category;
use crate::domain::item::Item;
use crate::domain::types::BagId;
use crate::domain::user::User;

pub mod bag;
pub mod category;
pub mod errors;
pub mod item;

pub use errors::{RepositoryError, RepositoryResult};

/// Number of entries per page when the caller does not choose.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// One-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Rows to skip; pages below one are treated as the first page.
    /// Saturates instead of overflowing for absurd page numbers.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// Query parameters used when listing bags.
#[derive(Debug, Clone, Default)]
pub struct BagListQuery {
    /// Filter by the shared flag.
    pub public: Option<bool>,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl BagListQuery {
    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for bags and their owners.
pub trait BagReader {
    /// Retrieve a bag by its identifier.
    fn get_bag_by_id(&self, id: BagId) -> RepositoryResult<Option<Bag>>;
    /// Retrieve the user owning the bag through its trip.
    fn get_bag_owner(&self, id: BagId) -> RepositoryResult<Option<User>>;
    /// List bags with their owners, most recently updated first.
    fn list_bags(&self, query: BagListQuery) -> RepositoryResult<(usize, Vec<(Bag, User)>)>;
}

/// Read-only operations for categories.
pub trait CategoryReader {
    /// List the categories of a bag in display order.
    fn list_categories(&self, bag_id: BagId) -> RepositoryResult<Vec<Category>>;
}

/// Read-only operations for items.
pub trait ItemReader {
    /// List every item packed in a bag, by category order then item order.
    fn list_items_by_bag(&self, bag_id: BagId) -> RepositoryResult<Vec<Item>>;
}
