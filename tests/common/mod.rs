//! Helpers for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, NaiveDateTime};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;
use trailpack::db::{DbPool, establish_connection_pool};
use trailpack::schema::{bags, categories, items, trips, users};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn at(seconds: i64) -> NaiveDateTime {
    DateTime::from_timestamp(seconds, 0)
        .expect("valid timestamp")
        .naive_utc()
}

pub fn insert_user(conn: &mut SqliteConnection, email: &str, unit: &str) -> i32 {
    diesel::insert_into(users::table)
        .values((
            users::email.eq(email),
            users::name.eq("Hiker"),
            users::weight_option.eq(unit),
        ))
        .returning(users::id)
        .get_result(conn)
        .expect("should create user")
}

pub fn insert_trip(conn: &mut SqliteConnection, user_id: i32) -> i32 {
    diesel::insert_into(trips::table)
        .values((trips::user_id.eq(user_id), trips::name.eq("Sierra High Route")))
        .returning(trips::id)
        .get_result(conn)
        .expect("should create trip")
}

pub fn insert_bag(conn: &mut SqliteConnection, trip_id: i32, public: bool, updated_at: i64) -> i32 {
    diesel::insert_into(bags::table)
        .values((
            bags::trip_id.eq(trip_id),
            bags::name.eq(format!("Bag {updated_at}")),
            bags::public.eq(public),
            bags::updated_at.eq(at(updated_at)),
        ))
        .returning(bags::id)
        .get_result(conn)
        .expect("should create bag")
}

pub fn insert_category(conn: &mut SqliteConnection, bag_id: i32, name: &str, sort_order: i32) -> i32 {
    diesel::insert_into(categories::table)
        .values((
            categories::bag_id.eq(bag_id),
            categories::name.eq(name),
            categories::color.eq(""),
            categories::sort_order.eq(sort_order),
        ))
        .returning(categories::id)
        .get_result(conn)
        .expect("should create category")
}

pub fn insert_item(
    conn: &mut SqliteConnection,
    category_id: i32,
    weight: Option<f64>,
    unit: Option<&str>,
    worn: bool,
    sort_order: i32,
) -> i32 {
    diesel::insert_into(items::table)
        .values((
            items::category_id.eq(category_id),
            items::name.eq(format!("Item {sort_order}")),
            items::weight.eq(weight),
            items::weight_option.eq(unit),
            items::worn.eq(worn),
            items::sort_order.eq(sort_order),
        ))
        .returning(items::id)
        .get_result(conn)
        .expect("should create item")
}
