//! 持久化层

mod category_repository;
mod db_metrics;
mod error_mapper;
mod product_repository;
mod rows;
mod schema;

pub use category_repository::PostgresCategoryRepository;
pub use db_metrics::{DbMetrics, QueryTimer};
pub use error_mapper::map_sqlx_error;
pub use product_repository::PostgresProductRepository;
pub use schema::{MIGRATION_TABLE, migrations, run_migrations};
