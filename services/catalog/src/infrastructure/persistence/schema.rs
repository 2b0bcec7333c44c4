//! 表结构迁移

use cuba_adapter_postgres::{Migration, MigrationManager, MigrationResult};
use sqlx::PgPool;

use crate::error::ServiceResult;

/// 目录服务的迁移表
pub const MIGRATION_TABLE: &str = "_catalog_migrations";

/// 按版本排列的建表脚本
pub fn migrations() -> Vec<Migration> {
    vec![
        Migration::new(
            1,
            "create_category",
            include_str!("../../../schema/0001_create_category.sql"),
        ),
        Migration::new(
            2,
            "create_product",
            include_str!("../../../schema/0002_create_product.sql"),
        ),
    ]
}

/// 执行所有未应用的迁移
pub async fn run_migrations(pool: &PgPool) -> ServiceResult<MigrationResult> {
    MigrationManager::new(pool.clone())
        .with_table_name(MIGRATION_TABLE)
        .migrate(&migrations())
        .await?
        .into_result()
}
