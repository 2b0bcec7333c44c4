//! 基础设施资源管理

use std::sync::Arc;
use std::time::Duration;

use cuba_adapter_postgres::{PostgresConfig, check_connection, create_pool};
use cuba_config::{AppConfig, CatalogConfig};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use super::persistence::{
    DbMetrics, PostgresCategoryRepository, PostgresProductRepository, run_migrations,
};
use crate::application::{CategoryHandler, ProductHandler};
use crate::error::{ServiceError, ServiceResult};

const POOL_NAME: &str = "catalog";

/// 由应用配置生成连接描述
pub fn postgres_config(config: &AppConfig) -> PostgresConfig {
    PostgresConfig::new(config.database.url.expose_secret().as_str())
        .with_max_connections(config.database.max_connections)
        .with_min_connections(config.database.min_connections)
        .with_acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .with_application_name(config.app_name.clone())
}

/// 每页数量为 0 时所有列表请求都会失败，启动时直接拒绝
fn check_catalog_config(catalog: &CatalogConfig) -> ServiceResult<()> {
    if catalog.page_size == 0 {
        return Err(ServiceError::validation("catalog.page_size must be at least 1"));
    }
    Ok(())
}

/// 基础设施资源容器
///
/// 仓储在构造时拿到连接池，不依赖进程级连接字符串。
pub struct Infrastructure {
    catalog: CatalogConfig,
    pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建连接池，按需执行迁移
    pub async fn from_config(config: &AppConfig) -> ServiceResult<Self> {
        check_catalog_config(&config.catalog)?;

        let pg_config = postgres_config(config);
        let pool = create_pool(&pg_config).await?;
        check_connection(&pool).await?;
        info!(
            max_connections = pg_config.max_connections,
            "Catalog database connected"
        );

        if config.catalog.run_migrations {
            let result = run_migrations(&pool).await?;
            info!(
                applied = result.applied_count(),
                skipped = result.skipped.len(),
                "Catalog schema migrated"
            );
        }

        Self::from_pool(pool, config.catalog.clone())
    }

    /// 使用已有连接池（测试或嵌入场景）
    pub fn from_pool(pool: PgPool, catalog: CatalogConfig) -> ServiceResult<Self> {
        check_catalog_config(&catalog)?;
        Ok(Self { catalog, pool })
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub fn category_handler(&self) -> CategoryHandler<PostgresCategoryRepository> {
        CategoryHandler::new(Arc::new(PostgresCategoryRepository::new(self.pool())))
    }

    pub fn product_handler(
        &self,
    ) -> ProductHandler<PostgresProductRepository, PostgresCategoryRepository> {
        ProductHandler::new(
            Arc::new(PostgresProductRepository::new(self.pool())),
            Arc::new(PostgresCategoryRepository::new(self.pool())),
        )
        .with_page_size(self.catalog.page_size)
    }

    /// 上报连接池状态
    pub fn record_pool_state(&self) {
        DbMetrics::record_pool_state(&self.pool, POOL_NAME);
    }
}
