//! PostgreSQL 商品仓储实现

use async_trait::async_trait;
use cuba_common::{PagedResult, PageWindow, Pagination};
use sqlx::PgPool;
use tracing::debug;

use crate::domain::entities::{Product, ProductDraft};
use crate::domain::repositories::{ProductRepository, check_pagination};
use crate::domain::value_objects::ProductId;
use crate::error::ServiceResult;

use super::db_metrics::QueryTimer;
use super::error_mapper::map_sqlx_error;
use super::rows::ProductRow;

const TABLE: &str = "product";

/// 按 product_id 排名后取闭区间 [$1, $2]，内连接丢弃分类已不存在的商品
const PAGE_SQL: &str = r#"
    WITH ordered_products AS (
        SELECT ROW_NUMBER() OVER (ORDER BY p.product_id) AS row_num,
               p.product_id, p.product_name, p.category_id, c.category_name
        FROM product p
        INNER JOIN category c ON p.category_id = c.category_id
    )
    SELECT product_id, product_name, category_id, category_name
    FROM ordered_products
    WHERE row_num BETWEEN $1 AND $2
    ORDER BY row_num
"#;

const FIND_BY_ID_SQL: &str = r#"
    SELECT p.product_id, p.product_name, p.category_id, c.category_name
    FROM product p
    INNER JOIN category c ON p.category_id = c.category_id
    WHERE p.product_id = $1
"#;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 商品表全部行数，不受分页和联表影响
    async fn count_all(&self) -> ServiceResult<u64> {
        let timer = QueryTimer::new(TABLE, "count");
        let result: Result<(i64,), _> = sqlx::query_as("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await;
        timer.finish(&result);

        let (total,) = result.map_err(|e| map_sqlx_error(e, "Failed to count products"))?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn fetch_window(&self, window: PageWindow) -> ServiceResult<Vec<Product>> {
        let timer = QueryTimer::new(TABLE, "find_page");
        let result = sqlx::query_as::<_, ProductRow>(PAGE_SQL)
            .bind(rank_param(window.first_rank))
            .bind(rank_param(window.last_rank))
            .fetch_all(&self.pool)
            .await;
        timer.finish(&result);

        let rows = result.map_err(|e| map_sqlx_error(e, "Failed to fetch product page"))?;
        Ok(rows.into_iter().map(Product::from).collect())
    }
}

/// 排名超出 BIGINT 范围时截断，窗口自然为空
fn rank_param(rank: u64) -> i64 {
    i64::try_from(rank).unwrap_or(i64::MAX)
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_page(&self, pagination: &Pagination) -> ServiceResult<PagedResult<Product>> {
        check_pagination(pagination)?;

        let total = self.count_all().await?;
        let window = pagination.window();
        let items = self.fetch_window(window).await?;

        debug!(
            page = pagination.page,
            page_size = pagination.page_size,
            total,
            returned = items.len(),
            "Product page fetched"
        );
        Ok(PagedResult::new(items, total, pagination))
    }

    async fn find_by_id(&self, id: ProductId) -> ServiceResult<Option<Product>> {
        let timer = QueryTimer::new(TABLE, "find_by_id");
        let result = sqlx::query_as::<_, ProductRow>(FIND_BY_ID_SQL)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await;
        timer.finish(&result);

        let row = result.map_err(|e| map_sqlx_error(e, "Failed to fetch product"))?;
        Ok(row.map(Product::from))
    }

    async fn insert(&self, draft: &ProductDraft) -> ServiceResult<ProductId> {
        draft.validate()?;

        let timer = QueryTimer::new(TABLE, "insert");
        let result: Result<(i32,), _> = sqlx::query_as(
            "INSERT INTO product (product_name, category_id) VALUES ($1, $2) RETURNING product_id",
        )
        .bind(&draft.name)
        .bind(draft.category_id.0)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);

        let (id,) = result.map_err(|e| map_sqlx_error(e, "Failed to insert product"))?;
        debug!(product_id = id, category_id = %draft.category_id, "Product inserted");
        Ok(ProductId(id))
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> ServiceResult<()> {
        draft.validate()?;

        let timer = QueryTimer::new(TABLE, "update");
        let result = sqlx::query(
            "UPDATE product SET product_name = $1, category_id = $2 WHERE product_id = $3",
        )
        .bind(&draft.name)
        .bind(draft.category_id.0)
        .bind(id.0)
        .execute(&self.pool)
        .await;
        timer.finish(&result);

        let done = result.map_err(|e| map_sqlx_error(e, "Failed to update product"))?;
        if done.rows_affected() == 0 {
            debug!(product_id = %id, "Product update matched no rows");
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> ServiceResult<()> {
        let timer = QueryTimer::new(TABLE, "delete");
        let result = sqlx::query("DELETE FROM product WHERE product_id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await;
        timer.finish(&result);

        let done = result.map_err(|e| map_sqlx_error(e, "Failed to delete product"))?;
        if done.rows_affected() == 0 {
            debug!(product_id = %id, "Product delete matched no rows");
        }
        Ok(())
    }
}
