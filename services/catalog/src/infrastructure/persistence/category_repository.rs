//! PostgreSQL 分类仓储实现

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::domain::entities::{Category, CategoryDraft};
use crate::domain::repositories::CategoryRepository;
use crate::domain::value_objects::CategoryId;
use crate::error::ServiceResult;

use super::db_metrics::QueryTimer;
use super::error_mapper::map_sqlx_error;
use super::rows::CategoryRow;

const TABLE: &str = "category";

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list_all(&self) -> ServiceResult<Vec<Category>> {
        let timer = QueryTimer::new(TABLE, "list_all");
        let result = sqlx::query_as::<_, CategoryRow>(
            "SELECT category_id, category_name FROM category ORDER BY category_id",
        )
        .fetch_all(&self.pool)
        .await;
        timer.finish(&result);

        let rows = result.map_err(|e| map_sqlx_error(e, "Failed to list categories"))?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> ServiceResult<Option<Category>> {
        let timer = QueryTimer::new(TABLE, "find_by_id");
        let result = sqlx::query_as::<_, CategoryRow>(
            "SELECT category_id, category_name FROM category WHERE category_id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await;
        timer.finish(&result);

        let row = result.map_err(|e| map_sqlx_error(e, "Failed to fetch category"))?;
        Ok(row.map(Category::from))
    }

    async fn insert(&self, draft: &CategoryDraft) -> ServiceResult<CategoryId> {
        draft.validate()?;

        let timer = QueryTimer::new(TABLE, "insert");
        let result: Result<(i32,), _> = sqlx::query_as(
            "INSERT INTO category (category_name) VALUES ($1) RETURNING category_id",
        )
        .bind(&draft.name)
        .fetch_one(&self.pool)
        .await;
        timer.finish(&result);

        let (id,) = result.map_err(|e| map_sqlx_error(e, "Failed to insert category"))?;
        debug!(category_id = id, "Category inserted");
        Ok(CategoryId(id))
    }

    async fn update(&self, id: CategoryId, draft: &CategoryDraft) -> ServiceResult<()> {
        draft.validate()?;

        let timer = QueryTimer::new(TABLE, "update");
        let result = sqlx::query("UPDATE category SET category_name = $1 WHERE category_id = $2")
            .bind(&draft.name)
            .bind(id.0)
            .execute(&self.pool)
            .await;
        timer.finish(&result);

        let done = result.map_err(|e| map_sqlx_error(e, "Failed to update category"))?;
        if done.rows_affected() == 0 {
            debug!(category_id = %id, "Category update matched no rows");
        }
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> ServiceResult<()> {
        let timer = QueryTimer::new(TABLE, "delete");
        let result = sqlx::query("DELETE FROM category WHERE category_id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await;
        timer.finish(&result);

        let done = result.map_err(|e| map_sqlx_error(e, "Failed to delete category"))?;
        if done.rows_affected() == 0 {
            debug!(category_id = %id, "Category delete matched no rows");
        }
        Ok(())
    }
}
