//! 分类处理器

use std::sync::Arc;

use tracing::info;

use super::commands::*;
use crate::domain::entities::Category;
use crate::domain::repositories::CategoryRepository;
use crate::domain::value_objects::CategoryId;
use crate::error::{ServiceError, ServiceResult};

/// 分类处理器
pub struct CategoryHandler<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> CategoryHandler<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    /// 分类列表
    pub async fn list(&self) -> ServiceResult<Vec<Category>> {
        self.category_repo.list_all().await
    }

    /// 查询单个分类
    pub async fn get(&self, id: CategoryId) -> ServiceResult<Option<Category>> {
        self.category_repo.find_by_id(id).await
    }

    /// 创建分类
    pub async fn create(&self, cmd: CreateCategoryCommand) -> ServiceResult<CategoryId> {
        let draft = cmd.into_draft();
        draft.validate()?;

        let id = self.category_repo.insert(&draft).await?;
        info!(category_id = %id, name = %draft.name, "Category created");
        Ok(id)
    }

    /// 更新分类
    pub async fn update(&self, cmd: UpdateCategoryCommand) -> ServiceResult<()> {
        let (id, draft) = cmd.into_parts();
        ensure_category_id(id)?;
        draft.validate()?;

        self.category_repo.update(id, &draft).await?;
        info!(category_id = %id, name = %draft.name, "Category updated");
        Ok(())
    }

    /// 删除分类
    pub async fn delete(&self, cmd: DeleteCategoryCommand) -> ServiceResult<()> {
        ensure_category_id(cmd.id)?;

        self.category_repo.delete(cmd.id).await?;
        info!(category_id = %cmd.id, "Category deleted");
        Ok(())
    }
}

fn ensure_category_id(id: CategoryId) -> ServiceResult<()> {
    if !id.is_assigned() {
        return Err(ServiceError::validation(format!("Invalid category ID: {}", id)));
    }
    Ok(())
}
