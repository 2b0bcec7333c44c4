//! 分类仓储接口

use async_trait::async_trait;

use crate::domain::entities::{Category, CategoryDraft};
use crate::domain::value_objects::CategoryId;
use crate::error::ServiceResult;

/// 分类仓储接口
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 列出所有分类（按 ID 升序）
    async fn list_all(&self) -> ServiceResult<Vec<Category>>;

    /// 根据 ID 查找分类，不存在时返回 `None`
    async fn find_by_id(&self, id: CategoryId) -> ServiceResult<Option<Category>>;

    /// 新增分类，返回数据库分配的 ID
    async fn insert(&self, draft: &CategoryDraft) -> ServiceResult<CategoryId>;

    /// 更新分类；ID 不存在时不做任何修改
    async fn update(&self, id: CategoryId, draft: &CategoryDraft) -> ServiceResult<()>;

    /// 删除分类；仍有商品引用时返回 `ReferentialIntegrity`
    async fn delete(&self, id: CategoryId) -> ServiceResult<()>;
}
