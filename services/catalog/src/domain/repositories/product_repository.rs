//! 商品仓储接口

use async_trait::async_trait;
use cuba_common::{PagedResult, Pagination};

use crate::domain::entities::{Product, ProductDraft};
use crate::domain::value_objects::ProductId;
use crate::error::{ServiceError, ServiceResult};

/// 商品仓储接口
///
/// 所有读取都与分类内连接，分类已不存在的商品不会出现在结果中。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 分页查询
    ///
    /// `total` 为商品表的全部行数，与分页条件无关；超出最后一页时返回空列表。
    async fn find_page(&self, pagination: &Pagination) -> ServiceResult<PagedResult<Product>>;

    /// 根据 ID 查找商品
    async fn find_by_id(&self, id: ProductId) -> ServiceResult<Option<Product>>;

    /// 新增商品，分类不存在时返回 `ReferentialIntegrity`
    async fn insert(&self, draft: &ProductDraft) -> ServiceResult<ProductId>;

    /// 更新商品；ID 不存在时不做任何修改
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> ServiceResult<()>;

    /// 删除商品；ID 不存在时不做任何修改
    async fn delete(&self, id: ProductId) -> ServiceResult<()>;
}

/// 分页参数校验：页码和每页数量都必须不小于 1
pub fn check_pagination(pagination: &Pagination) -> ServiceResult<()> {
    if !pagination.is_valid() {
        return Err(ServiceError::validation(format!(
            "Invalid pagination: page={}, page_size={} (both must be >= 1)",
            pagination.page, pagination.page_size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_pagination() {
        assert!(check_pagination(&Pagination::new(1, 10)).is_ok());
        assert!(check_pagination(&Pagination::new(0, 10)).unwrap_err().is_validation());
        assert!(check_pagination(&Pagination::new(3, 0)).unwrap_err().is_validation());
    }
}
