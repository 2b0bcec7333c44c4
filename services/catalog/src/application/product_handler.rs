//! 商品处理器
//!
//! 列表页、新增/编辑表单、删除确认所需的数据都由这里组装。

use std::sync::Arc;

use cuba_common::Pagination;
use serde::Serialize;
use tracing::{debug, info};

use super::commands::*;
use crate::domain::entities::{Category, Product};
use crate::domain::repositories::{CategoryRepository, ProductRepository};
use crate::domain::value_objects::ProductId;
use crate::error::{ServiceError, ServiceResult};

/// 默认每页数量
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 商品列表页
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductIndex {
    pub items: Vec<Product>,
    pub current_page: u32,
    pub total_pages: u64,
    /// 商品表总行数（含分类已失效的商品）
    pub total: u64,
}

/// 商品表单：可选的商品与可选分类列表
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductForm {
    pub product: Option<Product>,
    pub categories: Vec<Category>,
}

/// 商品处理器
pub struct ProductHandler<P, C>
where
    P: ProductRepository,
    C: CategoryRepository,
{
    product_repo: Arc<P>,
    category_repo: Arc<C>,
    page_size: u32,
}

impl<P, C> ProductHandler<P, C>
where
    P: ProductRepository,
    C: CategoryRepository,
{
    pub fn new(product_repo: Arc<P>, category_repo: Arc<C>) -> Self {
        Self {
            product_repo,
            category_repo,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 商品列表，未指定页码时取第 1 页
    pub async fn index(&self, page: Option<u32>) -> ServiceResult<ProductIndex> {
        let pagination = Pagination::new(page.unwrap_or(1), self.page_size);
        let result = self.product_repo.find_page(&pagination).await?;

        debug!(
            page = pagination.page,
            total = result.total,
            returned = result.items.len(),
            "Product index loaded"
        );

        let total_pages = result.total_pages();
        Ok(ProductIndex {
            current_page: result.page,
            total: result.total,
            total_pages,
            items: result.items,
        })
    }

    /// 新增表单
    pub async fn create_form(&self) -> ServiceResult<ProductForm> {
        Ok(ProductForm {
            product: None,
            categories: self.category_repo.list_all().await?,
        })
    }

    /// 创建商品
    pub async fn create(&self, cmd: CreateProductCommand) -> ServiceResult<ProductId> {
        let draft = cmd.into_draft();
        draft.validate()?;

        let id = self.product_repo.insert(&draft).await?;
        info!(
            product_id = %id,
            category_id = %draft.category_id,
            name = %draft.name,
            "Product created"
        );
        Ok(id)
    }

    /// 编辑表单；商品不存在时 `product` 为 `None`
    pub async fn edit_form(&self, id: ProductId) -> ServiceResult<ProductForm> {
        let product = self.product_repo.find_by_id(id).await?;
        let categories = self.category_repo.list_all().await?;
        Ok(ProductForm {
            product,
            categories,
        })
    }

    /// 更新商品
    pub async fn update(&self, cmd: UpdateProductCommand) -> ServiceResult<()> {
        let (id, draft) = cmd.into_parts();
        ensure_product_id(id)?;
        draft.validate()?;

        self.product_repo.update(id, &draft).await?;
        info!(
            product_id = %id,
            category_id = %draft.category_id,
            name = %draft.name,
            "Product updated"
        );
        Ok(())
    }

    /// 删除确认页所需的商品
    pub async fn get(&self, id: ProductId) -> ServiceResult<Option<Product>> {
        self.product_repo.find_by_id(id).await
    }

    /// 删除商品
    pub async fn delete(&self, cmd: DeleteProductCommand) -> ServiceResult<()> {
        ensure_product_id(cmd.id)?;

        self.product_repo.delete(cmd.id).await?;
        info!(product_id = %cmd.id, "Product deleted");
        Ok(())
    }
}

fn ensure_product_id(id: ProductId) -> ServiceResult<()> {
    if !id.is_assigned() {
        return Err(ServiceError::validation(format!("Invalid product ID: {}", id)));
    }
    Ok(())
}
