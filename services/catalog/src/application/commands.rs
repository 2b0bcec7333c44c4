//! 分类与商品命令定义

use serde::Deserialize;

use crate::domain::entities::{CategoryDraft, ProductDraft};
use crate::domain::value_objects::{CategoryId, ProductId};

/// 创建分类命令
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: String,
}

impl CreateCategoryCommand {
    pub fn into_draft(self) -> CategoryDraft {
        CategoryDraft::new(self.name)
    }
}

/// 更新分类命令
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: String,
}

impl UpdateCategoryCommand {
    pub fn into_parts(self) -> (CategoryId, CategoryDraft) {
        (self.id, CategoryDraft::new(self.name))
    }
}

/// 删除分类命令
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteCategoryCommand {
    pub id: CategoryId,
}

/// 创建商品命令
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductCommand {
    pub name: String,
    pub category_id: CategoryId,
}

impl CreateProductCommand {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft::new(self.name, self.category_id)
    }
}

/// 更新商品命令
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

impl UpdateProductCommand {
    pub fn into_parts(self) -> (ProductId, ProductDraft) {
        (self.id, ProductDraft::new(self.name, self.category_id))
    }
}

/// 删除商品命令
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DeleteProductCommand {
    pub id: ProductId,
}
