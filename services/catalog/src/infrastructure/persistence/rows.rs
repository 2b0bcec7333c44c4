//! 数据行映射

use crate::domain::entities::{Category, Product};
use crate::domain::value_objects::{CategoryId, ProductId};

#[derive(Debug, sqlx::FromRow)]
pub(super) struct CategoryRow {
    pub category_id: i32,
    pub category_name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: CategoryId(row.category_id),
            name: row.category_name,
        }
    }
}

/// 商品与分类内连接后的行
#[derive(Debug, sqlx::FromRow)]
pub(super) struct ProductRow {
    pub product_id: i32,
    pub product_name: String,
    pub category_id: i32,
    pub category_name: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId(row.product_id),
            name: row.product_name,
            category_id: CategoryId(row.category_id),
            category_name: row.category_name,
        }
    }
}
