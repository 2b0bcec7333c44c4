//! 商品实体

use cuba_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use super::category::validate_name;
use crate::domain::value_objects::{CategoryId, ProductId};

/// 商品（读取模型）
///
/// `category_name` 由联表查询填充，只读。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
    pub category_name: String,
}

/// 商品草稿
///
/// 只检查 `category_id` 是否填写；分类是否存在由数据库外键约束保证。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category_id: CategoryId,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            name: name.into(),
            category_id,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_name("Product name", &self.name)?;
        if !self.category_id.is_assigned() {
            return Err(AppError::validation("Category is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_draft() {
        assert!(ProductDraft::new("Tea", CategoryId(1)).validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = ProductDraft::new("", CategoryId(1)).validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Product name is required"));
    }

    #[test]
    fn test_missing_category_rejected() {
        let err = ProductDraft::new("Tea", CategoryId(0)).validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Category is required"));
    }

    #[test]
    fn test_unknown_category_is_not_checked_here() {
        // 不存在的分类在写入时由外键拒绝
        assert!(ProductDraft::new("Tea", CategoryId(9999)).validate().is_ok());
    }
}
