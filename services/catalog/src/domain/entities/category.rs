//! 分类实体

use cuba_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CategoryId;

/// 名称最大长度，与表结构 `VARCHAR(100)` 一致
pub const MAX_NAME_LEN: usize = 100;

/// 分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// 分类草稿（新增或修改时提交的字段，不含标识）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_name("Category name", &self.name)
    }
}

/// 名称必填且不能超长
pub(crate) fn validate_name(field: &str, name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation(format!("{} is required", field)));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LEN
        )));
    }
    Ok(())
}
