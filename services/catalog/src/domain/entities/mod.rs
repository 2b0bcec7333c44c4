//! 实体模块

mod category;
mod product;

pub use category::{Category, CategoryDraft, MAX_NAME_LEN};
pub use product::{Product, ProductDraft};
