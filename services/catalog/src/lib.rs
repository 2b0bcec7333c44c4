//! catalog - 分类与商品目录管理

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ServiceError, ServiceResult};
