//! 应用层

pub mod category_handler;
pub mod commands;
pub mod product_handler;

pub use category_handler::CategoryHandler;
pub use commands::*;
pub use product_handler::{ProductForm, ProductHandler, ProductIndex};
