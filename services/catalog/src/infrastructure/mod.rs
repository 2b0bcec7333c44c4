//! 基础设施层

mod bootstrap;
pub mod persistence;
mod runtime;

pub use bootstrap::{Infrastructure, postgres_config};
pub use runtime::init_runtime;
