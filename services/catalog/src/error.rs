//! 服务错误类型
//!
//! 直接沿用 `cuba-errors` 的分类：校验错误、引用完整性错误、存储错误。

pub use cuba_errors::AppError as ServiceError;

pub type ServiceResult<T> = cuba_errors::AppResult<T>;
