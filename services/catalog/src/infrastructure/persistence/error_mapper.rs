//! 数据库错误映射工具
//!
//! 提供统一的 SQLx 错误到 ServiceError 的转换

use crate::error::ServiceError;

/// 将 SQLx 错误转换为 ServiceError，区分不同错误类型
///
/// `context` 描述失败的操作，原始错误作为 source 保留。
pub fn map_sqlx_error(e: sqlx::Error, context: &str) -> ServiceError {
    let db_failure = match &e {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .map(|code| (code.into_owned(), db_err.message().to_string())),
        _ => None,
    };

    match db_failure {
        Some((code, message)) => match code.as_str() {
            // PostgreSQL 约束违规代码
            "23503" => ServiceError::referential_integrity(format!("{}: {}", context, message)),
            "23514" | "23502" => {
                ServiceError::validation(format!("{}: constraint violation: {}", context, message))
            }
            "22001" => ServiceError::validation(format!("{}: string data too long", context)),
            _ => ServiceError::storage_with_source(
                format!("{} (database error {})", context, code),
                e,
            ),
        },
        None => ServiceError::storage_with_source(context.to_string(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    #[derive(Debug)]
    struct FakeDbError {
        code: &'static str,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "fake database error {}", self.code)
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "violates constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    fn db_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { code }))
    }

    #[test]
    fn test_foreign_key_violation() {
        let err = map_sqlx_error(db_error("23503"), "Failed to delete category");
        assert!(err.is_referential_integrity());
        assert!(err.to_string().contains("Failed to delete category"));
    }

    #[test]
    fn test_check_violation() {
        assert!(map_sqlx_error(db_error("23514"), "insert").is_validation());
        assert!(map_sqlx_error(db_error("23502"), "insert").is_validation());
        assert!(map_sqlx_error(db_error("22001"), "insert").is_validation());
    }

    #[test]
    fn test_unique_violation_is_storage_error() {
        let err = map_sqlx_error(db_error("23505"), "insert");
        assert!(err.is_storage());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_pool_timeout() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut, "list categories");
        assert!(err.is_storage());
        assert_eq!(err.to_string(), "Storage error: list categories");
    }

    #[test]
    fn test_row_not_found_keeps_source() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound, "fetch");
        assert!(err.source().is_some());
    }
}
