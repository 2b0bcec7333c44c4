//! 数据库查询监控

use std::time::{Duration, Instant};

use cuba_adapter_postgres::PoolStatus;
use metrics::{counter, gauge, histogram};
use sqlx::PgPool;

/// 慢查询阈值
const SLOW_QUERY_THRESHOLD: Duration = Duration::from_millis(100);

/// 数据库监控工具
pub struct DbMetrics;

impl DbMetrics {
    /// 记录连接池状态
    pub fn record_pool_state(pool: &PgPool, pool_name: &str) {
        let status = PoolStatus::of(pool);
        gauge!("db_pool_size", "pool" => pool_name.to_string()).set(f64::from(status.size));
        gauge!("db_pool_idle", "pool" => pool_name.to_string()).set(f64::from(status.idle));
    }

    /// 记录查询耗时与次数
    pub fn record_query(elapsed: Duration, table: &'static str, operation: &'static str) {
        histogram!(
            "db_query_duration_ms",
            "table" => table,
            "operation" => operation
        )
        .record(elapsed.as_secs_f64() * 1000.0);

        counter!(
            "db_queries_total",
            "table" => table,
            "operation" => operation
        )
        .increment(1);
    }

    /// 记录查询错误
    pub fn record_error(table: &'static str, operation: &'static str) {
        counter!(
            "db_query_errors_total",
            "table" => table,
            "operation" => operation
        )
        .increment(1);
    }
}

/// 用于计时的守卫结构
pub struct QueryTimer {
    start: Instant,
    table: &'static str,
    operation: &'static str,
}

impl QueryTimer {
    pub fn new(table: &'static str, operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            table,
            operation,
        }
    }

    /// 结束计时，失败时额外计入错误数
    pub fn finish<T, E>(self, result: &Result<T, E>) {
        let elapsed = self.start.elapsed();
        DbMetrics::record_query(elapsed, self.table, self.operation);

        if result.is_err() {
            DbMetrics::record_error(self.table, self.operation);
        }

        if elapsed > SLOW_QUERY_THRESHOLD {
            tracing::warn!(
                table = self.table,
                operation = self.operation,
                duration_ms = elapsed.as_millis() as u64,
                "Slow query detected"
            );
            counter!(
                "db_slow_queries_total",
                "table" => self.table,
                "operation" => self.operation
            )
            .increment(1);
        }
    }
}
