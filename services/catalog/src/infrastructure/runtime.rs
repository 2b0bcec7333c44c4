//! 运行时初始化

use cuba_config::AppConfig;
use cuba_telemetry::{TelemetryError, init_from_config, init_metrics};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

/// 安装日志与指标记录器，返回 Prometheus 渲染句柄
///
/// 生产环境强制使用 JSON 日志。
pub fn init_runtime(config: &AppConfig) -> Result<PrometheusHandle, TelemetryError> {
    let mut telemetry = config.telemetry.clone();
    if config.is_production() {
        telemetry.json = true;
    }
    init_from_config(&telemetry)?;
    let handle = init_metrics()?;

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        log_level = %telemetry.log_level,
        "Runtime initialized"
    );
    Ok(handle)
}
