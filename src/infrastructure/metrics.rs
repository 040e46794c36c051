// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

/// 配置存储操作计数器名称
pub const SETTINGS_OPERATIONS_TOTAL: &str = "settings_operations_total";

/// 初始化 Prometheus 指标导出
///
/// 未启用或地址无效时只记录警告, 不影响服务启动
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        SETTINGS_OPERATIONS_TOTAL,
        "Total number of settings store operations, labelled by op"
    );
    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次存储操作
pub fn record_operation(op: &'static str) {
    counter!(SETTINGS_OPERATIONS_TOTAL, "op" => op).increment(1);
}
