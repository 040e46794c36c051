// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::setting_service::SettingService;
use crate::presentation::handlers::setting_handler;
use axum::{routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `service` - 所有处理器共享的配置服务
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(service: SettingService) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let setting_routes = Router::new()
        .route(
            "/v1/settings",
            get(setting_handler::list_settings).post(setting_handler::bulk_set_settings),
        )
        .route(
            "/v1/settings/{name}",
            get(setting_handler::get_setting)
                .put(setting_handler::put_setting)
                .delete(setting_handler::delete_setting),
        )
        .layer(Extension(service));

    Router::new()
        .merge(public_routes)
        .merge(setting_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
