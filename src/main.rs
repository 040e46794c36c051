// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use settingsrs::config::settings::AppSettings;
use settingsrs::domain::services::setting_service::SettingService;
use settingsrs::infrastructure::database::connection;
use settingsrs::infrastructure::repositories::setting_repo_impl::SettingRepositoryImpl;
use settingsrs::presentation::routes;
use settingsrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting settingsrs...");

    // 2. Load configuration
    let settings = AppSettings::new()?;
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    settingsrs::infrastructure::metrics::init_metrics(&settings.metrics);

    // 3. Connect to database
    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");

    if settings.database.run_migrations {
        connection::run_migrations(db.as_ref()).await?;
    }

    // 4. Build the settings store handle shared by every handler
    let repo = Arc::new(SettingRepositoryImpl::new(db.clone()));
    let service = SettingService::new(repo);

    // 5. Start HTTP server
    let app = routes::routes(service);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
