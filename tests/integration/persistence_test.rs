// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::count_rows;
use sea_orm::DatabaseConnection;
use settingsrs::config::settings::DatabaseSettings;
use settingsrs::domain::services::setting_service::SettingService;
use settingsrs::infrastructure::database::connection;
use settingsrs::infrastructure::repositories::setting_repo_impl::SettingRepositoryImpl;
use std::sync::Arc;

fn file_settings(path: &std::path::Path) -> DatabaseSettings {
    DatabaseSettings {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections: Some(4),
        min_connections: Some(1),
        connect_timeout: Some(5),
        idle_timeout: Some(60),
        sql_logging: false,
        run_migrations: true,
    }
}

async fn open_service(settings: &DatabaseSettings) -> (SettingService, Arc<DatabaseConnection>) {
    let db = connection::create_pool(settings)
        .await
        .expect("Failed to open database");
    connection::run_migrations(&db)
        .await
        .expect("Failed to run migrations");
    let db = Arc::new(db);
    let service = SettingService::new(Arc::new(SettingRepositoryImpl::new(db.clone())));
    (service, db)
}

/// 配置在重新连接后依然存在
#[tokio::test]
async fn test_settings_survive_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let settings = file_settings(&dir.path().join("settings.db"));

    {
        let (service, _db) = open_service(&settings).await;
        service.set("app_name", "QCode").await.unwrap();
        service.set("app_type", "SaaS").await.unwrap();
        service.remove("app_type").await.unwrap();
    }

    // Migrations are idempotent on an existing schema
    let (service, _db) = open_service(&settings).await;
    assert_eq!(service.get_or("app_name", "").await.unwrap(), "QCode");
    assert!(!service.has("app_type").await.unwrap());
    assert_eq!(service.all(true).await.unwrap().len(), 1);
}

/// 并发写入同一名称最终只保留一条记录
#[tokio::test]
async fn test_concurrent_writers_keep_one_row() {
    let dir = tempfile::tempdir().unwrap();
    let (service, db) = open_service(&file_settings(&dir.path().join("settings.db"))).await;

    let written: Vec<String> = (0..8).map(|i| i.to_string()).collect();
    let mut handles = Vec::new();
    for value in written.clone() {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.set("counter", &value).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(count_rows(&db, "counter", None).await, 1);
    let all = service.all(true).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(written.contains(&all["counter"]));
}
