// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use settingsrs::domain::services::setting_service::SettingService;
use settingsrs::infrastructure::database::connection;
use settingsrs::infrastructure::repositories::setting_repo_impl::SettingRepositoryImpl;
use settingsrs::presentation::routes;
use std::sync::Arc;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub service: SettingService,
    pub db: Arc<DatabaseConnection>,
}

/// 创建迁移完成的内存数据库
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    // One connection, otherwise every pooled connection sees its own empty database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    connection::run_migrations(&db)
        .await
        .expect("Failed to run migrations");
    Arc::new(db)
}

pub async fn create_test_service() -> (SettingService, Arc<DatabaseConnection>) {
    let db = create_test_db().await;
    let repo = Arc::new(SettingRepositoryImpl::new(db.clone()));
    (SettingService::new(repo), db)
}

pub async fn create_test_app() -> TestApp {
    let (service, db) = create_test_service().await;
    let server = TestServer::new(routes::routes(service.clone())).expect("Failed to start test server");
    TestApp { server, service, db }
}

/// 统计满足条件的 settings 行数
///
/// `val` 为 `None` 时只按名称匹配。语句使用 SQLite 占位符, 仅用于 SQLite 测试库
pub async fn count_rows(db: &DatabaseConnection, name: &str, val: Option<&str>) -> i64 {
    let backend = DbBackend::Sqlite;
    let stmt = match val {
        Some(val) => Statement::from_sql_and_values(
            backend,
            "SELECT COUNT(*) AS count FROM settings WHERE name = ? AND val = ?",
            [name.into(), val.into()],
        ),
        None => Statement::from_sql_and_values(
            backend,
            "SELECT COUNT(*) AS count FROM settings WHERE name = ?",
            [name.into()],
        ),
    };

    db.query_one(stmt)
        .await
        .expect("count query failed")
        .expect("count query returned no row")
        .try_get("", "count")
        .expect("count column missing")
}

pub async fn assert_database_has(db: &DatabaseConnection, name: &str, val: &str) {
    assert_eq!(
        count_rows(db, name, Some(val)).await,
        1,
        "expected settings row {} = {}",
        name,
        val
    );
}

pub async fn assert_database_missing(db: &DatabaseConnection, name: &str) {
    assert_eq!(
        count_rows(db, name, None).await,
        0,
        "expected no settings row for {}",
        name
    );
}
