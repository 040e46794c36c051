// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    assert_database_has, assert_database_missing, count_rows, create_test_service,
};
use std::collections::BTreeMap;

/// 写入新的配置项
#[tokio::test]
async fn test_sets_a_new_key_value_in_store() {
    let (service, db) = create_test_service().await;
    assert_database_missing(&db, "app_name").await;

    service.set("app_name", "QCode").await.unwrap();

    assert_database_has(&db, "app_name", "QCode").await;
}

/// 相同的键值对不会重复写入
#[tokio::test]
async fn test_same_key_value_pair_is_stored_once() {
    let (service, db) = create_test_service().await;

    service.set("app_name", "QCode").await.unwrap();
    service.set("app_name", "QCode").await.unwrap();

    assert_database_has(&db, "app_name", "QCode").await;
    assert_eq!(service.all(true).await.unwrap().len(), 1);

    service.set("email_name", "QCode").await.unwrap();
    assert_eq!(service.all(true).await.unwrap().len(), 2);
}

/// 已存在的配置项被原地更新
#[tokio::test]
async fn test_updates_existing_setting() {
    let (service, db) = create_test_service().await;

    service.set("app_name", "QCode").await.unwrap();
    assert_database_has(&db, "app_name", "QCode").await;

    service.set("app_name", "Updated QCode").await.unwrap();

    assert_database_has(&db, "app_name", "Updated QCode").await;
    assert_eq!(count_rows(&db, "app_name", None).await, 1);
    assert_eq!(
        service.get("app_name", None).await.unwrap(),
        Some("Updated QCode".to_string())
    );
}

/// 删除配置项
#[tokio::test]
async fn test_removes_a_setting_from_storage() {
    let (service, db) = create_test_service().await;

    service.set("app_name", "QCode").await.unwrap();
    assert_database_has(&db, "app_name", "QCode").await;
    assert_eq!(
        service.get("app_name", None).await.unwrap(),
        Some("QCode".to_string())
    );

    service.remove("app_name").await.unwrap();

    assert_database_missing(&db, "app_name").await;
    assert_eq!(service.get("app_name", None).await.unwrap(), None);
}

/// 配置不存在时返回缺省值
#[tokio::test]
async fn test_gives_default_value_if_setting_not_found() {
    let (service, db) = create_test_service().await;
    assert_database_missing(&db, "app_name").await;

    assert_eq!(
        service.get_or("app_name", "Default App Name").await.unwrap(),
        "Default App Name"
    );
}

/// 返回已保存的值而不是缺省值
#[tokio::test]
async fn test_gives_saved_setting_value() {
    let (service, _db) = create_test_service().await;

    service.set("app_name", "QCode").await.unwrap();
    assert_eq!(
        service.get_or("app_name", "Default App Name").await.unwrap(),
        "QCode"
    );

    service.set("app_name", "Changed QCode").await.unwrap();
    assert_eq!(
        service.get_or("app_name", "Default App Name").await.unwrap(),
        "Changed QCode"
    );
}

/// 批量写入多个配置项
#[tokio::test]
async fn test_can_add_multiple_settings_at_once() {
    let (service, _db) = create_test_service().await;

    let settings = BTreeMap::from([
        ("app_name".to_string(), "QCode".to_string()),
        ("app_email".to_string(), "info@email.com".to_string()),
        ("app_type".to_string(), "SaaS".to_string()),
    ]);
    service.set_many(settings).await.unwrap();

    assert_eq!(service.all(false).await.unwrap().len(), 3);
    assert_eq!(service.get_or("app_name", "").await.unwrap(), "QCode");
    assert_eq!(
        service.get_or("app_email", "").await.unwrap(),
        "info@email.com"
    );
    assert_eq!(service.get_or("app_type", "").await.unwrap(), "SaaS");
}

/// 克隆出的句柄与原句柄共享同一存储
#[tokio::test]
async fn test_shared_handle_reads_and_writes_same_store() {
    let (service, db) = create_test_service().await;
    let handle = service.clone();

    handle.set("app_name", "Cool App").await.unwrap();

    assert_eq!(service.get_or("app_name", "").await.unwrap(), "Cool App");
    assert!(service.has("app_name").await.unwrap());
    assert_eq!(count_rows(&db, "app_name", None).await, 1);
}
