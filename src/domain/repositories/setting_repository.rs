// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 配置仓库错误类型
#[derive(Error, Debug)]
pub enum SettingRepositoryError {
    /// 底层数据库错误, 原样向上传递
    #[error(transparent)]
    Database(#[from] DbErr),
    /// SQL 语句构造失败
    #[error("Invalid statement: {0}")]
    InvalidStatement(String),
}

/// 配置仓库特质
///
/// 以 `name` 为键的字符串配置项的持久化契约
#[async_trait]
pub trait SettingRepository: Send + Sync {
    /// 读取配置值, 不存在时返回 `None`
    async fn get(&self, name: &str) -> Result<Option<String>, SettingRepositoryError>;

    /// 创建或更新配置项 (upsert)
    async fn set(&self, name: &str, val: &str) -> Result<(), SettingRepositoryError>;

    /// 删除配置项, 返回是否确实删除了记录
    async fn remove(&self, name: &str) -> Result<bool, SettingRepositoryError>;

    /// 读取全部配置项, 按名称排序
    async fn all(&self) -> Result<BTreeMap<String, String>, SettingRepositoryError>;
}
