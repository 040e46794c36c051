// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::repositories::setting_repository::{SettingRepository, SettingRepositoryError};

/// 配置服务
///
/// 在仓库之上提供配置存储的完整契约: 缺省值读取、批量写入、存在性检查。
/// 该类型可廉价克隆, 启动时创建一次后显式传递给需要它的组件。
#[derive(Clone)]
pub struct SettingService {
    repo: Arc<dyn SettingRepository>,
}

impl SettingService {
    /// 创建新的配置服务实例
    pub fn new(repo: Arc<dyn SettingRepository>) -> Self {
        Self { repo }
    }

    /// 读取配置值
    ///
    /// # 参数
    ///
    /// * `name` - 配置名称
    /// * `default` - 配置不存在时返回的缺省值
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(String))` - 已保存的值, 或给定的缺省值
    /// * `Ok(None)` - 配置不存在且未给出缺省值
    /// * `Err(SettingRepositoryError)` - 存储访问失败
    pub async fn get(
        &self,
        name: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, SettingRepositoryError> {
        match self.repo.get(name).await? {
            Some(value) => Ok(Some(value)),
            None => {
                debug!(name, "Setting not found, falling back to default");
                Ok(default.map(str::to_owned))
            }
        }
    }

    /// 读取配置值, 不存在时返回 `default`
    pub async fn get_or(&self, name: &str, default: &str) -> Result<String, SettingRepositoryError> {
        Ok(self
            .get(name, Some(default))
            .await?
            .unwrap_or_else(|| default.to_owned()))
    }

    /// 写入单个配置项
    ///
    /// 相同的 `(name, value)` 重复写入不会改变存储状态
    pub async fn set(&self, name: &str, value: &str) -> Result<(), SettingRepositoryError> {
        debug!(name, "Setting value");
        self.repo.set(name, value).await
    }

    /// 批量写入配置项, 对每一项应用与 [`SettingService::set`] 相同的语义
    ///
    /// 返回写入的条目数。中途失败时, 已写入的条目保持不变。
    pub async fn set_many<I, K, V>(&self, entries: I) -> Result<usize, SettingRepositoryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut written = 0;
        for (name, value) in entries {
            self.set(name.as_ref(), value.as_ref()).await?;
            written += 1;
        }
        debug!(written, "Bulk settings applied");
        Ok(written)
    }

    /// 删除配置项, 不存在时不报错
    pub async fn remove(&self, name: &str) -> Result<bool, SettingRepositoryError> {
        let removed = self.repo.remove(name).await?;
        debug!(name, removed, "Setting removed");
        Ok(removed)
    }

    /// 配置项是否存在
    pub async fn has(&self, name: &str) -> Result<bool, SettingRepositoryError> {
        Ok(self.repo.get(name).await?.is_some())
    }

    /// 读取全部配置项
    ///
    /// 没有进程内缓存, 每次调用都直接读取存储; `force_refresh` 仅用于保持调用方语义
    pub async fn all(
        &self,
        force_refresh: bool,
    ) -> Result<BTreeMap<String, String>, SettingRepositoryError> {
        debug!(force_refresh, "Loading all settings");
        self.repo.all().await
    }
}
