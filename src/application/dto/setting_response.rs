// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::models::setting::Setting;

/// 单个配置项的响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingResponseDto {
    pub name: String,
    pub value: String,
}

impl From<Setting> for SettingResponseDto {
    fn from(setting: Setting) -> Self {
        Self {
            name: setting.name,
            value: setting.val,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsListResponseDto {
    pub settings: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulkSetResponseDto {
    pub updated: usize,
}
