// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

/// 配置名称最大长度, 与 settings.name 列宽一致
pub const MAX_NAME_LENGTH: usize = 255;

/// 校验单个配置名称
pub fn validate_setting_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LENGTH {
        return Err(ValidationError::new("name_length").with_message(Cow::Owned(format!(
            "Setting name must be between 1 and {} characters",
            MAX_NAME_LENGTH
        ))));
    }
    if name.chars().any(char::is_control) {
        return Err(ValidationError::new("name_chars")
            .with_message(Cow::Borrowed("Setting name cannot contain control characters")));
    }
    Ok(())
}

fn validate_settings_map(settings: &BTreeMap<String, String>) -> Result<(), ValidationError> {
    if settings.is_empty() {
        return Err(ValidationError::new("settings_empty")
            .with_message(Cow::Borrowed("Settings cannot be empty")));
    }
    settings.keys().try_for_each(|name| validate_setting_name(name))
}

/// 路径中的配置名称
#[derive(Debug, Deserialize, Validate)]
pub struct SettingPathDto {
    #[validate(custom(function = "validate_setting_name"))]
    pub name: String,
}

/// 写入单个配置项的请求体
#[derive(Debug, Deserialize, Serialize)]
pub struct SetSettingRequestDto {
    pub value: String,
}

/// 批量写入请求体
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct BulkSetRequestDto {
    #[validate(custom(function = "validate_settings_map"))]
    pub settings: BTreeMap<String, String>,
}

/// `GET /v1/settings/{name}` 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct GetSettingQuery {
    pub default: Option<String>,
}

/// `GET /v1/settings` 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListSettingsQuery {
    #[serde(default)]
    pub fresh: bool,
}
