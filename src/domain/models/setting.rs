// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 配置项
///
/// `name` 在存储中唯一, `val` 始终以字符串形式保存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub name: String,
    pub val: String,
}

impl Setting {
    pub fn new(name: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            val: val.into(),
        }
    }
}
