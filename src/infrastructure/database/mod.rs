// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 提供数据库连接、迁移执行以及 SQL 语句使用的表标识符
pub mod connection;
pub mod tables;
