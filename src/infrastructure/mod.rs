// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 数据库（database）：连接池、迁移以及表标识符
/// - 指标（metrics）：Prometheus 导出与操作计数
/// - 仓库实现（repositories）：领域仓库接口的 SQL 实现
pub mod database;
pub mod metrics;
pub mod repositories;
