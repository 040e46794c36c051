// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DeriveIden;

/// `settings` 表及其列
#[derive(DeriveIden, Clone, Copy)]
pub enum Settings {
    Table,
    Id,
    Name,
    Val,
    CreatedAt,
    UpdatedAt,
}
