// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Alias, Expr, OnConflict, Order, Query, SimpleExpr};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::repositories::setting_repository::{SettingRepository, SettingRepositoryError};
use crate::infrastructure::database::tables::Settings;
use crate::infrastructure::metrics::record_operation;

/// 基于 SQL 的配置仓库实现
///
/// 所有语句都通过 sea-query 按当前数据库后端构建, 参数均以绑定值传递
pub struct SettingRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl SettingRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingRepository for SettingRepositoryImpl {
    async fn get(&self, name: &str) -> Result<Option<String>, SettingRepositoryError> {
        record_operation("get");
        let stmt = Query::select()
            .column(Settings::Val)
            .from(Settings::Table)
            .and_where(Expr::col(Settings::Name).eq(name))
            .to_owned();

        let backend = self.db.get_database_backend();
        let row = self.db.query_one(backend.build(&stmt)).await?;

        Ok(row.map(|row| row.try_get::<String>("", "val")).transpose()?)
    }

    async fn set(&self, name: &str, val: &str) -> Result<(), SettingRepositoryError> {
        record_operation("set");
        let now = Utc::now();
        let values: [SimpleExpr; 4] = [name.into(), val.into(), now.into(), now.into()];

        let mut stmt = Query::insert();
        stmt.into_table(Settings::Table).columns([
            Settings::Name,
            Settings::Val,
            Settings::CreatedAt,
            Settings::UpdatedAt,
        ]);
        stmt.values(values)
            .map_err(|e| SettingRepositoryError::InvalidStatement(e.to_string()))?;
        // Unchanged values leave the row (and updated_at) untouched
        stmt.on_conflict(
            OnConflict::column(Settings::Name)
                .update_columns([Settings::Val, Settings::UpdatedAt])
                .action_and_where(
                    Expr::col((Settings::Table, Settings::Val))
                        .ne(Expr::col((Alias::new("excluded"), Settings::Val))),
                )
                .to_owned(),
        );

        let backend = self.db.get_database_backend();
        self.db.execute(backend.build(&stmt)).await?;
        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<bool, SettingRepositoryError> {
        record_operation("remove");
        let stmt = Query::delete()
            .from_table(Settings::Table)
            .and_where(Expr::col(Settings::Name).eq(name))
            .to_owned();

        let backend = self.db.get_database_backend();
        let result = self.db.execute(backend.build(&stmt)).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn all(&self) -> Result<BTreeMap<String, String>, SettingRepositoryError> {
        record_operation("all");
        let stmt = Query::select()
            .columns([Settings::Name, Settings::Val])
            .from(Settings::Table)
            .order_by(Settings::Name, Order::Asc)
            .to_owned();

        let backend = self.db.get_database_backend();
        let rows = self.db.query_all(backend.build(&stmt)).await?;

        let mut settings = BTreeMap::new();
        for row in rows {
            let name: String = row.try_get("", "name")?;
            let val: String = row.try_get("", "val")?;
            settings.insert(name, val);
        }
        Ok(settings)
    }
}
