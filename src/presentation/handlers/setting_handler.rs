// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use crate::application::dto::setting_request::{
    BulkSetRequestDto, GetSettingQuery, ListSettingsQuery, SetSettingRequestDto, SettingPathDto,
};
use crate::application::dto::setting_response::{
    BulkSetResponseDto, SettingResponseDto, SettingsListResponseDto,
};
use crate::domain::models::setting::Setting;
use crate::domain::services::setting_service::SettingService;
use crate::presentation::errors::{ApiError, AppError};
use crate::presentation::extractors::api_json::ApiJson;

/// 列出全部配置项
pub async fn list_settings(
    Extension(service): Extension<SettingService>,
    Query(query): Query<ListSettingsQuery>,
) -> Result<Json<SettingsListResponseDto>, AppError> {
    let settings = service.all(query.fresh).await?;
    Ok(Json(SettingsListResponseDto { settings }))
}

/// 读取单个配置项
///
/// 配置不存在时返回 `default` 查询参数; 两者都没有时返回 404
pub async fn get_setting(
    Extension(service): Extension<SettingService>,
    Path(path): Path<SettingPathDto>,
    Query(query): Query<GetSettingQuery>,
) -> Result<Json<SettingResponseDto>, AppError> {
    path.validate()?;

    match service.get(&path.name, query.default.as_deref()).await? {
        Some(value) => Ok(Json(Setting::new(path.name, value).into())),
        None => Err(ApiError::SettingNotFound(path.name).into()),
    }
}

/// 创建或更新单个配置项
pub async fn put_setting(
    Extension(service): Extension<SettingService>,
    Path(path): Path<SettingPathDto>,
    ApiJson(payload): ApiJson<SetSettingRequestDto>,
) -> Result<Json<SettingResponseDto>, AppError> {
    path.validate()?;

    service.set(&path.name, &payload.value).await?;
    Ok(Json(Setting::new(path.name, payload.value).into()))
}

/// 批量写入配置项
pub async fn bulk_set_settings(
    Extension(service): Extension<SettingService>,
    ApiJson(payload): ApiJson<BulkSetRequestDto>,
) -> Result<Json<BulkSetResponseDto>, AppError> {
    payload.validate()?;

    let updated = service.set_many(payload.settings).await?;
    Ok(Json(BulkSetResponseDto { updated }))
}

/// 删除配置项, 不存在时同样返回 204
pub async fn delete_setting(
    Extension(service): Extension<SettingService>,
    Path(path): Path<SettingPathDto>,
) -> Result<StatusCode, AppError> {
    path.validate()?;

    service.remove(&path.name).await?;
    Ok(StatusCode::NO_CONTENT)
}
