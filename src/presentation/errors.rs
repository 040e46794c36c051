// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// 请求层错误
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Setting not found: {0}")]
    SettingNotFound(String),
}

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<ValidationErrors>().is_some()
            || self.0.downcast_ref::<JsonRejection>().is_some()
        {
            return StatusCode::BAD_REQUEST;
        }
        if let Some(ApiError::SettingNotFound(_)) = self.0.downcast_ref::<ApiError>() {
            return StatusCode::NOT_FOUND;
        }
        // Storage failures and anything unexpected
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
