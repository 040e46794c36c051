// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::Json;

use crate::presentation::errors::AppError;

/// JSON 请求体提取器
///
/// 与 `axum::Json` 相同, 但请求体缺失字段或类型不符时返回
/// `AppError` (400 + `{"error": ...}`) 而不是 axum 默认的纯文本 422
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
