// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Errors
/// 저장된 상태 문자열을 해석할 수 없음
#[derive(Debug, Error)]
#[error("알 수 없는 경매 상태: {0}")]
pub struct UnknownStatus(pub String);

/// 저장소 오류
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("데이터베이스 오류: {0}")]
    Database(#[from] sqlx::Error),

    #[error("손상된 경매 레코드 {id}: {source}")]
    Corrupt {
        id: Uuid,
        #[source]
        source: UnknownStatus,
    },
}

/// 경매 서비스 오류
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("경매를 찾을 수 없습니다: {0}")]
    NotFound(Uuid),

    #[error("{0}")]
    SaveFailed(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

// endregion: --- Errors

// region:    --- Response
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ServiceError::SaveFailed(message) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
            ServiceError::Store(e) => {
                error!("{:<12} --> 저장소 오류: {:?}", "Handler", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": e.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
// endregion: --- Response
