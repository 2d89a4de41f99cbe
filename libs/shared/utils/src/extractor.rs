use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use tracing::debug;

use shared_models::error::AppError;

/// JSON body extractor that rejects with the `{"error": ...}` envelope instead
/// of axum's plain-text 4xx.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!("Rejected request body: {}", rejection.body_text());
                Err(AppError::BadRequest(rejection.body_text()))
            }
        }
    }
}
