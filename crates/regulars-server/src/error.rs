use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use regulars_core::error::RegularsError;

// ---------------------------------------------------------------------------
// Internal sentinels
// ---------------------------------------------------------------------------

/// Carries an explicit 401 through the `anyhow::Error` chain.
#[derive(Debug)]
struct UnauthorizedError(String);

impl std::fmt::Display for UnauthorizedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UnauthorizedError {}

/// Carries an explicit 400 through the `anyhow::Error` chain.
#[derive(Debug)]
struct BadRequestError(String);

impl std::fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BadRequestError {}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequestError(msg.into()).into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self(UnauthorizedError(msg.into()).into())
    }

    pub fn join(err: tokio::task::JoinError) -> Self {
        Self(anyhow::anyhow!("task join error: {err}"))
    }
}

fn status_for(err: &RegularsError) -> StatusCode {
    match err {
        RegularsError::HouseholdNotFound(_)
        | RegularsError::ItemNotFound(_)
        | RegularsError::ShareIdNotFound => StatusCode::NOT_FOUND,
        RegularsError::HouseholdExists(_) => StatusCode::CONFLICT,
        RegularsError::InvalidAccountId(_)
        | RegularsError::EmptyItemName
        | RegularsError::UnknownCategory(_)
        | RegularsError::UnknownTag(_)
        | RegularsError::UnknownInventoryStatus(_)
        | RegularsError::InvalidShareId => StatusCode::BAD_REQUEST,
        RegularsError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        RegularsError::Io(_) | RegularsError::Yaml(_) | RegularsError::Json(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.0.downcast_ref::<UnauthorizedError>().is_some() {
            StatusCode::UNAUTHORIZED
        } else if self.0.downcast_ref::<BadRequestError>().is_some() {
            StatusCode::BAD_REQUEST
        } else if let Some(e) = self.0.downcast_ref::<RegularsError>() {
            status_for(e)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!(error = %format!("{:#}", self.0), "request failed");
        }

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
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

#[cfg(test)]
mod tests {
    use super::*;

    fn status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn not_found_variants_map_to_404() {
        assert_eq!(
            status(AppError(RegularsError::HouseholdNotFound("a".into()).into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(AppError(RegularsError::ItemNotFound("i".into()).into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(AppError(RegularsError::ShareIdNotFound.into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn household_exists_maps_to_409() {
        assert_eq!(
            status(AppError(RegularsError::HouseholdExists("a".into()).into())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(
            status(AppError(RegularsError::EmptyItemName.into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(AppError(RegularsError::UnknownCategory("x".into()).into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(AppError(RegularsError::InvalidShareId.into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status(AppError::bad_request("nope")), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn credentials_map_to_401() {
        assert_eq!(
            status(AppError(RegularsError::InvalidCredentials.into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status(AppError::unauthorized("missing token")),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn io_and_foreign_errors_map_to_500() {
        let io_err = std::io::Error::other("disk full");
        assert_eq!(
            status(AppError(RegularsError::Io(io_err).into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status(AppError(anyhow::anyhow!("something unexpected"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_body_is_json() {
        let response = AppError(RegularsError::EmptyItemName.into()).into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(ct.to_str().unwrap().contains("application/json"));
    }
}
