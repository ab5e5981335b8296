//! Custom JSON extractor that returns errors as JSON

use axum::{
    extract::{rejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::{ApiErrorDetail, ApiErrorResponse, ApiErrorType};

/// Wrapper around `axum::Json` that converts body rejections into
/// responses matching the API error envelope.
#[derive(Debug, Clone)]
pub struct Json<T>(pub T);

/// Body rejection carried back to the client as an envelope error
#[derive(Debug)]
pub struct JsonBodyError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for JsonBodyError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            error: ApiErrorDetail {
                message: self.message,
                error_type: ApiErrorType::InvalidRequestError,
                param: None,
                code: Some("json_parse_error".to_string()),
            },
        };

        (self.status, AxumJson(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AxumJson(value) = AxumJson::<T>::from_request(req, state)
            .await
            .map_err(|rejection| JsonBodyError {
                status: rejection.status(),
                message: rejection_message(&rejection),
            })?;

        Ok(Json(value))
    }
}

fn rejection_message(rejection: &rejection::JsonRejection) -> String {
    use rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid JSON request".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_error_into_response() {
        let error = JsonBodyError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "bad body".to_string(),
        };

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_json_serializes_inner_value() {
        let response = Json(serde_json::json!({"ok": true})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
