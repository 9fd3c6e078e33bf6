//! HTTP mapping for `TallyError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tally_core::error::{ClientCode, TallyError};

/// Error boundary between handlers and axum. Internal failures never leak
/// their message to the client.
#[derive(Debug)]
pub struct HttpError(pub TallyError);

impl From<TallyError> for HttpError {
    fn from(e: TallyError) -> Self {
        Self(e)
    }
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            (status, "Internal Server Error").into_response()
        } else {
            (status, self.0.client_code().as_str()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_closed_maps_to_500() {
        let resp = HttpError(TallyError::TokenClosed).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let e = HttpError::from(TallyError::BadRequest("x".into()));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
    }
}
