//! HTTP mapping for domain and auth errors.
//!
//! Domain [`Error`]s become `{"success": false, "message": ...}`. Auth
//! failures become a per-field `{"errors": {...}}` object with status 400,
//! except internal failures which use the generic envelope and status 500.
//! Internal messages are logged and never sent to the client.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{AdminAuthError, AdminField, Error, ErrorCode};
use crate::middleware::TraceId;

/// Result alias for handlers that fail with a domain [`Error`].
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";
const MALFORMED_BODY_MESSAGE: &str = "Malformed request body";

/// Generic failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
}

impl FailureBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    fn internal() -> Self {
        Self::new(INTERNAL_MESSAGE)
    }
}

/// Per-field auth messages. `email` and `password` are always present;
/// `name` only when it failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthFieldErrors {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `{"errors": {...}}` response for sign-up and login failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthErrorBody {
    pub errors: AuthFieldErrors,
}

impl AuthFieldErrors {
    /// Field messages for a client-side auth failure.
    pub fn from_auth_error(error: &AdminAuthError) -> Self {
        match error {
            AdminAuthError::IncorrectEmail => Self {
                email: "email not registered..!".to_owned(),
                ..Self::default()
            },
            AdminAuthError::IncorrectPassword => Self {
                password: "incorrect password!".to_owned(),
                ..Self::default()
            },
            AdminAuthError::DuplicateEmail => Self {
                email: "Email already registered".to_owned(),
                ..Self::default()
            },
            AdminAuthError::Validation(errors) => {
                let message = |field: AdminField| {
                    errors
                        .for_field(field)
                        .map(|code| code.message().to_owned())
                };
                Self {
                    email: message(AdminField::Email).unwrap_or_default(),
                    password: message(AdminField::Password).unwrap_or_default(),
                    name: message(AdminField::Name),
                }
            }
            AdminAuthError::Internal { .. } => Self::default(),
        }
    }
}

fn log_internal(message: &str) {
    match TraceId::current() {
        Some(trace_id) => error!(%trace_id, error = message, "request failed"),
        None => error!(error = message, "request failed"),
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let body = if self.status_code().is_server_error() {
            log_internal(self.message());
            FailureBody::internal()
        } else {
            FailureBody::new(self.message())
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl ResponseError for AdminAuthError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Internal { message } => {
                log_internal(message);
                HttpResponse::InternalServerError().json(FailureBody::internal())
            }
            other => HttpResponse::BadRequest().json(AuthErrorBody {
                errors: AuthFieldErrors::from_auth_error(other),
            }),
        }
    }
}

/// Turn malformed JSON bodies into the generic 400 envelope.
///
/// Parser detail is logged, never echoed.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    Error::invalid_request(MALFORMED_BODY_MESSAGE).into()
}
