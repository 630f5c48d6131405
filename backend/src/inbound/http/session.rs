//! Authenticated admin extractor.
//!
//! Handlers that take an [`AdminSession`] only run for requests whose
//! `admin` cookie carries a valid, unexpired token. Anything else is
//! redirected to the login page.

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::{AdminId, Error};
use crate::inbound::http::cookies::ADMIN_COOKIE;
use crate::inbound::http::state::HttpState;

/// Path of the login page unauthenticated requests are sent to.
pub const LOGIN_PATH: &str = "/admin";

/// The admin whose token accompanied the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSession(AdminId);

impl AdminSession {
    pub fn admin_id(&self) -> AdminId {
        self.0
    }
}

/// Rejection that answers `303 See Other` to the login page.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("login required")]
pub struct LoginRedirect;

impl ResponseError for LoginRedirect {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((LOCATION, LOGIN_PATH))
            .finish()
    }
}

fn authenticate(req: &HttpRequest) -> Result<AdminSession, actix_web::Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HttpState is not registered"))?;
    let Some(cookie) = req.cookie(ADMIN_COOKIE) else {
        debug!("no admin cookie; redirecting to login");
        return Err(LoginRedirect.into());
    };
    state
        .tokens
        .verify(cookie.value())
        .map(AdminSession)
        .map_err(|err| {
            debug!(error = %err, "admin token rejected; redirecting to login");
            LoginRedirect.into()
        })
}

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
