//! OpenAPI document for the admin endpoints, served by Swagger UI in debug
//! builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    Admin, AdminId, BookSummary, DashboardStats, PaymentRecord, ServiceType, TransactionRecord,
    UserSummary,
};
use crate::inbound::http::admin::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use crate::inbound::http::error::{AuthErrorBody, AuthFieldErrors, FailureBody};

struct AdminCookieScheme;

impl Modify for AdminCookieScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default)
            .add_security_scheme(
                "AdminCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "admin",
                    "Session token set by POST /admin/signup or POST /admin/login.",
                ))),
            );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&AdminCookieScheme),
    info(
        title = "Book platform admin API",
        description = "Admin sign-up, login, and dashboard reporting over purchases and rentals."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::admin::login_page,
        crate::inbound::http::admin::signup,
        crate::inbound::http::admin::login,
        crate::inbound::http::admin::logout,
        crate::inbound::http::admin::dashboard,
        crate::inbound::http::admin::purchases,
        crate::inbound::http::admin::rentals,
        crate::inbound::http::admin::payments,
    ),
    components(schemas(
        Admin,
        AdminId,
        AuthErrorBody,
        AuthFieldErrors,
        BookSummary,
        DashboardStats,
        FailureBody,
        LoginRequest,
        LoginResponse,
        PaymentRecord,
        ServiceType,
        SignupRequest,
        SignupResponse,
        TransactionRecord,
        UserSummary,
    )),
    tags((name = "admin", description = "Admin panel"))
)]
pub struct ApiDoc;
