//! Admin panel handlers.
//!
//! ```text
//! GET  /admin             login page
//! POST /admin/signup      {"name","email","password"}
//! POST /admin/login       {"email","password"}
//! GET  /admin/logout
//! GET  /admin/dashboard   (cookie)
//! GET  /admin/purchases   (cookie)
//! GET  /admin/rentals     (cookie)
//! GET  /admin/payments    (cookie)
//! ```

use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::{Admin, AdminAuthError, LoginCredentials, NewAdmin};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{AuthErrorBody, FailureBody, json_error_handler};
use crate::inbound::http::presenter::{
    self, DashboardView, LoginView, PaymentListView, TransactionListView,
};
use crate::inbound::http::session::{AdminSession, LOGIN_PATH};
use crate::inbound::http::state::HttpState;

/// Sign-up body. Missing fields read as empty and fail validation.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login body. Missing fields read as empty.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SignupResponse {
    pub admin: Admin,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// Identifier of the authenticated admin.
    pub admin: String,
}

/// Issue a token for `admin_id` and wrap it in the session cookie.
fn session_cookie(
    state: &HttpState,
    admin_id: &crate::domain::AdminId,
) -> Result<actix_web::cookie::Cookie<'static>, AdminAuthError> {
    let token = state.tokens.issue(admin_id).map_err(|err| {
        error!(error = %err, "session token could not be issued");
        AdminAuthError::internal(err.to_string())
    })?;
    Ok(state.cookies.session_cookie(token))
}

#[utoipa::path(
    get,
    path = "/admin",
    responses((status = 200, description = "Login page", body = LoginView)),
    tags = ["admin"],
    operation_id = "loginPage"
)]
pub async fn login_page() -> web::Json<LoginView> {
    web::Json(presenter::login_page())
}

/// Register a new admin and start a session.
#[utoipa::path(
    post,
    path = "/admin/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Admin created", body = SignupResponse,
            headers(("Set-Cookie" = String, description = "admin session cookie"))),
        (status = 400, description = "Validation failed or email taken", body = AuthErrorBody),
        (status = 500, description = "Internal server error", body = FailureBody)
    ),
    tags = ["admin"],
    operation_id = "adminSignup"
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AdminAuthError> {
    let SignupRequest {
        name,
        email,
        password,
    } = payload.into_inner();
    let new_admin = NewAdmin::try_from_parts(&name, &email, &password)?;
    let admin = state.auth.sign_up(new_admin, state.today()).await?;
    let cookie = session_cookie(&state, &admin.id)?;
    info!(admin_id = %admin.id, "admin signed up");
    Ok(HttpResponse::Created()
        .cookie(cookie)
        .json(SignupResponse { admin }))
}

/// Authenticate an admin and start a session.
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse,
            headers(("Set-Cookie" = String, description = "admin session cookie"))),
        (status = 400, description = "Unknown email or wrong password", body = AuthErrorBody),
        (status = 500, description = "Internal server error", body = FailureBody)
    ),
    tags = ["admin"],
    operation_id = "adminLogin"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AdminAuthError> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&email, &password)?;
    let admin_id = state.auth.login(&credentials).await?;
    let cookie = session_cookie(&state, &admin_id)?;
    info!(%admin_id, "admin logged in");
    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        admin: admin_id.to_string(),
    }))
}

/// Expire the session cookie and go back to the login page.
///
/// The token itself stays valid until it expires.
#[utoipa::path(
    get,
    path = "/admin/logout",
    responses((status = 303, description = "Cookie cleared; redirect to /admin")),
    tags = ["admin"],
    operation_id = "adminLogout"
)]
#[get("/logout")]
pub async fn logout(state: web::Data<HttpState>) -> HttpResponse {
    HttpResponse::SeeOther()
        .cookie(state.cookies.cleared_cookie())
        .insert_header((LOCATION, LOGIN_PATH))
        .finish()
}

#[utoipa::path(
    get,
    path = "/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard", body = DashboardView),
        (status = 303, description = "Not logged in; redirect to /admin"),
        (status = 500, description = "Internal server error", body = FailureBody)
    ),
    tags = ["admin"],
    operation_id = "adminDashboard",
    security(("AdminCookie" = []))
)]
#[get("/dashboard")]
pub async fn dashboard(
    _session: AdminSession,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<DashboardView>> {
    let stats = state.dashboard.dashboard_stats().await?;
    Ok(web::Json(presenter::dashboard_page(stats)))
}

#[utoipa::path(
    get,
    path = "/admin/purchases",
    responses(
        (status = 200, description = "All purchases", body = TransactionListView),
        (status = 303, description = "Not logged in; redirect to /admin"),
        (status = 500, description = "Internal server error", body = FailureBody)
    ),
    tags = ["admin"],
    operation_id = "adminPurchases",
    security(("AdminCookie" = []))
)]
#[get("/purchases")]
pub async fn purchases(
    _session: AdminSession,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<TransactionListView>> {
    let records = state.dashboard.all_purchases().await?;
    Ok(web::Json(presenter::purchases_page(records)))
}

#[utoipa::path(
    get,
    path = "/admin/rentals",
    responses(
        (status = 200, description = "All rentals", body = TransactionListView),
        (status = 303, description = "Not logged in; redirect to /admin"),
        (status = 500, description = "Internal server error", body = FailureBody)
    ),
    tags = ["admin"],
    operation_id = "adminRentals",
    security(("AdminCookie" = []))
)]
#[get("/rentals")]
pub async fn rentals(
    _session: AdminSession,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<TransactionListView>> {
    let records = state.dashboard.all_rentals().await?;
    Ok(web::Json(presenter::rentals_page(records)))
}

#[utoipa::path(
    get,
    path = "/admin/payments",
    responses(
        (status = 200, description = "Purchases then rentals", body = PaymentListView),
        (status = 303, description = "Not logged in; redirect to /admin"),
        (status = 500, description = "Internal server error", body = FailureBody)
    ),
    tags = ["admin"],
    operation_id = "adminPayments",
    security(("AdminCookie" = []))
)]
#[get("/payments")]
pub async fn payments(
    _session: AdminSession,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<PaymentListView>> {
    let records = state.dashboard.all_payments().await?;
    Ok(web::Json(presenter::payments_page(records)))
}

/// Register the `/admin` scope.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
/// use book_admin::inbound::http::admin;
///
/// let app = App::new().configure(admin::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("", web::get().to(login_page))
            .service(signup)
            .service(login)
            .service(logout)
            .service(dashboard)
            .service(purchases)
            .service(rentals)
            .service(payments),
    );
}
