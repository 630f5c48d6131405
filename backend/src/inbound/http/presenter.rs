//! Page view-models handed to the external renderer.
//!
//! Every page carries the template `title` and `layout`; the page body is
//! flattened alongside them.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{DashboardStats, PaymentRecord, TransactionRecord};

const LOGIN_LAYOUT: &str = "./layouts/admin";
const DASHBOARD_LAYOUT: &str = "./layouts/admin-dash";

/// A page title and layout plus its body fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageView<T> {
    pub title: &'static str,
    pub layout: &'static str,
    #[serde(flatten)]
    pub body: T,
}

/// Body of pages that carry no data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct NoBody {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardBody {
    pub data: DashboardStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ListBody<T> {
    pub result: Vec<T>,
}

pub type LoginView = PageView<NoBody>;
pub type DashboardView = PageView<DashboardBody>;
pub type TransactionListView = PageView<ListBody<TransactionRecord>>;
pub type PaymentListView = PageView<ListBody<PaymentRecord>>;

pub fn login_page() -> LoginView {
    PageView {
        title: "Admin Login",
        layout: LOGIN_LAYOUT,
        body: NoBody {},
    }
}

pub fn dashboard_page(stats: DashboardStats) -> DashboardView {
    PageView {
        title: "Dashboard Admin",
        layout: DASHBOARD_LAYOUT,
        body: DashboardBody { data: stats },
    }
}

pub fn purchases_page(result: Vec<TransactionRecord>) -> TransactionListView {
    PageView {
        title: "All Purchased Books",
        layout: DASHBOARD_LAYOUT,
        body: ListBody { result },
    }
}

pub fn rentals_page(result: Vec<TransactionRecord>) -> TransactionListView {
    PageView {
        title: "All Rented Books",
        layout: DASHBOARD_LAYOUT,
        body: ListBody { result },
    }
}

pub fn payments_page(result: Vec<PaymentRecord>) -> PaymentListView {
    PageView {
        title: "All Payments",
        layout: DASHBOARD_LAYOUT,
        body: ListBody { result },
    }
}
