//! Purchase and rental records and the combined payment listing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Discriminates the two transaction tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub enum ServiceType {
    Purchase,
    Rental,
}

impl ServiceType {
    /// Label used in payment listings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Rental => "Rental",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Book fields embedded in a transaction listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookSummary {
    pub id: Uuid,
    pub title: String,
    pub author: String,
}

/// User fields embedded in a transaction listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A purchase or rental with its book and user resolved.
///
/// `book` and `user` are `None` when the referenced row no longer exists.
/// `price` is the stored text, unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: Uuid,
    pub book: Option<BookSummary>,
    pub user: Option<UserSummary>,
    pub price: String,
    pub created_at: DateTime<Utc>,
}

/// A transaction tagged with the table it came from.
///
/// Serialises as the flattened record plus a `serviceType` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub service_type: ServiceType,
    #[serde(flatten)]
    pub record: TransactionRecord,
}

impl PaymentRecord {
    pub fn new(service_type: ServiceType, record: TransactionRecord) -> Self {
        Self {
            service_type,
            record,
        }
    }
}

/// Merge purchases and rentals into one payment listing.
///
/// Purchases come first, then rentals, each in their input order.
///
/// # Examples
/// ```
/// use book_admin::domain::{ServiceType, combine_payments};
///
/// let payments = combine_payments(Vec::new(), Vec::new());
/// assert!(payments.is_empty());
/// assert_eq!(ServiceType::Rental.as_str(), "Rental");
/// ```
pub fn combine_payments(
    purchases: Vec<TransactionRecord>,
    rentals: Vec<TransactionRecord>,
) -> Vec<PaymentRecord> {
    let mut payments = Vec::with_capacity(purchases.len() + rentals.len());
    payments.extend(
        purchases
            .into_iter()
            .map(|record| PaymentRecord::new(ServiceType::Purchase, record)),
    );
    payments.extend(
        rentals
            .into_iter()
            .map(|record| PaymentRecord::new(ServiceType::Rental, record)),
    );
    payments
}
