//! Dashboard aggregates: collection counts and revenue totals.
//!
//! Prices are stored as text. A price contributes its integer value when the
//! trimmed text parses as a base-10 `i64`; anything else (`"N/A"`, `""`,
//! `"12.50"`, out-of-range digits) contributes zero. Sums saturate instead
//! of wrapping.

use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

/// Parse a stored price, returning zero for non-integer text.
///
/// # Examples
/// ```
/// use book_admin::domain::parse_price;
///
/// assert_eq!(parse_price("250"), 250);
/// assert_eq!(parse_price(" 42 "), 42);
/// assert_eq!(parse_price("N/A"), 0);
/// ```
pub fn parse_price(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(value) => value,
        Err(error) => {
            warn!(price = raw, %error, "price is not an integer; counting it as zero");
            0
        }
    }
}

/// Sum prices with [`parse_price`] semantics.
///
/// # Examples
/// ```
/// use book_admin::domain::sum_prices;
///
/// assert_eq!(sum_prices(["100", "N/A", "50"]), 150);
/// assert_eq!(sum_prices(Vec::<String>::new()), 0);
/// ```
pub fn sum_prices<I, S>(prices: I) -> i64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    prices
        .into_iter()
        .map(|price| parse_price(price.as_ref()))
        .fold(0_i64, i64::saturating_add)
}

/// Cardinalities of the reported collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionCounts {
    pub users: u64,
    pub books: u64,
    pub purchases: u64,
    pub rentals: u64,
}

/// Revenue per transaction type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevenueTotals {
    pub purchases: i64,
    pub rentals: i64,
}

impl RevenueTotals {
    /// Compute totals from raw purchase and rental price columns.
    pub fn from_prices<P, R>(purchase_prices: P, rental_prices: R) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        Self {
            purchases: sum_prices(purchase_prices),
            rentals: sum_prices(rental_prices),
        }
    }
}

/// Dashboard statistics.
///
/// ## Invariants
/// - `payment_count == purchase_count + rent_count`
/// - `payment_amount == total_purchase + total_rental` (saturating)
///
/// Fields are private so the derived values cannot drift from their parts.
///
/// # Examples
/// ```
/// use book_admin::domain::{CollectionCounts, DashboardStats, RevenueTotals};
///
/// let stats = DashboardStats::new(
///     CollectionCounts { users: 3, books: 5, purchases: 1, rentals: 1 },
///     RevenueTotals::from_prices(["250"], ["100"]),
/// );
/// assert_eq!(stats.payment_count(), 2);
/// assert_eq!(stats.payment_amount(), 350);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    user_count: u64,
    book_count: u64,
    purchase_count: u64,
    rent_count: u64,
    payment_count: u64,
    payment_amount: i64,
    total_purchase: i64,
    total_rental: i64,
}

impl DashboardStats {
    /// Combine counts and totals, deriving the payment aggregates.
    pub fn new(counts: CollectionCounts, totals: RevenueTotals) -> Self {
        Self {
            user_count: counts.users,
            book_count: counts.books,
            purchase_count: counts.purchases,
            rent_count: counts.rentals,
            payment_count: counts.purchases.saturating_add(counts.rentals),
            payment_amount: totals.purchases.saturating_add(totals.rentals),
            total_purchase: totals.purchases,
            total_rental: totals.rentals,
        }
    }

    pub fn user_count(&self) -> u64 {
        self.user_count
    }

    pub fn book_count(&self) -> u64 {
        self.book_count
    }

    pub fn purchase_count(&self) -> u64 {
        self.purchase_count
    }

    pub fn rent_count(&self) -> u64 {
        self.rent_count
    }

    /// Purchases plus rentals.
    pub fn payment_count(&self) -> u64 {
        self.payment_count
    }

    /// Purchase revenue plus rental revenue.
    pub fn payment_amount(&self) -> i64 {
        self.payment_amount
    }

    pub fn total_purchase(&self) -> i64 {
        self.total_purchase
    }

    pub fn total_rental(&self) -> i64 {
        self.total_rental
    }
}
