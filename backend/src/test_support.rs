//! In-memory port implementations for unit and integration tests.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature, which the
//! crate's own dev-dependency enables for `tests/`.

mod admin_repository;
mod clock;
mod hasher;
mod reporting_repository;

pub use admin_repository::InMemoryAdminRepository;
pub use clock::FixedClock;
pub use hasher::PrefixHasher;
pub use reporting_repository::InMemoryReportingRepository;

/// 32-byte signing secret for tests.
pub const TEST_SECRET: &[u8] = b"test-secret-test-secret-test-sec";
