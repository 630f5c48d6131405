//! Inbound adapters translating HTTP requests into domain port calls.

pub mod http;
