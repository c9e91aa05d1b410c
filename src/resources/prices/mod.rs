//! The prices resource.

mod client;
mod operations;

pub use client::PricesClient;
pub use operations::{CreatePrice, GetPrice, ListPrices, PriceIncludes, UpdatePrice};
