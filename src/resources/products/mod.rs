//! The products resource.

mod client;
mod operations;

pub use client::ProductsClient;
pub use operations::{CreateProduct, GetProduct, ListProducts, ProductIncludes, UpdateProduct};
