//! Typed domain objects decoded from the `data` section of responses.
//!
//! - [`Product`], [`Price`]: catalog entities
//! - [`Collection`], [`Paginator`]: one page of a list and the cursor over
//!   the following pages
//! - [`shared`]: value objects and enumerations used by several entities
//!
//! Every enumeration here tolerates values this SDK version does not know,
//! so new API values never break decoding.

mod collection;
mod price;
mod product;
pub mod shared;

pub use collection::{Collection, Paginator};
pub use price::Price;
pub use product::Product;
pub use shared::{
    CatalogType, CountryCode, CurrencyCode, CustomData, Duration, ImportMeta, Interval, Money,
    PriceQuantity, Status, TaxCategory, TaxMode, UnitPriceOverride,
};
