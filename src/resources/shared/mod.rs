//! Types shared by all resource operations.

mod pager;
mod parameters;

pub use pager::{Direction, OrderBy, Pager, DEFAULT_PER_PAGE};
pub use parameters::{HasParameters, ParameterValue, Parameters};
