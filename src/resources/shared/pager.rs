//! Paging and ordering options for list operations.

use std::fmt;

use super::parameters::{HasParameters, Parameters};

/// Default page size for list operations.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Sort direction of an [`OrderBy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending.
    #[default]
    Ascending,
    /// Descending.
    Descending,
}

impl Direction {
    /// Returns the wire form, `asc` or `desc`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Field and direction results are ordered by, sent as `field[direction]`.
///
/// # Example
///
/// ```rust
/// use paddle_billing::resources::OrderBy;
///
/// assert_eq!(OrderBy::id_ascending().to_string(), "id[asc]");
/// assert_eq!(OrderBy::descending("created_at").to_string(), "created_at[desc]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderBy {
    field: String,
    direction: Direction,
}

impl OrderBy {
    /// Orders by `field`, smallest first.
    #[must_use]
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    /// Orders by `field`, largest first.
    #[must_use]
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }

    /// Orders by ID, oldest first.
    #[must_use]
    pub fn id_ascending() -> Self {
        Self::ascending("id")
    }

    /// Orders by ID, newest first.
    #[must_use]
    pub fn id_descending() -> Self {
        Self::descending("id")
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for OrderBy {
    fn default() -> Self {
        Self::id_ascending()
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field, self.direction.as_str())
    }
}

/// Cursor, ordering and page size of a list request.
///
/// Defaults to ordering by ID ascending with [`DEFAULT_PER_PAGE`] results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    /// Return results after this ID.
    pub after: Option<String>,
    /// Result ordering.
    pub order_by: OrderBy,
    /// Page size.
    pub per_page: u32,
}

impl Pager {
    /// Creates a pager with the default ordering and page size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the listing after the given ID.
    #[must_use]
    pub fn after(mut self, id: impl Into<String>) -> Self {
        self.after = Some(id.into());
        self
    }

    /// Sets the ordering.
    #[must_use]
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            after: None,
            order_by: OrderBy::default(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl HasParameters for Pager {
    fn get_parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        parameters.push_opt("after", self.after.clone());
        parameters.push("order_by", self.order_by.to_string());
        parameters.push("per_page", self.per_page);
        parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pager_parameters() {
        let query = Pager::default().get_parameters().to_query();
        assert_eq!(
            query,
            vec![
                ("order_by".to_string(), "id[asc]".to_string()),
                ("per_page".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_pager_with_cursor_and_order() {
        let query = Pager::new()
            .after("pro_01gsz4vmqbjk3x4vvtafffd540")
            .order_by(OrderBy::id_descending())
            .per_page(10)
            .get_parameters()
            .to_query();

        assert_eq!(
            query,
            vec![
                (
                    "after".to_string(),
                    "pro_01gsz4vmqbjk3x4vvtafffd540".to_string()
                ),
                ("order_by".to_string(), "id[desc]".to_string()),
                ("per_page".to_string(), "10".to_string()),
            ]
        );
    }
}
