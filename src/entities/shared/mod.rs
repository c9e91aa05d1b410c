//! Value objects and enumerations shared between entities.

mod custom_data;
mod duration;
mod import_meta;
mod locale;
mod money;

pub use custom_data::CustomData;
pub use duration::{Duration, PriceQuantity};
pub use import_meta::ImportMeta;
pub use locale::{CountryCode, CurrencyCode};
pub use money::{Money, UnitPriceOverride};

crate::paddle_enum! {
    /// Tax category of a product, used to determine the applicable tax rate.
    pub enum TaxCategory {
        DigitalGoods => "digital-goods",
        Ebooks => "ebooks",
        ImplementationServices => "implementation-services",
        ProfessionalServices => "professional-services",
        Saas => "saas",
        SoftwareProgrammingServices => "software-programming-services",
        Standard => "standard",
        TrainingServices => "training-services",
        WebsiteHosting => "website-hosting",
    }
}

crate::paddle_enum! {
    /// Whether an entity is part of the catalog or a one-off custom item.
    pub enum CatalogType {
        Custom => "custom",
        Standard => "standard",
    }
}

crate::paddle_enum! {
    /// Lifecycle status of catalog entities.
    pub enum Status {
        Active => "active",
        Archived => "archived",
    }
}

crate::paddle_enum! {
    /// How tax is calculated for a price.
    pub enum TaxMode {
        AccountSetting => "account_setting",
        External => "external",
        Internal => "internal",
    }
}

crate::paddle_enum! {
    /// Unit of a billing or trial [`Duration`].
    pub enum Interval {
        Day => "day",
        Week => "week",
        Month => "month",
        Year => "year",
    }
}
