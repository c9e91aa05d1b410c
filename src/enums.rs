//! String-backed enumerations that tolerate unknown values.
//!
//! Paddle adds enum values to its API over time. A closed Rust enum would fail
//! to deserialize as soon as the API returns a value this SDK version does not
//! declare. Every enum in this crate is instead declared with [`paddle_enum!`],
//! which adds an `Undefined(String)` variant carrying the unrecognized wire
//! value.
//!
//! # Semantics
//!
//! - Lookup by value ([`PaddleEnum::from_value`]) is an exact, case-sensitive
//!   match against the declared values. Anything else becomes `Undefined`.
//! - Lookup by symbolic name ([`PaddleEnum::from_name`]) returns the declared
//!   member, synthesizes an `Undefined` member for names that look like
//!   member names (first character uppercase), and returns `None` for
//!   anything else.
//! - Equality and hashing only consider the wire value, so an `Undefined`
//!   member equals a declared member with the same value, and every member
//!   compares equal to its wire string.
//!
//! # Example
//!
//! ```rust
//! use paddle_billing::paddle_enum;
//! use paddle_billing::enums::PaddleEnum;
//!
//! paddle_enum! {
//!     /// Countries used in the example.
//!     pub enum Country {
//!         /// Canada.
//!         CA => "canada",
//!         /// United States.
//!         US => "usa",
//!     }
//! }
//!
//! assert_eq!(Country::from_value("canada"), Country::CA);
//! assert_eq!(Country::CA.name(), "CA");
//! assert!(Country::CA.is_known());
//!
//! let france = Country::from_value("france");
//! assert_eq!(france, "france");
//! assert_eq!(france.name(), "Undefined");
//! assert!(!france.is_known());
//!
//! let synthesized = Country::from_name("France").unwrap();
//! assert_eq!(synthesized.value(), "france");
//! assert!(Country::from_name("france").is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer};

/// The symbolic name reported by members that were not declared.
pub const UNDEFINED_NAME: &str = "Undefined";

/// Behaviour shared by every enum declared with [`paddle_enum!`].
pub trait PaddleEnum: Sized + Clone {
    /// The Rust type name, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Declared members as `(symbolic name, wire value)` pairs, in declaration order.
    const MEMBERS: &'static [(&'static str, &'static str)];

    /// Returns the symbolic name, or [`UNDEFINED_NAME`] for unknown members.
    fn name(&self) -> &str;

    /// Returns the wire value.
    fn value(&self) -> &str;

    /// Returns `true` if this member was declared.
    fn is_known(&self) -> bool;

    /// Looks up a member by wire value, falling back to an undefined member.
    fn from_value(value: &str) -> Self;

    /// Creates an undefined member carrying `value`.
    fn undefined(value: String) -> Self;

    /// Looks up a member by symbolic name.
    ///
    /// Declared names resolve to their member. Undeclared names whose first
    /// character is an ASCII uppercase letter produce an undefined member
    /// whose value is the normalized name (see [`normalize_member_name`]).
    /// Any other name returns `None`.
    fn from_name(name: &str) -> Option<Self> {
        if let Some((_, value)) = Self::MEMBERS.iter().find(|(n, _)| *n == name) {
            return Some(Self::from_value(value));
        }
        if is_member_like_name(name) {
            return Some(Self::undefined(normalize_member_name(name)));
        }
        None
    }

    /// Returns every declared member in declaration order.
    #[must_use]
    fn members() -> Vec<Self> {
        Self::MEMBERS
            .iter()
            .map(|(_, value)| Self::from_value(value))
            .collect()
    }

    /// Returns a detached snapshot of this member.
    #[must_use]
    fn to_enum_value(&self) -> EnumValue {
        EnumValue {
            name: self.name().to_string(),
            value: self.value().to_string(),
            known: self.is_known(),
        }
    }
}

/// Returns `true` if `name` has the shape of a member name.
///
/// Member names start with an uppercase letter. Lowercase names are
/// never treated as members.
#[must_use]
pub fn is_member_like_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Converts a symbolic name into a wire value.
///
/// Words are split at spaces, `-`, `_` and at lowercase-to-uppercase
/// boundaries, lowercased, and joined with `_`.
///
/// ```rust
/// use paddle_billing::enums::normalize_member_name;
///
/// assert_eq!(normalize_member_name("France"), "france");
/// assert_eq!(normalize_member_name("SomeCountry"), "some_country");
/// assert_eq!(normalize_member_name("SOME_COUNTRY"), "some_country");
/// assert_eq!(normalize_member_name("Some-Country"), "some_country");
/// ```
#[must_use]
pub fn normalize_member_name(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if matches!(c, ' ' | '-' | '_') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            words.push(std::mem::take(&mut current));
        }
        current.extend(c.to_lowercase());
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.join("_")
}

/// Deserializes a member from its wire value.
///
/// Unknown values never fail; they are logged and kept as undefined members.
///
/// # Errors
///
/// Returns the deserializer's error if the input is not a string.
pub fn deserialize_member<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: PaddleEnum,
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    let member = E::from_value(&value);
    if !member.is_known() {
        tracing::warn!(
            enum_type = E::TYPE_NAME,
            value = %value,
            "Received an enum value this SDK version does not declare"
        );
    }
    Ok(member)
}

/// A detached snapshot of an enum member.
///
/// Produced when an operation is flattened into a parameter record. It keeps
/// the symbolic name and known flag next to the wire value, and compares equal
/// to strings by value.
#[derive(Clone, Debug, Eq)]
pub struct EnumValue {
    name: String,
    value: String,
    known: bool,
}

impl EnumValue {
    /// Returns the symbolic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the wire value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the member was declared.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.known
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<str> for EnumValue {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for EnumValue {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

/// Declares a string-backed enum that tolerates unknown values.
///
/// Each member is written as `Name => "wire_value",`. The generated enum gets
/// one variant per member plus `Undefined(String)`, an implementation of
/// [`PaddleEnum`](crate::enums::PaddleEnum), value-based `PartialEq`/`Hash`,
/// string comparisons, `Display`, `FromStr` and serde support.
#[macro_export]
macro_rules! paddle_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this SDK version does not declare.
            Undefined(::std::string::String),
        }

        impl $crate::enums::PaddleEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [(&'static str, &'static str)] =
                &[$((stringify!($variant), $value)),+];

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                    Self::Undefined(_) => $crate::enums::UNDEFINED_NAME,
                }
            }

            fn value(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Undefined(value) => value.as_str(),
                }
            }

            fn is_known(&self) -> bool {
                !matches!(self, Self::Undefined(_))
            }

            fn from_value(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Undefined(other.to_owned()),
                }
            }

            fn undefined(value: ::std::string::String) -> Self {
                Self::Undefined(value)
            }
        }

        impl $name {
            /// Returns the symbolic name, or `"Undefined"` for unknown members.
            #[must_use]
            pub fn name(&self) -> &str {
                <Self as $crate::enums::PaddleEnum>::name(self)
            }

            /// Returns the wire value.
            #[must_use]
            pub fn value(&self) -> &str {
                <Self as $crate::enums::PaddleEnum>::value(self)
            }

            /// Returns `true` if this member was declared.
            #[must_use]
            pub fn is_known(&self) -> bool {
                <Self as $crate::enums::PaddleEnum>::is_known(self)
            }

            /// Looks up a member by wire value, falling back to `Undefined`.
            #[must_use]
            pub fn from_value(value: &str) -> Self {
                <Self as $crate::enums::PaddleEnum>::from_value(value)
            }

            /// Looks up a member by symbolic name.
            #[must_use]
            pub fn from_name(name: &str) -> ::std::option::Option<Self> {
                <Self as $crate::enums::PaddleEnum>::from_name(name)
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.value() == other.value()
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.value(), state);
            }
        }

        impl ::std::cmp::PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.value() == other
            }
        }

        impl ::std::cmp::PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.value() == *other
            }
        }

        impl ::std::cmp::PartialEq<::std::string::String> for $name {
            fn eq(&self, other: &::std::string::String) -> bool {
                self.value() == other.as_str()
            }
        }

        impl ::std::cmp::PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.value()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.value())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from_value(s))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from_value(value)
            }
        }

        impl $crate::enums::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::enums::__private::serde::Serializer,
            {
                serializer.serialize_str(self.value())
            }
        }

        impl<'de> $crate::enums::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::enums::__private::serde::Deserializer<'de>,
            {
                $crate::enums::deserialize_member(deserializer)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    crate::paddle_enum! {
        enum TestCountryCodes {
            CA => "canada",
            US => "usa",
        }
    }

    #[test]
    fn test_declared_members_are_canonical_and_known() {
        for (name, value) in TestCountryCodes::MEMBERS {
            let member = TestCountryCodes::from_value(value);
            assert!(member.is_known());
            assert_eq!(member.name(), *name);
            assert_eq!(member.value(), *value);
            assert_eq!(TestCountryCodes::from_name(name), Some(member));
        }
        assert!(matches!(
            TestCountryCodes::from_value("canada"),
            TestCountryCodes::CA
        ));
    }

    #[test]
    fn test_members_compare_equal_to_their_wire_strings() {
        assert_eq!(TestCountryCodes::CA, "canada");
        assert_eq!(TestCountryCodes::US, "usa");
        assert_eq!("usa", TestCountryCodes::US);
        assert_eq!(TestCountryCodes::CA, "canada".to_string());
        assert_eq!(TestCountryCodes::CA.name(), "CA");
        assert_eq!(TestCountryCodes::from_value("canada").name(), "CA");
    }

    #[test]
    fn test_unknown_value_produces_undefined_member() {
        let france = TestCountryCodes::from_value("france");
        assert_eq!(france, "france");
        assert_eq!(france.value(), "france");
        assert_eq!(france.name(), UNDEFINED_NAME);
        assert!(!france.is_known());
    }

    #[test]
    fn test_lookup_by_value_is_case_sensitive() {
        assert!(!TestCountryCodes::from_value("Canada").is_known());
        assert!(!TestCountryCodes::from_value("CANADA").is_known());
    }

    #[test]
    fn test_unknown_member_name_synthesizes_undefined_member() {
        let france = TestCountryCodes::from_name("France").unwrap();
        assert_eq!(france, "france");
        assert_eq!(france.value(), "france");
        assert_eq!(france.name(), "Undefined");
        assert!(!france.is_known());
    }

    #[test]
    fn test_names_with_uppercase_first_letter_are_synthesized() {
        for name in [
            "SomeCountry",
            "Some Country",
            "Some-Country",
            "Some_Country",
            "SOMECOUNTRY",
            "SOME_COUNTRY",
        ] {
            assert!(
                TestCountryCodes::from_name(name).is_some(),
                "{name} should synthesize a member"
            );
        }
    }

    #[test]
    fn test_lowercase_names_are_not_synthesized() {
        for name in ["somecountry", "some_country", "some-country", ""] {
            assert!(
                TestCountryCodes::from_name(name).is_none(),
                "{name} should not synthesize a member"
            );
        }
    }

    #[test]
    fn test_synthesized_member_is_not_registered() {
        let _ = TestCountryCodes::from_name("France");
        assert_eq!(TestCountryCodes::members().len(), 2);
        assert!(!TestCountryCodes::from_value("france").is_known());
    }

    #[test]
    fn test_equality_and_hash_ignore_known_flag() {
        let forged = TestCountryCodes::Undefined("canada".to_string());
        assert_eq!(forged, TestCountryCodes::CA);

        let mut set = HashSet::new();
        set.insert(TestCountryCodes::CA);
        assert!(set.contains(&forged));
        set.insert(forged);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serde_uses_wire_value() {
        let json = serde_json::to_string(&TestCountryCodes::US).unwrap();
        assert_eq!(json, r#""usa""#);

        let parsed: TestCountryCodes = serde_json::from_str(r#""canada""#).unwrap();
        assert!(matches!(parsed, TestCountryCodes::CA));

        let unknown: TestCountryCodes = serde_json::from_str(r#""mexico""#).unwrap();
        assert!(!unknown.is_known());
        assert_eq!(serde_json::to_string(&unknown).unwrap(), r#""mexico""#);
    }

    #[test]
    fn test_non_string_input_is_a_deserialization_error() {
        assert!(serde_json::from_str::<TestCountryCodes>("42").is_err());
    }

    #[test]
    fn test_enum_value_snapshot_keeps_rich_information() {
        let snapshot = TestCountryCodes::CA.to_enum_value();
        assert_eq!(snapshot, "canada");
        assert_eq!(snapshot.name(), "CA");
        assert!(snapshot.is_known());

        let unknown = TestCountryCodes::from_name("Fake").unwrap().to_enum_value();
        assert_eq!(unknown.value(), "fake");
        assert!(!unknown.is_known());
    }

    #[test]
    fn test_normalize_member_name() {
        assert_eq!(normalize_member_name("France"), "france");
        assert_eq!(normalize_member_name("SomeCountry"), "some_country");
        assert_eq!(normalize_member_name("Some Country"), "some_country");
        assert_eq!(normalize_member_name("SOMECOUNTRY"), "somecountry");
        assert_eq!(normalize_member_name("Digital2Goods"), "digital2goods");
        assert_eq!(normalize_member_name("Digital2Go"), "digital2_go");
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(TestCountryCodes::CA.to_string(), "canada");
        let parsed: TestCountryCodes = "usa".parse().unwrap();
        assert_eq!(parsed, TestCountryCodes::US);
    }
}
