//! The catalog field table.
//!
//! Every catalog family carries the same attribute set. The set is declared
//! exactly once, in the `catalog_attributes!` invocation below, and that
//! single declaration produces:
//!
//! - the [`CatalogAttributes`] struct (the create/update payload and the
//!   non-identifier half of every record),
//! - [`CatalogAttributes::COLUMNS`], the ordered column list used in SQL,
//! - [`CatalogAttributes::values`], the ordered values to bind for writes,
//! - [`CatalogAttributes::read_from`], the ordered reads for loading a row.
//!
//! Reads and writes walk the same list in the same order, so no field can be
//! copied from the wrong source.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A borrowed attribute value, tagged with its storage type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    Text(Option<&'a str>),
    Decimal(Option<Decimal>),
    Flag(Option<bool>),
    Count(Option<i32>),
}

/// Anything attribute values can be read from by column name (a database
/// row, a test fixture).
pub trait AttributeSource {
    type Error;

    fn text(&self, column: &'static str) -> Result<Option<String>, Self::Error>;
    fn decimal(&self, column: &'static str) -> Result<Option<Decimal>, Self::Error>;
    fn flag(&self, column: &'static str) -> Result<Option<bool>, Self::Error>;
    fn count(&self, column: &'static str) -> Result<Option<i32>, Self::Error>;
}

/// Rust types allowed in the field table.
pub trait AttributeType: Sized {
    fn read<S: AttributeSource>(
        source: &S,
        column: &'static str,
    ) -> Result<Option<Self>, S::Error>;

    fn value(field: &Option<Self>) -> AttributeValue<'_>;
}

impl AttributeType for String {
    fn read<S: AttributeSource>(
        source: &S,
        column: &'static str,
    ) -> Result<Option<Self>, S::Error> {
        source.text(column)
    }

    fn value(field: &Option<Self>) -> AttributeValue<'_> {
        AttributeValue::Text(field.as_deref())
    }
}

impl AttributeType for Decimal {
    fn read<S: AttributeSource>(
        source: &S,
        column: &'static str,
    ) -> Result<Option<Self>, S::Error> {
        source.decimal(column)
    }

    fn value(field: &Option<Self>) -> AttributeValue<'_> {
        AttributeValue::Decimal(*field)
    }
}

impl AttributeType for bool {
    fn read<S: AttributeSource>(
        source: &S,
        column: &'static str,
    ) -> Result<Option<Self>, S::Error> {
        source.flag(column)
    }

    fn value(field: &Option<Self>) -> AttributeValue<'_> {
        AttributeValue::Flag(*field)
    }
}

impl AttributeType for i32 {
    fn read<S: AttributeSource>(
        source: &S,
        column: &'static str,
    ) -> Result<Option<Self>, S::Error> {
        source.count(column)
    }

    fn value(field: &Option<Self>) -> AttributeValue<'_> {
        AttributeValue::Count(*field)
    }
}

macro_rules! catalog_attributes {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty ),+ $(,)?) => {
        /// Every non-identifier attribute of a catalog item.
        ///
        /// This is both the input payload for create/update and the body of
        /// a persisted record. All fields are nullable; nothing is validated
        /// or defaulted, so an omitted field is stored as null.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct CatalogAttributes {
            $( $(#[$meta])* pub $field: Option<$ty>, )+
        }

        impl CatalogAttributes {
            /// Column names, in field-table order.
            pub const COLUMNS: &[&str] = &[$( stringify!($field) ),+];

            /// Field values, in the same order as [`Self::COLUMNS`].
            pub fn values(&self) -> Vec<AttributeValue<'_>> {
                vec![$( <$ty as AttributeType>::value(&self.$field) ),+]
            }

            /// Load every attribute from `source`, column by column.
            pub fn read_from<S: AttributeSource>(source: &S) -> Result<Self, S::Error> {
                Ok(Self {
                    $( $field: <$ty as AttributeType>::read(source, stringify!($field))?, )+
                })
            }
        }
    };
}

catalog_attributes! {
    #[serde(rename = "type")]
    item_type: String,
    brand: String,
    name: String,
    price: Decimal,
    available_size: Decimal,
    refresh_rate: Decimal,
    screen_type: String,
    screen_quality: String,
    smart_tv: bool,
    wifi: bool,
    voice_control: bool,
    hdr: bool,
    bluetooth: bool,
    ambi_light: bool,
    original_stock: i32,
    sold: i32,
}
