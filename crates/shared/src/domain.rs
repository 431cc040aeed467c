use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_newtype!(VendorId);

/// One freight vendor as returned by the list endpoint.
///
/// The service reports its table columns in upper case; camelCase names are
/// accepted as well. `price` and `delivery_days` may arrive as JSON strings or
/// numbers and are kept as display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecord {
    #[serde(rename = "FREIGHTVENDORID", alias = "freightVendorId", alias = "id")]
    pub id: VendorId,
    #[serde(
        rename = "FREIGHTVENDORNAME",
        alias = "freightVendorName",
        alias = "name",
        default
    )]
    pub name: String,
    #[serde(
        rename = "PICKUPLOCATION",
        alias = "pickUpLocation",
        alias = "pickupLocation",
        default
    )]
    pub pickup_location: String,
    #[serde(
        rename = "DESTINATIONLOCATION",
        alias = "destinationLocation",
        default
    )]
    pub destination_location: String,
    #[serde(
        rename = "PRICE",
        alias = "price",
        default,
        deserialize_with = "string_or_number"
    )]
    pub price: String,
    #[serde(rename = "CONTACT", alias = "contact", default)]
    pub contact: String,
    #[serde(
        rename = "DELIVERYINDAYS",
        alias = "deliveryInDays",
        alias = "deliveryDays",
        default,
        deserialize_with = "string_or_number"
    )]
    pub delivery_days: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(value) => value,
        Scalar::Integer(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
        Scalar::Null => String::new(),
    })
}
