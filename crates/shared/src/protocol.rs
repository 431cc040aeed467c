use serde::{Deserialize, Serialize};

use crate::domain::VendorId;

pub const LIST_VENDORS_PATH: &str = "getData";
pub const ADD_VENDOR_PATH: &str = "addData";
pub const UPDATE_VENDOR_PATH: &str = "updateData";
pub const DELETE_VENDOR_PATH: &str = "deleteData";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVendorRequest {
    #[serde(rename = "freightVendorName")]
    pub name: String,
    #[serde(rename = "destinationLocation")]
    pub destination: String,
    #[serde(rename = "pickUpLocation")]
    pub pickup: String,
    #[serde(rename = "deliveryInDays")]
    pub delivery_days: String,
    pub price: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVendorRequest {
    #[serde(rename = "freightVendorId")]
    pub id: VendorId,
    #[serde(rename = "freightVendorName")]
    pub name: String,
    #[serde(rename = "pickUpLocation")]
    pub pickup: String,
    #[serde(rename = "destinationLocation")]
    pub destination: String,
    #[serde(rename = "deliveryInDays")]
    pub delivery_days: String,
    pub price: String,
    pub contact: String,
}

/// Acknowledgement returned by every write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vendor_body_has_exactly_six_fields_and_no_id() {
        let body = serde_json::to_value(NewVendorRequest {
            name: "Acme".into(),
            destination: "Lyon".into(),
            pickup: "Hamburg".into(),
            delivery_days: "4".into(),
            price: "1250".into(),
            contact: "ops@acme.test".into(),
        })
        .expect("encode");

        let object = body.as_object().expect("object");
        assert_eq!(object.len(), 6);
        assert!(!object.contains_key("freightVendorId"));
        assert_eq!(object["pickUpLocation"], "Hamburg");
    }

    #[test]
    fn update_body_carries_integer_id() {
        let body = serde_json::to_value(UpdateVendorRequest {
            id: VendorId(42),
            name: "Acme".into(),
            pickup: "Hamburg".into(),
            destination: "Lyon".into(),
            delivery_days: "4".into(),
            price: "1250".into(),
            contact: "ops@acme.test".into(),
        })
        .expect("encode");

        assert_eq!(body["freightVendorId"], 42);
        assert_eq!(body.as_object().expect("object").len(), 7);
    }

    #[test]
    fn message_response_tolerates_missing_message() {
        let response: MessageResponse = serde_json::from_str("{}").expect("decode");
        assert_eq!(response.message, "");
    }
}
