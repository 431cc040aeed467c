//! Edit buffers mirrored between the add/update forms and the controller.

use shared::{
    domain::{VendorId, VendorRecord},
    protocol::{NewVendorRequest, UpdateVendorRequest},
};

/// The six user-editable vendor fields. Values are sent exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorFields {
    pub name: String,
    pub destination: String,
    pub pickup: String,
    pub price: String,
    pub contact: String,
    pub delivery_days: String,
}

impl VendorFields {
    pub fn from_record(record: &VendorRecord) -> Self {
        Self {
            name: record.name.clone(),
            destination: record.destination_location.clone(),
            pickup: record.pickup_location.clone(),
            price: record.price.clone(),
            contact: record.contact.clone(),
            delivery_days: record.delivery_days.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_new_vendor_request(&self) -> NewVendorRequest {
        NewVendorRequest {
            name: self.name.clone(),
            destination: self.destination.clone(),
            pickup: self.pickup.clone(),
            delivery_days: self.delivery_days.clone(),
            price: self.price.clone(),
            contact: self.contact.clone(),
        }
    }
}

/// Update form buffer. The selected vendor id is held alongside the fields it
/// was populated from, so a submission always targets the row it shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateForm {
    pub vendor_id: Option<VendorId>,
    pub fields: VendorFields,
}

impl UpdateForm {
    pub fn for_record(record: &VendorRecord) -> Self {
        Self {
            vendor_id: Some(record.id),
            fields: VendorFields::from_record(record),
        }
    }

    /// Blanks the displayed fields. The selection is kept until the next
    /// `select_vendor`.
    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    pub fn to_request(&self) -> Option<UpdateVendorRequest> {
        let id = self.vendor_id?;
        Some(UpdateVendorRequest {
            id,
            name: self.fields.name.clone(),
            pickup: self.fields.pickup.clone(),
            destination: self.fields.destination.clone(),
            delivery_days: self.fields.delivery_days.clone(),
            price: self.fields.price.clone(),
            contact: self.fields.contact.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VendorRecord {
        VendorRecord {
            id: VendorId(5),
            name: "Acme".into(),
            pickup_location: "Hamburg".into(),
            destination_location: "Lyon".into(),
            price: "1250".into(),
            contact: "ops@acme.test".into(),
            delivery_days: "4".into(),
        }
    }

    #[test]
    fn update_request_uses_form_selection_and_edited_fields() {
        let mut form = UpdateForm::for_record(&record());
        form.fields.price = "999".into();

        let request = form.to_request().expect("selection present");
        assert_eq!(request.id, VendorId(5));
        assert_eq!(request.price, "999");
        assert_eq!(request.pickup, "Hamburg");
    }

    #[test]
    fn update_request_requires_selection() {
        let form = UpdateForm {
            vendor_id: None,
            fields: VendorFields::from_record(&record()),
        };
        assert!(form.to_request().is_none());
    }

    #[test]
    fn empty_values_are_passed_through_unvalidated() {
        let request = VendorFields::default().to_new_vendor_request();
        assert_eq!(request.name, "");
        assert_eq!(request.delivery_days, "");
    }
}
