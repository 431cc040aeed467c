//! Vendor list controller: mirrors the remote store and turns form submissions
//! into requests, refreshing the full list after every successful write.

use std::sync::Arc;

use shared::domain::{VendorId, VendorRecord};
use tokio::sync::{broadcast, Mutex};
use tracing::{error, info, warn};

use crate::{
    error::{ControllerError, VendorApiError, WriteOperation},
    forms::{UpdateForm, VendorFields},
    notification::{Notification, NotificationKind},
    VendorApi,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    BusyChanged(bool),
    VendorsReplaced(Vec<VendorRecord>),
    AddFormChanged(VendorFields),
    UpdateFormChanged(UpdateForm),
    Notification(Notification),
}

#[derive(Default)]
struct ControllerState {
    vendors: Vec<VendorRecord>,
    add_form: VendorFields,
    update_form: UpdateForm,
}

pub struct VendorSyncController {
    api: Arc<dyn VendorApi>,
    inner: Mutex<ControllerState>,
    events: broadcast::Sender<ControllerEvent>,
}

impl VendorSyncController {
    pub fn new(api: Arc<dyn VendorApi>) -> Self {
        let (events, _) = broadcast::channel(256);
        Self {
            api,
            inner: Mutex::new(ControllerState::default()),
            events,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ControllerEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: ControllerEvent) {
        let _ = self.events.send(event);
    }

    /// Initial load behind the busy indicator. A failed load leaves the list
    /// empty and is only logged.
    pub async fn initialize(&self) {
        self.emit(ControllerEvent::BusyChanged(true));
        if let Err(err) = self.refresh_list().await {
            warn!("initial vendor load failed: {err}");
        }
        self.emit(ControllerEvent::BusyChanged(false));
    }

    pub async fn refresh_list(&self) -> Result<(), ControllerError> {
        let vendors = match self.api.list_vendors().await {
            Ok(vendors) => vendors,
            Err(err) => {
                error!("error loading vendor list: {err}");
                return Err(ControllerError::Load(err));
            }
        };

        info!(vendor_count = vendors.len(), "vendor list replaced");
        self.inner.lock().await.vendors = vendors.clone();
        self.emit(ControllerEvent::VendorsReplaced(vendors));
        Ok(())
    }

    /// Submits the add form. Returns the server acknowledgement.
    pub async fn create_vendor(&self) -> Result<String, ControllerError> {
        let request = self.inner.lock().await.add_form.to_new_vendor_request();

        let response = match self.api.add_vendor(&request).await {
            Ok(response) => response,
            Err(err) => return Err(self.fail_write(WriteOperation::Create, err)),
        };

        let message = acknowledgement(response.message, "Vendor added");
        self.show_notification(&message, NotificationKind::Success);
        {
            let mut guard = self.inner.lock().await;
            guard.add_form.clear();
        }
        self.emit(ControllerEvent::AddFormChanged(VendorFields::default()));
        self.refresh_after_write(WriteOperation::Create).await;
        Ok(message)
    }

    /// Loads the record with `id` into the update form. An id missing from
    /// the current list blanks the form and clears the selection.
    pub async fn select_vendor(&self, id: VendorId) -> Option<VendorRecord> {
        let (form, selected) = {
            let mut guard = self.inner.lock().await;
            let selected = guard.vendors.iter().find(|vendor| vendor.id == id).cloned();
            guard.update_form = selected
                .as_ref()
                .map(UpdateForm::for_record)
                .unwrap_or_default();
            (guard.update_form.clone(), selected)
        };

        if selected.is_none() {
            warn!(vendor_id = id.0, "selected vendor is not in the current list");
        }
        self.emit(ControllerEvent::UpdateFormChanged(form));
        selected
    }

    /// Submits the update form against the vendor it was populated from.
    pub async fn update_vendor(&self) -> Result<String, ControllerError> {
        let request = self.inner.lock().await.update_form.to_request();
        let Some(request) = request else {
            warn!("update submitted without a selected vendor");
            self.show_notification(
                "Select a vendor before updating",
                NotificationKind::Error,
            );
            return Err(ControllerError::NoSelection);
        };

        let response = match self.api.update_vendor(&request).await {
            Ok(response) => response,
            Err(err) => return Err(self.fail_write(WriteOperation::Update, err)),
        };

        let message = acknowledgement(response.message, "Vendor updated");
        self.show_notification(&message, NotificationKind::Update);
        let form = {
            let mut guard = self.inner.lock().await;
            guard.update_form.clear_fields();
            guard.update_form.clone()
        };
        self.emit(ControllerEvent::UpdateFormChanged(form));
        self.refresh_after_write(WriteOperation::Update).await;
        Ok(message)
    }

    pub async fn delete_vendor(&self, id: VendorId) -> Result<String, ControllerError> {
        let response = match self.api.delete_vendor(id).await {
            Ok(response) => response,
            Err(err) => return Err(self.fail_write(WriteOperation::Delete, err)),
        };

        let message = acknowledgement(response.message, "Vendor deleted");
        self.show_notification(&message, NotificationKind::Delete);
        self.refresh_after_write(WriteOperation::Delete).await;
        Ok(message)
    }

    pub fn show_notification(&self, message: &str, kind: NotificationKind) {
        info!(title = kind.style().title, "{message}");
        self.emit(ControllerEvent::Notification(Notification::new(
            kind, message,
        )));
    }

    pub async fn set_add_form(&self, fields: VendorFields) {
        self.inner.lock().await.add_form = fields.clone();
        self.emit(ControllerEvent::AddFormChanged(fields));
    }

    /// Replaces the displayed update fields without touching the selection.
    pub async fn set_update_fields(&self, fields: VendorFields) {
        let form = {
            let mut guard = self.inner.lock().await;
            guard.update_form.fields = fields;
            guard.update_form.clone()
        };
        self.emit(ControllerEvent::UpdateFormChanged(form));
    }

    pub async fn vendors(&self) -> Vec<VendorRecord> {
        self.inner.lock().await.vendors.clone()
    }

    pub async fn add_form(&self) -> VendorFields {
        self.inner.lock().await.add_form.clone()
    }

    pub async fn update_form(&self) -> UpdateForm {
        self.inner.lock().await.update_form.clone()
    }

    async fn refresh_after_write(&self, operation: WriteOperation) {
        if let Err(err) = self.refresh_list().await {
            warn!(
                operation = operation.as_str(),
                "vendor list refresh after write failed: {err}"
            );
        }
    }

    fn fail_write(&self, operation: WriteOperation, source: VendorApiError) -> ControllerError {
        error!(operation = operation.as_str(), "vendor write failed: {source}");
        let err = ControllerError::Write { operation, source };
        self.show_notification(&err.to_string(), NotificationKind::Error);
        err
    }
}

fn acknowledgement(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
