use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{VendorId, VendorRecord},
    protocol::{
        MessageResponse, NewVendorRequest, UpdateVendorRequest, ADD_VENDOR_PATH,
        DELETE_VENDOR_PATH, LIST_VENDORS_PATH, UPDATE_VENDOR_PATH,
    },
};
use tracing::debug;
use url::Url;

mod controller;
pub mod error;
pub mod forms;
pub mod notification;

pub use controller::{ControllerEvent, VendorSyncController};
pub use error::{ControllerError, VendorApiError, WriteOperation};
pub use forms::{UpdateForm, VendorFields};
pub use notification::{Notification, NotificationIcon, NotificationKind, NotificationStyle};

/// Remote vendor store. Every call is a single best-effort attempt.
#[async_trait]
pub trait VendorApi: Send + Sync {
    async fn list_vendors(&self) -> Result<Vec<VendorRecord>, VendorApiError>;
    async fn add_vendor(
        &self,
        request: &NewVendorRequest,
    ) -> Result<MessageResponse, VendorApiError>;
    async fn update_vendor(
        &self,
        request: &UpdateVendorRequest,
    ) -> Result<MessageResponse, VendorApiError>;
    async fn delete_vendor(&self, id: VendorId) -> Result<MessageResponse, VendorApiError>;
}

pub struct HttpVendorApi {
    http: Client,
    base_url: Url,
}

impl HttpVendorApi {
    pub fn new(base_url: &str) -> Result<Self, VendorApiError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, VendorApiError> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, VendorApiError> {
        self.base_url
            .join(path)
            .map_err(|source| VendorApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }
}

fn normalize_base_url(raw: &str) -> Result<Url, VendorApiError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash).map_err(|source| VendorApiError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, VendorApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(VendorApiError::Status { status, body });
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl VendorApi for HttpVendorApi {
    async fn list_vendors(&self) -> Result<Vec<VendorRecord>, VendorApiError> {
        let url = self.endpoint(LIST_VENDORS_PATH)?;
        debug!(%url, "fetching vendor list");
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }

    async fn add_vendor(
        &self,
        request: &NewVendorRequest,
    ) -> Result<MessageResponse, VendorApiError> {
        let url = self.endpoint(ADD_VENDOR_PATH)?;
        debug!(%url, name = %request.name, "adding vendor");
        let response = self.http.post(url).json(request).send().await?;
        read_json(response).await
    }

    async fn update_vendor(
        &self,
        request: &UpdateVendorRequest,
    ) -> Result<MessageResponse, VendorApiError> {
        let url = self.endpoint(UPDATE_VENDOR_PATH)?;
        debug!(%url, vendor_id = request.id.0, "updating vendor");
        let response = self.http.put(url).json(request).send().await?;
        read_json(response).await
    }

    async fn delete_vendor(&self, id: VendorId) -> Result<MessageResponse, VendorApiError> {
        let url = self.endpoint(&format!("{DELETE_VENDOR_PATH}/{}", id.0))?;
        debug!(%url, vendor_id = id.0, "deleting vendor");
        let response = self.http.delete(url).send().await?;
        read_json(response).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
