use async_trait::async_trait;
use std::error::Error;
use vesta_core::remote::{BookingApi, ClientApi, RoomCatalog};
use vesta_shared::{BookingRecord, ClientRecord, CreatedClient, Room};

/// HTTP client for the booking API: room catalog, client creation and
/// booking creation all live behind one base URL.
pub struct BookingApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookingApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl RoomCatalog for BookingApiClient {
    async fn list_rooms(&self) -> Result<Vec<Room>, Box<dyn Error + Send + Sync>> {
        let rooms = self
            .http
            .get(self.url("room"))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Room>>()
            .await?;
        tracing::debug!("fetched {} rooms", rooms.len());
        Ok(rooms)
    }
}

#[async_trait]
impl ClientApi for BookingApiClient {
    async fn create_client(
        &self,
        client: &ClientRecord,
    ) -> Result<CreatedClient, Box<dyn Error + Send + Sync>> {
        let created = self
            .http
            .post(self.url("client/create"))
            .json(client)
            .send()
            .await?
            .error_for_status()?
            .json::<CreatedClient>()
            .await?;
        Ok(created)
    }
}

#[async_trait]
impl BookingApi for BookingApiClient {
    async fn create_booking(
        &self,
        booking: &BookingRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.http
            .post(self.url("booking/create"))
            .json(booking)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
