use async_trait::async_trait;
use std::error::Error;
use vesta_shared::{BookingRecord, ClientRecord, CreatedClient, Room, SmsRequest};

/// Read-only access to the room catalog.
#[async_trait]
pub trait RoomCatalog: Send + Sync {
    async fn list_rooms(&self) -> Result<Vec<Room>, Box<dyn Error + Send + Sync>>;
}

/// Client-creation endpoint. Returns the server-assigned id.
#[async_trait]
pub trait ClientApi: Send + Sync {
    async fn create_client(
        &self,
        client: &ClientRecord,
    ) -> Result<CreatedClient, Box<dyn Error + Send + Sync>>;
}

/// Booking-creation endpoint. Only success or failure matters.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn create_booking(
        &self,
        booking: &BookingRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// Outbound SMS endpoint.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    async fn send(&self, request: &SmsRequest) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// In-memory stand-in for every remote collaborator. Rooms are whatever the
/// constructor was given; creations always succeed with a fixed client id;
/// sends are accepted and dropped.
pub struct MockBackend {
    rooms: Vec<Room>,
    client_id: i64,
}

impl MockBackend {
    pub fn new(rooms: Vec<Room>, client_id: i64) -> Self {
        Self { rooms, client_id }
    }
}

#[async_trait]
impl RoomCatalog for MockBackend {
    async fn list_rooms(&self) -> Result<Vec<Room>, Box<dyn Error + Send + Sync>> {
        Ok(self.rooms.clone())
    }
}

#[async_trait]
impl ClientApi for MockBackend {
    async fn create_client(
        &self,
        client: &ClientRecord,
    ) -> Result<CreatedClient, Box<dyn Error + Send + Sync>> {
        tracing::info!("mock client created: {}", client.name);
        Ok(CreatedClient { id: self.client_id })
    }
}

#[async_trait]
impl BookingApi for MockBackend {
    async fn create_booking(
        &self,
        booking: &BookingRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::info!(
            "mock booking created: room {} for client {}",
            booking.room_id,
            booking.client_id
        );
        Ok(())
    }
}

#[async_trait]
impl MessageGateway for MockBackend {
    async fn send(&self, request: &SmsRequest) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::info!("mock sms to {} at {}:{:02}", request.phone, request.hour, request.minute);
        Ok(())
    }
}
