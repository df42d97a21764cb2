use std::sync::Arc;
use tracing::info;
use vesta_core::form::{BookingDraft, ClientDraft};
use vesta_core::phone;
use vesta_core::remote::{BookingApi, ClientApi};
use vesta_shared::BookingRecord;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The only user-facing failure: it blocks submission before any
    /// network call is made.
    #[error("phone number must be exactly 10 digits")]
    InvalidPhone,

    #[error("client creation failed: {0}")]
    ClientCreate(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Booking creation failed after the client was already created. No
    /// compensating delete is attempted; the orphaned client stays.
    #[error("booking creation failed: {0}")]
    BookingCreate(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Sequences the two-phase create: client first, then the booking carrying
/// the client's server-assigned id. The phases are strictly ordered; there
/// is no parallel or optimistic creation.
pub struct BookingOrchestrator {
    clients: Arc<dyn ClientApi>,
    bookings: Arc<dyn BookingApi>,
}

impl BookingOrchestrator {
    pub fn new(clients: Arc<dyn ClientApi>, bookings: Arc<dyn BookingApi>) -> Self {
        Self { clients, bookings }
    }

    pub async fn submit(
        &self,
        client: &ClientDraft,
        booking: &BookingDraft,
    ) -> Result<BookingRecord, SubmitError> {
        if !phone::is_valid(&client.phone) {
            return Err(SubmitError::InvalidPhone);
        }

        let created = self
            .clients
            .create_client(&client.to_record())
            .await
            .map_err(SubmitError::ClientCreate)?;

        let record = booking.to_record(created.id);
        self.bookings
            .create_booking(&record)
            .await
            .map_err(SubmitError::BookingCreate)?;

        info!("booking submitted for client {}", created.id);
        Ok(record)
    }
}
