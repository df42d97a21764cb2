use crate::orchestrator::{BookingOrchestrator, SubmitError};
use crate::scheduler::NotificationScheduler;
use std::sync::Arc;
use tracing::{error, info};
use vesta_core::clock::Clock;
use vesta_core::form::{BookingDraft, BookingField, ClientDraft, ClientField, FormState};
use vesta_core::remote::{BookingApi, ClientApi, MessageGateway, RoomCatalog};
use vesta_shared::{BookingRecord, Room};

/// Lifecycle of the submission surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    AwaitingConfirmation,
    Submitting,
    Done,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid transition from {from:?} on {action}")]
    InvalidTransition {
        from: SubmissionState,
        action: &'static str,
    },

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// The in-progress create-booking flow: two drafts, the fetched room list,
/// the confirmation gate and the submission state machine.
///
/// Opening the gate requests confirmation and fires one notification
/// dispatch; it commits nothing. Persistence only happens through
/// [`BookingSession::confirm`].
pub struct BookingSession {
    form: FormState,
    rooms: Vec<Room>,
    confirm_open: bool,
    state: SubmissionState,
    catalog: Arc<dyn RoomCatalog>,
    scheduler: NotificationScheduler,
    orchestrator: BookingOrchestrator,
}

impl BookingSession {
    pub fn new(
        catalog: Arc<dyn RoomCatalog>,
        clients: Arc<dyn ClientApi>,
        bookings: Arc<dyn BookingApi>,
        gateway: Arc<dyn MessageGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            form: FormState::new(),
            rooms: Vec::new(),
            confirm_open: false,
            state: SubmissionState::Editing,
            catalog,
            scheduler: NotificationScheduler::new(gateway, clock),
            orchestrator: BookingOrchestrator::new(clients, bookings),
        }
    }

    /// Fetches the room list once, on activation. A failed fetch is logged
    /// and leaves the selector unpopulated; there is no retry.
    pub async fn activate(&mut self) {
        match self.catalog.list_rooms().await {
            Ok(rooms) => self.rooms = rooms,
            Err(e) => error!("room catalog fetch failed: {}", e),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn client(&self) -> &ClientDraft {
        self.form.client()
    }

    pub fn booking(&self) -> &BookingDraft {
        self.form.booking()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_confirm_open(&self) -> bool {
        self.confirm_open
    }

    pub fn update_client_field(&mut self, field: ClientField, value: &str) {
        self.form.update_client_field(field, value);
    }

    pub fn update_booking_field(&mut self, field: BookingField, value: &str) {
        self.form.update_booking_field(field, value);
    }

    /// Flips the confirmation gate. Every closed-to-open transition fires
    /// exactly one notification dispatch, whether or not the user goes on to
    /// confirm; a dispatch already in flight is never cancelled. Closing the
    /// gate without confirming cancels back to editing.
    pub fn toggle_confirmation(&mut self) {
        self.confirm_open = !self.confirm_open;
        if self.confirm_open {
            self.state = SubmissionState::AwaitingConfirmation;
            self.scheduler
                .dispatch(self.form.client(), self.form.booking(), &self.rooms);
        } else {
            self.state = SubmissionState::Editing;
        }
    }

    /// Runs the two-phase create. On success the session is done and the
    /// caller navigates away; the drafts are left populated. On any failure
    /// the session returns to editing with the drafts intact so the user can
    /// retry. Only the phone-validation error carries a user-facing message.
    pub async fn confirm(&mut self) -> Result<BookingRecord, SessionError> {
        if self.state != SubmissionState::AwaitingConfirmation {
            return Err(SessionError::InvalidTransition {
                from: self.state,
                action: "confirm",
            });
        }

        self.confirm_open = false;
        self.state = SubmissionState::Submitting;

        match self
            .orchestrator
            .submit(self.form.client(), self.form.booking())
            .await
        {
            Ok(record) => {
                self.state = SubmissionState::Done;
                info!("submission complete, leaving the editing surface");
                Ok(record)
            }
            Err(e) => {
                error!("submission failed: {}", e);
                self.state = SubmissionState::Editing;
                Err(e.into())
            }
        }
    }

    /// Explicit clear action: resets both drafts, touches nothing remote.
    pub fn clear(&mut self) {
        self.form.reset();
    }
}
