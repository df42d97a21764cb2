pub mod clock;
pub mod form;
pub mod phone;
pub mod remote;

pub use clock::{Clock, FixedClock, SystemClock};
pub use form::{BookingDraft, BookingField, ClientDraft, ClientField, FormState};
pub use remote::{BookingApi, ClientApi, MessageGateway, MockBackend, RoomCatalog};
