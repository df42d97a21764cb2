pub mod models;

pub use models::{BookingRecord, ClientRecord, CreatedClient, Room, SmsRequest};
