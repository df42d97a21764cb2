pub mod http;
pub mod sms;

pub use http::BookingApiClient;
pub use sms::{SmsEndpoint, MESSAGING_BASE_URL};
