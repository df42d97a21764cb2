use serde::{Deserialize, Serialize};

/// A bookable room as returned by the room catalog. Only `id` and `name` are
/// consumed here; the catalog may return more fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
}

/// Client record as sent to the client-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub name: String,
    pub email: String,
    pub identity_number: String,
    pub phone: String,
}

/// The slice of the client-creation response that is consumed: the
/// server-assigned id the booking record must reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreatedClient {
    pub id: i64,
}

/// Booking record as sent to the booking-creation endpoint. Dates travel as
/// the raw `YYYY-MM-DD` strings the form collects; `room_id` stays a string
/// for the same reason. `client_id` is required here, so a record cannot be
/// built before client creation has returned one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
    pub client_id: i64,
}

/// Payload for the outbound SMS endpoint. The wire field names are fixed by
/// the deployed messaging service and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsRequest {
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "hora")]
    pub hour: u32,
    #[serde(rename = "minuto")]
    pub minute: u32,
}
