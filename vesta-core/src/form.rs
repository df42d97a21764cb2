use vesta_shared::{BookingRecord, ClientRecord};

/// In-memory draft of the client being created. Mirrors `ClientRecord`
/// field-for-field; it only becomes a record at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub identity_number: String,
    pub phone: String,
}

impl ClientDraft {
    pub fn to_record(&self) -> ClientRecord {
        ClientRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            identity_number: self.identity_number.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// In-memory draft of the booking. There is deliberately no `client_id`
/// field: the id only exists once client creation has returned, and
/// `to_record` is the single place it gets merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub room_id: String,
    pub check_in: String,
    pub check_out: String,
}

impl BookingDraft {
    pub fn to_record(&self, client_id: i64) -> BookingRecord {
        BookingRecord {
            room_id: self.room_id.clone(),
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            client_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Name,
    Email,
    IdentityNumber,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    RoomId,
    CheckIn,
    CheckOut,
}

/// Holds the two drafts backing the create-booking form.
///
/// Updates replace exactly one named field and leave the rest untouched.
/// Nothing is validated here; validation happens at submission.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    client: ClientDraft,
    booking: BookingDraft,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> &ClientDraft {
        &self.client
    }

    pub fn booking(&self) -> &BookingDraft {
        &self.booking
    }

    pub fn update_client_field(&mut self, field: ClientField, value: &str) {
        let slot = match field {
            ClientField::Name => &mut self.client.name,
            ClientField::Email => &mut self.client.email,
            ClientField::IdentityNumber => &mut self.client.identity_number,
            ClientField::Phone => &mut self.client.phone,
        };
        *slot = value.to_string();
    }

    pub fn update_booking_field(&mut self, field: BookingField, value: &str) {
        let slot = match field {
            BookingField::RoomId => &mut self.booking.room_id,
            BookingField::CheckIn => &mut self.booking.check_in,
            BookingField::CheckOut => &mut self.booking.check_out,
        };
        *slot = value.to_string();
    }

    /// Restores both drafts to their defaults (all fields empty).
    pub fn reset(&mut self) {
        self.client = ClientDraft::default();
        self.booking = BookingDraft::default();
    }
}
