use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};
use vesta_core::clock::Clock;
use vesta_core::form::{BookingDraft, ClientDraft};
use vesta_core::remote::MessageGateway;
use vesta_shared::{Room, SmsRequest};

/// Delivery slot for the confirmation SMS: two minutes past `(hour, minute)`.
///
/// When the addition overflows the hour, the minute resets to exactly zero;
/// the remainder is not carried. `23:59` rolls to `0:0`. This matches the
/// arithmetic the deployed messaging flow already expects.
pub fn dispatch_slot(hour: u32, minute: u32) -> (u32, u32) {
    let mut minute = minute + 2;
    let mut hour = hour;
    if minute >= 60 {
        minute = 0;
        hour += 1;
        if hour >= 24 {
            hour = 0;
        }
    }
    (hour, minute)
}

/// Scans the fetched room list for the draft's room id. An unknown or
/// unparsable id resolves to an empty name; the message is still sent.
fn resolve_room_name(rooms: &[Room], room_id: &str) -> String {
    let Ok(id) = room_id.parse::<i64>() else {
        return String::new();
    };
    rooms
        .iter()
        .find(|room| room.id == id)
        .map(|room| room.name.clone())
        .unwrap_or_default()
}

/// Builds the confirmation SMS and hands it to the messaging gateway on a
/// spawned task. The send is fire-and-forget: its outcome is logged and
/// nothing else observes it.
pub struct NotificationScheduler {
    gateway: Arc<dyn MessageGateway>,
    clock: Arc<dyn Clock>,
}

impl NotificationScheduler {
    pub fn new(gateway: Arc<dyn MessageGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }

    /// Assembles the request for the current drafts and room list.
    pub fn build_request(
        &self,
        client: &ClientDraft,
        booking: &BookingDraft,
        rooms: &[Room],
    ) -> SmsRequest {
        let room_name = resolve_room_name(rooms, &booking.room_id);
        let (now_hour, now_minute) = self.clock.hour_minute();
        let (hour, minute) = dispatch_slot(now_hour, now_minute);

        SmsRequest {
            phone: client.phone.clone(),
            // Wire text expected by the deployed messaging service.
            message: format!(
                "Saludos, {} se ha agendado correctamente su reserva en la habitación {}",
                client.name, room_name
            ),
            hour,
            minute,
        }
    }

    /// Dispatches one notification attempt. The returned handle completes
    /// when the send does; callers are free to drop it.
    pub fn dispatch(
        &self,
        client: &ClientDraft,
        booking: &BookingDraft,
        rooms: &[Room],
    ) -> JoinHandle<()> {
        let request = self.build_request(client, booking, rooms);
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            match gateway.send(&request).await {
                Ok(()) => info!(
                    "notification dispatched to {} for {}:{:02}",
                    request.phone, request.hour, request.minute
                ),
                Err(e) => error!("notification dispatch failed: {}", e),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::error::Error;
    use std::sync::Mutex;
    use vesta_core::clock::FixedClock;

    struct RecordingGateway {
        sent: Mutex<Vec<SmsRequest>>,
    }

    impl RecordingGateway {
        fn new() -> Self {
            Self { sent: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl MessageGateway for RecordingGateway {
        async fn send(&self, request: &SmsRequest) -> Result<(), Box<dyn Error + Send + Sync>> {
            self.sent.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    fn rooms() -> Vec<Room> {
        vec![
            Room { id: 1, name: "Suite Andina".to_string() },
            Room { id: 3, name: "Habitación Doble".to_string() },
        ]
    }

    #[test]
    fn slot_adds_two_minutes() {
        assert_eq!(dispatch_slot(10, 30), (10, 32));
    }

    #[test]
    fn slot_overflow_resets_minute_to_zero() {
        // Remainder is dropped: 10:59 -> 11:00, not 11:01.
        assert_eq!(dispatch_slot(10, 59), (11, 0));
        assert_eq!(dispatch_slot(10, 58), (11, 0));
    }

    #[test]
    fn slot_wraps_past_midnight() {
        assert_eq!(dispatch_slot(23, 59), (0, 0));
    }

    #[test]
    fn room_name_resolution() {
        assert_eq!(resolve_room_name(&rooms(), "3"), "Habitación Doble");
        assert_eq!(resolve_room_name(&rooms(), "9"), "");
        assert_eq!(resolve_room_name(&rooms(), ""), "");
        assert_eq!(resolve_room_name(&rooms(), "abc"), "");
    }

    #[test]
    fn request_carries_phone_slot_and_message() {
        let scheduler = NotificationScheduler::new(
            Arc::new(RecordingGateway::new()),
            Arc::new(FixedClock(10, 59)),
        );
        let client = ClientDraft {
            name: "Ana".to_string(),
            phone: "0991234567".to_string(),
            ..Default::default()
        };
        let booking = BookingDraft { room_id: "1".to_string(), ..Default::default() };

        let request = scheduler.build_request(&client, &booking, &rooms());
        assert_eq!(request.phone, "0991234567");
        assert_eq!((request.hour, request.minute), (11, 0));
        assert_eq!(
            request.message,
            "Saludos, Ana se ha agendado correctamente su reserva en la habitación Suite Andina"
        );
    }

    #[tokio::test]
    async fn dispatch_sends_exactly_one_message() {
        let gateway = Arc::new(RecordingGateway::new());
        let scheduler =
            NotificationScheduler::new(gateway.clone(), Arc::new(FixedClock(9, 15)));

        let handle = scheduler.dispatch(&ClientDraft::default(), &BookingDraft::default(), &[]);
        handle.await.unwrap();

        let sent = gateway.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!((sent[0].hour, sent[0].minute), (9, 17));
    }
}
