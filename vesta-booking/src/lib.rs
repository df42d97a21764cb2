pub mod orchestrator;
pub mod scheduler;
pub mod session;

pub use orchestrator::{BookingOrchestrator, SubmitError};
pub use scheduler::NotificationScheduler;
pub use session::{BookingSession, SessionError, SubmissionState};
