pub mod aggregate;
pub mod form;
pub mod payment_status;

pub use aggregate::{Booking, BookingId, Ticket};
pub use form::{BookingDraft, BookingFormError, BookingRequest, BookingStep};
pub use payment_status::PaymentStatus;
