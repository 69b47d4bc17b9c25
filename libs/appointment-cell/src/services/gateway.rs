use async_trait::async_trait;
use tracing::info;

use crate::models::{BookingConfirmation, BookingError, BookingRequest};

/// Terminal booking action. The mock confirms locally; a networked
/// implementation can replace it without touching the booking flow.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn submit_booking(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError>;
}

/// Confirms every booking without sending or storing anything.
#[derive(Debug, Clone, Default)]
pub struct MockBookingGateway;

#[async_trait]
impl BookingGateway for MockBookingGateway {
    async fn submit_booking(&self, request: BookingRequest) -> Result<BookingConfirmation, BookingError> {
        info!(
            "Appointment booked with {} on {} at {} ({}, ${})",
            request.doctor_name, request.date, request.slot, request.duration, request.fee
        );

        Ok(BookingConfirmation::for_request(&request))
    }
}
