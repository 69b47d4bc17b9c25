pub mod booking;
pub mod gateway;
pub mod pricing;

pub use booking::{BookingService, BookingSession};
pub use gateway::{BookingGateway, MockBookingGateway};
pub use pricing::PricingService;
