//! Records supplied by the booking store.

mod booking;
mod customer;
mod property;

pub use booking::{Booking, BookingStatus};
pub use customer::Customer;
pub use property::Property;
