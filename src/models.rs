pub mod customer;
pub mod hotel;
pub mod reservation;

pub use customer::{Customer, CustomerChanges};
pub use hotel::{Hotel, HotelChanges};
pub use reservation::Reservation;
