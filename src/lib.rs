pub mod common;
pub mod config;
pub mod db;
pub mod models;
pub mod services;

pub use common::error::{AppError, ErrorKind, LineError};
pub use config::{AppConfig, AppState};
pub use db::{CustomerRepository, HotelRepository, ReservationRepository};
pub use models::{Customer, CustomerChanges, Hotel, HotelChanges, Reservation};
pub use services::ReservationService;
