pub mod flat_file;

pub mod hotel_repo;
pub use hotel_repo::HotelRepository;
pub mod customer_repo;
pub use customer_repo::CustomerRepository;
pub mod reservation_repo;
pub use reservation_repo::ReservationRepository;
