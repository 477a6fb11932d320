//! Fluxos completos do coordenador de reservas sobre arquivos reais.

mod common;

use common::{snapshot, TestEnv};
use hotel_reservas::{AppError, Customer, ErrorKind, Hotel, Reservation};

fn seed(env: &TestEnv, hotel: Hotel) {
    env.state.hotel_repo.create(hotel).unwrap();
    env.state
        .customer_repo
        .create(Customer::new("C200", "Juan Pérez", "555-1234", "juan@example.com"))
        .unwrap();
}

fn reservation(id: &str, hotel_id: &str) -> Reservation {
    Reservation::new(id, hotel_id, "C200", "2025-03-10", "2025-03-15")
}

#[test]
fn reserve_then_cancel_restores_capacity() {
    let env = TestEnv::new();
    seed(&env, Hotel::new("H100", "Hotel Central", "Cidade", 5));
    let service = &env.state.reservation_service;

    service.create_reservation(reservation("R300", "H100")).unwrap();
    assert_eq!(env.rooms_available("H100"), 4);

    let stored = env.state.reservation_repo.find_by_id("R300").unwrap();
    assert_eq!(stored, Some(reservation("R300", "H100")));

    service.cancel_reservation("R300").unwrap();
    assert_eq!(env.rooms_available("H100"), 5);
    assert!(env.state.reservation_repo.find_by_id("R300").unwrap().is_none());
}

#[test]
fn unknown_hotel_fails_without_touching_files() {
    let env = TestEnv::new();
    seed(&env, Hotel::new("H100", "Hotel Central", "Cidade", 5));
    let hotels_before = snapshot(env.hotels_file());
    let reservations_before = snapshot(env.reservations_file());

    let err = env
        .state
        .reservation_service
        .create_reservation(reservation("R1", "H999"))
        .unwrap_err();

    assert!(matches!(err, AppError::HotelNotFound(ref id) if id == "H999"));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(snapshot(env.hotels_file()), hotels_before);
    assert_eq!(snapshot(env.reservations_file()), reservations_before);
    assert!(reservations_before.is_none());
}

#[test]
fn full_hotel_reports_capacity_exceeded() {
    let env = TestEnv::new();
    seed(&env, Hotel::new("H0", "Lotado", "Cidade", 0));
    let hotels_before = snapshot(env.hotels_file());

    let err = env
        .state
        .reservation_service
        .create_reservation(reservation("R1", "H0"))
        .unwrap_err();

    assert!(matches!(err, AppError::NoRoomsAvailable(_)));
    assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    assert_eq!(env.rooms_available("H0"), 0);
    assert_eq!(snapshot(env.hotels_file()), hotels_before);
    assert!(snapshot(env.reservations_file()).is_none());
}

#[test]
fn last_room_goes_to_the_first_booking() {
    let env = TestEnv::new();
    seed(&env, Hotel::new("H1", "Pequeno", "Cidade", 1));
    let service = &env.state.reservation_service;

    service.create_reservation(reservation("R1", "H1")).unwrap();
    let err = service.create_reservation(reservation("R2", "H1")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    assert_eq!(env.rooms_available("H1"), 0);
    assert_eq!(env.state.reservation_repo.load_all().unwrap().records.len(), 1);
}

#[test]
fn duplicate_reservation_id_is_rolled_back() {
    let env = TestEnv::new();
    seed(&env, Hotel::new("H2", "Duplo", "Cidade", 3));
    let service = &env.state.reservation_service;

    service.create_reservation(reservation("R1", "H2")).unwrap();
    let after_first = env.rooms_available("H2");
    let reservations_after_first = snapshot(env.reservations_file());

    let err = service.create_reservation(reservation("R1", "H2")).unwrap_err();

    assert!(matches!(err, AppError::DuplicateReservation(ref id) if id == "R1"));
    assert_eq!(env.rooms_available("H2"), after_first);
    assert_eq!(after_first, 2);
    assert_eq!(snapshot(env.reservations_file()), reservations_after_first);
}

#[test]
fn cancel_unknown_reservation_writes_nothing() {
    let env = TestEnv::new();
    seed(&env, Hotel::new("H100", "Hotel Central", "Cidade", 5));
    env.state
        .reservation_service
        .create_reservation(reservation("R1", "H100"))
        .unwrap();
    let hotels_before = snapshot(env.hotels_file());
    let reservations_before = snapshot(env.reservations_file());

    let err = env
        .state
        .reservation_service
        .cancel_reservation("R404")
        .unwrap_err();

    assert!(matches!(err, AppError::ReservationNotFound(_)));
    assert_eq!(snapshot(env.hotels_file()), hotels_before);
    assert_eq!(snapshot(env.reservations_file()), reservations_before);
}

#[test]
fn files_use_the_pipe_format() {
    let env = TestEnv::new();
    seed(&env, Hotel::new("H100", "Hotel Central", "Cidade", 5));

    env.state
        .reservation_service
        .create_reservation(reservation("R300", "H100"))
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(env.hotels_file()).unwrap(),
        "H100|Hotel Central|Cidade|5|4\n"
    );
    assert_eq!(
        std::fs::read_to_string(env.reservations_file()).unwrap(),
        "R300|H100|C200|2025-03-10|2025-03-15\n"
    );
    assert!(env.dir().join("customers_data.txt").exists());
}

#[test]
fn deleting_a_customer_keeps_their_reservations() {
    let env = TestEnv::new();
    seed(&env, Hotel::new("H100", "Hotel Central", "Cidade", 5));
    env.state
        .reservation_service
        .create_reservation(reservation("R1", "H100"))
        .unwrap();

    env.state.customer_repo.delete("C200").unwrap();

    assert!(env.state.reservation_repo.find_by_id("R1").unwrap().is_some());
    env.state.reservation_service.cancel_reservation("R1").unwrap();
    assert_eq!(env.rooms_available("H100"), 5);
}
