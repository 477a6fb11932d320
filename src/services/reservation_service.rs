// src/services/reservation_service.rs

use validator::Validate;

use crate::{
    common::error::AppError,
    db::{CustomerRepository, HotelRepository, ReservationRepository},
    models::reservation::Reservation,
};

/// Coordena reservas entre os três arquivos.
///
/// Não existe transação entre arquivos: todas as verificações acontecem em
/// memória antes da primeira escrita, e a ordem de escrita é sempre
/// reservas -> hotéis. Se o processo cair entre as duas escritas, a reserva
/// fica gravada sem o decremento correspondente no hotel.
#[derive(Debug, Clone)]
pub struct ReservationService {
    hotel_repo: HotelRepository,
    customer_repo: CustomerRepository,
    reservation_repo: ReservationRepository,
}

impl ReservationService {
    pub fn new(
        hotel_repo: HotelRepository,
        customer_repo: CustomerRepository,
        reservation_repo: ReservationRepository,
    ) -> Self {
        Self {
            hotel_repo,
            customer_repo,
            reservation_repo,
        }
    }

    // =========================================================================
    //  CRIAR RESERVA
    // =========================================================================

    pub fn create_reservation(&self, reservation: Reservation) -> Result<(), AppError> {
        reservation.validate()?;

        // 1. Carrega hotéis e clientes
        let mut hotels = self.hotel_repo.load_all()?.records;
        let customers = self.customer_repo.load_all()?.records;

        // 2. Hotel precisa existir
        let hotel = hotels
            .iter_mut()
            .find(|h| h.id == reservation.hotel_id)
            .ok_or_else(|| AppError::HotelNotFound(reservation.hotel_id.clone()))?;

        // 3. Cliente precisa existir
        if !customers.iter().any(|c| c.id == reservation.customer_id) {
            return Err(AppError::CustomerNotFound(reservation.customer_id.clone()));
        }

        // 4. Ocupa o quarto (só em memória por enquanto)
        if !hotel.reserve_room() {
            return Err(AppError::NoRoomsAvailable(hotel.id.clone()));
        }

        // 5. ID duplicado: devolve o quarto antes de sair
        let mut reservations = self.reservation_repo.load_all()?.records;
        if reservations.iter().any(|r| r.id == reservation.id) {
            hotel.cancel_reservation();
            return Err(AppError::DuplicateReservation(reservation.id.clone()));
        }

        let remaining = hotel.rooms_available();
        let reservation_id = reservation.id.clone();
        let hotel_id = reservation.hotel_id.clone();

        // 6. Grava reservas, depois hotéis
        reservations.push(reservation);
        self.reservation_repo.save_all(&reservations)?;
        self.hotel_repo.save_all(&hotels)?;

        tracing::info!(
            "[reserva] '{}' criada no hotel '{}' ({} quartos livres)",
            reservation_id,
            hotel_id,
            remaining
        );
        Ok(())
    }

    // =========================================================================
    //  CANCELAR RESERVA
    // =========================================================================

    pub fn cancel_reservation(&self, reservation_id: &str) -> Result<(), AppError> {
        // 1. Localiza a reserva
        let reservations = self.reservation_repo.load_all()?.records;
        let to_cancel = reservations
            .iter()
            .find(|r| r.id == reservation_id)
            .ok_or_else(|| AppError::ReservationNotFound(reservation_id.to_string()))?;

        // 2. Devolve o quarto, se o hotel ainda existir
        let mut hotels = self.hotel_repo.load_all()?.records;
        match hotels.iter_mut().find(|h| h.id == to_cancel.hotel_id) {
            Some(hotel) => hotel.cancel_reservation(),
            None => tracing::warn!(
                "[reserva] hotel '{}' da reserva '{}' não existe mais; nenhum quarto devolvido",
                to_cancel.hotel_id,
                reservation_id
            ),
        }

        // 3. Grava reservas sem a cancelada, depois hotéis
        let remaining: Vec<Reservation> = reservations
            .iter()
            .filter(|r| r.id != reservation_id)
            .cloned()
            .collect();
        self.reservation_repo.save_all(&remaining)?;
        self.hotel_repo.save_all(&hotels)?;

        tracing::info!("[reserva] '{}' cancelada", reservation_id);
        Ok(())
    }
}
