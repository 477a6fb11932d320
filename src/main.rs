//src/main.rs

use hotel_reservas::{AppState, Customer, Hotel, Reservation};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Inicializa o logger (RUST_LOG, padrão "info")
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let app_state = AppState::new()?;

    println!("=== DEMO: Criação de Hotel ===");
    match app_state
        .hotel_repo
        .create(Hotel::new("H100", "Hotel Central", "Cidade", 5))
    {
        Ok(()) => println!("Hotel criado corretamente.\n"),
        Err(e) => tracing::error!("{}", e),
    }

    println!("=== DEMO: Criação de Cliente ===");
    match app_state.customer_repo.create(Customer::new(
        "C200",
        "Juan Pérez",
        "555-1234",
        "juan@example.com",
    )) {
        Ok(()) => println!("Cliente criado corretamente.\n"),
        Err(e) => tracing::error!("{}", e),
    }

    println!("=== DEMO: Criação de Reserva ===");
    let reservation = Reservation::new("R300", "H100", "C200", "2025-03-10", "2025-03-15");
    match app_state.reservation_service.create_reservation(reservation) {
        Ok(()) => println!("Reserva criada com sucesso.\n"),
        Err(e) => tracing::error!("{}", e),
    }

    println!("=== Informação do Hotel (H100) ===");
    if let Some(hotel) = app_state.hotel_repo.find_by_id("H100")? {
        println!("{}\n", hotel);
        println!("{}\n", serde_json::to_string_pretty(&hotel)?);
    }

    println!("=== Cancelar a reserva 'R300' ===");
    match app_state.reservation_service.cancel_reservation("R300") {
        Ok(()) => println!("Reserva R300 cancelada. Quarto devolvido.\n"),
        Err(e) => tracing::error!("{}", e),
    }

    println!("=== FIM DEMO ===");
    Ok(())
}
