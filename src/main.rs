//! # HTTP Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.1.

use anyhow::Context;
use codecrafters_http::config::Config;
use codecrafters_http::logging;
use codecrafters_http::server::Server;

fn main() -> anyhow::Result<()> {
    // Crear configuración (CLI + variables de entorno)
    let config = Config::new();
    config.validate().context("Configuración inválida")?;

    logging::init(&config).context("No se pudo inicializar el logging")?;

    tracing::info!(
        address = %config.address(),
        directory = %config.directory.display(),
        buffer_size = config.buffer_size,
        "configuración cargada"
    );

    // Crear el servidor
    let server = Server::bind(config).context("Error al iniciar servidor")?;

    // Iniciar el servidor (esto bloqueará el thread)
    server.run().context("Error fatal en el loop de conexiones")
}
