//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes (un thread por conexión)
//! 3. Lee y parsea un único request por conexión
//! 4. Genera y envía la response HTTP y cierra el socket

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{ConnectionError, ConnectionSettings, Server, StartupError};
