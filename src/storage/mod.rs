//! # Módulo de Almacenamiento
//! src/storage/mod.rs
//!
//! Acceso al directorio configurado para la ruta `/files`.

pub mod file_store;

// Re-exportar para facilitar el uso
pub use file_store::{FileStore, StorageError};
