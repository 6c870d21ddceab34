//! # Logging
//! src/logging.rs
//!
//! Inicializa `tracing` con un `EnvFilter` y salida pretty o JSON.
//! `RUST_LOG`, si está definida, tiene prioridad sobre `--log-level`.

use crate::config::Config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Formato de salida de los logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Cualquier valor distinto de `json` cae en `Pretty`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Construye el filtro a partir de `RUST_LOG` o del nivel configurado
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Instala el subscriber global
///
/// Falla si ya había uno instalado.
pub fn init(config: &Config) -> Result<(), tracing_subscriber::util::TryInitError> {
    let fmt_layer = match LogFormat::parse(&config.log_format) {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter(&config.log_level))
        .with(fmt_layer)
        .try_init()
}
