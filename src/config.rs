//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración con soporte para argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./codecrafters_http --port 4221 --directory /tmp/files
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=4221 HTTP_DIRECTORY=/tmp/files ./codecrafters_http
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Formatos de log aceptados por `--log-format`
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "codecrafters_http")]
#[command(about = "Servidor HTTP/1.1 minimo: echo, user-agent y archivos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor (0 = puerto efímero)
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio donde se guardan/leen archivos de `/files`
    #[arg(long, default_value = "./files/", env = "HTTP_DIRECTORY")]
    pub directory: PathBuf,

    // === Conexiones ===

    /// Tamaño máximo de la única lectura por conexión
    #[arg(long = "buffer-size", default_value = "1024", env = "HTTP_BUFFER_SIZE")]
    pub buffer_size: usize,

    /// Timeout de lectura del socket en milisegundos (0 = sin timeout)
    #[arg(long = "read-timeout-ms", default_value = "5000", env = "HTTP_READ_TIMEOUT_MS")]
    pub read_timeout_ms: u64,

    /// Timeout de escritura del socket en milisegundos (0 = sin timeout)
    #[arg(long = "write-timeout-ms", default_value = "5000", env = "HTTP_WRITE_TIMEOUT_MS")]
    pub write_timeout_ms: u64,

    // === Logging ===

    /// Nivel de log por defecto (RUST_LOG tiene prioridad)
    #[arg(long = "log-level", default_value = "info", env = "HTTP_LOG_LEVEL")]
    pub log_level: String,

    /// Formato de log: pretty o json
    #[arg(long = "log-format", default_value = "pretty", env = "HTTP_LOG_FORMAT")]
    pub log_format: String,
}

/// Errores de validación de la configuración
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Host must not be empty")]
    EmptyHost,
    #[error("Buffer size must be >= 1")]
    ZeroBufferSize,
    #[error("Unknown log format: {0} (expected pretty or json)")]
    UnknownLogFormat(String),
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use codecrafters_http::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Timeout de lectura, `None` si está deshabilitado
    pub fn read_timeout(&self) -> Option<Duration> {
        millis(self.read_timeout_ms)
    }

    /// Timeout de escritura, `None` si está deshabilitado
    pub fn write_timeout(&self) -> Option<Duration> {
        millis(self.write_timeout_ms)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        if !LOG_FORMATS.contains(&self.log_format.to_lowercase().as_str()) {
            return Err(ConfigError::UnknownLogFormat(self.log_format.clone()));
        }
        Ok(())
    }
}

fn millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 4221,
            host: "127.0.0.1".to_string(),
            directory: PathBuf::from("./files/"),
            buffer_size: 1024,
            read_timeout_ms: 5_000,
            write_timeout_ms: 5_000,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}
