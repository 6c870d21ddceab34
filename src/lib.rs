//! # HTTP Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero: acepta conexiones
//! TCP, parsea un request por conexión, lo despacha a un conjunto fijo de
//! rutas y escribe una respuesta armada a mano.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing del request, construcción de responses, status codes y gzip
//! - `router`: Enrutamiento a las rutas `/`, `/echo`, `/user-agent` y `/files`
//! - `storage`: Lectura y escritura de archivos bajo el directorio configurado
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `config`: Argumentos CLI y variables de entorno
//! - `logging`: Inicialización de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use codecrafters_http::config::Config;
//! use codecrafters_http::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("Error al iniciar servidor");
//! server.run().expect("Error en el servidor");
//! ```

pub mod config;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod storage;
