//! # Módulo HTTP
//!
//! Implementa a mano la parte del protocolo HTTP/1.1 que usa el servidor:
//!
//! - Parsing de un request (request line, headers, body)
//! - Construcción de responses byte a byte
//! - Códigos de estado
//! - Negociación de gzip para el body
//!
//! Una conexión lleva un solo request: sin keep-alive, sin chunked
//! transfer encoding y sin pipelining.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Encoding: gzip\r\n
//! Content-Length: 23\r\n
//! \r\n
//! <bytes gzip>
//! ```

pub mod encoding; // Negociación de Content-Encoding
pub mod request;  // Parsing de HTTP requests
pub mod response; // Construcción de HTTP responses
pub mod status;   // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use encoding::ContentEncoding;
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
