//! # Construcción de Respuestas HTTP
//!
//! API para construir respuestas y serializarlas a los bytes exactos que
//! se envían al cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! La línea vacía se escribe siempre, aunque no haya headers ni body.
//! El builder nunca agrega `Content-Length` por su cuenta: cada ruta lo
//! declara cuando tiene body.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use codecrafters_http::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_header("Content-Length", "5")
//!     .with_body("Hello");
//!
//! assert_eq!(
//!     response.to_bytes(),
//!     b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nHello".to_vec()
//! );
//! ```

use super::StatusCode;
use std::io::{self, Write};

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers en el orden en que se escriben
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Respuesta `text/plain` con su `Content-Length`
    ///
    /// # Ejemplo
    /// ```
    /// use codecrafters_http::http::{Response, StatusCode};
    ///
    /// let response = Response::plain_text(StatusCode::Ok, "abc");
    /// assert_eq!(response.header("Content-Length"), Some("3"));
    /// ```
    pub fn plain_text(status: StatusCode, text: &str) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/plain")
            .with_header("Content-Length", &text.len().to_string())
            .with_body(text)
    }

    /// Agrega un header al final del bloque de headers
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Establece el cuerpo desde texto (se codifica como UTF-8)
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Establece el cuerpo desde bytes crudos
    ///
    /// Necesario para bodies gzip y archivos binarios, que nunca se tratan como texto.
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        // 1. Status line
        result.extend_from_slice(self.status.status_line().as_bytes());
        result.extend_from_slice(b"\r\n");

        // 2. Headers
        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body (si existe)
        result.extend_from_slice(&self.body);

        result
    }

    /// Escribe la respuesta completa en `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene los headers en orden
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Busca el primer header con ese nombre exacto
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_empty_response_still_has_blank_line() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\n\r\n".to_vec());
    }

    #[test]
    fn test_created_and_not_found_have_no_body() {
        assert_eq!(
            Response::new(StatusCode::Created).to_bytes(),
            b"HTTP/1.1 201 Created\r\n\r\n".to_vec()
        );
        assert_eq!(
            Response::new(StatusCode::NotFound).to_bytes(),
            b"HTTP/1.1 404 Not Found\r\n\r\n".to_vec()
        );
    }

    #[test]
    fn test_headers_keep_insertion_order() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_header("Content-Encoding", "gzip")
            .with_header("Content-Length", "0");

        let names: Vec<&str> = response.headers().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Content-Type", "Content-Encoding", "Content-Length"]);
    }

    #[test]
    fn test_body_does_not_add_content_length() {
        let response = Response::new(StatusCode::Ok).with_body("Hello World");

        assert_eq!(response.body(), b"Hello World");
        assert_eq!(response.header("Content-Length"), None);
    }

    #[test]
    fn test_plain_text() {
        let response = Response::plain_text(StatusCode::Ok, "test-agent");

        assert_eq!(
            response.to_bytes(),
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 10\r\n\r\ntest-agent".to_vec()
        );
    }

    #[test]
    fn test_plain_text_length_counts_bytes() {
        let response = Response::plain_text(StatusCode::Ok, "ñandú");
        assert_eq!(response.header("Content-Length"), Some("7"));
    }

    #[test]
    fn test_with_body_bytes_is_verbatim() {
        let binary_data = vec![0x1f, 0x8b, 0x00, 0xFF];
        let response = Response::new(StatusCode::Ok)
            .with_body_bytes(binary_data.clone());

        let bytes = response.to_bytes();
        assert!(bytes.ends_with(&binary_data));
    }

    #[test]
    fn test_write_to_matches_to_bytes() {
        let response = Response::plain_text(StatusCode::InternalServerError, "boom");
        let mut sink = Vec::new();
        response.write_to(&mut sink).unwrap();

        assert_eq!(sink, response.to_bytes());
    }
}
