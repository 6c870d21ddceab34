//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser manual de un único request leído del socket.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/a.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/8.4.0\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD SP PATH SP VERSION`
//! 2. **Headers**: Pares `Name: Value` hasta la primera línea vacía
//! 3. **Body**: Todo lo que sigue a `\r\n\r\n`, byte por byte
//!
//! No se valida la versión, no se decodifican escapes `%xx` del path y no
//! hay soporte para headers multilínea.

use std::collections::HashMap;
use thiserror::Error;

/// Separador entre el bloque de headers y el body
const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Métodos HTTP
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// Cualquier otro token; el router lo trata como una lectura
    Other(String),
}

impl Method {
    /// Interpreta el primer token de la request line
    fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(token) => token,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// La primera línea no trae método y path
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),
}

/// Representa un request HTTP parseado
///
/// Se construye una sola vez por conexión y nunca se modifica.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST, ...)
    method: Method,

    /// Path de la petición tal como llegó (ej: "/echo/abc")
    path: String,

    /// Tercer token de la request line, sin validar (puede ser vacío)
    version: String,

    /// Headers HTTP, sensibles a mayúsculas; el último duplicado gana
    headers: HashMap<String, String>,

    /// Body del request, sin transformar
    body: Vec<u8>,
}

impl Request {
    /// Parsea un request desde los bytes leídos del socket
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request parseado exitosamente
    /// * `Err(ParseError)` - La request line no tiene método y path
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use codecrafters_http::http::Request;
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: curl\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("User-Agent"), Some("curl"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // 1. Separar cabecera y body en el primer \r\n\r\n
        let (head, body) = match find_subslice(buffer, HEAD_TERMINATOR) {
            Some(pos) => (&buffer[..pos], &buffer[pos + HEAD_TERMINATOR.len()..]),
            None => (buffer, &[][..]),
        };

        let head = String::from_utf8_lossy(head);
        let mut lines = head.split("\r\n");

        // 2. Request line
        let request_line = lines.next().unwrap_or_default();
        let (method, path, version) = Self::parse_request_line(request_line)?;

        // 3. Headers
        let headers = Self::parse_headers(lines);

        Ok(Request {
            method,
            path,
            version,
            headers,
            body: body.to_vec(),
        })
    }

    /// Parsea la request line
    ///
    /// Formato: `GET /path HTTP/1.1`
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let mut parts = line.splitn(3, ' ');

        let method = parts.next().filter(|m| !m.is_empty());
        let path = parts.next().filter(|p| !p.is_empty());

        match (method, path) {
            (Some(method), Some(path)) => Ok((
                Method::from_token(method),
                path.to_string(),
                parts.next().unwrap_or_default().to_string(),
            )),
            _ => Err(ParseError::MalformedRequestLine(line.to_string())),
        }
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato `Name: Value`; las líneas sin `": "` se ignoran.
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.is_empty() {
                break;
            }

            if let Some((name, value)) = line.split_once(": ") {
                headers.insert(name.to_string(), value.to_string());
            }
        }

        headers
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión HTTP (sin validar)
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (comparación exacta del nombre)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.path(), "/");
        assert_eq!(request.version(), "HTTP/1.1");
        assert!(request.headers().is_empty());
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_parse_with_headers() {
        let raw = b"GET /user-agent HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent: test-agent\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("localhost:4221"));
        assert_eq!(request.header("User-Agent"), Some("test-agent"));
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let raw = b"GET / HTTP/1.1\r\nuser-agent: lower\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("user-agent"), Some("lower"));
        assert_eq!(request.header("User-Agent"), None);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let raw = b"GET / HTTP/1.1\r\nX-Test: one\r\nX-Test: two\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("X-Test"), Some("two"));
    }

    #[test]
    fn test_header_value_keeps_later_separators() {
        let raw = b"GET / HTTP/1.1\r\nHost: localhost: 4221\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("localhost: 4221"));
    }

    #[test]
    fn test_lines_without_separator_are_ignored() {
        let raw = b"GET / HTTP/1.1\r\nnot-a-header\r\nHost:nospace\r\nAccept: */*\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.headers().len(), 1);
        assert_eq!(request.header("Accept"), Some("*/*"));
    }

    #[test]
    fn test_parse_post_body_verbatim() {
        let raw = b"POST /files/a.txt HTTP/1.1\r\nContent-Length: 12\r\n\r\nhello\r\n\r\nend";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body(), b"hello\r\n\r\nend");
    }

    #[test]
    fn test_binary_body_is_not_decoded() {
        let mut raw = b"POST /files/bin HTTP/1.1\r\n\r\n".to_vec();
        raw.extend_from_slice(&[0x00, 0xFF, 0xFE, 0x80]);
        let request = Request::parse(&raw).unwrap();

        assert_eq!(request.body(), &[0x00, 0xFF, 0xFE, 0x80]);
    }

    #[test]
    fn test_missing_separator_means_empty_body() {
        let raw = b"GET /echo/abc HTTP/1.1\r\nHost: x";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.header("Host"), Some("x"));
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_unknown_method_is_kept() {
        let raw = b"DELETE /files/a HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), &Method::Other("DELETE".to_string()));
        assert_eq!(request.method().as_str(), "DELETE");
    }

    #[test]
    fn test_version_is_not_validated() {
        let raw = b"GET / HTTP/9.9\r\n\r\n";
        assert!(Request::parse(raw).is_ok());
    }

    #[test]
    fn test_empty_request() {
        let result = Request::parse(b"");
        assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
    }

    #[test]
    fn test_invalid_request_line() {
        let result = Request::parse(b"GET\r\n\r\n");
        assert_eq!(result.unwrap_err(), ParseError::MalformedRequestLine("GET".to_string()));
    }

    #[test]
    fn test_request_line_with_empty_path() {
        let result = Request::parse(b"GET  HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(ParseError::MalformedRequestLine(_))));
    }
}
