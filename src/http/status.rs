//! # Códigos de Estado HTTP
//!
//! El servidor solo emite cuatro estados, todos con versión `HTTP/1.1`:
//!
//! - **200 OK**: raíz, echo, user-agent y lectura de archivos
//! - **201 Created**: archivo escrito vía `POST /files/<nombre>`
//! - **404 Not Found**: ruta desconocida o archivo inexistente
//! - **500 Internal Server Error**: cualquier fallo al atender el request

/// Versión de protocolo que va en cada status line
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 201 Created - Se creó (o sobrescribió) un archivo
    Created = 201,

    /// 404 Not Found - Ruta o recurso no encontrado
    NotFound = 404,

    /// 500 Internal Server Error - Error interno del servidor
    InternalServerError = 500,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use codecrafters_http::http::StatusCode;
    /// assert_eq!(StatusCode::Created.as_u16(), 201);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Status line completa, sin el terminador CRLF
    ///
    /// # Ejemplo
    /// ```
    /// use codecrafters_http::http::StatusCode;
    /// assert_eq!(StatusCode::NotFound.status_line(), "HTTP/1.1 404 Not Found");
    /// ```
    pub fn status_line(&self) -> String {
        format!("{} {}", HTTP_VERSION, self)
    }

    /// Verifica si el código indica éxito (2xx)
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok | StatusCode::Created)
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        let code = self.as_u16();
        (400..500).contains(&code)
    }

    /// Verifica si el código indica error del servidor (5xx)
    pub fn is_server_error(&self) -> bool {
        let code = self.as_u16();
        (500..600).contains(&code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(StatusCode::Ok.as_u16(), 200);
        assert_eq!(StatusCode::Created.as_u16(), 201);
        assert_eq!(StatusCode::NotFound.as_u16(), 404);
        assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    }

    #[test]
    fn test_reason_phrases() {
        assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
        assert_eq!(StatusCode::Created.reason_phrase(), "Created");
        assert_eq!(StatusCode::InternalServerError.reason_phrase(), "Internal Server Error");
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(StatusCode::Ok.status_line(), "HTTP/1.1 200 OK");
        assert_eq!(StatusCode::Created.status_line(), "HTTP/1.1 201 Created");
        assert_eq!(
            StatusCode::InternalServerError.status_line(),
            "HTTP/1.1 500 Internal Server Error"
        );
    }

    #[test]
    fn test_classification() {
        assert!(StatusCode::Ok.is_success());
        assert!(StatusCode::Created.is_success());
        assert!(!StatusCode::NotFound.is_success());

        assert!(StatusCode::NotFound.is_client_error());
        assert!(!StatusCode::InternalServerError.is_client_error());

        assert!(StatusCode::InternalServerError.is_server_error());
        assert!(!StatusCode::Ok.is_server_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::Ok.to_string(), "200 OK");
        assert_eq!(StatusCode::NotFound.to_string(), "404 Not Found");
    }
}
