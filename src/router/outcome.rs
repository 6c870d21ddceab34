//! # Resultado de una Ruta
//! src/router/outcome.rs
//!
//! Cada handler produce un `RouteOutcome` con los datos justos para armar
//! su `Response`. La conversión a bytes agrega los headers de cada caso;
//! `Content-Length` solo aparece cuando hay body.

use crate::http::{ContentEncoding, Response, StatusCode};

/// Content-Type de los archivos servidos por `/files`
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content-Type de echo y user-agent
pub const TEXT_PLAIN: &str = "text/plain";

/// Resultado polimórfico del router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// `GET /` - 200 sin body
    StaticOk,

    /// `GET /echo/<valor>` - body ya codificado según `encoding`
    Echo {
        body: Vec<u8>,
        encoding: ContentEncoding,
    },

    /// `GET /user-agent` - valor del header `User-Agent`
    UserAgent(String),

    /// `GET /files/<nombre>` - contenido del archivo
    FileGet(Vec<u8>),

    /// `POST /files/<nombre>` - 201 sin body
    FileCreated,

    /// 404 sin body
    NotFound,

    /// 500 con la descripción del error como body
    ServerError(String),
}

impl RouteOutcome {
    /// Código de estado que genera este resultado
    pub fn status(&self) -> StatusCode {
        match self {
            RouteOutcome::StaticOk
            | RouteOutcome::Echo { .. }
            | RouteOutcome::UserAgent(_)
            | RouteOutcome::FileGet(_) => StatusCode::Ok,
            RouteOutcome::FileCreated => StatusCode::Created,
            RouteOutcome::NotFound => StatusCode::NotFound,
            RouteOutcome::ServerError(_) => StatusCode::InternalServerError,
        }
    }

    /// Arma la respuesta final
    pub fn into_response(self) -> Response {
        let status = self.status();

        match self {
            RouteOutcome::StaticOk | RouteOutcome::FileCreated | RouteOutcome::NotFound => {
                Response::new(status)
            }
            RouteOutcome::Echo { body, encoding } => {
                let mut response = Response::new(status).with_header("Content-Type", TEXT_PLAIN);
                if let Some(value) = encoding.header_value() {
                    response.add_header("Content-Encoding", value);
                }
                response
                    .with_header("Content-Length", &body.len().to_string())
                    .with_body_bytes(body)
            }
            RouteOutcome::UserAgent(agent) => Response::plain_text(status, &agent),
            RouteOutcome::FileGet(content) => Response::new(status)
                .with_header("Content-Type", OCTET_STREAM)
                .with_header("Content-Length", &content.len().to_string())
                .with_body_bytes(content),
            RouteOutcome::ServerError(message) => Response::plain_text(status, &message),
        }
    }
}
