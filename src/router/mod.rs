//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea (método, path) a uno de los comportamientos fijos del servidor.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → RouteOutcome → Response
//! ```
//!
//! Reglas en orden de prioridad (gana la primera que coincide):
//!
//! | Path               | Resultado                                  |
//! |--------------------|--------------------------------------------|
//! | `/`                | `StaticOk`                                 |
//! | `/echo...`         | `Echo` con lo que sigue a `/echo/`         |
//! | `/user-agent`      | `UserAgent` con el header `User-Agent`     |
//! | `/files...`        | `FileCreated` (POST) o `FileGet`/`NotFound`|
//! | cualquier otro     | `NotFound`                                 |

pub mod outcome;

pub use outcome::RouteOutcome;

use crate::http::{ContentEncoding, Method, Request};
use crate::storage::{FileStore, StorageError};
use thiserror::Error;

const ECHO_PREFIX: &str = "/echo";
const ECHO_SEGMENT: &str = "/echo/";
const FILES_PREFIX: &str = "/files";
const FILES_SEGMENT: &str = "/files/";
const USER_AGENT_PATH: &str = "/user-agent";

/// Header leído por la ruta `/user-agent`
pub const USER_AGENT: &str = "User-Agent";

/// Errores que el router no puede traducir a un estado propio
#[derive(Debug, Error)]
pub enum RouteError {
    /// Un path `/echo` sin el separador `/echo/`
    #[error("Missing path segment in {0:?}")]
    MissingPathSegment(String),

    /// Fallo del sistema de archivos
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Fallo al comprimir el body
    #[error("Failed to encode response body: {0}")]
    Encoding(#[source] std::io::Error),
}

/// Router con las cinco rutas del servidor
#[derive(Debug, Clone)]
pub struct Router {
    /// Directorio de la ruta `/files`
    store: FileStore,
}

impl Router {
    /// Crea un router que sirve archivos desde `store`
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// Almacén usado por la ruta `/files`
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Elige y ejecuta la ruta para un request
    ///
    /// # Ejemplo
    /// ```
    /// use codecrafters_http::http::Request;
    /// use codecrafters_http::router::{RouteOutcome, Router};
    /// use codecrafters_http::storage::FileStore;
    ///
    /// let router = Router::new(FileStore::new("./files"));
    /// let request = Request::parse(b"GET / HTTP/1.1\r\n\r\n").unwrap();
    ///
    /// assert_eq!(router.route(&request).unwrap(), RouteOutcome::StaticOk);
    /// ```
    pub fn route(&self, request: &Request) -> Result<RouteOutcome, RouteError> {
        let path = request.path();

        if path == "/" {
            Ok(RouteOutcome::StaticOk)
        } else if path.starts_with(ECHO_PREFIX) {
            self.echo(request)
        } else if path == USER_AGENT_PATH {
            Ok(Self::user_agent(request))
        } else if path.starts_with(FILES_PREFIX) {
            self.files(request)
        } else {
            Ok(RouteOutcome::NotFound)
        }
    }

    fn echo(&self, request: &Request) -> Result<RouteOutcome, RouteError> {
        let value = request
            .path()
            .strip_prefix(ECHO_SEGMENT)
            .ok_or_else(|| RouteError::MissingPathSegment(request.path().to_string()))?;

        let encoding = ContentEncoding::negotiate(request.headers());
        let body = encoding
            .encode(value.as_bytes())
            .map_err(RouteError::Encoding)?;

        tracing::debug!(value, ?encoding, "echo");
        Ok(RouteOutcome::Echo { body, encoding })
    }

    fn user_agent(request: &Request) -> RouteOutcome {
        let agent = request.header(USER_AGENT).unwrap_or_default();
        RouteOutcome::UserAgent(agent.to_string())
    }

    fn files(&self, request: &Request) -> Result<RouteOutcome, RouteError> {
        let name = request.path().strip_prefix(FILES_SEGMENT).unwrap_or_default();

        if *request.method() == Method::POST {
            return match self.store.write(name, request.body()) {
                Ok(()) => {
                    tracing::debug!(name, bytes = request.body().len(), "file written");
                    Ok(RouteOutcome::FileCreated)
                }
                Err(StorageError::InvalidName(name)) => {
                    tracing::warn!(name = %name, "rejected file name");
                    Ok(RouteOutcome::NotFound)
                }
                Err(e) => Err(e.into()),
            };
        }

        match self.store.read(name) {
            Ok(content) => Ok(RouteOutcome::FileGet(content)),
            Err(StorageError::NotFound(_)) => Ok(RouteOutcome::NotFound),
            Err(StorageError::InvalidName(name)) => {
                tracing::warn!(name = %name, "rejected file name");
                Ok(RouteOutcome::NotFound)
            }
            Err(e) => Err(e.into()),
        }
    }
}
