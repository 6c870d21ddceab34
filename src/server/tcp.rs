//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Un thread por conexión, sin pool ni límite. Cada thread hace una sola
//! lectura acotada, despacha el request por el router, escribe la
//! respuesta y cierra el socket.

use crate::config::Config;
use crate::http::{ParseError, Request, Response};
use crate::router::{RouteError, RouteOutcome, Router};
use crate::storage::{FileStore, StorageError};
use std::io::{self, Read};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Fallo al atender un request; su texto es el body del 500
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Fallos al levantar el servidor
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Unable to listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },
    #[error("Unable to prepare serve directory: {0}")]
    Directory(#[from] StorageError),
}

/// Parámetros de cada conexión, copiados a cada thread
#[derive(Debug, Clone, Copy)]
pub struct ConnectionSettings {
    pub buffer_size: usize,
    pub read_timeout: Option<Duration>,
    pub write_timeout: Option<Duration>,
}

impl From<&Config> for ConnectionSettings {
    fn from(config: &Config) -> Self {
        Self {
            buffer_size: config.buffer_size,
            read_timeout: config.read_timeout(),
            write_timeout: config.write_timeout(),
        }
    }
}

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    router: Arc<Router>,
    settings: ConnectionSettings,
    listener: TcpListener,
}

impl Server {
    /// Prepara el directorio de archivos y abre el socket
    pub fn bind(config: Config) -> Result<Self, StartupError> {
        let store = FileStore::new(&config.directory);
        store.ensure_root()?;

        let address = config.address();
        let listener = TcpListener::bind(&address)
            .map_err(|source| StartupError::Bind { address, source })?;

        Ok(Self {
            router: Arc::new(Router::new(store)),
            settings: ConnectionSettings::from(&config),
            listener,
        })
    }

    /// Dirección real del socket (útil con puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Acepta conexiones para siempre
    pub fn run(&self) -> io::Result<()> {
        let address = self.local_addr()?;
        tracing::info!(
            %address,
            directory = %self.router.store().root().display(),
            "servidor escuchando (un thread por conexión)"
        );

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let settings = self.settings;

                    let peer_addr = stream.peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());
                    tracing::debug!(peer = %peer_addr, "nueva conexión");

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, &router, settings) {
                            tracing::error!(peer = %peer_addr, error = %e, "error en la conexión");
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "error al aceptar conexión");
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión: una lectura, un despacho, una escritura
    ///
    /// El socket se cierra al soltar `stream`, en cualquier camino de salida.
    pub fn handle_connection(
        mut stream: TcpStream,
        router: &Router,
        settings: ConnectionSettings,
    ) -> io::Result<()> {
        stream.set_read_timeout(settings.read_timeout)?;
        stream.set_write_timeout(settings.write_timeout)?;

        let mut buffer = vec![0u8; settings.buffer_size];
        let bytes_read = stream.read(&mut buffer)?;
        if bytes_read == 0 {
            tracing::debug!("conexión cerrada sin datos");
            return Ok(());
        }

        let start = Instant::now();
        let response = Self::respond(router, &buffer[..bytes_read]);
        response.write_to(&mut stream)?;

        tracing::info!(
            status = %response.status(),
            bytes = bytes_read,
            latency_ms = start.elapsed().as_secs_f64() * 1000.0,
            "respuesta enviada"
        );

        Ok(())
    }

    /// Núcleo sin sockets: bytes del request → respuesta
    ///
    /// Cualquier error de parseo o de ruta se convierte en un 500 con la
    /// descripción del error como body.
    ///
    /// # Ejemplo
    /// ```
    /// use codecrafters_http::router::Router;
    /// use codecrafters_http::server::Server;
    /// use codecrafters_http::storage::FileStore;
    ///
    /// let router = Router::new(FileStore::new("./files"));
    /// let response = Server::respond(&router, b"GET /echo/abc HTTP/1.1\r\n\r\n");
    ///
    /// assert_eq!(response.body(), b"abc");
    /// ```
    pub fn respond(router: &Router, raw: &[u8]) -> Response {
        match Self::dispatch(router, raw) {
            Ok(outcome) => outcome.into_response(),
            Err(e) => {
                tracing::warn!(error = %e, "request fallido");
                RouteOutcome::ServerError(e.to_string()).into_response()
            }
        }
    }

    fn dispatch(router: &Router, raw: &[u8]) -> Result<RouteOutcome, ConnectionError> {
        let request = Request::parse(raw)?;
        tracing::info!(method = %request.method(), path = request.path(), "request");
        Ok(router.route(&request)?)
    }
}
