//! # Almacén de Archivos
//! src/storage/file_store.rs
//!
//! Lee y escribe archivos directamente en un directorio raíz configurado.
//! No hay locking: un POST y un GET concurrentes sobre el mismo nombre
//! pueden intercalarse (gana el último en escribir).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errores del almacén de archivos
#[derive(Debug, Error)]
pub enum StorageError {
    /// El archivo no existe (o no es un archivo regular)
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// El nombre saldría del directorio raíz
    #[error("Invalid file name: {0:?}")]
    InvalidName(String),

    /// Cualquier otro fallo del sistema de archivos
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Adaptador sobre el sistema de archivos para la ruta `/files`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Crea un almacén sobre `root` (no toca el disco)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directorio raíz del almacén
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Crea el directorio raíz si no existe
    pub fn ensure_root(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })
    }

    /// Ruta absoluta de `name` dentro del directorio raíz
    ///
    /// Rechaza separadores, `.`, `..` y bytes nulos. El nombre vacío apunta
    /// al propio directorio y por lo tanto nunca es un archivo.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        let escapes_root = name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0']);

        if escapes_root {
            return Err(StorageError::InvalidName(name.to_string()));
        }

        Ok(self.root.join(name))
    }

    /// Verifica si existe un archivo regular con ese nombre
    pub fn exists(&self, name: &str) -> bool {
        self.resolve(name).map(|path| path.is_file()).unwrap_or(false)
    }

    /// Tamaño en bytes del archivo
    pub fn size(&self, name: &str) -> Result<u64, StorageError> {
        let path = self.existing_file(name)?;
        fs::metadata(&path)
            .map(|metadata| metadata.len())
            .map_err(|source| io_error(path, source))
    }

    /// Lee el contenido completo del archivo
    pub fn read(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.existing_file(name)?;
        fs::read(&path).map_err(|source| io_error(path, source))
    }

    /// Crea o trunca el archivo y escribe `content` tal cual
    pub fn write(&self, name: &str, content: &[u8]) -> Result<(), StorageError> {
        let path = self.resolve(name)?;
        fs::write(&path, content).map_err(|source| StorageError::Io { path, source })
    }

    fn existing_file(&self, name: &str) -> Result<PathBuf, StorageError> {
        let path = self.resolve(name)?;
        if !path.is_file() {
            return Err(StorageError::NotFound(path));
        }
        Ok(path)
    }
}

/// Un archivo que desaparece entre el chequeo y la lectura sigue siendo 404
fn io_error(path: PathBuf, source: io::Error) -> StorageError {
    if source.kind() == io::ErrorKind::NotFound {
        StorageError::NotFound(path)
    } else {
        StorageError::Io { path, source }
    }
}
