//! # Negociación de Content-Encoding
//! src/http/encoding.rs
//!
//! Solo la ruta `/echo` negocia. Si el valor de `Accept-Encoding`, pasado a
//! minúsculas, contiene la subcadena `gzip`, el body se comprime con gzip
//! y se anuncia `Content-Encoding: gzip`. Cualquier otro token se ignora.
//!
//! La comparación es por subcadena, no por token: `x-gzip` también activa
//! gzip. Se mantiene así por compatibilidad.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashMap;
use std::io::{self, Write};

/// Header de la petición que se inspecciona
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";

/// Codificación elegida para el body de la respuesta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    /// Body sin transformar
    Identity,

    /// Body comprimido con gzip (DEFLATE + contenedor gzip)
    Gzip,
}

impl ContentEncoding {
    /// Decide la codificación a partir de los headers del request
    ///
    /// # Ejemplo
    /// ```
    /// use std::collections::HashMap;
    /// use codecrafters_http::http::ContentEncoding;
    ///
    /// let mut headers = HashMap::new();
    /// headers.insert("Accept-Encoding".to_string(), "deflate, GZIP".to_string());
    /// assert_eq!(ContentEncoding::negotiate(&headers), ContentEncoding::Gzip);
    /// ```
    pub fn negotiate(headers: &HashMap<String, String>) -> Self {
        match headers.get(ACCEPT_ENCODING) {
            Some(value) if value.to_lowercase().contains("gzip") => ContentEncoding::Gzip,
            _ => ContentEncoding::Identity,
        }
    }

    /// Valor para el header `Content-Encoding`, si corresponde enviarlo
    pub fn header_value(&self) -> Option<&'static str> {
        match self {
            ContentEncoding::Identity => None,
            ContentEncoding::Gzip => Some("gzip"),
        }
    }

    /// Codifica el body según la codificación elegida
    pub fn encode(&self, body: &[u8]) -> io::Result<Vec<u8>> {
        match self {
            ContentEncoding::Identity => Ok(body.to_vec()),
            ContentEncoding::Gzip => gzip_compress(body),
        }
    }
}

fn gzip_compress(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn headers_with(value: &str) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(ACCEPT_ENCODING.to_string(), value.to_string());
        headers
    }

    #[test]
    fn test_no_header_is_identity() {
        assert_eq!(ContentEncoding::negotiate(&HashMap::new()), ContentEncoding::Identity);
    }

    #[test]
    fn test_gzip_among_other_tokens() {
        assert_eq!(
            ContentEncoding::negotiate(&headers_with("deflate, gzip, br")),
            ContentEncoding::Gzip
        );
    }

    #[test]
    fn test_substring_match_accepts_x_gzip() {
        assert_eq!(ContentEncoding::negotiate(&headers_with("x-gzip")), ContentEncoding::Gzip);
    }

    #[test]
    fn test_uppercase_value_matches() {
        assert_eq!(ContentEncoding::negotiate(&headers_with("GZip")), ContentEncoding::Gzip);
    }

    #[test]
    fn test_other_encodings_are_ignored() {
        assert_eq!(
            ContentEncoding::negotiate(&headers_with("deflate, br")),
            ContentEncoding::Identity
        );
    }

    #[test]
    fn test_header_name_is_exact() {
        let mut headers = HashMap::new();
        headers.insert("accept-encoding".to_string(), "gzip".to_string());
        assert_eq!(ContentEncoding::negotiate(&headers), ContentEncoding::Identity);
    }

    #[test]
    fn test_header_values() {
        assert_eq!(ContentEncoding::Gzip.header_value(), Some("gzip"));
        assert_eq!(ContentEncoding::Identity.header_value(), None);
    }

    #[test]
    fn test_gzip_decodes_to_original() {
        let encoded = ContentEncoding::Gzip.encode(b"abc").unwrap();
        assert_eq!(&encoded[..2], &[0x1f, 0x8b]);

        let mut decoded = Vec::new();
        GzDecoder::new(&encoded[..]).read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, b"abc");
    }

    #[test]
    fn test_identity_is_verbatim() {
        assert_eq!(ContentEncoding::Identity.encode(b"abc").unwrap(), b"abc");
    }
}
