use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use tracing::debug;

use crate::clippings::error::ClippingsError;

const BOM: char = '\u{feff}';

pub fn read_clippings(path: &Path) -> Result<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ClippingsError::MissingInputFile(path.to_path_buf()).into())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    Ok(decode_clippings(&bytes))
}

// 基本は UTF-8 (BOM 付きのこともある)
// 古い端末や PC で編集されたものは Windows-1252 のことがある
pub fn decode_clippings(bytes: &[u8]) -> String {
    let txt = match std::str::from_utf8(bytes) {
        Ok(txt) => txt.to_owned(),
        Err(_) => {
            debug!("input is not valid UTF-8, decoding as Windows-1252");
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
    };

    match txt.strip_prefix(BOM) {
        Some(stripped) => stripped.to_owned(),
        None => txt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom() {
        let bytes = "\u{feff}Book A\n".as_bytes();
        assert_eq!(decode_clippings(bytes), "Book A\n");
    }

    #[test]
    fn falls_back_to_windows_1252() {
        // "Café" in Windows-1252
        let bytes = b"Caf\xe9";
        assert_eq!(decode_clippings(bytes), "Café");
    }

    #[test]
    fn missing_file_is_typed() {
        let err = read_clippings(Path::new("does/not/exist/My Clippings.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClippingsError>(),
            Some(ClippingsError::MissingInputFile(_))
        ));
    }
}
