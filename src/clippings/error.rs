use std::path::PathBuf;

use thiserror::Error;

// 出力を一切行わずに終了するエラー
#[derive(Debug, Error)]
pub enum ClippingsError {
    #[error("Input file not found: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("No highlights found: {0}")]
    EmptyOrUnrecognizedFile(String),
}
