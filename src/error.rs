use resvg::usvg;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("SVG file not found: {}", .0.display())]
    MissingSourceFile(PathBuf),
    #[error(transparent)]
    Svg(#[from] usvg::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Cannot allocate a {0}x{0} pixmap")]
    InvalidSize(u32),
}

impl Error {
    /// Whether this error was raised before any rendering was attempted.
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Error::MissingSourceFile(..))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
