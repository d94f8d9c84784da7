use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of a rendering attempt. Each one ends the invocation
/// with an `Error:` line and no frame output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Add the name of an image after the program name")]
    MissingArgument,

    #[error("The image file does not exist: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unsupported image format: {}", display_extension(.extension))]
    UnsupportedFormat { extension: String },

    #[error("It is not possible to open the image ({kind})")]
    DecodeFailure { kind: DecodeErrorKind },
}

fn display_extension(extension: &str) -> String {
    if extension.is_empty() {
        "(no extension)".to_string()
    } else {
        format!(".{extension}")
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Category of a decoding failure. Only the category is surfaced to the
/// user, never the decoder's full message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    Decoding,
    Encoding,
    Parameter,
    Limits,
    Unsupported,
    Io,
}

impl DecodeErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DecodeErrorKind::Decoding => "DecodingError",
            DecodeErrorKind::Encoding => "EncodingError",
            DecodeErrorKind::Parameter => "ParameterError",
            DecodeErrorKind::Limits => "LimitsError",
            DecodeErrorKind::Unsupported => "UnsupportedError",
            DecodeErrorKind::Io => "IoError",
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&image::ImageError> for DecodeErrorKind {
    fn from(err: &image::ImageError) -> Self {
        match err {
            image::ImageError::Decoding(_) => DecodeErrorKind::Decoding,
            image::ImageError::Encoding(_) => DecodeErrorKind::Encoding,
            image::ImageError::Parameter(_) => DecodeErrorKind::Parameter,
            image::ImageError::Limits(_) => DecodeErrorKind::Limits,
            image::ImageError::Unsupported(_) => DecodeErrorKind::Unsupported,
            image::ImageError::IoError(_) => DecodeErrorKind::Io,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::DecodeFailure {
            kind: DecodeErrorKind::from(&err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(_: std::io::Error) -> Self {
        Error::DecodeFailure {
            kind: DecodeErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::error::{LimitError, LimitErrorKind};

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::MissingArgument.to_string(),
            "Add the name of an image after the program name"
        );
        assert_eq!(
            Error::FileNotFound {
                path: PathBuf::from("/tmp/missing.png")
            }
            .to_string(),
            "The image file does not exist: /tmp/missing.png"
        );
        assert_eq!(
            Error::UnsupportedFormat {
                extension: "DOCX".to_string()
            }
            .to_string(),
            "Unsupported image format: .DOCX"
        );
        assert_eq!(
            Error::UnsupportedFormat {
                extension: String::new()
            }
            .to_string(),
            "Unsupported image format: (no extension)"
        );
        assert_eq!(
            Error::DecodeFailure {
                kind: DecodeErrorKind::Decoding
            }
            .to_string(),
            "It is not possible to open the image (DecodingError)"
        );
    }

    #[test]
    fn test_image_error_maps_to_category_only() {
        let io = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "secret detail",
        ));
        let err = Error::from(io);
        assert!(matches!(
            err,
            Error::DecodeFailure {
                kind: DecodeErrorKind::Io
            }
        ));
        assert!(!err.to_string().contains("secret detail"));

        let limits = image::ImageError::Limits(LimitError::from_kind(
            LimitErrorKind::DimensionError,
        ));
        assert_eq!(DecodeErrorKind::from(&limits), DecodeErrorKind::Limits);
    }

    #[test]
    fn test_io_error_converts_to_decode_failure() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert_eq!(
            err.to_string(),
            "It is not possible to open the image (IoError)"
        );
    }
}
