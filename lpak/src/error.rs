#[derive(thiserror::Error)]
pub enum Error {
    // std errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("utf8 conversion: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    // crate errors
    #[error("found magic of {0:x?} instead of {:x?}", super::MAGIC)]
    Magic([u8; 4]),

    #[error("bundle version {0} is post-Full Throttle, which is not supported")]
    Version(u16),

    #[error("unexpected end of bundle while reading {0}")]
    Truncated(&'static str),

    #[error("\"{0}\" is compressed and cannot be extracted")]
    CompressedPayload(String),

    #[error("{0}")]
    Other(String),
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
