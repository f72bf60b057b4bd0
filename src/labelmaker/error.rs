use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Parameter {0} is required.")]
    MissingParameter(&'static str),

    #[error("Room catalog error: {0}")]
    Catalog(String),

    #[error("Sheet holds {expected} labels but {got} were requested")]
    CapacityMismatch { expected: usize, got: usize },

    #[error("QR encoding error: {0}")]
    Qr(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LabelError>;
