pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid box plot config: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid whisker IQR factor: {factor} (expected a finite value >= 0)")]
    InvalidWhiskerFactor { factor: f64 },

    #[error("dataset JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
