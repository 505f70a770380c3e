use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: product catalog is empty")]
    EmptyCatalog,

    #[error("Configuration error: product {index} has rating {rating}, expected 0-5")]
    InvalidRating { index: usize, rating: f32 },

    #[error("Configuration error: product {index} has price {price}")]
    InvalidPrice { index: usize, price: f64 },

    #[error("Index {index} is outside the catalog (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
