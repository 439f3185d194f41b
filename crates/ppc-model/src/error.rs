use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("ROAS improvement threshold must be between {min}% and {max}%, got {value}%")]
    ThresholdOutOfRange { value: f64, min: f64, max: f64 },
    #[error("minimum orders for a ROAS winner must be at least 1")]
    ZeroMinOrders,
    #[error("unknown match type: {0}")]
    UnknownMatchType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
