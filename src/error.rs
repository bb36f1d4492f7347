use std::io;

use thiserror::Error;

use crate::domain::modifier::HourModifier;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unrecognized {family} discriminator: {value}")]
    UnrecognizedDiscriminator { family: &'static str, value: String },
    #[error("hour overflow while applying {modifier}")]
    HourOverflow { modifier: HourModifier },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("output error: {0}")]
    Output(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn unrecognized(family: &'static str, value: impl Into<String>) -> Self {
        AppError::UnrecognizedDiscriminator {
            family,
            value: value.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
