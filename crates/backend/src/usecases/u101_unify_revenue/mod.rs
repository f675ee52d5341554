pub mod executor;
pub mod normalizers;

use contracts::enums::Platform;
use thiserror::Error;

use crate::projections::p200_revenue_register::repository::RegisterError;

/// Errors from rebuilding the unified revenue register
#[derive(Debug, Error)]
pub enum UnifyError {
    #[error("no platform revenue files found")]
    NoInputData,

    #[error("{platform} export: required column '{column}' is missing")]
    MissingColumn {
        platform: Platform,
        column: &'static str,
    },

    #[error("{platform} export row {row}: cannot parse '{value}' as a date")]
    BadDate {
        platform: Platform,
        row: usize,
        value: String,
    },

    #[error("{platform} export row {row}: cannot parse '{value}' as a number")]
    BadNumber {
        platform: Platform,
        row: usize,
        value: String,
    },

    #[error(transparent)]
    Register(#[from] RegisterError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
