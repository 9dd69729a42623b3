//! Error types for the submodel crate
//!
//! This module contains the errors raised when declaring a submodel column.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeclarationError {
    #[error("Unknown column `{attribute}` for table `{table}`")]
    UnknownColumn {
        table: &'static str,
        attribute: &'static str,
    },
}
