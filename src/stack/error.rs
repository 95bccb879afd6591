use thiserror::Error;

use super::value::{ValueKind, ValueParseError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PushError {
    #[error("Please enter a value")]
    EmptyInput,
    #[error("Stack overflow - maximum size reached ({capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("Stack type locked to {locked}, cannot push a {requested}")]
    TypeMismatch {
        locked: ValueKind,
        requested: ValueKind,
    },
    #[error(transparent)]
    Parse(#[from] ValueParseError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PopError {
    #[error("Stack is empty")]
    EmptyStack,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeekError {
    #[error("Stack is empty")]
    EmptyStack,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClearError {
    #[error("Stack is already empty")]
    AlreadyEmpty,
}
