use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::MAX_STRING_LENGTH;

/// The element type a stack can be locked to.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Character,
    String,
}

impl ValueKind {
    pub const ALL: [ValueKind; 3] = [ValueKind::Integer, ValueKind::Character, ValueKind::String];

    /// The kind after this one, wrapping around. Used to cycle a kind selector.
    pub fn next(&self) -> Self {
        match self {
            ValueKind::Integer => ValueKind::Character,
            ValueKind::Character => ValueKind::String,
            ValueKind::String => ValueKind::Integer,
        }
    }

    /// Parse already-trimmed, non-empty input as a value of this kind.
    pub fn parse_value(&self, input: &str) -> Result<TypedValue, ValueParseError> {
        match self {
            ValueKind::Integer => input
                .parse::<i32>()
                .map(TypedValue::Integer)
                .map_err(|_| ValueParseError::NotAnInteger {
                    input: input.to_string(),
                }),
            ValueKind::Character => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(TypedValue::Character(c)),
                    _ => Err(ValueParseError::NotSingleCharacter {
                        input: input.to_string(),
                    }),
                }
            }
            ValueKind::String => {
                let length = input.chars().count();
                if length > MAX_STRING_LENGTH {
                    return Err(ValueParseError::StringTooLong {
                        length,
                        max: MAX_STRING_LENGTH,
                    });
                }
                Ok(TypedValue::String(input.to_string()))
            }
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_str = match self {
            ValueKind::Integer => "Integer",
            ValueKind::Character => "Character",
            ValueKind::String => "String",
        };
        write!(f, "{}", kind_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;

impl FromStr for ValueKind {
    type Err = ParseError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.trim().to_lowercase().as_str() {
            "integer" | "int" | "i" => Ok(ValueKind::Integer),
            "character" | "char" | "c" => Ok(ValueKind::Character),
            "string" | "str" | "s" => Ok(ValueKind::String),
            _ => Err("kind must be one of `integer`, `character` or `string`"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueParseError {
    #[error("Invalid integer format: {input:?}")]
    NotAnInteger { input: String },
    #[error("Please enter exactly one character, got {input:?}")]
    NotSingleCharacter { input: String },
    #[error("String too long ({length} chars, max {max})")]
    StringTooLong { length: usize, max: usize },
}

/// A stack element, tagged with its kind.
#[derive(Clone, PartialEq, Debug, Eq, Hash)]
pub enum TypedValue {
    Integer(i32),
    Character(char),
    String(String),
}

impl TypedValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            TypedValue::Integer(_) => ValueKind::Integer,
            TypedValue::Character(_) => ValueKind::Character,
            TypedValue::String(_) => ValueKind::String,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Integer(value) => write!(f, "{}", value),
            TypedValue::Character(value) => write!(f, "{}", value),
            TypedValue::String(value) => write!(f, "{}", value),
        }
    }
}
