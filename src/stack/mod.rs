pub mod error;
pub mod value;

use log::debug;

use crate::config::{DEFAULT_CAPACITY, PLACEHOLDER_TEXT};

pub use error::{ClearError, PeekError, PopError, PushError};
pub use value::{TypedValue, ValueKind, ValueParseError};

/// A bounded stack whose elements all share one kind.
///
/// The kind is locked by the first push and released when the stack empties.
/// Popping is two-phase: `try_pop` names the candidate, `commit_pop` removes it
/// once the pop animation has finished.
#[derive(Clone, Debug)]
pub struct StackEngine {
    elements: Vec<TypedValue>,
    locked_kind: Option<ValueKind>,
    capacity: usize,
}

impl Default for StackEngine {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl StackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            locked_kind: None,
            capacity,
        }
    }

    /// Elements from bottom to top.
    pub fn elements(&self) -> &[TypedValue] {
        &self.elements
    }

    pub fn locked_kind(&self) -> Option<ValueKind> {
        self.locked_kind
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the top element, if any.
    pub fn top_slot(&self) -> Option<usize> {
        self.elements.len().checked_sub(1)
    }

    pub fn try_push(&mut self, raw: &str, kind: ValueKind) -> Result<TypedValue, PushError> {
        let input = raw.trim();
        if input.is_empty() || input == PLACEHOLDER_TEXT {
            return Err(PushError::EmptyInput);
        }

        if self.is_full() {
            return Err(PushError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let value = kind.parse_value(input)?;

        match self.locked_kind {
            Some(locked) if locked != kind => {
                return Err(PushError::TypeMismatch {
                    locked,
                    requested: kind,
                })
            }
            Some(_) => {}
            None => {
                debug!("stack type locked to {}", kind);
                self.locked_kind = Some(kind);
            }
        }

        self.elements.push(value.clone());
        Ok(value)
    }

    /// Returns the element a pop would remove, leaving the stack untouched.
    pub fn try_pop(&self) -> Result<TypedValue, PopError> {
        self.elements.last().cloned().ok_or(PopError::EmptyStack)
    }

    /// Removes the top element. Releases the type-lock when the stack empties.
    pub fn commit_pop(&mut self) -> Result<TypedValue, PopError> {
        let value = self.elements.pop().ok_or(PopError::EmptyStack)?;
        if self.elements.is_empty() {
            debug!("stack empty, releasing type lock");
            self.locked_kind = None;
        }
        Ok(value)
    }

    pub fn peek(&self) -> Result<&TypedValue, PeekError> {
        self.elements.last().ok_or(PeekError::EmptyStack)
    }

    /// Empties the stack, returning how many elements were removed.
    pub fn clear(&mut self) -> Result<usize, ClearError> {
        if self.elements.is_empty() {
            return Err(ClearError::AlreadyEmpty);
        }
        let removed = self.elements.len();
        self.elements.clear();
        self.locked_kind = None;
        Ok(removed)
    }
}
