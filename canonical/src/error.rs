//! Validation failures.
//!
//! Message text is stable: downstream tooling matches on it.

use std::fmt;

use thiserror::Error;

/// Declared action fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionField {
    Name,
    Data,
    Metadata,
}

impl ActionField {
    pub const ALL: [ActionField; 3] = [ActionField::Name, ActionField::Data, ActionField::Metadata];

    pub fn key(self) -> &'static str {
        match self {
            ActionField::Name => "name",
            ActionField::Data => "data",
            ActionField::Metadata => "metadata",
        }
    }

    fn constraint(self) -> &'static str {
        match self {
            ActionField::Name => "consist only of uppercase alphabetical characters and underscores",
            ActionField::Data | ActionField::Metadata => "be a plain object",
        }
    }
}

impl fmt::Display for ActionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// First violation found by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Action definition must be a plain object.")]
    InvalidShape,

    /// `name` is the only required field.
    #[error("Action definition object must define \"name\" property.")]
    MissingField,

    #[error("Action definition object \"{0}\" property value must {constraint}.", constraint = .0.constraint())]
    InvalidField(ActionField),

    /// `field` is the first undeclared key; it is not part of the message.
    #[error("Action definition object must not define unknown properties.")]
    UnknownField { field: String },

    #[error("Reducer definition object must begin with a domain map definition.")]
    WrongShape,
}

impl ValidationError {
    /// Stable label for diagnostic output.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidShape => "invalid_shape",
            ValidationError::MissingField => "missing_field",
            ValidationError::InvalidField(_) => "invalid_field",
            ValidationError::UnknownField { .. } => "unknown_field",
            ValidationError::WrongShape => "wrong_shape",
        }
    }
}
