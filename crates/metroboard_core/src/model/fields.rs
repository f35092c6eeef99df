//! Editable form fields.
//!
//! # Responsibility
//! - Hold the text of the ID, Name and Message inputs.
//! - Report a change notification whenever a field's text actually changes,
//!   whether the change came from the user or from code.
//!
//! # Invariants
//! - Setting a field to its current text emits no notification.

use crate::model::record::Record;

/// One of the three editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 3] = [Field::Id, Field::Name, Field::Message];

    /// Caption shown on the field's label widget.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Id => "ID:",
            Self::Name => "Name:",
            Self::Message => "Message:",
        }
    }

    /// Parses a field from its lowercase command name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "message" | "msg" => Some(Self::Message),
            _ => None,
        }
    }
}

/// Text-change notification emitted by `FormFields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChanged {
    pub field: Field,
}

/// Current contents of the three inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    id: String,
    name: String,
    message: String,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Message => &self.message,
        }
    }

    /// Replaces one field's text.
    ///
    /// Returns `Some(FieldChanged)` only when the text differs from before.
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) -> Option<FieldChanged> {
        let text = text.into();
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Message => &mut self.message,
        };
        if *slot == text {
            return None;
        }
        *slot = text;
        Some(FieldChanged { field })
    }

    /// Builds a record from the literal field contents.
    pub fn to_record(&self) -> Record {
        Record::new(self.id.as_str(), self.name.as_str(), self.message.as_str())
    }

    pub fn is_blank(&self) -> bool {
        self.id.is_empty() && self.name.is_empty() && self.message.is_empty()
    }
}
