//! Field visibility rule.
//!
//! # Invariants
//! - Visibility is a pure function of store emptiness.
//! - Applying the rule twice for the same emptiness changes nothing.

use crate::model::fields::Field;

/// Widgets whose visibility follows the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormWidget {
    Label(Field),
    Input(Field),
}

impl FormWidget {
    /// Every label and input in form order.
    pub fn all() -> impl Iterator<Item = FormWidget> {
        Field::ALL
            .into_iter()
            .flat_map(|field| [FormWidget::Label(field), FormWidget::Input(field)])
    }
}

/// Two-state visibility of the editing widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVisibility {
    /// Store is empty.
    #[default]
    Hidden,
    /// Store holds at least one record.
    Shown,
}

impl FieldVisibility {
    pub fn for_store_len(len: usize) -> Self {
        if len == 0 {
            Self::Hidden
        } else {
            Self::Shown
        }
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}
