//! Item Editing State Machine
//!
//! `Viewing -> Editing{Title|Notes} -> Viewing`. A row enters editing on
//! double-click and leaves it on commit (Enter or blur) or cancel (Escape).

/// Which part of an item is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Notes,
}

/// Editing state of a single item row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { field: EditField, draft: String },
}

/// A finished edit, ready to be applied to an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommit {
    Title(String),
    Notes(String),
}

impl EditState {
    /// Start editing `field`, seeding the draft with its current text.
    /// Any edit already in progress is replaced.
    pub fn begin(&mut self, field: EditField, current: &str) {
        *self = EditState::Editing {
            field,
            draft: current.to_string(),
        };
    }

    pub fn is_editing_field(&self, which: EditField) -> bool {
        matches!(self, EditState::Editing { field, .. } if *field == which)
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Viewing => None,
        }
    }

    /// Replace the draft text. Ignored while viewing.
    pub fn set_draft(&mut self, text: String) {
        if let EditState::Editing { draft, .. } = self {
            *draft = text;
        }
    }

    /// Finish editing and hand back what was typed.
    ///
    /// Returns `None` when nothing was being edited.
    pub fn commit(&mut self) -> Option<EditCommit> {
        match std::mem::take(self) {
            EditState::Editing { field: EditField::Title, draft } => Some(EditCommit::Title(draft)),
            EditState::Editing { field: EditField::Notes, draft } => Some(EditCommit::Notes(draft)),
            EditState::Viewing => None,
        }
    }

    /// Drop the draft without applying it
    pub fn cancel(&mut self) {
        *self = EditState::Viewing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_edit_round() {
        let mut state = EditState::default();
        assert_eq!(state, EditState::Viewing);

        state.begin(EditField::Title, "Buy milk");
        assert!(state.is_editing_field(EditField::Title));
        assert_eq!(state.draft(), Some("Buy milk"));

        state.set_draft("Buy oat milk".to_string());
        assert_eq!(state.commit(), Some(EditCommit::Title("Buy oat milk".to_string())));
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_notes_edit_round() {
        let mut state = EditState::default();
        state.begin(EditField::Notes, "");
        assert!(!state.is_editing_field(EditField::Title));
        state.set_draft("two litres".to_string());
        assert_eq!(state.commit(), Some(EditCommit::Notes("two litres".to_string())));
    }

    #[test]
    fn test_commit_while_viewing() {
        let mut state = EditState::Viewing;
        assert_eq!(state.commit(), None);
        state.set_draft("ignored".to_string());
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut state = EditState::default();
        state.begin(EditField::Title, "keep");
        state.set_draft("discard".to_string());
        state.cancel();
        assert_eq!(state.commit(), None);
    }

    #[test]
    fn test_begin_replaces_running_edit() {
        let mut state = EditState::default();
        state.begin(EditField::Title, "title");
        state.begin(EditField::Notes, "notes");
        assert_eq!(state.commit(), Some(EditCommit::Notes("notes".to_string())));
    }
}
