//! Multi-entity editor state machine for one person collection.
//!
//! The editor owns a deep copy of its slice of the application view; nothing
//! it does touches the view itself until a Save round-trip succeeds, and the
//! merged-back data is always the server's acknowledged record, never the
//! local draft. Transitions are pure: every operation returns the next state
//! and leaves the input untouched, so a failed operation simply means the
//! caller keeps the state it already had.

use super::prename::{map_prename, PrenameSide};
use super::validate::{has_blocking_errors, validate_people, FieldErrors};
use super::view::{MembershipType, PersonField, PersonView};

/// Whether a collection holds at most one entry or one-to-many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardinalityMode {
    Single,
    Multiple,
}

/// Where the edit session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Viewing,
    Editing,
    Submitting,
}

pub const REPRESENTATIVE_MAX_ENTRIES: usize = 3;
pub const CONTACT_PERSON_MAX_ENTRIES: usize = 3;

/// Errors raised by editor transitions. The state that produced the error is
/// unchanged; the caller keeps it.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("operation requires the {expected:?} phase")]
    WrongPhase { expected: EditorPhase },
    #[error("collection holds at most one entry")]
    SingleCardinality,
    #[error("collection is at its maximum of {max} entries")]
    AtCapacity { max: usize },
    #[error("the last entry of the collection cannot be removed")]
    LastEntry,
    #[error("no entry at index {index}")]
    IndexOutOfBounds { index: usize },
    #[error("blocking validation errors must be resolved before saving")]
    BlockingErrors,
}

/// Edit session over one bounded person collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonCollectionEditor {
    phase: EditorPhase,
    mode: CardinalityMode,
    max_entries: usize,
    committed: Vec<PersonView>,
    draft: Vec<PersonView>,
    errors: Vec<FieldErrors>,
}

impl PersonCollectionEditor {
    pub fn new(committed: &[PersonView], mode: CardinalityMode, max_entries: usize) -> Self {
        let max_entries = match mode {
            CardinalityMode::Single => 1,
            CardinalityMode::Multiple => max_entries.max(1),
        };
        Self {
            phase: EditorPhase::Viewing,
            mode,
            max_entries,
            committed: committed.to_vec(),
            draft: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Representatives are single-cardinality for individual memberships and
    /// one-to-three everywhere else.
    pub fn representatives(committed: &[PersonView], membership: MembershipType) -> Self {
        match membership {
            MembershipType::Individual => Self::new(committed, CardinalityMode::Single, 1),
            _ => Self::new(committed, CardinalityMode::Multiple, REPRESENTATIVE_MAX_ENTRIES),
        }
    }

    pub fn contact_persons(committed: &[PersonView]) -> Self {
        Self::new(committed, CardinalityMode::Multiple, CONTACT_PERSON_MAX_ENTRIES)
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn mode(&self) -> CardinalityMode {
        self.mode
    }

    /// The committed slice shown while Viewing.
    pub fn committed(&self) -> &[PersonView] {
        &self.committed
    }

    /// The mutable copy being edited. Empty outside an edit session.
    pub fn draft(&self) -> &[PersonView] {
        &self.draft
    }

    pub fn errors(&self) -> &[FieldErrors] {
        &self.errors
    }

    pub fn has_blocking_errors(&self) -> bool {
        has_blocking_errors(&self.errors)
    }

    /// Enter edit mode over a deep copy of the committed slice. A
    /// multi-cardinality collection starts with at least one entry.
    pub fn begin_edit(&self) -> Result<Self, EditorError> {
        self.expect_phase(EditorPhase::Viewing)?;
        let mut next = self.clone();
        next.draft = next.committed.clone();
        if next.draft.is_empty() {
            next.draft.push(PersonView::default());
        }
        super::normalize::renumber(&mut next.draft);
        next.errors = validate_people(&next.draft);
        next.phase = EditorPhase::Editing;
        Ok(next)
    }

    /// Discard the draft and return to Viewing.
    pub fn cancel(&self) -> Result<Self, EditorError> {
        self.expect_phase(EditorPhase::Editing)?;
        let mut next = self.clone();
        next.draft.clear();
        next.errors.clear();
        next.phase = EditorPhase::Viewing;
        Ok(next)
    }

    pub fn add_entry(&self) -> Result<Self, EditorError> {
        self.expect_phase(EditorPhase::Editing)?;
        if self.mode == CardinalityMode::Single {
            return Err(EditorError::SingleCardinality);
        }
        if self.draft.len() >= self.max_entries {
            return Err(EditorError::AtCapacity { max: self.max_entries });
        }
        let mut next = self.clone();
        next.draft.push(PersonView {
            order: next.draft.len() as u32 + 1,
            is_primary: next.draft.is_empty(),
            ..PersonView::default()
        });
        next.after_mutation();
        Ok(next)
    }

    /// Remove one entry. The sole remaining entry of a multi-cardinality
    /// collection is never removable, and single-cardinality collections
    /// expose no remove operation at all.
    pub fn remove_entry(&self, index: usize) -> Result<Self, EditorError> {
        self.expect_phase(EditorPhase::Editing)?;
        if self.mode == CardinalityMode::Single {
            return Err(EditorError::SingleCardinality);
        }
        if self.draft.len() <= 1 {
            return Err(EditorError::LastEntry);
        }
        if index >= self.draft.len() {
            return Err(EditorError::IndexOutOfBounds { index });
        }
        let mut next = self.clone();
        next.draft.remove(index);
        next.after_mutation();
        Ok(next)
    }

    /// Replace one field of one entry. Prename dropdown changes run through
    /// the bidirectional mapper so the paired honorific stays consistent.
    pub fn update_field(&self, index: usize, field: PersonField, value: &str) -> Result<Self, EditorError> {
        self.expect_phase(EditorPhase::Editing)?;
        let mut next = self.clone();
        let entry = next
            .draft
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfBounds { index })?;
        match field {
            PersonField::PrenameTh => *entry = map_prename(entry, PrenameSide::Thai, value),
            PersonField::PrenameEn => *entry = map_prename(entry, PrenameSide::English, value),
            PersonField::PrenameOtherTh => entry.prename_other_th = value.to_string(),
            PersonField::PrenameOtherEn => entry.prename_other_en = value.to_string(),
            PersonField::FirstNameTh => entry.first_name_th = value.to_string(),
            PersonField::LastNameTh => entry.last_name_th = value.to_string(),
            PersonField::FirstNameEn => entry.first_name_en = value.to_string(),
            PersonField::LastNameEn => entry.last_name_en = value.to_string(),
            PersonField::Position => entry.position = value.to_string(),
            PersonField::Email => entry.email = value.to_string(),
            PersonField::Phone => entry.phone = value.to_string(),
            PersonField::PhoneExt => entry.phone_ext = value.to_string(),
        }
        next.errors = validate_people(&next.draft);
        Ok(next)
    }

    /// Relocate one entry to a new 1-based order, then renumber and re-derive
    /// the primary flag exactly as `remove_entry` does. This is the only way
    /// to change which entry is primary.
    pub fn reorder(&self, index: usize, new_order: u32) -> Result<Self, EditorError> {
        self.expect_phase(EditorPhase::Editing)?;
        if index >= self.draft.len() {
            return Err(EditorError::IndexOutOfBounds { index });
        }
        let mut next = self.clone();
        let entry = next.draft.remove(index);
        let target = (new_order.max(1) as usize - 1).min(next.draft.len());
        next.draft.insert(target, entry);
        next.after_mutation();
        Ok(next)
    }

    /// Hand the draft to the Save contract. Refused while blocking errors
    /// remain; the Submitting phase keeps a second Save from being issued
    /// before the first resolves.
    pub fn begin_save(&self) -> Result<Self, EditorError> {
        self.expect_phase(EditorPhase::Editing)?;
        if self.has_blocking_errors() {
            return Err(EditorError::BlockingErrors);
        }
        let mut next = self.clone();
        next.phase = EditorPhase::Submitting;
        Ok(next)
    }

    /// Merge the server's acknowledged slice and return to Viewing. The local
    /// draft is discarded in favor of what the server actually stored.
    pub fn save_succeeded(&self, server_entries: &[PersonView]) -> Result<Self, EditorError> {
        self.expect_phase(EditorPhase::Submitting)?;
        let mut next = self.clone();
        next.committed = server_entries.to_vec();
        next.draft.clear();
        next.errors.clear();
        next.phase = EditorPhase::Viewing;
        Ok(next)
    }

    /// Return to Editing with the draft intact so no admin input is lost.
    pub fn save_failed(&self) -> Result<Self, EditorError> {
        self.expect_phase(EditorPhase::Submitting)?;
        let mut next = self.clone();
        next.phase = EditorPhase::Editing;
        Ok(next)
    }

    fn after_mutation(&mut self) {
        super::normalize::renumber(&mut self.draft);
        self.errors = validate_people(&self.draft);
    }

    fn expect_phase(&self, expected: EditorPhase) -> Result<(), EditorError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EditorError::WrongPhase { expected })
        }
    }
}
