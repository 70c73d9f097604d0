use crate::core::models::{IdentificationError, PlantRecord, SelectedImage};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdentificationOutcome {
    #[default]
    Empty,
    Identified(PlantRecord),
    Failed(String),
}

/// Snapshot of the identification flow. Every user action produces a new
/// snapshot; nothing mutates one in place.
///
/// At most one request is outstanding (`is_loading`), and a record and an
/// error are never held together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    selected_image: Option<SelectedImage>,
    is_loading: bool,
    outcome: IdentificationOutcome,
}

impl SessionState {
    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.selected_image.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn plant_record(&self) -> Option<&PlantRecord> {
        match &self.outcome {
            IdentificationOutcome::Identified(record) => Some(record),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            IdentificationOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn can_identify(&self) -> bool {
        self.selected_image.is_some() && !self.is_loading
    }

    /// A new image clears a shown error but keeps a shown record.
    pub fn with_selected_image(&self, image: SelectedImage) -> Self {
        Self {
            selected_image: Some(image),
            is_loading: self.is_loading,
            outcome: self.outcome_without_error(),
        }
    }

    /// `None` when there is nothing to submit or a request is in flight.
    pub fn begin_identification(&self) -> Option<Self> {
        if !self.can_identify() {
            return None;
        }

        Some(Self {
            selected_image: self.selected_image.clone(),
            is_loading: true,
            outcome: self.outcome_without_error(),
        })
    }

    pub fn finish_identification(&self, result: Result<PlantRecord, IdentificationError>) -> Self {
        let outcome = match result {
            Ok(record) => IdentificationOutcome::Identified(record),
            Err(error) => IdentificationOutcome::Failed(error.user_message()),
        };

        Self {
            selected_image: self.selected_image.clone(),
            is_loading: false,
            outcome,
        }
    }

    fn outcome_without_error(&self) -> IdentificationOutcome {
        match &self.outcome {
            IdentificationOutcome::Failed(_) => IdentificationOutcome::Empty,
            other => other.clone(),
        }
    }
}
