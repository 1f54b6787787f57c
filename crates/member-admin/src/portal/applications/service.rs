//! Service composing the gateway, lookups, and document store around the
//! normalization core. One instance serves the whole portal; all state lives
//! in the collaborators behind the trait seams.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use super::contracts::{
    ApplicationGateway, CollectionField, DocumentStore, DocumentUpload, GatewayError,
    LookupProvider,
};
use super::editor::{EditorError, PersonCollectionEditor};
use super::normalize::normalize;
use super::view::{ApplicationView, LookupOption, MembershipType, PersonView};

/// Error raised by the portal service.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("application not found")]
    NotFound,
    #[error("save failed: {message}")]
    SaveFailed { message: String },
    #[error("document operation failed: {message}")]
    DocumentFailed { message: String },
    #[error(transparent)]
    Editor(#[from] EditorError),
}

impl From<GatewayError> for PortalError {
    fn from(value: GatewayError) -> Self {
        match value {
            GatewayError::NotFound => PortalError::NotFound,
            GatewayError::Transport(message) => PortalError::SaveFailed { message },
        }
    }
}

pub struct AdminPortalService<G, L, D> {
    gateway: Arc<G>,
    lookups: Arc<L>,
    documents: Arc<D>,
}

impl<G, L, D> AdminPortalService<G, L, D>
where
    G: ApplicationGateway + 'static,
    L: LookupProvider + 'static,
    D: DocumentStore + 'static,
{
    pub fn new(gateway: Arc<G>, lookups: Arc<L>, documents: Arc<D>) -> Self {
        Self {
            gateway,
            lookups,
            documents,
        }
    }

    /// Fetch one application and normalize it. The view is recomputed fresh
    /// on every call; nothing is cached across sessions.
    pub fn load_application(
        &self,
        membership: MembershipType,
        id: &str,
    ) -> Result<ApplicationView, PortalError> {
        let raw = self.gateway.fetch(membership, id)?;
        Ok(self.with_lookup_names(normalize(&raw, membership)))
    }

    /// Run the Save contract for one collection and re-normalize the server's
    /// response. Any rejection or transport failure surfaces as a single
    /// blocking error; the caller's editing state is never touched here.
    pub fn save_collection(
        &self,
        membership: MembershipType,
        id: &str,
        field: CollectionField,
        payload: &Value,
    ) -> Result<ApplicationView, PortalError> {
        let response = self.gateway.mutate(membership, id, field, payload)?;
        if !response.result.success {
            return Err(PortalError::SaveFailed {
                message: response
                    .result
                    .message
                    .unwrap_or_else(|| "save rejected".to_string()),
            });
        }
        let record = response.record.ok_or_else(|| PortalError::SaveFailed {
            message: "save acknowledged without a record".to_string(),
        })?;
        Ok(self.with_lookup_names(normalize(&record, membership)))
    }

    /// Drive one editor through a full Save round-trip. Returns the next
    /// editor state together with the outcome, so a failure always hands the
    /// intact Editing state back to the caller.
    pub fn submit_people(
        &self,
        membership: MembershipType,
        id: &str,
        field: CollectionField,
        editor: &PersonCollectionEditor,
    ) -> (PersonCollectionEditor, Result<ApplicationView, PortalError>) {
        let submitting = match editor.begin_save() {
            Ok(submitting) => submitting,
            Err(error) => return (editor.clone(), Err(error.into())),
        };

        let payload = match serde_json::to_value(submitting.draft()) {
            Ok(payload) => payload,
            Err(error) => {
                let reverted = submitting.save_failed().unwrap_or_else(|_| editor.clone());
                return (
                    reverted,
                    Err(PortalError::SaveFailed {
                        message: error.to_string(),
                    }),
                );
            }
        };

        match self.save_collection(membership, id, field, &payload) {
            Ok(view) => {
                let server_slice = slice_for(&view, field);
                let next = submitting
                    .save_succeeded(server_slice)
                    .unwrap_or_else(|_| editor.clone());
                (next, Ok(view))
            }
            Err(error) => {
                let reverted = submitting.save_failed().unwrap_or_else(|_| editor.clone());
                (reverted, Err(error))
            }
        }
    }

    pub fn industrial_groups(&self) -> Vec<LookupOption> {
        self.lookup_or_empty(self.lookups.industrial_groups(), "industrial groups")
    }

    pub fn provincial_chapters(&self) -> Vec<LookupOption> {
        self.lookup_or_empty(self.lookups.provincial_chapters(), "provincial chapters")
    }

    pub fn upload_document(&self, upload: DocumentUpload) -> Result<(), PortalError> {
        let result = self.documents.upload(upload).map_err(document_error)?;
        if result.success {
            Ok(())
        } else {
            Err(PortalError::DocumentFailed {
                message: result.message.unwrap_or_else(|| "upload rejected".to_string()),
            })
        }
    }

    pub fn delete_document(&self, id: &str) -> Result<(), PortalError> {
        let result = self.documents.delete(id).map_err(document_error)?;
        if result.success {
            Ok(())
        } else {
            Err(PortalError::DocumentFailed {
                message: result.message.unwrap_or_else(|| "delete rejected".to_string()),
            })
        }
    }

    /// A failed lookup degrades to an empty option list; viewing and saving
    /// unrelated collections must keep working.
    fn lookup_or_empty(
        &self,
        result: Result<Vec<LookupOption>, GatewayError>,
        what: &str,
    ) -> Vec<LookupOption> {
        match result {
            Ok(options) => options,
            Err(error) => {
                warn!(%error, "{what} lookup unavailable, degrading to empty list");
                Vec::new()
            }
        }
    }

    /// Fill in display names for stored selections that only kept the id.
    fn with_lookup_names(&self, mut view: ApplicationView) -> ApplicationView {
        let groups = self.industrial_groups();
        for selection in &mut view.industrial_groups {
            if selection.name.is_empty() {
                if let Some(option) = groups.iter().find(|option| option.id == selection.id) {
                    selection.name = option.name.clone();
                }
            }
        }
        if let Some(chapter) = &mut view.provincial_chapter {
            if chapter.name.is_empty() {
                let chapters = self.provincial_chapters();
                if let Some(option) = chapters.iter().find(|option| option.id == chapter.id) {
                    chapter.name = option.name.clone();
                }
            }
        }
        view
    }
}

fn document_error(error: GatewayError) -> PortalError {
    PortalError::DocumentFailed {
        message: error.to_string(),
    }
}

fn slice_for(view: &ApplicationView, field: CollectionField) -> &[PersonView] {
    match field {
        CollectionField::ContactPersons => &view.contact_persons,
        _ => &view.representatives,
    }
}
