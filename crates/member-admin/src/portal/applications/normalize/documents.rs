//! Document normalization. General documents and signature-image attachments
//! are stored in two physically distinct collections; review shows them as
//! one list. The id / parent-record id / storage id triple is preserved
//! verbatim because the delete and replace contracts are keyed by it.

use serde_json::Value;

use super::super::raw::{alias, pick_text, RawApplicationRecord};
use super::super::view::{DocumentKind, DocumentView};

pub fn normalize_documents(raw: &RawApplicationRecord) -> Vec<DocumentView> {
    let mut documents: Vec<DocumentView> = raw
        .list(alias::DOCUMENTS)
        .iter()
        .map(|row| document_from_row(row, DocumentKind::General))
        .collect();
    documents.extend(
        raw.list(alias::SIGNATURE_IMAGES)
            .iter()
            .map(|row| document_from_row(row, DocumentKind::SignatureImage)),
    );
    documents
}

fn document_from_row(row: &Value, kind: DocumentKind) -> DocumentView {
    DocumentView {
        id: pick_text(row, alias::DOCUMENT_ID),
        record_id: pick_text(row, alias::DOCUMENT_RECORD_ID),
        storage_id: pick_text(row, alias::DOCUMENT_STORAGE_ID),
        name: pick_text(row, alias::DOCUMENT_NAME).unwrap_or_default(),
        kind,
        url: pick_text(row, alias::DOCUMENT_URL),
    }
}
