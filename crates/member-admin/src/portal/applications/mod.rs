//! Membership application review: normalization of heterogeneous raw records
//! into one canonical view, bounded-collection editing with cross-field
//! validation, and the thin contracts toward storage and lookups.

pub mod contracts;
pub mod editor;
pub mod normalize;
pub mod prename;
pub mod raw;
pub mod router;
pub mod service;
pub mod validate;
pub mod view;

#[cfg(test)]
mod tests;

pub use contracts::{
    ActionResult, ApplicationGateway, CollectionField, DocumentStore, DocumentUpload,
    GatewayError, LookupProvider, MutationResponse,
};
pub use editor::{
    CardinalityMode, EditorError, EditorPhase, PersonCollectionEditor,
    CONTACT_PERSON_MAX_ENTRIES, REPRESENTATIVE_MAX_ENTRIES,
};
pub use normalize::{normalize, normalize_address, normalize_all_addresses};
pub use prename::{map_prename, PrenameSide};
pub use raw::RawApplicationRecord;
pub use router::portal_router;
pub use service::{AdminPortalService, PortalError};
pub use validate::{has_blocking_errors, validate_people, FieldErrors};
pub use view::{
    AddressKind, AddressView, ApplicationStatus, ApplicationView, BusinessTypeTag, DocumentKind,
    DocumentView, LookupOption, MembershipType, PersonField, PersonView, ProductView,
    SignatoryAuthority, SignatoryView,
};
