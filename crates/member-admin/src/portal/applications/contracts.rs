//! Traits describing the external collaborators of the portal core: the
//! application store, the reference-data lookups, and the document store.
//! The core never talks to a network or database itself; everything behind
//! these seams can be swapped for in-memory fakes in tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::RawApplicationRecord;
use super::view::{LookupOption, MembershipType};

/// Uniform result shape shared by every mutation contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResult {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// The saveable slices of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionField {
    Addresses,
    Representatives,
    ContactPersons,
    IndustrialGroups,
    CompanyInfo,
    FinancialInfo,
    Products,
}

impl CollectionField {
    pub const fn key(self) -> &'static str {
        match self {
            CollectionField::Addresses => "addresses",
            CollectionField::Representatives => "representatives",
            CollectionField::ContactPersons => "contactPersons",
            CollectionField::IndustrialGroups => "industrialGroups",
            CollectionField::CompanyInfo => "companyInfo",
            CollectionField::FinancialInfo => "financialInfo",
            CollectionField::Products => "products",
        }
    }

    pub fn parse_key(value: &str) -> Option<Self> {
        match value {
            "addresses" => Some(CollectionField::Addresses),
            "representatives" => Some(CollectionField::Representatives),
            "contactPersons" | "contact-persons" => Some(CollectionField::ContactPersons),
            "industrialGroups" | "industrial-groups" => Some(CollectionField::IndustrialGroups),
            "companyInfo" | "company-info" => Some(CollectionField::CompanyInfo),
            "financialInfo" | "financial-info" => Some(CollectionField::FinancialInfo),
            "products" => Some(CollectionField::Products),
            _ => None,
        }
    }
}

/// Outcome of a Save call: the uniform result plus, on success, the full
/// updated raw record the normalizer re-runs on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub result: ActionResult,
    pub record: Option<RawApplicationRecord>,
}

/// Failures crossing a collaborator boundary. A rejection and a transport
/// failure are handled identically by the core: full rollback, no partial
/// apply.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("application not found")]
    NotFound,
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Fetch-and-save seam over the application store.
pub trait ApplicationGateway: Send + Sync {
    fn fetch(
        &self,
        membership: MembershipType,
        id: &str,
    ) -> Result<RawApplicationRecord, GatewayError>;

    fn mutate(
        &self,
        membership: MembershipType,
        id: &str,
        field: CollectionField,
        payload: &Value,
    ) -> Result<MutationResponse, GatewayError>;
}

/// Reference data merged into the normalized view for display/selection.
pub trait LookupProvider: Send + Sync {
    fn industrial_groups(&self) -> Result<Vec<LookupOption>, GatewayError>;
    fn provincial_chapters(&self) -> Result<Vec<LookupOption>, GatewayError>;
}

/// Upload payload for the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpload {
    pub record_id: String,
    pub name: String,
    pub content: String,
}

/// File-storage seam, keyed by the identifiers DocumentNormalizer preserves.
pub trait DocumentStore: Send + Sync {
    fn upload(&self, upload: DocumentUpload) -> Result<ActionResult, GatewayError>;
    fn delete(&self, id: &str) -> Result<ActionResult, GatewayError>;
}
