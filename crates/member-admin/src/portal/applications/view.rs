use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four membership tracks the portal reviews. Each is persisted under its
/// own historical schema, so the slug doubles as the routing key toward the
/// backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MembershipType {
    Individual,
    Company,
    CorporateAssociate,
    TradeAssociation,
}

impl MembershipType {
    pub const fn slug(self) -> &'static str {
        match self {
            MembershipType::Individual => "individual",
            MembershipType::Company => "company",
            MembershipType::CorporateAssociate => "corporate-associate",
            MembershipType::TradeAssociation => "trade-association",
        }
    }

    pub fn parse_slug(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "individual" => Some(MembershipType::Individual),
            "company" | "factory" => Some(MembershipType::Company),
            "corporate-associate" | "corporate_associate" => Some(MembershipType::CorporateAssociate),
            "trade-association" | "trade_association" => Some(MembershipType::TradeAssociation),
            _ => None,
        }
    }
}

/// Review status of an application. Raw rows store these as the numeric codes
/// 0/1/2/4, the string forms of those codes, or occasionally the lowercase
/// names; anything unrecognized is treated as still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    Resubmitted,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Resubmitted => "resubmitted",
        }
    }

    pub fn from_code(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "approved" => ApplicationStatus::Approved,
            "2" | "rejected" => ApplicationStatus::Rejected,
            "4" | "resubmitted" => ApplicationStatus::Resubmitted,
            _ => ApplicationStatus::Pending,
        }
    }
}

/// Canonical, normalized read model of one membership application. Recomputed
/// fresh from the raw record on every fetch; editors own copies of individual
/// slices, never this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationView {
    pub id: String,
    pub membership_type: MembershipType,
    pub status: ApplicationStatus,
    pub name_th: Option<String>,
    pub name_en: Option<String>,
    pub tax_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub addresses: Vec<AddressView>,
    pub representatives: Vec<PersonView>,
    pub contact_persons: Vec<PersonView>,
    pub business_types: Vec<BusinessTypeTag>,
    pub products: Vec<ProductView>,
    pub documents: Vec<DocumentView>,
    pub signatories: Vec<SignatoryView>,
    pub industrial_groups: Vec<LookupOption>,
    pub provincial_chapter: Option<LookupOption>,
    pub admin_note: Option<String>,
    pub note_updated_at: Option<DateTime<Utc>>,
    pub approved_by: Option<String>,
    pub member_code: Option<String>,
}

/// Address classification. Codes 1..3 are the documented kinds; anything else
/// is preserved verbatim so legacy rows never lose information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressKind {
    Office,
    Mailing,
    TaxInvoice,
    Other(String),
}

impl AddressKind {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => AddressKind::Office,
            "2" => AddressKind::Mailing,
            "3" => AddressKind::TaxInvoice,
            other => AddressKind::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> String {
        match self {
            AddressKind::Office => "1".to_string(),
            AddressKind::Mailing => "2".to_string(),
            AddressKind::TaxInvoice => "3".to_string(),
            AddressKind::Other(code) => code.clone(),
        }
    }

    /// Ordering key: numeric codes sort ascending ahead of free-form labels.
    pub(crate) fn sort_key(&self) -> (u8, u32, String) {
        let code = self.code();
        match code.parse::<u32>() {
            Ok(number) => (0, number, String::new()),
            Err(_) => (1, 0, code),
        }
    }
}

/// One postal address of an application, at most one per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressView {
    #[serde(default)]
    pub kind: AddressKind,
    pub address: Option<String>,
    pub sub_district: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Default for AddressKind {
    fn default() -> Self {
        AddressKind::Office
    }
}

/// A representative or contact person. `order` is 1-based and `is_primary`
/// is positional: whenever the collection is non-empty, exactly the entry at
/// index 0 carries the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonView {
    #[serde(default)]
    pub prename_th: String,
    #[serde(default)]
    pub prename_en: String,
    #[serde(default)]
    pub prename_other_th: String,
    #[serde(default)]
    pub prename_other_en: String,
    #[serde(default)]
    pub first_name_th: String,
    #[serde(default)]
    pub last_name_th: String,
    #[serde(default)]
    pub first_name_en: String,
    #[serde(default)]
    pub last_name_en: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub phone_ext: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub is_primary: bool,
}

/// Editable person fields, keyed the way the canonical wire model spells
/// them. The key strings are also the keys of validation error maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    PrenameTh,
    PrenameEn,
    PrenameOtherTh,
    PrenameOtherEn,
    FirstNameTh,
    LastNameTh,
    FirstNameEn,
    LastNameEn,
    Position,
    Email,
    Phone,
    PhoneExt,
}

impl PersonField {
    pub const fn key(self) -> &'static str {
        match self {
            PersonField::PrenameTh => "prenameTh",
            PersonField::PrenameEn => "prenameEn",
            PersonField::PrenameOtherTh => "prenameOtherTh",
            PersonField::PrenameOtherEn => "prenameOtherEn",
            PersonField::FirstNameTh => "firstNameTh",
            PersonField::LastNameTh => "lastNameTh",
            PersonField::FirstNameEn => "firstNameEn",
            PersonField::LastNameEn => "lastNameEn",
            PersonField::Position => "position",
            PersonField::Email => "email",
            PersonField::Phone => "phone",
            PersonField::PhoneExt => "phoneExt",
        }
    }
}

/// Line-of-business tag. The `Other` variant carries the free-text detail the
/// applicant supplied alongside the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum BusinessTypeTag {
    Manufacturer,
    Distributor,
    Exporter,
    Importer,
    Service,
    Other { detail: Option<String> },
}

/// One product or service line the applicant declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub name: String,
    pub detail: Option<String>,
}

/// Where a document row came from; the two physical collections are merged
/// into one list for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    General,
    SignatureImage,
}

/// One uploaded document. The three identifiers are preserved exactly as
/// stored because the delete/replace contract is keyed by them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: Option<String>,
    pub record_id: Option<String>,
    pub storage_id: Option<String>,
    pub name: String,
    pub kind: DocumentKind,
    pub url: Option<String>,
}

/// How signing authority is exercised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SignatoryAuthority {
    Single,
    Joint,
    Other { detail: Option<String> },
}

/// One authorized signatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatoryView {
    pub name: String,
    pub position: Option<String>,
    pub authority: SignatoryAuthority,
}

/// Reference-data option returned by the lookup contracts and merged into the
/// normalized view for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub id: String,
    pub name: String,
}
