//! Raw application records and the alias-resolution tables used to read them.
//!
//! Rows written by earlier generations of the portal disagree on casing
//! (camelCase vs snake_case), on singular-vs-array shapes, and on field names
//! outright. Every canonical field therefore resolves through an ordered
//! fallback list; the first alias present with a non-null value wins. Missing
//! fields stay `None` — display defaults belong to the presentation layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// As-stored application data. Deliberately schemaless: the alias tables
/// below are the only sanctioned way to read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawApplicationRecord(pub Value);

impl RawApplicationRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// First alias present with a non-null value.
    pub fn field(&self, aliases: &[&str]) -> Option<&Value> {
        pick(&self.0, aliases)
    }

    /// Resolve a field and coerce it to text.
    pub fn text(&self, aliases: &[&str]) -> Option<String> {
        self.field(aliases).and_then(coerce_text)
    }

    /// Resolve a collection-valued field. A legacy singular object is lifted
    /// into a one-element list; missing or null yields an empty list.
    pub fn list(&self, aliases: &[&str]) -> Vec<Value> {
        match self.field(aliases) {
            Some(Value::Array(items)) => items.clone(),
            Some(object @ Value::Object(_)) => vec![object.clone()],
            _ => Vec::new(),
        }
    }
}

/// First alias present (and non-null) on an arbitrary JSON object.
pub(crate) fn pick<'a>(row: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    let object = row.as_object()?;
    aliases
        .iter()
        .find_map(|alias| object.get(*alias).filter(|value| !value.is_null()))
}

/// Alias-resolve and coerce to text in one step.
pub(crate) fn pick_text(row: &Value, aliases: &[&str]) -> Option<String> {
    pick(row, aliases).and_then(coerce_text)
}

/// Truthiness the legacy schemas actually use: `true`, `1`, and `"1"`.
pub(crate) fn pick_flag(row: &Value, aliases: &[&str]) -> bool {
    match pick(row, aliases) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_i64() == Some(1),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            trimmed == "1" || trimmed.eq_ignore_ascii_case("true")
        }
        _ => false,
    }
}

/// Alias-resolve a positive integer stored as a number or numeric string.
pub(crate) fn pick_order(row: &Value, aliases: &[&str]) -> Option<u32> {
    match pick(row, aliases)? {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    }
    .filter(|order| *order > 0)
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Ordered fallback lists, one per canonical field. Order matters: canonical
/// camelCase first, then the snake_case twin, then enumerated historical
/// aliases from retired schema generations.
pub mod alias {
    pub const ID: &[&str] = &["id", "memberId", "member_id", "applicationId", "application_id"];
    pub const STATUS: &[&str] = &["status", "statusId", "status_id", "memberStatus", "member_status"];
    pub const NAME_TH: &[&str] = &[
        "companyNameTh",
        "company_name_th",
        "associationNameTh",
        "association_name_th",
        "nameTh",
        "name_th",
    ];
    pub const NAME_EN: &[&str] = &[
        "companyNameEn",
        "company_name_en",
        "associationNameEn",
        "association_name_en",
        "nameEn",
        "name_en",
    ];
    pub const TAX_ID: &[&str] = &[
        "taxId",
        "tax_id",
        "taxNumber",
        "tax_number",
        "idCardNumber",
        "id_card_number",
    ];
    pub const EMAIL: &[&str] = &["email", "emailAddress", "email_address"];
    pub const PHONE: &[&str] = &["phone", "phoneNumber", "phone_number", "tel", "telephone"];
    pub const WEBSITE: &[&str] = &["website", "webSite", "web_site", "homepage"];

    pub const ADDRESSES: &[&str] = &[
        "addresses",
        "address_list",
        "memberAddresses",
        "member_addresses",
        "address",
    ];
    pub const ADDRESS_TYPE: &[&str] = &["addressType", "address_type", "typeId", "type_id", "type"];
    pub const ADDRESS_LINE: &[&str] = &["address", "addressLine", "address_line", "addressNo", "address_no"];
    pub const SUB_DISTRICT: &[&str] = &["subDistrict", "sub_district", "tambon"];
    pub const DISTRICT: &[&str] = &["district", "amphoe"];
    pub const PROVINCE: &[&str] = &["province", "provinceName", "province_name"];
    pub const POSTAL_CODE: &[&str] = &["postalCode", "postal_code", "zipCode", "zip_code", "zipcode"];

    pub const REPRESENTATIVES: &[&str] = &[
        "representatives",
        "representative_list",
        "memberRepresentatives",
        "member_representatives",
        "representative",
    ];
    pub const CONTACT_PERSONS: &[&str] = &["contactPersons", "contact_persons"];
    pub const CONTACT_PERSON_SINGULAR: &[&str] = &["contactPerson", "contact_person", "coordinator"];

    pub const PRENAME_TH: &[&str] = &["prenameTh", "prename_th", "titleTh", "title_th"];
    pub const PRENAME_EN: &[&str] = &["prenameEn", "prename_en", "titleEn", "title_en"];
    pub const PRENAME_OTHER_TH: &[&str] = &["prenameOtherTh", "prename_other_th", "prenameEtcTh"];
    pub const PRENAME_OTHER_EN: &[&str] = &["prenameOtherEn", "prename_other_en", "prenameEtcEn"];
    pub const FIRST_NAME_TH: &[&str] = &["firstNameTh", "first_name_th", "firstnameTh", "firstname_th"];
    pub const LAST_NAME_TH: &[&str] = &["lastNameTh", "last_name_th", "lastnameTh", "lastname_th"];
    pub const FIRST_NAME_EN: &[&str] = &["firstNameEn", "first_name_en", "firstnameEn", "firstname_en"];
    pub const LAST_NAME_EN: &[&str] = &["lastNameEn", "last_name_en", "lastnameEn", "lastname_en"];
    pub const POSITION: &[&str] = &["position", "positionName", "position_name", "jobTitle", "job_title"];
    pub const PERSON_EMAIL: &[&str] = &["email", "emailAddress", "email_address"];
    pub const PERSON_PHONE: &[&str] = &["phone", "phoneNumber", "phone_number", "tel", "mobile"];
    pub const PHONE_EXT: &[&str] = &["phoneExt", "phone_ext", "telExt", "tel_ext", "extension"];
    pub const IS_PRIMARY: &[&str] = &["isPrimary", "is_primary", "mainContact", "main_contact"];
    pub const ORDER: &[&str] = &["order"];
    pub const REP_ORDER: &[&str] = &["repOrder", "rep_order", "seq", "sequence"];

    pub const BUSINESS_TYPES: &[&str] = &[
        "businessTypes",
        "business_types",
        "businessType",
        "business_type",
        "typeOfBusiness",
        "type_of_business",
    ];
    pub const BUSINESS_TYPE_CODE: &[&str] = &["id", "businessTypeId", "business_type_id", "type", "code"];
    pub const BUSINESS_TYPE_OTHER: &[&str] = &[
        "businessTypeOther",
        "business_type_other",
        "otherBusinessType",
        "other_business_type",
    ];
    pub const OTHER_DETAIL: &[&str] = &["detail", "otherDetail", "other_detail", "name", "text"];
    pub const ROW_OTHER_DETAIL: &[&str] = &["detail", "otherDetail", "other_detail"];
    pub const OTHER_MAIN_ID: &[&str] = &["main_id", "mainId", "id"];

    pub const PRODUCTS: &[&str] = &[
        "products",
        "product_list",
        "memberProducts",
        "member_products",
        "product",
    ];
    pub const PRODUCT_NAME: &[&str] = &["name", "productName", "product_name", "nameTh", "name_th"];
    pub const PRODUCT_DETAIL: &[&str] = &["detail", "description", "desc"];

    pub const DOCUMENTS: &[&str] = &[
        "documents",
        "document_list",
        "memberDocuments",
        "member_documents",
    ];
    pub const SIGNATURE_IMAGES: &[&str] = &[
        "signatureImages",
        "signature_images",
        "signatureAttachments",
        "signature_attachments",
    ];
    pub const DOCUMENT_ID: &[&str] = &["id", "documentId", "document_id"];
    pub const DOCUMENT_RECORD_ID: &[&str] = &["memberId", "member_id", "recordId", "record_id", "main_id"];
    pub const DOCUMENT_STORAGE_ID: &[&str] = &["fileId", "file_id", "storageId", "storage_id", "attachmentId"];
    pub const DOCUMENT_NAME: &[&str] = &["name", "fileName", "file_name", "title"];
    pub const DOCUMENT_URL: &[&str] = &["url", "fileUrl", "file_url", "path"];

    pub const SIGNATORIES: &[&str] = &[
        "signatories",
        "signatory_list",
        "authorizedSignatories",
        "authorized_signatories",
        "signatory",
    ];
    pub const SIGNATORY_NAME: &[&str] = &["name", "fullName", "full_name"];
    pub const SIGNATORY_AUTHORITY: &[&str] = &[
        "authority",
        "signAuthority",
        "sign_authority",
        "signCondition",
        "sign_condition",
    ];
    pub const SIGNATORY_OTHER: &[&str] = &[
        "signConditionOther",
        "sign_condition_other",
        "authorityOther",
        "authority_other",
    ];

    pub const INDUSTRIAL_GROUPS: &[&str] = &[
        "industrialGroups",
        "industrial_groups",
        "industryGroups",
        "industry_groups",
    ];
    pub const PROVINCIAL_CHAPTER: &[&str] = &[
        "provincialChapter",
        "provincial_chapter",
        "provinceChapter",
        "province_chapter",
    ];
    pub const LOOKUP_ID: &[&str] = &["id", "groupId", "group_id", "chapterId", "chapter_id"];
    pub const LOOKUP_NAME: &[&str] = &["name", "groupName", "group_name", "chapterName", "chapter_name"];

    pub const ADMIN_NOTE: &[&str] = &["adminNote", "admin_note", "note", "remark"];
    pub const NOTE_UPDATED_AT: &[&str] = &[
        "noteUpdatedAt",
        "note_updated_at",
        "noteTimestamp",
        "note_timestamp",
    ];
    pub const APPROVED_BY: &[&str] = &["approvedBy", "approved_by", "approverName", "approver_name"];
    pub const MEMBER_CODE: &[&str] = &["memberCode", "member_code", "memberNo", "member_no"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_present_alias_wins() {
        let record = RawApplicationRecord::new(json!({
            "company_name_th": "legacy",
            "associationNameTh": "older",
        }));
        assert_eq!(record.text(alias::NAME_TH).as_deref(), Some("legacy"));
    }

    #[test]
    fn null_aliases_fall_through() {
        let record = RawApplicationRecord::new(json!({
            "companyNameTh": null,
            "associationNameTh": "สมาคม",
        }));
        assert_eq!(record.text(alias::NAME_TH).as_deref(), Some("สมาคม"));
    }

    #[test]
    fn numbers_coerce_to_text() {
        let record = RawApplicationRecord::new(json!({ "taxId": 1234567890 }));
        assert_eq!(record.text(alias::TAX_ID).as_deref(), Some("1234567890"));
    }

    #[test]
    fn singular_rows_lift_to_lists() {
        let record = RawApplicationRecord::new(json!({
            "representative": { "firstNameTh": "สมชาย" }
        }));
        assert_eq!(record.list(alias::REPRESENTATIVES).len(), 1);

        let empty = RawApplicationRecord::new(json!({}));
        assert!(empty.list(alias::REPRESENTATIVES).is_empty());
    }

    #[test]
    fn flags_accept_legacy_truthiness() {
        for value in [json!(true), json!(1), json!("1")] {
            let row = json!({ "is_primary": value });
            assert!(pick_flag(&row, alias::IS_PRIMARY), "value {row}");
        }
        for value in [json!(false), json!(0), json!("0"), json!(null)] {
            let row = json!({ "is_primary": value });
            assert!(!pick_flag(&row, alias::IS_PRIMARY), "value {row}");
        }
    }
}
