//! Composition of the sub-normalizers into one canonical [`ApplicationView`].
//!
//! `normalize` is pure and total: it never fails on missing or misshapen
//! data, it only leaves fields empty. Shape ambiguity between schema
//! generations is resolved silently through the alias tables in `raw`.

mod address;
mod business;
mod documents;
mod people;
mod signatories;

pub use address::{normalize_address, normalize_all_addresses};
pub use business::{normalize_business_types, normalize_products};
pub use documents::normalize_documents;
pub use people::{normalize_contact_persons, normalize_representatives, renumber};
pub use signatories::normalize_signatories;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use super::raw::{alias, pick_text, RawApplicationRecord};
use super::view::{ApplicationStatus, ApplicationView, LookupOption, MembershipType};

pub fn normalize(raw: &RawApplicationRecord, membership: MembershipType) -> ApplicationView {
    let representatives = normalize_representatives(raw);
    let contact_persons = normalize_contact_persons(raw, membership, &representatives);

    ApplicationView {
        id: raw.text(alias::ID).unwrap_or_default(),
        membership_type: membership,
        status: raw
            .text(alias::STATUS)
            .map(|code| ApplicationStatus::from_code(&code))
            .unwrap_or(ApplicationStatus::Pending),
        name_th: raw.text(alias::NAME_TH),
        name_en: raw.text(alias::NAME_EN),
        tax_id: raw.text(alias::TAX_ID),
        email: raw.text(alias::EMAIL),
        phone: raw.text(alias::PHONE),
        website: raw.text(alias::WEBSITE),
        addresses: normalize_all_addresses(raw),
        representatives,
        contact_persons,
        business_types: normalize_business_types(raw),
        products: normalize_products(raw),
        documents: normalize_documents(raw),
        signatories: normalize_signatories(raw),
        industrial_groups: lookup_selections(raw.field(alias::INDUSTRIAL_GROUPS)),
        provincial_chapter: raw
            .field(alias::PROVINCIAL_CHAPTER)
            .and_then(lookup_selection),
        admin_note: raw.text(alias::ADMIN_NOTE),
        note_updated_at: raw.text(alias::NOTE_UPDATED_AT).and_then(|text| parse_timestamp(&text)),
        approved_by: raw.text(alias::APPROVED_BY),
        member_code: raw.text(alias::MEMBER_CODE),
    }
}

fn lookup_selections(value: Option<&Value>) -> Vec<LookupOption> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(lookup_selection).collect(),
        Some(single) => lookup_selection(single).into_iter().collect(),
        None => Vec::new(),
    }
}

/// Selections are stored either as `{id, name}` rows or as bare ids; names
/// are filled in later from the lookup contract when only the id survived.
fn lookup_selection(value: &Value) -> Option<LookupOption> {
    match value {
        Value::Object(_) => {
            let id = pick_text(value, alias::LOOKUP_ID)?;
            Some(LookupOption {
                id,
                name: pick_text(value, alias::LOOKUP_NAME).unwrap_or_default(),
            })
        }
        Value::String(id) => {
            let id = id.trim();
            (!id.is_empty()).then(|| LookupOption {
                id: id.to_string(),
                name: String::new(),
            })
        }
        Value::Number(id) => Some(LookupOption {
            id: id.to_string(),
            name: String::new(),
        }),
        _ => None,
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
