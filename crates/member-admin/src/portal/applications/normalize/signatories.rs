//! Signatory normalization: each row carries a tagged signing-authority
//! condition whose "other" variant correlates with a separately stored detail
//! field, shaped like the business-type one.

use serde_json::Value;

use super::super::raw::{alias, pick_text, RawApplicationRecord};
use super::super::view::{SignatoryAuthority, SignatoryView};
use super::business::resolve_other_detail;

pub fn normalize_signatories(raw: &RawApplicationRecord) -> Vec<SignatoryView> {
    raw.list(alias::SIGNATORIES)
        .iter()
        .filter_map(|row| signatory_from_row(raw, row))
        .collect()
}

fn signatory_from_row(raw: &RawApplicationRecord, row: &Value) -> Option<SignatoryView> {
    let name = pick_text(row, alias::SIGNATORY_NAME).or_else(|| joined_name(row))?;
    Some(SignatoryView {
        name,
        position: pick_text(row, alias::POSITION),
        authority: authority_from_row(raw, row),
    })
}

fn joined_name(row: &Value) -> Option<String> {
    let first = pick_text(row, alias::FIRST_NAME_TH);
    let last = pick_text(row, alias::LAST_NAME_TH);
    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{first} {last}")),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

fn authority_from_row(raw: &RawApplicationRecord, row: &Value) -> SignatoryAuthority {
    let code = pick_text(row, alias::SIGNATORY_AUTHORITY).unwrap_or_default();
    match code.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "single" => SignatoryAuthority::Single,
        "2" | "joint" => SignatoryAuthority::Joint,
        _ => {
            let key = pick_text(row, alias::OTHER_MAIN_ID);
            let detail = pick_text(row, alias::ROW_OTHER_DETAIL)
                .or_else(|| resolve_other_detail(raw, alias::SIGNATORY_OTHER, key.as_deref()));
            SignatoryAuthority::Other { detail }
        }
    }
}
