//! Address normalization. Rows arrive with independent camelCase/snake_case
//! variance per field and occasionally duplicate kinds; the output is
//! deduplicated (first row per kind wins) and sorted ascending by kind code
//! so the UI ordering is deterministic.

use serde_json::Value;

use super::super::raw::{alias, pick_text, RawApplicationRecord};
use super::super::view::{AddressKind, AddressView};

pub fn normalize_all_addresses(raw: &RawApplicationRecord) -> Vec<AddressView> {
    let mut addresses: Vec<AddressView> = Vec::new();
    for row in raw.list(alias::ADDRESSES) {
        let view = address_from_row(&row);
        if addresses.iter().any(|existing| existing.kind == view.kind) {
            continue;
        }
        addresses.push(view);
    }
    addresses.sort_by_key(|address| address.kind.sort_key());
    addresses
}

/// Resolve one best address with the fixed precedence Mailing > Office >
/// TaxInvoice > first-available.
pub fn normalize_address(raw: &RawApplicationRecord) -> Option<AddressView> {
    let addresses = normalize_all_addresses(raw);
    for kind in [AddressKind::Mailing, AddressKind::Office, AddressKind::TaxInvoice] {
        if let Some(address) = addresses.iter().find(|address| address.kind == kind) {
            return Some(address.clone());
        }
    }
    addresses.into_iter().next()
}

fn address_from_row(row: &Value) -> AddressView {
    // A row with no resolvable kind lands in its own empty-code bucket; it
    // must not shadow a typed row through the per-kind dedupe.
    let kind = pick_text(row, alias::ADDRESS_TYPE)
        .map(|code| AddressKind::from_code(&code))
        .unwrap_or(AddressKind::Other(String::new()));

    AddressView {
        kind,
        address: pick_text(row, alias::ADDRESS_LINE),
        sub_district: pick_text(row, alias::SUB_DISTRICT),
        district: pick_text(row, alias::DISTRICT),
        province: pick_text(row, alias::PROVINCE),
        postal_code: pick_text(row, alias::POSTAL_CODE),
        phone: pick_text(row, alias::PHONE),
        email: pick_text(row, alias::EMAIL),
    }
}
