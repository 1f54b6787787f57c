//! Representative and contact-person normalization.
//!
//! Legacy rows disagree on where these people live and how the primary entry
//! is marked, so `is_primary` is always recomputed and never taken at face
//! value, and the position-0-is-primary invariant is re-established through
//! the shared [`renumber`] function.

use serde_json::Value;

use super::super::raw::{alias, pick_flag, pick_order, pick_text, RawApplicationRecord};
use super::super::view::{MembershipType, PersonView};

/// Re-establish the structural invariants of a person collection: contiguous
/// 1-based `order` and `is_primary` exactly at index 0. Every structural
/// mutation in the portal funnels through here.
pub fn renumber(entries: &mut [PersonView]) {
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.order = index as u32 + 1;
        entry.is_primary = index == 0;
    }
}

pub fn normalize_representatives(raw: &RawApplicationRecord) -> Vec<PersonView> {
    arrange(collect_people(raw.list(alias::REPRESENTATIVES)))
}

/// Contact persons resolve through an ordered source-of-truth search; the
/// first non-empty source wins and sources are never merged.
pub fn normalize_contact_persons(
    raw: &RawApplicationRecord,
    membership: MembershipType,
    representatives: &[PersonView],
) -> Vec<PersonView> {
    let mut sources: Vec<&[&str]> = vec![alias::CONTACT_PERSONS];
    if let Some(table) = type_specific_contacts(membership) {
        sources.push(table);
    }
    sources.push(alias::CONTACT_PERSON_SINGULAR);

    for source in sources {
        let rows = raw.list(source);
        if !rows.is_empty() {
            return arrange(collect_people(rows));
        }
    }

    representatives.to_vec()
}

/// Historical per-type contact tables that predate the unified
/// `contactPersons` array.
fn type_specific_contacts(membership: MembershipType) -> Option<&'static [&'static str]> {
    match membership {
        MembershipType::Company => Some(&[
            "companyContacts",
            "company_contacts",
            "factoryContacts",
            "factory_contacts",
        ]),
        MembershipType::CorporateAssociate => Some(&["corporateContacts", "corporate_contacts"]),
        MembershipType::TradeAssociation => Some(&["associationContacts", "association_contacts"]),
        MembershipType::Individual => None,
    }
}

fn collect_people(rows: Vec<Value>) -> Vec<(PersonView, Option<u32>, bool)> {
    rows.iter().map(person_from_row).collect()
}

/// Sort by resolved order (unknown orders keep their relative position at the
/// end), promote the first recomputed-primary entry, then renumber.
fn arrange(mut people: Vec<(PersonView, Option<u32>, bool)>) -> Vec<PersonView> {
    people.sort_by_key(|(_, order, _)| order.unwrap_or(u32::MAX));
    if let Some(position) = people.iter().position(|(_, _, primary)| *primary) {
        let primary = people.remove(position);
        people.insert(0, primary);
    }
    let mut entries: Vec<PersonView> = people.into_iter().map(|(person, _, _)| person).collect();
    renumber(&mut entries);
    entries
}

fn person_from_row(row: &Value) -> (PersonView, Option<u32>, bool) {
    // Three-way order fallback: explicit -> legacy rep_order -> derived from
    // the primary flag.
    let explicit_order = pick_order(row, alias::ORDER).or_else(|| pick_order(row, alias::REP_ORDER));
    let flagged_primary = pick_flag(row, alias::IS_PRIMARY);
    let order = explicit_order.or(if flagged_primary { Some(1) } else { None });
    let is_primary = flagged_primary || order == Some(1);

    let text = |aliases| pick_text(row, aliases).unwrap_or_default();
    let person = PersonView {
        prename_th: text(alias::PRENAME_TH),
        prename_en: text(alias::PRENAME_EN),
        prename_other_th: text(alias::PRENAME_OTHER_TH),
        prename_other_en: text(alias::PRENAME_OTHER_EN),
        first_name_th: text(alias::FIRST_NAME_TH),
        last_name_th: text(alias::LAST_NAME_TH),
        first_name_en: text(alias::FIRST_NAME_EN),
        last_name_en: text(alias::LAST_NAME_EN),
        position: text(alias::POSITION),
        email: text(alias::PERSON_EMAIL),
        phone: text(alias::PERSON_PHONE),
        phone_ext: text(alias::PHONE_EXT),
        order: order.unwrap_or(0),
        is_primary,
    };
    (person, explicit_order, is_primary)
}
