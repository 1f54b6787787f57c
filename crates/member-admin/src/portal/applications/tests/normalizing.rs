use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use super::common::{association_record, legacy_company_record};
use crate::portal::applications::normalize::normalize;
use crate::portal::applications::raw::{alias, RawApplicationRecord};
use crate::portal::applications::view::{ApplicationStatus, MembershipType};

fn record(value: Value) -> RawApplicationRecord {
    RawApplicationRecord::new(value)
}

#[test]
fn snake_case_company_name_resolves() {
    let view = normalize(
        &record(json!({ "company_name_th": "ABC" })),
        MembershipType::Company,
    );
    assert_eq!(view.name_th.as_deref(), Some("ABC"));
}

/// Every documented alias of every scalar field must resolve on its own.
#[test]
fn every_scalar_alias_resolves_alone() {
    let table: &[(&[&str], fn(&crate::portal::applications::view::ApplicationView) -> Option<String>)] = &[
        (alias::ID, |view| Some(view.id.clone()).filter(|id| !id.is_empty())),
        (alias::NAME_TH, |view| view.name_th.clone()),
        (alias::NAME_EN, |view| view.name_en.clone()),
        (alias::TAX_ID, |view| view.tax_id.clone()),
        (alias::EMAIL, |view| view.email.clone()),
        (alias::PHONE, |view| view.phone.clone()),
        (alias::WEBSITE, |view| view.website.clone()),
        (alias::ADMIN_NOTE, |view| view.admin_note.clone()),
        (alias::APPROVED_BY, |view| view.approved_by.clone()),
        (alias::MEMBER_CODE, |view| view.member_code.clone()),
    ];

    for (aliases, read) in table {
        for field_name in *aliases {
            let raw = record(json!({ *field_name: "resolved" }));
            let view = normalize(&raw, MembershipType::Company);
            assert_eq!(
                read(&view).as_deref(),
                Some("resolved"),
                "alias '{field_name}' did not resolve"
            );
        }
    }
}

#[test]
fn null_canonical_key_falls_through_to_legacy_aliases() {
    let raw = record(json!({
        "companyNameTh": null,
        "company_name_th": null,
        "associationNameTh": "สมาคมเก่าแก่"
    }));
    let view = normalize(&raw, MembershipType::TradeAssociation);
    assert_eq!(view.name_th.as_deref(), Some("สมาคมเก่าแก่"));
}

#[test]
fn canonical_key_shadows_legacy_aliases() {
    let raw = record(json!({
        "companyNameTh": "canonical",
        "company_name_th": "snake",
        "associationNameTh": "historical"
    }));
    let view = normalize(&raw, MembershipType::Company);
    assert_eq!(view.name_th.as_deref(), Some("canonical"));
}

#[test]
fn missing_fields_stay_empty_without_panicking() {
    let view = normalize(&record(json!({})), MembershipType::Individual);
    assert!(view.id.is_empty());
    assert_eq!(view.status, ApplicationStatus::Pending);
    assert!(view.name_th.is_none());
    assert!(view.addresses.is_empty());
    assert!(view.representatives.is_empty());
    assert!(view.contact_persons.is_empty());
    assert!(view.documents.is_empty());
    assert!(view.note_updated_at.is_none());

    // A scalar where a record was expected must not panic either.
    let view = normalize(&record(json!("garbage")), MembershipType::Company);
    assert!(view.id.is_empty());
}

#[test]
fn numeric_and_string_status_codes_map() {
    for (stored, expected) in [
        (json!(0), ApplicationStatus::Pending),
        (json!(1), ApplicationStatus::Approved),
        (json!("2"), ApplicationStatus::Rejected),
        (json!(4), ApplicationStatus::Resubmitted),
        (json!("4"), ApplicationStatus::Resubmitted),
        (json!("unexpected"), ApplicationStatus::Pending),
        (json!(3), ApplicationStatus::Pending),
    ] {
        let view = normalize(&record(json!({ "status": stored })), MembershipType::Company);
        assert_eq!(view.status, expected, "stored {stored:?}");
    }
}

#[test]
fn admin_metadata_is_carried_over() {
    let view = normalize(&record(legacy_company_record()), MembershipType::Company);
    assert_eq!(view.admin_note.as_deref(), Some("รอเอกสารเพิ่มเติม"));
    assert_eq!(
        view.note_updated_at,
        Some(Utc.with_ymd_and_hms(2024, 11, 2, 8, 30, 0).unwrap())
    );

    let view = normalize(&record(association_record()), MembershipType::TradeAssociation);
    assert_eq!(view.approved_by.as_deref(), Some("admin01"));
    assert_eq!(view.member_code.as_deref(), Some("TA-0077"));
}

#[test]
fn legacy_timestamp_format_parses_too() {
    let view = normalize(
        &record(json!({ "note_timestamp": "2023-05-17 14:00:00" })),
        MembershipType::Company,
    );
    assert_eq!(
        view.note_updated_at,
        Some(Utc.with_ymd_and_hms(2023, 5, 17, 14, 0, 0).unwrap())
    );
}

#[test]
fn bare_id_group_selections_are_kept() {
    let view = normalize(&record(legacy_company_record()), MembershipType::Company);
    assert_eq!(view.industrial_groups.len(), 1);
    assert_eq!(view.industrial_groups[0].id, "7");
}

#[test]
fn normalization_is_pure() {
    let raw = record(association_record());
    let first = normalize(&raw, MembershipType::TradeAssociation);
    let second = normalize(&raw, MembershipType::TradeAssociation);
    assert_eq!(first, second);
}
