//! Duplicate-name and cross-field validation for editable person
//! collections. Pure and synchronous; editors re-run it after every mutation.

use std::collections::BTreeMap;

use super::view::{PersonField, PersonView};

/// Field key → message for one collection entry. An absent key means the
/// field has no problem.
pub type FieldErrors = BTreeMap<String, String>;

const MSG_DUPLICATE_TH: &str = "ชื่อ-นามสกุล (ไทย) ซ้ำกับรายการอื่น";
const MSG_DUPLICATE_EN: &str = "Duplicate English first/last name";
const MSG_REQUIRED_FIRST_TH: &str = "กรุณาระบุชื่อ (ไทย)";
const MSG_REQUIRED_LAST_TH: &str = "กรุณาระบุนามสกุล (ไทย)";
const MSG_EMAIL: &str = "Email must look like local@domain.tld";
const MSG_PHONE: &str = "Phone must be 9-10 digits";

/// Validate a person collection, returning one error map per entry, aligned
/// by index.
pub fn validate_people(entries: &[PersonView]) -> Vec<FieldErrors> {
    let mut errors: Vec<FieldErrors> = vec![FieldErrors::new(); entries.len()];

    flag_duplicates(
        entries,
        &mut errors,
        |person| (&person.first_name_th, &person.last_name_th),
        PersonField::FirstNameTh,
        PersonField::LastNameTh,
        MSG_DUPLICATE_TH,
    );
    flag_duplicates(
        entries,
        &mut errors,
        |person| (&person.first_name_en, &person.last_name_en),
        PersonField::FirstNameEn,
        PersonField::LastNameEn,
        MSG_DUPLICATE_EN,
    );

    for (person, entry_errors) in entries.iter().zip(errors.iter_mut()) {
        if person.first_name_th.trim().is_empty() {
            entry_errors.insert(
                PersonField::FirstNameTh.key().to_string(),
                MSG_REQUIRED_FIRST_TH.to_string(),
            );
        }
        if person.last_name_th.trim().is_empty() {
            entry_errors.insert(
                PersonField::LastNameTh.key().to_string(),
                MSG_REQUIRED_LAST_TH.to_string(),
            );
        }
        if !person.email.trim().is_empty() && !email_is_valid(&person.email) {
            entry_errors.insert(PersonField::Email.key().to_string(), MSG_EMAIL.to_string());
        }
        if !person.phone.trim().is_empty() && !phone_is_valid(&person.phone) {
            entry_errors.insert(PersonField::Phone.key().to_string(), MSG_PHONE.to_string());
        }
    }

    errors
}

/// Whether any entry carries a Save-blocking violation. Duplicate-name and
/// required-field problems block; email/phone format problems are advisory
/// and the final blocking decision on those belongs to the caller.
pub fn has_blocking_errors(errors: &[FieldErrors]) -> bool {
    errors.iter().any(|entry| {
        entry
            .keys()
            .any(|key| key != PersonField::Email.key() && key != PersonField::Phone.key())
    })
}

fn flag_duplicates<'a, F>(
    entries: &'a [PersonView],
    errors: &mut [FieldErrors],
    names: F,
    first_field: PersonField,
    last_field: PersonField,
    message: &str,
) where
    F: Fn(&'a PersonView) -> (&'a String, &'a String),
{
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (index, person) in entries.iter().enumerate() {
        let (first, last) = names(person);
        let key = format!("{}|{}", normalize_name(first), normalize_name(last));
        // Entirely blank names are an incompleteness problem, not a duplicate.
        if key == "|" {
            continue;
        }
        groups.entry(key).or_default().push(index);
    }

    for indices in groups.values().filter(|indices| indices.len() >= 2) {
        for &index in indices {
            errors[index].insert(first_field.key().to_string(), message.to_string());
            errors[index].insert(last_field.key().to_string(), message.to_string());
        }
    }
}

fn normalize_name(value: &str) -> String {
    value.trim().to_lowercase()
}

fn email_is_valid(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && !tld.is_empty()
}

fn phone_is_valid(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| *c != ' ' && *c != '-').collect();
    (9..=10).contains(&digits.chars().count()) && digits.chars().all(|c| c.is_ascii_digit())
}
