//! Business-type and product normalization, including the correlation of
//! "other" tags with their independently shaped detail field.

use serde_json::Value;

use super::super::raw::{alias, pick, pick_text, RawApplicationRecord};
use super::super::view::{BusinessTypeTag, ProductView};

pub fn normalize_business_types(raw: &RawApplicationRecord) -> Vec<BusinessTypeTag> {
    match raw.field(alias::BUSINESS_TYPES) {
        Some(Value::Array(rows)) => rows
            .iter()
            .filter_map(|row| tag_from_row(raw, row))
            .collect(),
        Some(Value::Object(flags)) => flags
            .iter()
            .filter(|(_, value)| truthy(value))
            .filter_map(|(key, _)| tag_from_key(raw, key))
            .collect(),
        Some(single @ Value::String(_)) => coerce_code(single)
            .and_then(|code| tag_from_code(raw, &code, None))
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

fn tag_from_row(raw: &RawApplicationRecord, row: &Value) -> Option<BusinessTypeTag> {
    match row {
        Value::Object(_) => {
            let code = pick_text(row, alias::BUSINESS_TYPE_CODE)?;
            let row_detail = pick_text(row, alias::ROW_OTHER_DETAIL);
            let key = pick_text(row, alias::OTHER_MAIN_ID);
            tag_from_code_with(raw, &code, row_detail, key.as_deref())
        }
        other => tag_from_code(raw, &coerce_code(other)?, None),
    }
}

fn tag_from_code(raw: &RawApplicationRecord, code: &str, key: Option<&str>) -> Option<BusinessTypeTag> {
    tag_from_code_with(raw, code, None, key)
}

fn tag_from_code_with(
    raw: &RawApplicationRecord,
    code: &str,
    row_detail: Option<String>,
    key: Option<&str>,
) -> Option<BusinessTypeTag> {
    match code.trim().to_ascii_lowercase().as_str() {
        "1" | "manufacturer" => Some(BusinessTypeTag::Manufacturer),
        "2" | "distributor" | "trader" => Some(BusinessTypeTag::Distributor),
        "3" | "exporter" => Some(BusinessTypeTag::Exporter),
        "4" | "importer" => Some(BusinessTypeTag::Importer),
        "5" | "service" | "serviceprovider" | "service_provider" => Some(BusinessTypeTag::Service),
        "6" | "other" => Some(BusinessTypeTag::Other {
            detail: row_detail
                .or_else(|| resolve_other_detail(raw, alias::BUSINESS_TYPE_OTHER, key)),
        }),
        _ => None,
    }
}

fn tag_from_key(raw: &RawApplicationRecord, key: &str) -> Option<BusinessTypeTag> {
    tag_from_code(raw, key, None)
}

/// Resolve the separately stored "other" detail, which may be a bare string,
/// an object with a detail field, or an id-keyed array correlated by
/// `main_id`.
pub(crate) fn resolve_other_detail(
    raw: &RawApplicationRecord,
    field_aliases: &[&str],
    key: Option<&str>,
) -> Option<String> {
    match raw.field(field_aliases)? {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        object @ Value::Object(_) => pick_text(object, alias::OTHER_DETAIL),
        Value::Array(items) => {
            let key = key?;
            items
                .iter()
                .find(|item| {
                    pick(item, alias::OTHER_MAIN_ID)
                        .map(|id| coerce_code(id).as_deref() == Some(key))
                        .unwrap_or(false)
                })
                .and_then(|item| pick_text(item, alias::OTHER_DETAIL))
        }
        _ => None,
    }
}

pub fn normalize_products(raw: &RawApplicationRecord) -> Vec<ProductView> {
    raw.list(alias::PRODUCTS)
        .iter()
        .filter_map(|row| {
            let name = pick_text(row, alias::PRODUCT_NAME)?;
            Some(ProductView {
                name,
                detail: pick_text(row, alias::PRODUCT_DETAIL),
            })
        })
        .collect()
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_i64() == Some(1),
        Value::String(text) => text.trim() == "1" || text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn coerce_code(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
