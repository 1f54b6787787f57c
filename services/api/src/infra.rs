//! In-memory collaborators behind the portal's trait seams, plus the shared
//! HTTP state. The gateway ships seeded with one record per legacy schema
//! generation so the service is explorable without a backing store.

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use member_admin::portal::applications::{
    ActionResult, ApplicationGateway, CollectionField, DocumentStore, DocumentUpload,
    GatewayError, LookupOption, LookupProvider, MembershipType, MutationResponse,
    RawApplicationRecord,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{json, Value};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
pub(crate) struct InMemoryApplicationGateway {
    records: Mutex<HashMap<(MembershipType, String), Value>>,
}

impl InMemoryApplicationGateway {
    pub(crate) fn seeded() -> Self {
        let gateway = Self::default();
        {
            let mut guard = gateway.records.lock().expect("gateway mutex poisoned");
            for (membership, id, record) in sample_records() {
                guard.insert((membership, id.to_string()), record);
            }
        }
        gateway
    }
}

impl ApplicationGateway for InMemoryApplicationGateway {
    fn fetch(
        &self,
        membership: MembershipType,
        id: &str,
    ) -> Result<RawApplicationRecord, GatewayError> {
        self.records
            .lock()
            .expect("gateway mutex poisoned")
            .get(&(membership, id.to_string()))
            .cloned()
            .map(RawApplicationRecord::new)
            .ok_or(GatewayError::NotFound)
    }

    fn mutate(
        &self,
        membership: MembershipType,
        id: &str,
        field: CollectionField,
        payload: &Value,
    ) -> Result<MutationResponse, GatewayError> {
        let mut guard = self.records.lock().expect("gateway mutex poisoned");
        let record = guard
            .get_mut(&(membership, id.to_string()))
            .ok_or(GatewayError::NotFound)?;
        record[field.key()] = payload.clone();
        Ok(MutationResponse {
            result: ActionResult::ok(),
            record: Some(RawApplicationRecord::new(record.clone())),
        })
    }
}

/// One record per schema generation: a snake_case company row with a singular
/// representative, and a camelCase trade-association row.
fn sample_records() -> Vec<(MembershipType, &'static str, Value)> {
    vec![
        (
            MembershipType::Company,
            "C-1001",
            json!({
                "member_id": "C-1001",
                "status": "0",
                "company_name_th": "สยามชิ้นส่วนยนต์ จำกัด",
                "company_name_en": "Siam Auto Parts Co., Ltd.",
                "tax_id": "0105538012345",
                "email": "admin@siamautoparts.example",
                "phone_number": "02-555-0134",
                "address_list": [
                    { "address_type": "1", "address": "99 หมู่ 4 นิคมอุตสาหกรรมบางปู", "province": "สมุทรปราการ", "zip_code": "10280" },
                    { "address_type": "3", "address": "99 หมู่ 4 นิคมอุตสาหกรรมบางปู", "province": "สมุทรปราการ", "zip_code": "10280" }
                ],
                "representative": {
                    "prename_th": "นาย",
                    "first_name_th": "ประเสริฐ",
                    "last_name_th": "ตั้งใจ",
                    "position_name": "กรรมการผู้จัดการ",
                    "is_primary": 1
                },
                "business_types": { "manufacturer": true, "exporter": true },
                "industrial_groups": ["7"]
            }),
        ),
        (
            MembershipType::TradeAssociation,
            "T-2001",
            json!({
                "id": "T-2001",
                "statusId": 0,
                "associationNameTh": "สมาคมอุตสาหกรรมแม่พิมพ์",
                "associationNameEn": "Mould Industry Association",
                "representatives": [
                    { "prenameTh": "นาง", "firstNameTh": "วันดี", "lastNameTh": "ก้าวหน้า", "order": 1 },
                    { "prenameTh": "นาย", "firstNameTh": "ชูชาติ", "lastNameTh": "มุ่งมั่น", "order": 2 }
                ],
                "associationContacts": [
                    { "firstNameTh": "อารี", "lastNameTh": "ติดต่อไว", "order": 1 }
                ],
                "businessTypes": [{ "id": "5" }],
                "provincialChapter": "50"
            }),
        ),
    ]
}

pub(crate) struct StaticLookupProvider;

impl LookupProvider for StaticLookupProvider {
    fn industrial_groups(&self) -> Result<Vec<LookupOption>, GatewayError> {
        Ok(options(&[
            ("7", "ยานยนต์"),
            ("12", "ไฟฟ้าและอิเล็กทรอนิกส์"),
            ("21", "แม่พิมพ์"),
            ("34", "อาหารและเครื่องดื่ม"),
        ]))
    }

    fn provincial_chapters(&self) -> Result<Vec<LookupOption>, GatewayError> {
        Ok(options(&[
            ("10", "กรุงเทพมหานคร"),
            ("20", "ชลบุรี"),
            ("50", "เชียงใหม่"),
        ]))
    }
}

fn options(pairs: &[(&str, &str)]) -> Vec<LookupOption> {
    pairs
        .iter()
        .map(|(id, name)| LookupOption {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}

#[derive(Default)]
pub(crate) struct InMemoryDocumentStore {
    files: Mutex<HashMap<String, DocumentUpload>>,
    next_id: Mutex<u64>,
}

impl DocumentStore for InMemoryDocumentStore {
    fn upload(&self, upload: DocumentUpload) -> Result<ActionResult, GatewayError> {
        let mut next_id = self.next_id.lock().expect("id mutex poisoned");
        *next_id += 1;
        let id = format!("doc-{next_id}");
        self.files
            .lock()
            .expect("files mutex poisoned")
            .insert(id, upload);
        Ok(ActionResult::ok())
    }

    fn delete(&self, id: &str) -> Result<ActionResult, GatewayError> {
        self.files.lock().expect("files mutex poisoned").remove(id);
        Ok(ActionResult::ok())
    }
}
