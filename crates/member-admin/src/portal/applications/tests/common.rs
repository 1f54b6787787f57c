use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::portal::applications::contracts::{
    ActionResult, ApplicationGateway, CollectionField, DocumentStore, DocumentUpload,
    GatewayError, LookupProvider, MutationResponse,
};
use crate::portal::applications::raw::RawApplicationRecord;
use crate::portal::applications::service::AdminPortalService;
use crate::portal::applications::view::{LookupOption, MembershipType};

/// A company application as the oldest schema generation stored it:
/// snake_case fields, a singular representative, and boolean business types.
pub(super) fn legacy_company_record() -> Value {
    json!({
        "member_id": "C-1024",
        "status": "0",
        "company_name_th": "อุตสาหกรรมไทยจำกัด",
        "company_name_en": "Thai Industries Co., Ltd.",
        "tax_id": "0105543210987",
        "email": "contact@thai-industries.example",
        "phone_number": "02-123-4567",
        "address_list": [
            { "address_type": "3", "province": "กรุงเทพมหานคร", "postal_code": "10110" },
            { "address_type": "1", "address": "88/1 ถนนพระราม 4", "province": "กรุงเทพมหานคร" }
        ],
        "representative": {
            "prename_th": "นาย",
            "first_name_th": "สมชาย",
            "last_name_th": "ใจดี",
            "position_name": "กรรมการผู้จัดการ",
            "is_primary": 1
        },
        "business_types": { "manufacturer": true, "exporter": true, "other": false },
        "member_documents": [
            { "id": "d-1", "member_id": "C-1024", "file_id": "f-900", "file_name": "หนังสือรับรอง.pdf" }
        ],
        "signature_images": [
            { "documentId": "d-9", "record_id": "C-1024", "storageId": "f-901", "title": "ลายเซ็น" }
        ],
        "industrial_groups": ["7"],
        "admin_note": "รอเอกสารเพิ่มเติม",
        "note_updated_at": "2024-11-02T08:30:00Z"
    })
}

/// A trade-association application in the mid-generation schema: camelCase
/// arrays, rep_order numbering, tagged business types with a detail table.
pub(super) fn association_record() -> Value {
    json!({
        "id": "T-77",
        "statusId": 1,
        "associationNameTh": "สมาคมผู้ผลิตชิ้นส่วน",
        "associationNameEn": "Parts Makers Association",
        "representatives": [
            {
                "prenameTh": "นางสาว",
                "firstNameTh": "สมหญิง",
                "lastNameTh": "รักดี",
                "rep_order": 2,
                "email": "somying@example.org"
            },
            {
                "prenameTh": "นาย",
                "firstNameTh": "สมศักดิ์",
                "lastNameTh": "มั่นคง",
                "rep_order": 1,
                "phone": "081-234-5678"
            }
        ],
        "associationContacts": [
            { "firstNameTh": "วิชัย", "lastNameTh": "ประสานงาน", "order": 1 }
        ],
        "businessTypes": [
            { "id": "1" },
            { "id": "6", "type": "other" }
        ],
        "business_type_other": [
            { "main_id": "6", "detail": "รับจ้างประกอบ" }
        ],
        "signatories": [
            { "name": "สมศักดิ์ มั่นคง", "position": "นายกสมาคม", "sign_condition": "2" }
        ],
        "approved_by": "admin01",
        "member_code": "TA-0077"
    })
}

#[derive(Default)]
pub(super) struct MemoryGateway {
    records: Mutex<HashMap<(MembershipType, String), Value>>,
    pub(super) mutations: Mutex<Vec<CollectionField>>,
}

impl MemoryGateway {
    pub(super) fn seeded(membership: MembershipType, id: &str, record: Value) -> Self {
        let gateway = Self::default();
        gateway
            .records
            .lock()
            .expect("gateway mutex poisoned")
            .insert((membership, id.to_string()), record);
        gateway
    }
}

impl ApplicationGateway for MemoryGateway {
    fn fetch(
        &self,
        membership: MembershipType,
        id: &str,
    ) -> Result<RawApplicationRecord, GatewayError> {
        let guard = self.records.lock().expect("gateway mutex poisoned");
        guard
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
        self.mutations
            .lock()
            .expect("mutations mutex poisoned")
            .push(field);
        Ok(MutationResponse {
            result: ActionResult::ok(),
            record: Some(RawApplicationRecord::new(record.clone())),
        })
    }
}

/// Gateway whose Save contract always comes back `success:false`.
pub(super) struct RejectingGateway {
    pub(super) inner: MemoryGateway,
}

impl ApplicationGateway for RejectingGateway {
    fn fetch(
        &self,
        membership: MembershipType,
        id: &str,
    ) -> Result<RawApplicationRecord, GatewayError> {
        self.inner.fetch(membership, id)
    }

    fn mutate(
        &self,
        _membership: MembershipType,
        _id: &str,
        _field: CollectionField,
        _payload: &Value,
    ) -> Result<MutationResponse, GatewayError> {
        Ok(MutationResponse {
            result: ActionResult::failed("record version conflict"),
            record: None,
        })
    }
}

#[derive(Default)]
pub(super) struct StaticLookups;

impl LookupProvider for StaticLookups {
    fn industrial_groups(&self) -> Result<Vec<LookupOption>, GatewayError> {
        Ok(vec![
            LookupOption { id: "7".to_string(), name: "ยานยนต์".to_string() },
            LookupOption { id: "12".to_string(), name: "ไฟฟ้าและอิเล็กทรอนิกส์".to_string() },
        ])
    }

    fn provincial_chapters(&self) -> Result<Vec<LookupOption>, GatewayError> {
        Ok(vec![LookupOption { id: "50".to_string(), name: "เชียงใหม่".to_string() }])
    }
}

pub(super) struct FailingLookups;

impl LookupProvider for FailingLookups {
    fn industrial_groups(&self) -> Result<Vec<LookupOption>, GatewayError> {
        Err(GatewayError::Transport("lookup service offline".to_string()))
    }

    fn provincial_chapters(&self) -> Result<Vec<LookupOption>, GatewayError> {
        Err(GatewayError::Transport("lookup service offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryDocuments {
    pub(super) uploads: Mutex<Vec<DocumentUpload>>,
    pub(super) deleted: Mutex<Vec<String>>,
}

impl DocumentStore for MemoryDocuments {
    fn upload(&self, upload: DocumentUpload) -> Result<ActionResult, GatewayError> {
        self.uploads
            .lock()
            .expect("uploads mutex poisoned")
            .push(upload);
        Ok(ActionResult::ok())
    }

    fn delete(&self, id: &str) -> Result<ActionResult, GatewayError> {
        self.deleted
            .lock()
            .expect("deleted mutex poisoned")
            .push(id.to_string());
        Ok(ActionResult::ok())
    }
}

pub(super) type TestService<G = MemoryGateway, L = StaticLookups> =
    AdminPortalService<G, L, MemoryDocuments>;

pub(super) fn build_service(
    membership: MembershipType,
    id: &str,
    record: Value,
) -> (Arc<TestService>, Arc<MemoryGateway>, Arc<MemoryDocuments>) {
    let gateway = Arc::new(MemoryGateway::seeded(membership, id, record));
    let documents = Arc::new(MemoryDocuments::default());
    let service = Arc::new(AdminPortalService::new(
        gateway.clone(),
        Arc::new(StaticLookups),
        documents.clone(),
    ));
    (service, gateway, documents)
}
