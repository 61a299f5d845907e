use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::advisor::assessment::storage::{ProfileStore, StoreError};
use crate::advisor::assessment::survey::{FieldMutation, MultiValueField, ScalarField};
use crate::advisor::assessment::{assessment_router, AssessmentService, SurveyRecord};

pub(super) fn scalar(field: ScalarField, value: &str) -> FieldMutation {
    FieldMutation::Scalar {
        field,
        value: value.to_string(),
    }
}

pub(super) fn membership(field: MultiValueField, value: &str, selected: bool) -> FieldMutation {
    FieldMutation::Membership {
        field,
        value: value.to_string(),
        selected,
    }
}

pub(super) fn required_only_record() -> SurveyRecord {
    SurveyRecord {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        location: "London".to_string(),
        ..SurveyRecord::default()
    }
}

pub(super) fn filled_record() -> SurveyRecord {
    SurveyRecord {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        location: "London".to_string(),
        role: "Data Engineer".to_string(),
        experience: "2-3".to_string(),
        skills: vec!["Python".to_string(), "SQL".to_string()],
        ai_proficiency: "Intermediate".to_string(),
        ai_tools: vec!["Pandas".to_string()],
        languages: "English, French".to_string(),
        has_projects: "Yes".to_string(),
        project_description: "Churn prediction for a telecom data set".to_string(),
        client_work: "Yes".to_string(),
        interests: vec!["GenAI".to_string()],
        learning_style: "Hands-on projects".to_string(),
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryStore>, MemoryStore) {
    let store = MemoryStore::default();
    let service = AssessmentService::new(Arc::new(store.clone()));
    (service, store)
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<MemoryStore>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub(super) fn seeded(key: &str, payload: &str) -> Self {
        let store = Self::default();
        store
            .values
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), payload.to_string());
        store
    }

    pub(super) fn raw(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned()
    }
}

impl ProfileStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .values
            .lock()
            .expect("store mutex poisoned")
            .get(key)
            .cloned())
    }

    fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.values
            .lock()
            .expect("store mutex poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }
}

pub(super) struct FullStore;

impl ProfileStore for FullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn put(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::QuotaExceeded)
    }
}

pub(super) struct UnavailableStore;

impl ProfileStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }

    fn put(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
