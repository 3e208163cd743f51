#![allow(dead_code)]

use async_trait::async_trait;
use aws_lambda_events::{apigw::ApiGatewayProxyResponse, encodings::Body};
use base64::{engine::general_purpose, Engine};
use quiz_ingest_lambda::models::quiz::QuizRecord;
use quiz_ingest_lambda::utils::quiz_store::{QuizStore, StoreError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory table keyed by `id`, with the same overwrite-on-put behavior as
/// a DynamoDB `PutItem`.
#[derive(Clone, Default)]
pub struct MemoryQuizStore {
    items: Arc<Mutex<HashMap<String, QuizRecord>>>,
    puts: Arc<Mutex<usize>>,
}

impl MemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<QuizRecord> {
        self.items.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn put_count(&self) -> usize {
        *self.puts.lock().unwrap()
    }
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn put_quiz(&self, record: &QuizRecord) -> Result<(), StoreError> {
        *self.puts.lock().unwrap() += 1;
        self.items
            .lock()
            .unwrap()
            .insert(record.id.clone(), record.clone());

        Ok(())
    }
}

pub struct FailingQuizStore;

#[async_trait]
impl QuizStore for FailingQuizStore {
    async fn put_quiz(&self, _record: &QuizRecord) -> Result<(), StoreError> {
        Err(StoreError::Request("table quiz is unavailable".to_owned()))
    }
}

pub const USERNAME: &str = "quizmaster";
pub const PASSWORD: &str = "open:sesame";

pub fn basic_header(username: &str, password: &str) -> String {
    let token = general_purpose::STANDARD.encode(format!("{}:{}", username, password));

    format!("Basic {}", token)
}

pub fn authorized_event(body: Value) -> Value {
    json!({
        "headers": {"Authorization": basic_header(USERNAME, PASSWORD)},
        "body": body.to_string()
    })
}

pub fn body_json(response: &ApiGatewayProxyResponse) -> Value {
    match &response.body {
        Some(Body::Text(text)) => serde_json::from_str(text).unwrap(),
        other => panic!("unexpected body: {:?}", other),
    }
}

pub fn header<'a>(response: &'a ApiGatewayProxyResponse, name: &str) -> Option<&'a str> {
    response
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
}
