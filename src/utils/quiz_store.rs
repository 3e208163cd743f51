/*---------- Imports ----------*/
use crate::models::quiz::QuizRecord;
use async_trait::async_trait;
use aws_sdk_dynamodb::model::AttributeValue;
use serde_dynamo::aws_sdk_dynamodb_0_21::to_item;
use std::collections::HashMap;
use thiserror::Error;

/*---------- Enums ----------*/
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("couldn't serialize the quiz item: {0}")]
    Serialization(#[from] serde_dynamo::Error),

    #[error("put item request failed: {0}")]
    Request(String),
}

/// Persistence for quiz records. Writes are unconditional upserts keyed by
/// `id`; uniqueness is the store's concern.
#[async_trait]
pub trait QuizStore: Send + Sync {
    async fn put_quiz(&self, record: &QuizRecord) -> Result<(), StoreError>;
}

pub struct DynamoQuizStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoQuizStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl QuizStore for DynamoQuizStore {
    async fn put_quiz(&self, record: &QuizRecord) -> Result<(), StoreError> {
        let item: HashMap<String, AttributeValue> = to_item(record)?;

        tracing::debug!(table = %self.table_name, quiz_id = %record.id, "putting quiz item");

        let put_item_output = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|error| StoreError::Request(error.to_string()))?;

        tracing::info!(response = ?put_item_output, "response from put");

        Ok(())
    }
}
