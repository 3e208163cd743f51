/*---------- Imports ----------*/
use crate::models::event::{self, BodyError};
use crate::models::quiz::{PayloadError, QuizRecord};
use crate::utils::basic_auth::{AuthError, BasicAuth};
use crate::utils::config::Credentials;
use crate::utils::http::HttpResponse;
use crate::utils::quiz_store::{QuizStore, StoreError};
use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use chrono::Utc;
use serde_json::Value;
use thiserror::Error;

/*---------- Enums ----------*/
#[derive(Debug, Error)]
pub enum InsertQuizError {
    #[error("{0}")]
    Payload(#[from] PayloadError),

    #[error("{0}")]
    Body(#[from] BodyError),

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl InsertQuizError {
    fn into_response(self) -> ApiGatewayProxyResponse {
        match self {
            InsertQuizError::Payload(error) if error.is_missing_field() => {
                tracing::warn!(%error, "rejected quiz payload");
                HttpResponse::bad_request(&error.to_string())
            }

            other => {
                tracing::error!(error = %other, "failed to insert quiz");
                HttpResponse::internal_error(&other.to_string())
            }
        }
    }
}

fn auth_error_response(error: &AuthError) -> ApiGatewayProxyResponse {
    match error {
        AuthError::Missing => HttpResponse::unauthorized("Authentication required"),
        AuthError::InvalidFormat(_) => HttpResponse::unauthorized("Invalid authentication format"),
        AuthError::InvalidCredentials => HttpResponse::unauthorized("Invalid credentials"),
        AuthError::Unexpected(_) => HttpResponse::auth_failure(),
    }
}

/// Authenticates an invocation and upserts the quiz it carries. Every outcome,
/// including store failures, comes back as a proxy response.
pub struct QuizHandler<S> {
    store: S,
}

impl<S: QuizStore> QuizHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the expected credentials from the environment on each call.
    pub async fn handle(&self, event: &Value) -> ApiGatewayProxyResponse {
        let credentials = match Credentials::from_env() {
            Ok(credentials) => credentials,
            Err(error) => {
                tracing::error!(%error, "basic auth credentials not configured");
                return HttpResponse::configuration_error();
            }
        };

        self.handle_with_credentials(&credentials, event).await
    }

    pub async fn handle_with_credentials(
        &self,
        credentials: &Credentials,
        event: &Value,
    ) -> ApiGatewayProxyResponse {
        let username = match BasicAuth::authenticate(event, credentials) {
            Ok(username) => username,
            Err(error) => {
                match &error {
                    AuthError::Unexpected(_) => {
                        tracing::error!(%error, "unexpected error processing authentication")
                    }
                    _ => tracing::warn!(%error, "authentication failed"),
                }

                return auth_error_response(&error);
            }
        };

        tracing::info!(%username, "authentication successful");

        match self.insert_quiz(event).await {
            Ok(record) => HttpResponse::quiz_inserted(&record.id, &record.quiz_name),
            Err(error) => error.into_response(),
        }
    }

    async fn insert_quiz(&self, event: &Value) -> Result<QuizRecord, InsertQuizError> {
        let body = event::extract_body(event)?;

        tracing::debug!(quiz_data = ?body.get("quiz_data"), "quiz data");

        let record = QuizRecord::from_body(&body, Utc::now())?;

        tracing::info!(quiz_id = %record.id, "quiz id");

        self.store.put_quiz(&record).await?;

        Ok(record)
    }
}
