/*---------- Imports ----------*/
use crate::utils::basic_auth::CHALLENGE;
use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use serde_json::{json, Value};

pub struct HttpResponse;

impl HttpResponse {
    fn build(status: u16, headers: Value, body: Value) -> ApiGatewayProxyResponse {
        let response = json!({
            "statusCode": status,
            "headers": headers,
            "multiValueHeaders": {},
            "body": body.to_string(),
            "isBase64Encoded": false
        });

        match serde_json::from_value::<ApiGatewayProxyResponse>(response) {
            Ok(parsed_response) => parsed_response,
            Err(error) => {
                tracing::error!(%error, status, "couldn't build proxy response");
                Self::fallback(status)
            }
        }
    }

    fn fallback(status: u16) -> ApiGatewayProxyResponse {
        ApiGatewayProxyResponse {
            status_code: i64::from(status),
            ..Default::default()
        }
    }

    /// JSON response carrying the content type and the permissive CORS origin.
    pub fn json(status: u16, body: Value) -> ApiGatewayProxyResponse {
        Self::build(
            status,
            json!({
                "Content-Type": "application/json",
                "Access-Control-Allow-Origin": "*"
            }),
            body,
        )
    }

    pub fn quiz_inserted(quiz_id: &str, quiz_name: &str) -> ApiGatewayProxyResponse {
        Self::json(
            200,
            json!({
                "message": "Quiz inserted successfully",
                "quiz_id": quiz_id,
                "quiz_name": quiz_name
            }),
        )
    }

    pub fn bad_request(message: &str) -> ApiGatewayProxyResponse {
        Self::json(400, json!({ "error": message }))
    }

    pub fn internal_error(message: &str) -> ApiGatewayProxyResponse {
        Self::json(
            500,
            json!({ "error": format!("Internal server error: {}", message) }),
        )
    }

    pub fn unauthorized(message: &str) -> ApiGatewayProxyResponse {
        Self::build(
            401,
            json!({ "WWW-Authenticate": CHALLENGE }),
            json!({ "error": message }),
        )
    }

    pub fn configuration_error() -> ApiGatewayProxyResponse {
        Self::build(500, json!({}), json!({"error": "Server configuration error"}))
    }

    /// Failure while reading the credentials that is not the caller's fault.
    pub fn auth_failure() -> ApiGatewayProxyResponse {
        Self::build(500, json!({}), json!({"error": "Internal server error"}))
    }
}
