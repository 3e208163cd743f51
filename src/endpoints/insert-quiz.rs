/*---------- Imports ----------*/
use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use quiz_ingest_lambda::handlers::insert_quiz::QuizHandler;
use quiz_ingest_lambda::utils::{
    config::Settings,
    quiz_store::{DynamoQuizStore, QuizStore},
};
use serde_json::Value;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .without_time()
        .init();

    let config = aws_config::load_from_env().await;
    let settings = Settings::from_env();
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&config);
    let store = DynamoQuizStore::new(dynamodb_client, settings.table_name);

    tracing::info!(table = %store.table_name(), "insert-quiz lambda starting");

    let quiz_handler = QuizHandler::new(store);
    let handler = service_fn(|event| handler_fn(&quiz_handler, event));

    lambda_runtime::run(handler).await?;

    Ok(())
}

async fn handler_fn<S: QuizStore>(
    quiz_handler: &QuizHandler<S>,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);

    let response = quiz_handler.handle(&event.payload).instrument(span).await;

    Ok(response)
}
