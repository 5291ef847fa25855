use crate::{
    context::InvocationContext,
    error::{InvocationRecord, SerializationError},
    response::Response,
};
use lambda_runtime::{Error, LambdaEvent, tracing};
use serde::Serialize;
use serde_json::Value;

#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub(crate) async fn outer_function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    let (payload, context) = event.into_parts();
    let context = InvocationContext::from(&context);
    let response = function_handler(&payload, &context)?;
    Ok(response)
}

/// Log the invocation event and context then respond with the fixed
/// success response
///
/// Neither input influences the response, they are only serialized
/// for the diagnostic log lines
pub fn function_handler<E, C>(event: &E, context: &C) -> Result<Response, SerializationError>
where
    E: Serialize + ?Sized,
    C: Serialize + ?Sized,
{
    let event = to_json(InvocationRecord::Event, event)?;
    tracing::info!("Events: {event}");

    let context = to_json(InvocationRecord::Context, context)?;
    tracing::info!("Context: {context}");

    Ok(Response::amazing())
}

fn to_json<T>(record: InvocationRecord, value: &T) -> Result<String, SerializationError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(|source| {
        tracing::error!(?source, %record, "failed to serialize invocation record");
        SerializationError { record, source }
    })
}
