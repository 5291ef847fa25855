use lambda_runtime::Context;
use serde::Serialize;

/// Snapshot of the execution context for a single invocation, serialized
/// with the field names Lambda context objects are conventionally logged with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext {
    /// Always true, present only so the logged shape matches Node.js contexts
    pub callback_waits_for_empty_event_loop: bool,
    pub function_version: String,
    pub function_name: String,
    #[serde(rename = "memoryLimitInMB")]
    pub memory_limit_in_mb: String,
    pub log_group_name: String,
    pub log_stream_name: String,
    pub invoked_function_arn: String,
    pub aws_request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xray_trace_id: Option<String>,
    /// Invocation deadline in epoch milliseconds
    pub deadline_ms: u64,
}

impl From<&Context> for InvocationContext {
    fn from(context: &Context) -> Self {
        let config = &context.env_config;

        Self {
            callback_waits_for_empty_event_loop: true,
            function_version: config.version.clone(),
            function_name: config.function_name.clone(),
            memory_limit_in_mb: config.memory.to_string(),
            log_group_name: config.log_group.clone(),
            log_stream_name: config.log_stream.clone(),
            invoked_function_arn: context.invoked_function_arn.clone(),
            aws_request_id: context.request_id.clone(),
            xray_trace_id: context.xray_trace_id.clone(),
            deadline_ms: context.deadline,
        }
    }
}
