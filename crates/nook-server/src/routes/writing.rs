use axum::Json;
use nook_core::{timestamp, AssistKind, Envelope, WritingAssistRequest, WritingAssistResponse};
use tracing::info;

use crate::middleware::ApiJson;

pub async fn writing_assistant(
    ApiJson(request): ApiJson<WritingAssistRequest>,
) -> Json<Envelope<WritingAssistResponse>> {
    let requested = request.assist_type();
    let kind = AssistKind::resolve(requested);

    info!(
        requested = %requested,
        resolved = %kind,
        prompt_len = request.prompt().len(),
        "Received writing assistance request"
    );

    Json(Envelope::ok(WritingAssistResponse {
        suggestions: kind.suggestions().iter().map(|s| s.to_string()).collect(),
        assist_type: requested.to_string(),
        generated_at: timestamp::iso_timestamp(&timestamp::now()),
    }))
}
