use axum::Json;
use nook_core::{timestamp, Envelope, SaveStoryRequest, SaveStoryResponse, STORY_SAVED_MESSAGE};
use tracing::info;

use crate::middleware::ApiJson;

/// Acknowledges a save. Nothing is stored; the id only encodes the second
/// the request arrived.
pub async fn save_story(
    ApiJson(request): ApiJson<SaveStoryRequest>,
) -> Json<Envelope<SaveStoryResponse>> {
    let at = timestamp::now();
    let story_id = timestamp::story_id(&at);

    info!(
        story_id = %story_id,
        title = %request.title(),
        author = %request.author(),
        content_len = request.content().len(),
        "Received story save request"
    );

    Json(Envelope::ok(SaveStoryResponse {
        story_id,
        message: STORY_SAVED_MESSAGE.to_string(),
        saved_at: timestamp::iso_timestamp(&at),
    }))
}
