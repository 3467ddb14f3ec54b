use axum::{extract::State, Json};
use nook_core::{
    timestamp, Envelope, GrammarCheckResponse, ParaphraseResponse, RewriteRequest, TextRewriter,
};
use std::sync::Arc;
use tracing::info;

use crate::middleware::{ApiJson, AppError};

pub struct RewriteRouteState {
    pub rewriter: Arc<dyn TextRewriter>,
}

pub async fn grammar_check(
    State(state): State<Arc<RewriteRouteState>>,
    ApiJson(request): ApiJson<RewriteRequest>,
) -> Result<Json<Envelope<GrammarCheckResponse>>, AppError> {
    info!(text_len = request.text().len(), "Received grammar check request");

    let corrected = state.rewriter.correct_grammar(request.text()).await?;

    Ok(Json(Envelope::ok(GrammarCheckResponse {
        corrected,
        generated_at: timestamp::iso_timestamp(&timestamp::now()),
    })))
}

pub async fn paraphrase(
    State(state): State<Arc<RewriteRouteState>>,
    ApiJson(request): ApiJson<RewriteRequest>,
) -> Result<Json<Envelope<ParaphraseResponse>>, AppError> {
    info!(text_len = request.text().len(), "Received paraphrase request");

    let paraphrased = state.rewriter.paraphrase(request.text()).await?;

    Ok(Json(Envelope::ok(ParaphraseResponse {
        paraphrased,
        generated_at: timestamp::iso_timestamp(&timestamp::now()),
    })))
}
