use axum::Json;
use nook_core::{
    timestamp, Character, CharacterRequest, CharacterResponse, Envelope, World, WorldRequest,
    WorldResponse,
};
use tracing::info;

use crate::middleware::ApiJson;

pub async fn generate_character(
    ApiJson(request): ApiJson<CharacterRequest>,
) -> Json<Envelope<CharacterResponse>> {
    info!(
        character_type = %request.character_type(),
        genre = %request.genre(),
        "Received character generation request"
    );

    Json(Envelope::ok(CharacterResponse {
        character: Character::sample(),
        generated_at: timestamp::iso_timestamp(&timestamp::now()),
    }))
}

pub async fn build_world(ApiJson(request): ApiJson<WorldRequest>) -> Json<Envelope<WorldResponse>> {
    info!(
        world_type = %request.world_type(),
        setting = %request.setting(),
        "Received world building request"
    );

    Json(Envelope::ok(WorldResponse {
        world: World::sample(),
        generated_at: timestamp::iso_timestamp(&timestamp::now()),
    }))
}
