use axum::Json;
use nook_core::{timestamp, HomeStatus, HOME_MESSAGE};

pub async fn home() -> Json<HomeStatus> {
    Json(HomeStatus {
        message: HOME_MESSAGE.to_string(),
        status: "running".to_string(),
        timestamp: timestamp::iso_timestamp(&timestamp::now()),
    })
}
