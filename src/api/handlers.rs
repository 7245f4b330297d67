use crate::{
    api::models::*,
    core::{
        models::{audit::AppLog, balance::NetBalance, debt::DebtInstruction, room::Room},
        services::SplitroomService,
    },
    infrastructure::{
        logging::in_memory::InMemoryLogging, rates::fixer::FixerRateSource, storage::in_memory::InMemoryStorage,
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
};
use std::sync::Arc;

pub type AppService = SplitroomService<InMemoryLogging, InMemoryStorage, FixerRateSource>;

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/rooms/{room_id}/debts", axum::routing::get(get_debts))
        .route("/rooms/{room_id}/debts/refresh", axum::routing::post(refresh_debts))
        .route("/rooms/{room_id}/balances", axum::routing::get(get_net_balances))
        .route("/rooms/{room_id}/rounding", axum::routing::put(set_rounding))
        .route("/logs", axum::routing::get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/rooms/{room_id}/debts/refresh",
    params(
        ("room_id" = String, Path, description = "ID of the room")
    ),
    responses(
        (status = 200, description = "Debts recomputed and stored", body = Vec<DebtInstruction>),
        (status = 400, description = "Room has an invalid rounding unit", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 422, description = "Ledger references an unknown currency", body = ErrorResponse),
        (status = 502, description = "Exchange rates unavailable", body = ErrorResponse)
    )
)]
pub(crate) async fn refresh_debts(
    State(service): State<Arc<AppService>>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<DebtInstruction>>, ApiError> {
    let debts = service.refresh_debts(&room_id).await?;
    Ok(Json(debts))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}/debts",
    params(
        ("room_id" = String, Path, description = "ID of the room")
    ),
    responses(
        (status = 200, description = "Stored debts of the room", body = Vec<DebtInstruction>),
        (status = 404, description = "Room not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_debts(
    State(service): State<Arc<AppService>>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<DebtInstruction>>, ApiError> {
    let debts = service.get_debts(&room_id).await?;
    Ok(Json(debts))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}/balances",
    params(
        ("room_id" = String, Path, description = "ID of the room")
    ),
    responses(
        (status = 200, description = "Net balance of every member in the room currency", body = Vec<NetBalance>),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 422, description = "Ledger references an unknown currency", body = ErrorResponse),
        (status = 502, description = "Exchange rates unavailable", body = ErrorResponse)
    )
)]
pub(crate) async fn get_net_balances(
    State(service): State<Arc<AppService>>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<NetBalance>>, ApiError> {
    let balances = service.get_net_balances(&room_id).await?;
    Ok(Json(balances))
}

#[utoipa::path(
    put,
    path = "/api/rooms/{room_id}/rounding",
    params(
        ("room_id" = String, Path, description = "ID of the room")
    ),
    request_body = SetRoundingRequest,
    responses(
        (status = 200, description = "Rounding updated", body = Room),
        (status = 400, description = "Rounding must be positive", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse)
    )
)]
pub(crate) async fn set_rounding(
    State(service): State<Arc<AppService>>,
    Path(room_id): Path<String>,
    Json(req): Json<SetRoundingRequest>,
) -> Result<Json<Room>, ApiError> {
    let room = service.set_rounding(&room_id, req.rounding).await?;
    Ok(Json(room))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Application logs retrieved successfully", body = Vec<AppLog>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_app_logs(State(service): State<Arc<AppService>>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}
