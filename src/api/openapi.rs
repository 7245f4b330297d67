use utoipa::OpenApi;

use crate::{
    api::models::{ErrorResponse, SetRoundingRequest},
    core::models::{audit::AppLog, balance::NetBalance, debt::DebtInstruction, room::Room},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::refresh_debts,
        super::handlers::get_debts,
        super::handlers::get_net_balances,
        super::handlers::set_rounding,
        super::handlers::get_app_logs
    ),
    components(schemas(SetRoundingRequest, ErrorResponse, DebtInstruction, NetBalance, Room, AppLog)),
    info(
        title = "Splitroom API",
        description = "Settlement of shared room expenses into transfer instructions",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
