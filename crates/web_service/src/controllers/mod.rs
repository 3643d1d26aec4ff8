pub mod list_controller;
pub mod todo_controller;

use actix_web::{http::header, HttpResponse};
use list_store::{Flash, StoreError};
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::session_middleware::SessionKey;
use crate::server::AppState;

/// 303 redirect, the answer to every successful POST.
pub(crate) fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn list_path(list_id: Uuid) -> String {
    format!("/lists/{}", list_id)
}

/// URL segments carry stable ids; anything unparsable is treated the same
/// as an unknown id.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Missing list or todo: flash an error and send the client back to the
/// lists overview instead of failing the request.
pub(crate) async fn missing_list(state: &AppState, key: &SessionKey) -> Result<HttpResponse> {
    state
        .sessions
        .set_flash(key.as_str(), Flash::error(StoreError::ListNotFound.to_string()))
        .await?;
    Ok(redirect_to("/lists"))
}

pub(crate) async fn missing_todo(state: &AppState, key: &SessionKey) -> Result<HttpResponse> {
    state
        .sessions
        .set_flash(key.as_str(), Flash::error(StoreError::TodoNotFound.to_string()))
        .await?;
    Ok(redirect_to("/lists"))
}
