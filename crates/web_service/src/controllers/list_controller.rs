use actix_web::{
    http::header,
    web::{Data, Form, Path},
    HttpResponse,
};
use list_store::{Flash, StoreError};
use log::{error, info};
use serde::Deserialize;

use super::{list_path, missing_list, parse_id, redirect_to};
use crate::dto::{FormView, ListFormView, ListPageView, ListsPageView};
use crate::error::Result;
use crate::middleware::session_middleware::SessionKey;
use crate::server::AppState;

/// Form body for creating or renaming a list.
#[derive(Debug, Deserialize)]
pub struct ListNameForm {
    pub list_name: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/lists"))
        .finish()
}

/// GET /lists
/// All lists in display order, with the consumed flash.
pub async fn lists_overview(state: Data<AppState>, key: SessionKey) -> Result<HttpResponse> {
    let (session, flash) = state.sessions.state_for_render(key.as_str()).await?;
    Ok(HttpResponse::Ok().json(ListsPageView::new(&session, flash)))
}

/// GET /lists/new
pub async fn new_list_form(state: Data<AppState>, key: SessionKey) -> Result<HttpResponse> {
    let (_, flash) = state.sessions.state_for_render(key.as_str()).await?;
    Ok(HttpResponse::Ok().json(ListFormView {
        flash: flash.map(Into::into),
        list: None,
        form: FormView::empty(),
    }))
}

/// POST /lists
/// Create a list, or re-render the creation form with the error.
pub async fn create_list(
    state: Data<AppState>,
    key: SessionKey,
    form: Form<ListNameForm>,
) -> Result<HttpResponse> {
    let name = form.list_name.trim();

    match state.sessions.create_list(key.as_str(), name).await {
        Ok(list_id) => {
            info!("Created list {}", list_id);
            state
                .sessions
                .set_flash(key.as_str(), Flash::success("The list has been created."))
                .await?;
            Ok(redirect_to("/lists"))
        }
        Err(StoreError::Validation(e)) => Ok(HttpResponse::UnprocessableEntity().json(
            ListFormView {
                flash: None,
                list: None,
                form: FormView::rejected(name, e),
            },
        )),
        Err(e) => {
            error!("Failed to create list: {}", e);
            Err(e.into())
        }
    }
}

/// GET /lists/{list_id}
/// One list with its todos in display order.
pub async fn show_list(
    state: Data<AppState>,
    key: SessionKey,
    path: Path<String>,
) -> Result<HttpResponse> {
    let (session, flash) = state.sessions.state_for_render(key.as_str()).await?;

    let list = parse_id(&path).and_then(|id| session.find_list(id));
    match list {
        Some(list) => Ok(HttpResponse::Ok().json(ListPageView {
            flash: flash.map(Into::into),
            list: list.into(),
            todo_form: FormView::empty(),
        })),
        None => missing_list(&state, &key).await,
    }
}

/// GET /lists/{list_id}/edit
pub async fn edit_list_form(
    state: Data<AppState>,
    key: SessionKey,
    path: Path<String>,
) -> Result<HttpResponse> {
    let (session, flash) = state.sessions.state_for_render(key.as_str()).await?;

    let list = parse_id(&path).and_then(|id| session.find_list(id));
    match list {
        Some(list) => Ok(HttpResponse::Ok().json(ListFormView {
            flash: flash.map(Into::into),
            list: Some(list.into()),
            form: FormView::empty(),
        })),
        None => missing_list(&state, &key).await,
    }
}

/// POST /lists/{list_id}
/// Rename a list, or re-render the rename form with the error.
pub async fn update_list(
    state: Data<AppState>,
    key: SessionKey,
    path: Path<String>,
    form: Form<ListNameForm>,
) -> Result<HttpResponse> {
    let name = form.list_name.trim();
    let Some(list_id) = parse_id(&path) else {
        return missing_list(&state, &key).await;
    };

    match state.sessions.rename_list(key.as_str(), list_id, name).await {
        Ok(()) => {
            info!("Renamed list {}", list_id);
            state
                .sessions
                .set_flash(key.as_str(), Flash::success("The list has been updated."))
                .await?;
            Ok(redirect_to(&list_path(list_id)))
        }
        Err(StoreError::Validation(e)) => {
            let session = state.sessions.state(key.as_str()).await?;
            match session.find_list(list_id) {
                Some(list) => Ok(HttpResponse::UnprocessableEntity().json(ListFormView {
                    flash: None,
                    list: Some(list.into()),
                    form: FormView::rejected(name, e),
                })),
                None => missing_list(&state, &key).await,
            }
        }
        Err(StoreError::ListNotFound) => missing_list(&state, &key).await,
        Err(e) => {
            error!("Failed to rename list {}: {}", list_id, e);
            Err(e.into())
        }
    }
}

/// POST /lists/{list_id}/delete
pub async fn delete_list(
    state: Data<AppState>,
    key: SessionKey,
    path: Path<String>,
) -> Result<HttpResponse> {
    let Some(list_id) = parse_id(&path) else {
        return missing_list(&state, &key).await;
    };

    match state.sessions.delete_list(key.as_str(), list_id).await {
        Ok(()) => {
            info!("Deleted list {}", list_id);
            state
                .sessions
                .set_flash(key.as_str(), Flash::success("The list has been deleted."))
                .await?;
            Ok(redirect_to("/lists"))
        }
        Err(StoreError::ListNotFound) => missing_list(&state, &key).await,
        Err(e) => {
            error!("Failed to delete list {}: {}", list_id, e);
            Err(e.into())
        }
    }
}

/// Configure routes. `/lists/new` must come before `/lists/{list_id}` so the
/// literal segment is not captured as an id.
pub fn config(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/", actix_web::web::get().to(index))
        .route("/lists", actix_web::web::get().to(lists_overview))
        .route("/lists", actix_web::web::post().to(create_list))
        .route("/lists/new", actix_web::web::get().to(new_list_form))
        .route("/lists/{list_id}", actix_web::web::get().to(show_list))
        .route("/lists/{list_id}", actix_web::web::post().to(update_list))
        .route(
            "/lists/{list_id}/edit",
            actix_web::web::get().to(edit_list_form),
        )
        .route(
            "/lists/{list_id}/delete",
            actix_web::web::post().to(delete_list),
        );
}
