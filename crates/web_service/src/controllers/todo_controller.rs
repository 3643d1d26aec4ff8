use actix_web::{
    web::{Data, Form, Path},
    HttpResponse,
};
use list_store::{Flash, StoreError};
use log::{error, info};
use serde::Deserialize;

use super::{list_path, missing_list, missing_todo, parse_id, redirect_to};
use crate::dto::{FormView, ListPageView};
use crate::error::Result;
use crate::middleware::session_middleware::SessionKey;
use crate::server::AppState;

/// Form body for adding a todo.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    pub todo: String,
}

/// Form body for the completion toggle.
#[derive(Debug, Deserialize)]
pub struct CompletionForm {
    pub completed: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /lists/{list_id}/todos
/// Add a todo, or re-render the list page with the error.
pub async fn add_todo(
    state: Data<AppState>,
    key: SessionKey,
    path: Path<String>,
    form: Form<TodoForm>,
) -> Result<HttpResponse> {
    let text = form.todo.trim();
    let Some(list_id) = parse_id(&path) else {
        return missing_list(&state, &key).await;
    };

    match state.sessions.add_todo(key.as_str(), list_id, text).await {
        Ok(todo_id) => {
            info!("Added todo {} to list {}", todo_id, list_id);
            state
                .sessions
                .set_flash(key.as_str(), Flash::success("The todo was added."))
                .await?;
            Ok(redirect_to(&list_path(list_id)))
        }
        Err(StoreError::Validation(e)) => {
            let session = state.sessions.state(key.as_str()).await?;
            match session.find_list(list_id) {
                Some(list) => Ok(HttpResponse::UnprocessableEntity().json(ListPageView {
                    flash: None,
                    list: list.into(),
                    todo_form: FormView::rejected(text, e),
                })),
                None => missing_list(&state, &key).await,
            }
        }
        Err(StoreError::ListNotFound) => missing_list(&state, &key).await,
        Err(e) => {
            error!("Failed to add todo to list {}: {}", list_id, e);
            Err(e.into())
        }
    }
}

/// POST /lists/{list_id}/todos/{todo_id}
/// Overwrite a todo's completion flag.
pub async fn set_completion(
    state: Data<AppState>,
    key: SessionKey,
    path: Path<(String, String)>,
    form: Form<CompletionForm>,
) -> Result<HttpResponse> {
    let (raw_list_id, raw_todo_id) = path.into_inner();
    let Some(list_id) = parse_id(&raw_list_id) else {
        return missing_list(&state, &key).await;
    };
    let Some(todo_id) = parse_id(&raw_todo_id) else {
        return missing_todo(&state, &key).await;
    };

    match state
        .sessions
        .set_todo_completion(key.as_str(), list_id, todo_id, form.completed)
        .await
    {
        Ok(()) => {
            state
                .sessions
                .set_flash(key.as_str(), Flash::success("The todo has been updated."))
                .await?;
            Ok(redirect_to(&list_path(list_id)))
        }
        Err(StoreError::ListNotFound) => missing_list(&state, &key).await,
        Err(StoreError::TodoNotFound) => missing_todo(&state, &key).await,
        Err(e) => {
            error!("Failed to update todo {}: {}", todo_id, e);
            Err(e.into())
        }
    }
}

/// POST /lists/{list_id}/todos/{todo_id}/delete
pub async fn delete_todo(
    state: Data<AppState>,
    key: SessionKey,
    path: Path<(String, String)>,
) -> Result<HttpResponse> {
    let (raw_list_id, raw_todo_id) = path.into_inner();
    let Some(list_id) = parse_id(&raw_list_id) else {
        return missing_list(&state, &key).await;
    };
    let Some(todo_id) = parse_id(&raw_todo_id) else {
        return missing_todo(&state, &key).await;
    };

    match state
        .sessions
        .delete_todo(key.as_str(), list_id, todo_id)
        .await
    {
        Ok(()) => {
            info!("Deleted todo {} from list {}", todo_id, list_id);
            state
                .sessions
                .set_flash(key.as_str(), Flash::success("The todo has been deleted."))
                .await?;
            Ok(redirect_to(&list_path(list_id)))
        }
        Err(StoreError::ListNotFound) => missing_list(&state, &key).await,
        Err(StoreError::TodoNotFound) => missing_todo(&state, &key).await,
        Err(e) => {
            error!("Failed to delete todo {}: {}", todo_id, e);
            Err(e.into())
        }
    }
}

/// POST /lists/{list_id}/complete_all
pub async fn complete_all(
    state: Data<AppState>,
    key: SessionKey,
    path: Path<String>,
) -> Result<HttpResponse> {
    let Some(list_id) = parse_id(&path) else {
        return missing_list(&state, &key).await;
    };

    match state.sessions.complete_all(key.as_str(), list_id).await {
        Ok(()) => {
            info!("Completed all todos in list {}", list_id);
            state
                .sessions
                .set_flash(
                    key.as_str(),
                    Flash::success("All todos have been completed."),
                )
                .await?;
            Ok(redirect_to(&list_path(list_id)))
        }
        Err(StoreError::ListNotFound) => missing_list(&state, &key).await,
        Err(e) => {
            error!("Failed to complete all todos in list {}: {}", list_id, e);
            Err(e.into())
        }
    }
}

/// Configure routes
pub fn config(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route(
        "/lists/{list_id}/todos",
        actix_web::web::post().to(add_todo),
    )
    .route(
        "/lists/{list_id}/todos/{todo_id}",
        actix_web::web::post().to(set_completion),
    )
    .route(
        "/lists/{list_id}/todos/{todo_id}/delete",
        actix_web::web::post().to(delete_todo),
    )
    .route(
        "/lists/{list_id}/complete_all",
        actix_web::web::post().to(complete_all),
    );
}
