use crate::errors::AppError;
use crate::form::{new_activity_id, ActivityDraft};
use crate::models::{
    Activity, ActivityForm, ActivityState, SaveActivityRequest, SetActiveRequest, SummaryResponse,
};
use crate::state::AppState;
use crate::stats::{build_summary, local_today};
use crate::store::ActivityAction;
use crate::ui::render_index;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Path, State,
    },
    response::{Html, Redirect},
    Form, Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    let draft = ActivityDraft::for_state(&data);
    Html(render_index(&local_today().to_string(), &data, &draft))
}

pub async fn form_save(
    State(state): State<AppState>,
    form: Result<Form<ActivityForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(form) = form?;
    let draft = ActivityDraft::from_form(&form)?;
    submit_draft(&state, draft).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    apply(&state, ActivityAction::SetActiveId(id)).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    apply(&state, ActivityAction::DeleteActivity(id)).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_clear(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply(&state, ActivityAction::ClearActivities).await?;
    Ok(Redirect::to("/"))
}

pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityState> {
    let data = state.data.lock().await;
    Json(data.clone())
}

pub async fn save_activity(
    State(state): State<AppState>,
    payload: Result<Json<SaveActivityRequest>, JsonRejection>,
) -> Result<Json<Activity>, AppError> {
    let Json(payload) = payload?;
    let id = payload
        .id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(new_activity_id);
    let draft = ActivityDraft::from_activity(Activity {
        id,
        category: payload.category,
        name: payload.name,
        calories: payload.calories,
    });

    let saved = submit_draft(&state, draft).await?;
    Ok(Json(saved))
}

pub async fn set_active(
    State(state): State<AppState>,
    payload: Result<Json<SetActiveRequest>, JsonRejection>,
) -> Result<Json<ActivityState>, AppError> {
    let Json(payload) = payload?;
    let updated = apply(&state, ActivityAction::SetActiveId(payload.id)).await?;
    Ok(Json(updated))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActivityState>, AppError> {
    let updated = apply(&state, ActivityAction::DeleteActivity(id)).await?;
    Ok(Json(updated))
}

pub async fn clear_activities(State(state): State<AppState>) -> Result<Json<ActivityState>, AppError> {
    let updated = apply(&state, ActivityAction::ClearActivities).await?;
    Ok(Json(updated))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let data = state.data.lock().await;
    Json(build_summary(&data.activities))
}

// Both mutators work on a copy and only swap it in once the snapshot is
// written, so a failed write leaves memory matching the file.

async fn submit_draft(state: &AppState, mut draft: ActivityDraft) -> Result<Activity, AppError> {
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let saved = draft
        .submit(&mut next)
        .ok_or_else(AppError::invalid_activity)?;

    state.persist(&next).await?;
    *data = next;

    info!(
        action = "save-activity",
        id = %saved.id,
        category = saved.category.label(),
        calories = saved.calories,
        total = data.len(),
        "activity saved"
    );
    Ok(saved)
}

async fn apply(state: &AppState, action: ActivityAction) -> Result<ActivityState, AppError> {
    let kind = action.kind();
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    next.dispatch(action);

    state.persist(&next).await?;
    *data = next;

    info!(action = kind, total = data.len(), active = ?data.active_id, "store updated");
    Ok(data.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use axum::http::StatusCode;

    fn seeded() -> ActivityState {
        let mut data = ActivityState::default();
        data.save(Activity {
            id: "breakfast".into(),
            category: Category::Food,
            name: "Porridge".into(),
            calories: 350,
        });
        data.set_active("breakfast");
        data
    }

    // A directory can't be written as a file, so every persist fails.
    fn unwritable_state(data: ActivityState) -> AppState {
        AppState::new(Some(std::env::temp_dir()), data)
    }

    #[tokio::test]
    async fn failed_write_keeps_saved_activity_out_of_memory() {
        let state = unwritable_state(ActivityState::default());
        let request = SaveActivityRequest {
            id: None,
            category: Category::Food,
            name: "Salad".into(),
            calories: 300,
        };

        let err = save_activity(State(state.clone()), Ok(Json(request)))
            .await
            .expect_err("write to a directory must fail");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(state.data.lock().await.is_empty());
    }

    #[tokio::test]
    async fn failed_write_rolls_back_each_action() {
        let state = unwritable_state(seeded());

        assert!(clear_activities(State(state.clone())).await.is_err());
        assert!(delete_activity(State(state.clone()), Path("breakfast".into())).await.is_err());
        assert!(form_clear(State(state.clone())).await.is_err());

        assert_eq!(*state.data.lock().await, seeded());
    }

    #[tokio::test]
    async fn memory_only_state_applies_actions() {
        let state = AppState::new(None, seeded());

        let Json(updated) = delete_activity(State(state.clone()), Path("breakfast".into()))
            .await
            .unwrap();
        assert!(updated.is_empty());
        assert!(updated.active_id.is_none());
        assert_eq!(*state.data.lock().await, updated);
    }
}
