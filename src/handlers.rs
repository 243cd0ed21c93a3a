use crate::dates::parse_date_key;
use crate::errors::{AppError, ValidationError};
use crate::models::{
    Bucket, DueDateForm, DueDateRequest, NewTaskForm, NewTaskRequest, SetupForm, TaskId,
};
use crate::state::AppState;
use crate::store::Board;
use crate::ui::{Surface, render_page};
use crate::view::BoardView;
use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use chrono::NaiveDate;
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut board = state.board.lock().await;
    let surface = if !board.is_set_up() {
        Surface::Setup
    } else if board.take_pending_reveal() {
        Surface::Reveal {
            timeout: state.reveal_timeout,
        }
    } else {
        Surface::Main
    };

    let view = BoardView::project(state.clock.today(), &board);
    Html(render_page(&view, surface))
}

pub async fn setup(State(state): State<AppState>, Form(form): Form<SetupForm>) -> Redirect {
    if let Err(err) = apply_setup(&state, &form).await {
        debug!("setup submission ignored: {err}");
    }
    Redirect::to("/")
}

pub async fn add_present(
    State(state): State<AppState>,
    Form(form): Form<NewTaskForm>,
) -> Redirect {
    if let Err(err) = apply_add(&state, &form.text, Bucket::Present).await {
        debug!("new task ignored: {err}");
    }
    Redirect::to("/")
}

pub async fn add_future(
    State(state): State<AppState>,
    Form(form): Form<NewTaskForm>,
) -> Redirect {
    if let Err(err) = apply_add(&state, &form.text, Bucket::Future).await {
        debug!("new task ignored: {err}");
    }
    Redirect::to("/")
}

pub async fn toggle(State(state): State<AppState>, Path(id): Path<TaskId>) -> Redirect {
    if let Err(err) = apply_toggle(&state, id).await {
        debug!("toggle ignored: {err}");
    }
    Redirect::to("/")
}

pub async fn change_due(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Form(form): Form<DueDateForm>,
) -> Redirect {
    match parse_date_key(&form.due_date) {
        Some(due_date) => {
            if let Err(err) = apply_due(&state, id, due_date).await {
                debug!("date change ignored: {err}");
            }
        }
        None => debug!(%id, value = %form.due_date, "date change ignored: not a date"),
    }
    Redirect::to("/")
}

pub async fn get_board(State(state): State<AppState>) -> Json<BoardView> {
    let board = state.board.lock().await;
    Json(BoardView::project(state.clock.today(), &board))
}

pub async fn api_setup(
    State(state): State<AppState>,
    Json(form): Json<SetupForm>,
) -> Result<(StatusCode, Json<BoardView>), AppError> {
    let view = apply_setup(&state, &form).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn api_add(
    State(state): State<AppState>,
    Json(payload): Json<NewTaskRequest>,
) -> Result<(StatusCode, Json<BoardView>), AppError> {
    if payload.bucket == Bucket::Past {
        return Err(AppError::unprocessable(
            "bucket must be 'present' or 'future'",
        ));
    }

    let view = apply_add(&state, &payload.text, payload.bucket).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn api_toggle(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<BoardView>, AppError> {
    Ok(Json(apply_toggle(&state, id).await?))
}

pub async fn api_change_due(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(payload): Json<DueDateRequest>,
) -> Result<Json<BoardView>, AppError> {
    Ok(Json(apply_due(&state, id, payload.due_date).await?))
}

async fn apply_setup(state: &AppState, form: &SetupForm) -> Result<BoardView, ValidationError> {
    let today = state.clock.today();
    let mut board = state.board.lock().await;
    let user = board.complete_setup(form, today)?;
    info!(name = %user.name, "setup completed");

    Ok(BoardView::project(today, &board))
}

async fn apply_add(
    state: &AppState,
    text: &str,
    bucket: Bucket,
) -> Result<BoardView, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyTaskText);
    }

    let today = state.clock.today();
    let due_date = match bucket {
        Bucket::Future => state.clock.tomorrow(),
        Bucket::Past | Bucket::Present => today,
    };

    let mut board = state.board.lock().await;
    ensure_set_up(&board)?;
    let task = board.add_task(text, due_date);
    info!(id = %task.id, due = %task.due_date, "task added");

    Ok(BoardView::project(today, &board))
}

async fn apply_toggle(state: &AppState, id: TaskId) -> Result<BoardView, ValidationError> {
    let mut board = state.board.lock().await;
    ensure_set_up(&board)?;
    match board.toggle_completion(id) {
        Some(task) => info!(%id, completed = task.completed, "task toggled"),
        None => debug!(%id, "toggle for unknown task"),
    }

    Ok(BoardView::project(state.clock.today(), &board))
}

async fn apply_due(
    state: &AppState,
    id: TaskId,
    due_date: NaiveDate,
) -> Result<BoardView, ValidationError> {
    let mut board = state.board.lock().await;
    ensure_set_up(&board)?;
    match board.change_due_date(id, due_date) {
        Some(_) => info!(%id, due = %due_date, "task re-dated"),
        None => debug!(%id, "date change for unknown task"),
    }

    Ok(BoardView::project(state.clock.today(), &board))
}

fn ensure_set_up(board: &Board) -> Result<(), ValidationError> {
    if board.is_set_up() {
        Ok(())
    } else {
        Err(ValidationError::SetupIncomplete)
    }
}
