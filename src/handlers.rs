use crate::auth::{check_password, require_admin};
use crate::calendar::{visible_calendar, YearSelector};
use crate::content::builtin_posts;
use crate::errors::AppError;
use crate::github::summarize_event;
use crate::models::{
    ActivityResponse, AuthRequest, AuthResponse, BlogPost, CalendarQuery, ContributionCalendar,
    PostDraft,
};
use crate::posts::{merge_posts, remove_post, upsert_post};
use crate::state::AppState;
use crate::ui;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate, Utc};
use tracing::{info, warn};

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (calendar, posts) = tokio::join!(
        state.github.contributions(YearSelector::Last),
        state.posts.list()
    );
    let calendar = calendar
        .into_option()
        .and_then(|contributions| visible_calendar(today(), YearSelector::Last, &contributions));
    let posts = merge_posts(posts?, &builtin_posts());

    Ok(Html(ui::render_home(state.github.account(), calendar.as_ref(), &posts)))
}

pub async fn projects() -> Html<String> {
    Html(ui::render_projects())
}

pub async fn blog(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let posts = merge_posts(state.posts.list().await?, &builtin_posts());
    Ok(Html(ui::render_blog(&posts)))
}

pub async fn resume() -> Html<String> {
    Html(ui::render_resume())
}

pub async fn contact() -> Html<String> {
    Html(ui::render_contact())
}

pub async fn admin(State(state): State<AppState>) -> Html<String> {
    Html(ui::render_admin(state.github.account()))
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(ui::render_not_found()))
}

/// Any body that is not a matching `{password}` object is a failed login.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> (StatusCode, Json<AuthResponse>) {
    let password = match payload {
        Ok(Json(request)) => request.password,
        Err(rejection) => {
            warn!("admin login body rejected: {rejection}");
            return (StatusCode::UNAUTHORIZED, Json(AuthResponse { ok: false }));
        }
    };

    if check_password(state.config.admin_password.as_deref(), &password) {
        info!("admin login succeeded");
        (StatusCode::OK, Json(AuthResponse { ok: true }))
    } else {
        warn!("admin login rejected");
        (StatusCode::UNAUTHORIZED, Json(AuthResponse { ok: false }))
    }
}

pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, AppError> {
    Ok(Json(state.posts.list().await?))
}

pub async fn list_blog(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, AppError> {
    let posts = merge_posts(state.posts.list().await?, &builtin_posts());
    Ok(Json(posts))
}

pub async fn save_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<PostDraft>,
) -> Result<Json<BlogPost>, AppError> {
    require_admin(&headers, state.config.admin_password.as_deref())?;

    let _guard = state.post_writes.lock().await;
    let posts = state.posts.list().await?;
    let (updated, saved) = upsert_post(posts, &draft, today())?;
    state.posts.save(&updated).await?;

    info!(slug = %saved.slug, "saved blog post");
    Ok(Json(saved))
}

pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    require_admin(&headers, state.config.admin_password.as_deref())?;

    let _guard = state.post_writes.lock().await;
    let posts = state.posts.list().await?;
    let remaining = remove_post(posts, &slug)
        .ok_or_else(|| AppError::not_found(format!("no post with slug '{slug}'")))?;
    state.posts.save(&remaining).await?;

    info!(%slug, "deleted blog post");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn github_activity(State(state): State<AppState>) -> Json<ActivityResponse> {
    let (repos, events) = state.github.activity().await;
    let now = Utc::now();

    Json(ActivityResponse {
        repos_available: repos.is_available(),
        events_available: events.is_available(),
        repos: repos.unwrap_or_default(),
        events: events
            .unwrap_or_default()
            .iter()
            .map(|event| summarize_event(event, now))
            .collect(),
    })
}

pub async fn github_contributions(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Option<ContributionCalendar>>, AppError> {
    let selector = match query.y.as_deref() {
        Some(raw) => raw.parse::<YearSelector>().map_err(AppError::bad_request)?,
        None => YearSelector::Last,
    };

    let calendar = state
        .github
        .contributions(selector)
        .await
        .into_option()
        .and_then(|contributions| visible_calendar(today(), selector, &contributions));
    Ok(Json(calendar))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
