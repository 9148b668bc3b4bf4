//! HTTP Handlers
//!
//! Handlers resolve the caller through the accounts guard and pass it into
//! the use cases explicitly. Public endpoints resolve opportunistically so
//! a bad token degrades to anonymous instead of failing the request.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use kernel::id::ArticleId;
use kernel::response::ApiResponse;
use platform::token::TokenService;
use std::sync::Arc;

use accounts::domain::repository::UserRepository;
use accounts::domain::value_object::user_role::UserRole;
use accounts::presentation::guard;

use crate::application::{
    ArticleStatsUseCase, CreateArticleInput, CreateArticleUseCase, DeleteArticleUseCase,
    GetArticleUseCase, ListArticlesInput, ListArticlesUseCase, UpdateArticleInput,
    UpdateArticleUseCase,
};
use crate::domain::repository::ArticleRepository;
use crate::error::{ArticleError, ArticleResult};
use crate::presentation::dto::{
    ArticleDto, ArticleListResponse, ArticleStatsDto, CreateArticleRequest, ListArticlesQuery,
    UpdateArticleRequest,
};

/// Shared state for article handlers. Articles and accounts can run on
/// different store implementations; the guard only needs the user side.
#[derive(Clone)]
pub struct ArticlesAppState<A, U>
where
    A: ArticleRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub articles: Arc<A>,
    pub accounts: Arc<U>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// List
// ============================================================================

/// GET /api/articles
pub async fn list_articles<A, U>(
    State(state): State<ArticlesAppState<A, U>>,
    headers: HeaderMap,
    Query(query): Query<ListArticlesQuery>,
) -> ArticleResult<impl IntoResponse>
where
    A: ArticleRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = guard::authenticate_opt(&headers, state.accounts.as_ref(), &state.tokens).await;

    let use_case = ListArticlesUseCase::new(state.articles.clone());

    let input = ListArticlesInput {
        status: query.status,
        category: query.category,
        search: query.search,
        page: query.page,
        limit: query.limit,
    };

    let page = use_case.execute(input, caller.as_ref()).await?;

    Ok(Json(ArticleListResponse::from(page)))
}

// ============================================================================
// Stats
// ============================================================================

/// GET /api/articles/stats
pub async fn article_stats<A, U>(
    State(state): State<ArticlesAppState<A, U>>,
    headers: HeaderMap,
) -> ArticleResult<impl IntoResponse>
where
    A: ArticleRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = guard::authenticate(&headers, state.accounts.as_ref(), &state.tokens).await?;
    guard::require_role(&caller, &[UserRole::Editor, UserRole::Admin])
        .map_err(ArticleError::Account)?;

    let stats = ArticleStatsUseCase::new(state.articles.clone())
        .execute()
        .await?;

    Ok(Json(ApiResponse::data(ArticleStatsDto::from(&stats))))
}

// ============================================================================
// Get by slug
// ============================================================================

/// GET /api/articles/{name}
pub async fn get_article<A, U>(
    State(state): State<ArticlesAppState<A, U>>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> ArticleResult<impl IntoResponse>
where
    A: ArticleRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = guard::authenticate_opt(&headers, state.accounts.as_ref(), &state.tokens).await;

    let article = GetArticleUseCase::new(state.articles.clone())
        .execute(&name, caller.as_ref())
        .await?;

    Ok(Json(ApiResponse::data(ArticleDto::from(&article))))
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/articles
pub async fn create_article<A, U>(
    State(state): State<ArticlesAppState<A, U>>,
    headers: HeaderMap,
    Json(req): Json<CreateArticleRequest>,
) -> ArticleResult<impl IntoResponse>
where
    A: ArticleRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = guard::authenticate(&headers, state.accounts.as_ref(), &state.tokens).await?;
    guard::require_role(&caller, &[UserRole::Editor, UserRole::Admin])
        .map_err(ArticleError::Account)?;

    let use_case = CreateArticleUseCase::new(state.articles.clone());

    let input = CreateArticleInput {
        title: req.title,
        name: req.name,
        content: req.content,
        category: req.category,
        status: req.status,
        tags: req.tags,
        excerpt: req.excerpt,
    };

    let article = use_case.execute(input, &caller).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::data(ArticleDto::from(&article))
                .with_message("Article created successfully"),
        ),
    ))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /api/articles/{id}
pub async fn update_article<A, U>(
    State(state): State<ArticlesAppState<A, U>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdateArticleRequest>,
) -> ArticleResult<impl IntoResponse>
where
    A: ArticleRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = guard::authenticate(&headers, state.accounts.as_ref(), &state.tokens).await?;

    let article_id = parse_article_id(&id)?;

    let use_case = UpdateArticleUseCase::new(state.articles.clone());

    let input = UpdateArticleInput {
        title: req.title,
        name: req.name,
        content: req.content,
        category: req.category,
        status: req.status,
        tags: req.tags,
    };

    let article = use_case.execute(&article_id, input, &caller).await?;

    Ok(Json(
        ApiResponse::data(ArticleDto::from(&article)).with_message("Article updated successfully"),
    ))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /api/articles/{id}
pub async fn delete_article<A, U>(
    State(state): State<ArticlesAppState<A, U>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ArticleResult<impl IntoResponse>
where
    A: ArticleRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let caller = guard::authenticate(&headers, state.accounts.as_ref(), &state.tokens).await?;

    let article_id = parse_article_id(&id)?;

    DeleteArticleUseCase::new(state.articles.clone())
        .execute(&article_id, &caller)
        .await?;

    Ok(Json(ApiResponse::message("Article deleted successfully")))
}

/// Unparsable ids behave like ids that match nothing
fn parse_article_id(raw: &str) -> ArticleResult<ArticleId> {
    ArticleId::parse(raw).map_err(|_| ArticleError::NotFound)
}
