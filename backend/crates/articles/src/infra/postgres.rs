//! PostgreSQL Repository Implementation
//!
//! Static SQL with nullable binds for the optional filters; content and
//! tags are stored as `TEXT[]`.

use chrono::{DateTime, Utc};
use kernel::id::{ArticleId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::article::Article;
use crate::domain::repository::{
    ArticleFilter, ArticleRepository, ArticleStats, CategoryCount, PopularArticle,
};
use crate::domain::value_object::{category::Category, slug::Slug, status::ArticleStatus};
use crate::error::{ArticleError, ArticleResult};

const ARTICLE_COLUMNS: &str = r#"
    article_id,
    title,
    slug,
    content,
    category,
    status,
    author_id,
    author_name,
    tags,
    excerpt,
    read_time,
    view_count,
    created_at,
    updated_at
"#;

const LIST_PREDICATE: &str = r#"
    ($1::text IS NULL OR status = $1)
    AND ($2::text IS NULL OR category = $2)
    AND ($3::text IS NULL
         OR title ILIKE $3
         OR category ILIKE $3
         OR EXISTS (SELECT 1 FROM unnest(content) AS paragraph WHERE paragraph ILIKE $3))
"#;

/// PostgreSQL-backed article store
#[derive(Clone)]
pub struct PgArticleStore {
    pool: PgPool,
}

impl PgArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ArticleRepository for PgArticleStore {
    async fn insert(&self, article: &Article) -> ArticleResult<()> {
        sqlx::query(
            r#"
            INSERT INTO articles (
                article_id,
                title,
                slug,
                content,
                category,
                status,
                author_id,
                author_name,
                tags,
                excerpt,
                read_time,
                view_count,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(article.article_id.as_uuid())
        .bind(&article.title)
        .bind(article.slug.as_str())
        .bind(&article.content)
        .bind(article.category.as_str())
        .bind(article.status.as_str())
        .bind(article.author_id.as_uuid())
        .bind(&article.author_name)
        .bind(&article.tags)
        .bind(&article.excerpt)
        .bind(article.read_time)
        .bind(article.view_count)
        .bind(article.created_at)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, article_id: &ArticleId) -> ArticleResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE article_id = $1"
        ))
        .bind(article_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_article()).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> ArticleResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_article()).transpose()
    }

    async fn slug_taken(&self, slug: &Slug, exclude: Option<&ArticleId>) -> ArticleResult<bool> {
        let taken = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM articles
                WHERE slug = $1 AND ($2::uuid IS NULL OR article_id <> $2)
            )
            "#,
        )
        .bind(slug.as_str())
        .bind(exclude.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }

    async fn update(&self, article: &Article) -> ArticleResult<()> {
        sqlx::query(
            r#"
            UPDATE articles SET
                title = $2,
                slug = $3,
                content = $4,
                category = $5,
                status = $6,
                tags = $7,
                excerpt = $8,
                read_time = $9,
                view_count = $10,
                updated_at = $11
            WHERE article_id = $1
            "#,
        )
        .bind(article.article_id.as_uuid())
        .bind(&article.title)
        .bind(article.slug.as_str())
        .bind(&article.content)
        .bind(article.category.as_str())
        .bind(article.status.as_str())
        .bind(&article.tags)
        .bind(&article.excerpt)
        .bind(article.read_time)
        .bind(article.view_count)
        .bind(article.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, article_id: &ArticleId) -> ArticleResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(article_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        skip: u64,
        limit: u64,
    ) -> ArticleResult<(Vec<Article>, u64)> {
        let status = filter.status.map(|s| s.as_str());
        let category = filter.category.map(|c| c.as_str());
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));

        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            r#"
            SELECT {ARTICLE_COLUMNS} FROM articles
            WHERE {LIST_PREDICATE}
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#
        ))
        .bind(status)
        .bind(category)
        .bind(pattern.as_deref())
        .bind(skip as i64)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM articles WHERE {LIST_PREDICATE}"
        ))
        .bind(status)
        .bind(category)
        .bind(pattern.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let articles = rows
            .into_iter()
            .map(|r| r.into_article())
            .collect::<ArticleResult<Vec<_>>>()?;

        Ok((articles, total as u64))
    }

    async fn stats(&self) -> ArticleResult<ArticleStats> {
        let status_counts: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM articles GROUP BY status")
                .fetch_all(&self.pool)
                .await?;

        let count_for = |wanted: ArticleStatus| {
            status_counts
                .iter()
                .find(|(status, _)| status == wanted.as_str())
                .map(|(_, count)| *count)
                .unwrap_or(0)
        };

        let category_rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT category, COUNT(*) AS count FROM articles GROUP BY category ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let categories = category_rows
            .into_iter()
            .map(|(category, count)| {
                let category = Category::parse(&category).ok_or_else(|| {
                    ArticleError::Internal(format!("Unknown category in store: {category}"))
                })?;
                Ok(CategoryCount { category, count })
            })
            .collect::<ArticleResult<Vec<_>>>()?;

        let popular_rows: Vec<(Uuid, String, String, i64)> = sqlx::query_as(
            r#"
            SELECT article_id, title, slug, view_count
            FROM articles
            WHERE status = 'published'
            ORDER BY view_count DESC
            LIMIT 5
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let popular = popular_rows
            .into_iter()
            .map(|(article_id, title, slug, view_count)| PopularArticle {
                article_id: ArticleId::from_uuid(article_id),
                title,
                slug: Slug::from_db(slug),
                view_count,
            })
            .collect();

        Ok(ArticleStats {
            total: count_for(ArticleStatus::Published)
                + count_for(ArticleStatus::Draft)
                + count_for(ArticleStatus::Archived),
            published: count_for(ArticleStatus::Published),
            draft: count_for(ArticleStatus::Draft),
            archived: count_for(ArticleStatus::Archived),
            categories,
            popular,
        })
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ArticleRow {
    article_id: Uuid,
    title: String,
    slug: String,
    content: Vec<String>,
    category: String,
    status: String,
    author_id: Uuid,
    author_name: String,
    tags: Vec<String>,
    excerpt: String,
    read_time: i32,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ArticleRow {
    fn into_article(self) -> ArticleResult<Article> {
        let category = Category::parse(&self.category).ok_or_else(|| {
            ArticleError::Internal(format!("Unknown category in store: {}", self.category))
        })?;
        let status = ArticleStatus::parse(&self.status).ok_or_else(|| {
            ArticleError::Internal(format!("Unknown status in store: {}", self.status))
        })?;

        Ok(Article {
            article_id: ArticleId::from_uuid(self.article_id),
            title: self.title,
            slug: Slug::from_db(self.slug),
            content: self.content,
            category,
            status,
            author_id: UserId::from_uuid(self.author_id),
            author_name: self.author_name,
            tags: self.tags,
            excerpt: self.excerpt,
            read_time: self.read_time,
            view_count: self.view_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
