//! Use-case tests for the articles crate, run against the in-memory store.

use std::sync::Arc;

use accounts::domain::entity::user::User;
use accounts::domain::value_object::{email::Email, user_role::UserRole};
use chrono::{Duration, Utc};
use kernel::id::ArticleId;
use platform::password::PlainPassword;

use crate::application::{
    ArticleStatsUseCase, CreateArticleInput, CreateArticleUseCase, DeleteArticleUseCase,
    GetArticleUseCase, ListArticlesInput, ListArticlesUseCase, UpdateArticleInput,
    UpdateArticleUseCase,
};
use crate::domain::entity::article::Article;
use crate::domain::repository::ArticleRepository;
use crate::domain::value_object::{category::Category, slug::Slug, status::ArticleStatus};
use crate::error::ArticleError;
use crate::infra::memory::InMemoryArticleStore;

fn user_with_role(name: &str, email: &str, role: UserRole) -> User {
    let hash = PlainPassword::new("irrelevant password")
        .unwrap()
        .hash()
        .unwrap();
    let mut user = User::new(name, Email::new(email).unwrap(), hash);
    user.role = role;
    user
}

fn create_input(title: &str, name: &str, content: &[&str]) -> CreateArticleInput {
    CreateArticleInput {
        title: Some(title.to_string()),
        name: Some(name.to_string()),
        content: Some(content.iter().map(|s| s.to_string()).collect()),
        ..Default::default()
    }
}

async fn create_article(
    repo: &Arc<InMemoryArticleStore>,
    caller: &User,
    input: CreateArticleInput,
) -> Article {
    CreateArticleUseCase::new(repo.clone())
        .execute(input, caller)
        .await
        .unwrap()
}

/// Build an article directly, bypassing the use case, so list and stats
/// tests control timestamps and view counts deterministically.
fn article_at(
    title: &str,
    slug: &str,
    status: ArticleStatus,
    category: Category,
    hours_ago: i64,
    author: &User,
) -> Article {
    let at = Utc::now() - Duration::hours(hours_ago);
    let content = vec![format!("Body of {title}")];
    Article {
        article_id: ArticleId::new(),
        title: title.to_string(),
        slug: Slug::new(slug).unwrap(),
        excerpt: crate::domain::entity::article::derive_excerpt(&content),
        read_time: crate::domain::entity::article::estimate_read_time(&content),
        content,
        category,
        status,
        author_id: author.user_id,
        author_name: author.full_name.clone(),
        tags: Vec::new(),
        view_count: 0,
        created_at: at,
        updated_at: at,
    }
}

mod creation_tests {
    use super::*;

    #[tokio::test]
    async fn draft_creation_derives_excerpt_and_read_time() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let admin = user_with_role("Admin User", "admin@example.com", UserRole::Admin);

        let article =
            create_article(&repo, &admin, create_input("T", "t-1", &["Hello world"])).await;

        assert!(article.excerpt.starts_with("Hello world"));
        assert_eq!(article.read_time, 1);
        assert_eq!(article.view_count, 0);
        assert_eq!(article.status, ArticleStatus::Draft);
        assert_eq!(article.category, Category::General);
        assert_eq!(article.author_id, admin.user_id);
        assert_eq!(article.author_name, "Admin User");
        assert!(article.tags.is_empty());
    }

    #[tokio::test]
    async fn blank_paragraphs_are_dropped_before_persistence() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let article = create_article(
            &repo,
            &editor,
            create_input("Trimmed", "trimmed", &["  ", "", "real paragraph"]),
        )
        .await;

        assert_eq!(article.content, vec!["real paragraph"]);
        assert!(article.excerpt.starts_with("real paragraph"));
    }

    #[tokio::test]
    async fn content_of_only_blanks_is_rejected() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let result = CreateArticleUseCase::new(repo.clone())
            .execute(create_input("Blank", "blank", &["   ", ""]), &editor)
            .await;

        assert!(matches!(result, Err(ArticleError::MissingFields)));
    }

    #[tokio::test]
    async fn missing_title_is_rejected() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let mut input = create_input("x", "x", &["body"]);
        input.title = None;

        let result = CreateArticleUseCase::new(repo.clone())
            .execute(input, &editor)
            .await;

        assert!(matches!(result, Err(ArticleError::MissingFields)));
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        create_article(&repo, &editor, create_input("First", "shared-slug", &["a"])).await;

        let result = CreateArticleUseCase::new(repo.clone())
            .execute(create_input("Second", "shared-slug", &["b"]), &editor)
            .await;

        assert!(matches!(result, Err(ArticleError::SlugTaken)));
    }

    #[tokio::test]
    async fn slug_input_is_lowercased() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let article =
            create_article(&repo, &editor, create_input("Mixed", "My-Post-1", &["a"])).await;

        assert_eq!(article.slug.as_str(), "my-post-1");
    }

    #[tokio::test]
    async fn invalid_slug_is_rejected() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let result = CreateArticleUseCase::new(repo.clone())
            .execute(create_input("Bad", "has spaces", &["a"]), &editor)
            .await;

        assert!(matches!(result, Err(ArticleError::Validation(_))));
    }

    #[tokio::test]
    async fn supplied_excerpt_is_kept_and_bounded() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let mut input = create_input("Custom", "custom", &["a long body"]);
        input.excerpt = Some("Hand-written preview".to_string());
        let article = create_article(&repo, &editor, input).await;
        assert_eq!(article.excerpt, "Hand-written preview");

        let mut input = create_input("Too long", "too-long", &["a"]);
        input.excerpt = Some("x".repeat(501));
        let result = CreateArticleUseCase::new(repo.clone())
            .execute(input, &editor)
            .await;
        assert!(matches!(result, Err(ArticleError::Validation(_))));
    }

    #[tokio::test]
    async fn title_over_200_chars_is_rejected() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let result = CreateArticleUseCase::new(repo.clone())
            .execute(
                create_input(&"t".repeat(201), "long-title", &["a"]),
                &editor,
            )
            .await;

        assert!(matches!(result, Err(ArticleError::Validation(_))));
    }

    #[tokio::test]
    async fn read_time_of_450_words_is_3_minutes() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let body = vec!["word"; 450].join(" ");
        let article =
            create_article(&repo, &editor, create_input("Long", "long-read", &[&body])).await;

        assert_eq!(article.read_time, 3);
    }

    #[tokio::test]
    async fn tags_are_trimmed() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let mut input = create_input("Tagged", "tagged", &["a"]);
        input.tags = Some(vec![" rust ".to_string(), "".to_string(), "web".to_string()]);
        let article = create_article(&repo, &editor, input).await;

        assert_eq!(article.tags, vec!["rust", "web"]);
    }
}

mod visibility_tests {
    use super::*;

    #[tokio::test]
    async fn anonymous_read_of_draft_is_unavailable() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let admin = user_with_role("Admin", "admin@example.com", UserRole::Admin);
        create_article(&repo, &admin, create_input("T", "t-1", &["Hello world"])).await;

        let result = GetArticleUseCase::new(repo.clone()).execute("t-1", None).await;

        let err = result.unwrap_err();
        assert!(matches!(err, ArticleError::NotAvailable));
        assert_eq!(err.to_string(), "Article not available");
    }

    #[tokio::test]
    async fn plain_user_cannot_read_drafts() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let admin = user_with_role("Admin", "admin@example.com", UserRole::Admin);
        let viewer = user_with_role("Viewer", "viewer@example.com", UserRole::User);
        create_article(&repo, &admin, create_input("T", "t-2", &["Hello"])).await;

        let result = GetArticleUseCase::new(repo.clone())
            .execute("t-2", Some(&viewer))
            .await;

        assert!(matches!(result, Err(ArticleError::NotAvailable)));
    }

    #[tokio::test]
    async fn privileged_reads_count_views_one_by_one() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let admin = user_with_role("Admin", "admin@example.com", UserRole::Admin);
        create_article(&repo, &admin, create_input("T", "t-1", &["Hello world"])).await;

        let use_case = GetArticleUseCase::new(repo.clone());

        let first = use_case.execute("t-1", Some(&admin)).await.unwrap();
        assert_eq!(first.view_count, 1);

        let second = use_case.execute("t-1", Some(&admin)).await.unwrap();
        assert_eq!(second.view_count, 2);
    }

    #[tokio::test]
    async fn published_articles_are_readable_anonymously_and_count_views() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let mut input = create_input("Public", "public-post", &["Hello"]);
        input.status = Some("published".to_string());
        create_article(&repo, &editor, input).await;

        let use_case = GetArticleUseCase::new(repo.clone());
        for expected in 1..=3 {
            let article = use_case.execute("public-post", None).await.unwrap();
            assert_eq!(article.view_count, expected);
        }
    }

    #[tokio::test]
    async fn unknown_and_invalid_slugs_are_not_found() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let use_case = GetArticleUseCase::new(repo.clone());

        let missing = use_case.execute("no-such-article", None).await;
        assert!(matches!(missing, Err(ArticleError::NotFound)));

        let invalid = use_case.execute("not a slug!", None).await;
        assert!(matches!(invalid, Err(ArticleError::NotFound)));
    }
}

mod list_tests {
    use super::*;

    async fn seeded_store(author: &User) -> Arc<InMemoryArticleStore> {
        let repo = Arc::new(InMemoryArticleStore::new());
        for article in [
            article_at(
                "Newest published",
                "newest",
                ArticleStatus::Published,
                Category::Projects,
                1,
                author,
            ),
            article_at(
                "Older published",
                "older",
                ArticleStatus::Published,
                Category::General,
                5,
                author,
            ),
            article_at(
                "Hidden draft",
                "hidden-draft",
                ArticleStatus::Draft,
                Category::Projects,
                2,
                author,
            ),
            article_at(
                "Old archive",
                "old-archive",
                ArticleStatus::Archived,
                Category::Events,
                10,
                author,
            ),
        ] {
            repo.insert(&article).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn anonymous_listing_contains_only_published() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let repo = seeded_store(&author).await;

        let page = ListArticlesUseCase::new(repo.clone())
            .execute(ListArticlesInput::default(), None)
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert!(page
            .items
            .iter()
            .all(|a| a.status == ArticleStatus::Published));
    }

    #[tokio::test]
    async fn anonymous_status_filter_is_overridden() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let repo = seeded_store(&author).await;

        let input = ListArticlesInput {
            status: Some("draft".to_string()),
            ..Default::default()
        };
        let page = ListArticlesUseCase::new(repo.clone())
            .execute(input, None)
            .await
            .unwrap();

        assert!(page
            .items
            .iter()
            .all(|a| a.status == ArticleStatus::Published));
    }

    #[tokio::test]
    async fn plain_user_is_not_privileged() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let viewer = user_with_role("Viewer", "v@example.com", UserRole::User);
        let repo = seeded_store(&author).await;

        let input = ListArticlesInput {
            status: Some("draft".to_string()),
            ..Default::default()
        };
        let page = ListArticlesUseCase::new(repo.clone())
            .execute(input, Some(&viewer))
            .await
            .unwrap();

        assert!(page
            .items
            .iter()
            .all(|a| a.status == ArticleStatus::Published));
    }

    #[tokio::test]
    async fn editor_can_filter_by_status() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let repo = seeded_store(&author).await;

        let input = ListArticlesInput {
            status: Some("draft".to_string()),
            ..Default::default()
        };
        let page = ListArticlesUseCase::new(repo.clone())
            .execute(input, Some(&author))
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].slug.as_str(), "hidden-draft");
    }

    #[tokio::test]
    async fn editor_without_filter_sees_every_status() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let repo = seeded_store(&author).await;

        let page = ListArticlesUseCase::new(repo.clone())
            .execute(ListArticlesInput::default(), Some(&author))
            .await
            .unwrap();

        assert_eq!(page.total, 4);
    }

    #[tokio::test]
    async fn results_are_newest_first() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let repo = seeded_store(&author).await;

        let page = ListArticlesUseCase::new(repo.clone())
            .execute(ListArticlesInput::default(), None)
            .await
            .unwrap();

        let slugs: Vec<&str> = page.items.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "older"]);
    }

    #[tokio::test]
    async fn category_filter_applies() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let repo = seeded_store(&author).await;

        let input = ListArticlesInput {
            category: Some("Projects".to_string()),
            ..Default::default()
        };
        let page = ListArticlesUseCase::new(repo.clone())
            .execute(input, Some(&author))
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|a| a.category == Category::Projects));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_across_fields() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let repo = seeded_store(&author).await;

        let by_title = ListArticlesUseCase::new(repo.clone())
            .execute(
                ListArticlesInput {
                    search: Some("NEWEST".to_string()),
                    ..Default::default()
                },
                None,
            )
            .await
            .unwrap();
        assert_eq!(by_title.total, 1);

        // Matches paragraph text ("Body of ...")
        let by_content = ListArticlesUseCase::new(repo.clone())
            .execute(
                ListArticlesInput {
                    search: Some("body of older".to_string()),
                    ..Default::default()
                },
                None,
            )
            .await
            .unwrap();
        assert_eq!(by_content.total, 1);

        // Matches the category name of published Projects articles
        let by_category = ListArticlesUseCase::new(repo.clone())
            .execute(
                ListArticlesInput {
                    search: Some("projects".to_string()),
                    ..Default::default()
                },
                None,
            )
            .await
            .unwrap();
        assert_eq!(by_category.total, 1);
    }

    #[tokio::test]
    async fn pagination_math() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let repo = Arc::new(InMemoryArticleStore::new());
        for i in 0..25 {
            let article = article_at(
                &format!("Post {i}"),
                &format!("post-{i}"),
                ArticleStatus::Published,
                Category::General,
                i,
                &author,
            );
            repo.insert(&article).await.unwrap();
        }

        let use_case = ListArticlesUseCase::new(repo.clone());

        let first = use_case
            .execute(ListArticlesInput::default(), None)
            .await
            .unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 25);
        assert_eq!(first.pages, 3);
        assert_eq!(first.current_page, 1);

        let last = use_case
            .execute(
                ListArticlesInput {
                    page: Some(3),
                    ..Default::default()
                },
                None,
            )
            .await
            .unwrap();
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.current_page, 3);
    }
}

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn plain_user_cannot_update_someone_elses_article() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let intruder = user_with_role("Other", "other@example.com", UserRole::User);
        let article = create_article(&repo, &editor, create_input("Mine", "mine", &["a"])).await;

        let result = UpdateArticleUseCase::new(repo.clone())
            .execute(
                &article.article_id,
                UpdateArticleInput {
                    title: Some("Hijacked".to_string()),
                    ..Default::default()
                },
                &intruder,
            )
            .await;

        assert!(matches!(result, Err(ArticleError::UpdateForbidden)));
    }

    #[tokio::test]
    async fn editors_may_update_other_peoples_articles() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let author = user_with_role("Author", "author@example.com", UserRole::Editor);
        let other_editor = user_with_role("Other Ed", "other-ed@example.com", UserRole::Editor);
        let article = create_article(&repo, &author, create_input("Post", "post", &["a"])).await;

        let updated = UpdateArticleUseCase::new(repo.clone())
            .execute(
                &article.article_id,
                UpdateArticleInput {
                    status: Some("published".to_string()),
                    ..Default::default()
                },
                &other_editor,
            )
            .await
            .unwrap();

        assert_eq!(updated.status, ArticleStatus::Published);
    }

    #[tokio::test]
    async fn content_change_recomputes_derived_fields() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let article =
            create_article(&repo, &editor, create_input("Short", "short", &["tiny"])).await;
        assert_eq!(article.read_time, 1);

        let long_body = vec!["word"; 450].join(" ");
        let updated = UpdateArticleUseCase::new(repo.clone())
            .execute(
                &article.article_id,
                UpdateArticleInput {
                    content: Some(vec![long_body]),
                    ..Default::default()
                },
                &editor,
            )
            .await
            .unwrap();

        assert_eq!(updated.read_time, 3);
        assert!(updated.excerpt.starts_with("word word"));
    }

    #[tokio::test]
    async fn absent_fields_stay_untouched() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let mut input = create_input("Keep", "keep", &["original body"]);
        input.tags = Some(vec!["rust".to_string()]);
        input.category = Some("Projects".to_string());
        let article = create_article(&repo, &editor, input).await;

        let updated = UpdateArticleUseCase::new(repo.clone())
            .execute(
                &article.article_id,
                UpdateArticleInput {
                    title: Some("Keep, renamed".to_string()),
                    ..Default::default()
                },
                &editor,
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Keep, renamed");
        assert_eq!(updated.content, vec!["original body"]);
        assert_eq!(updated.category, Category::Projects);
        assert_eq!(updated.tags, vec!["rust"]);
    }

    #[tokio::test]
    async fn explicit_empty_tag_list_clears_tags() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let mut input = create_input("Tagged", "tagged", &["a"]);
        input.tags = Some(vec!["old".to_string()]);
        let article = create_article(&repo, &editor, input).await;

        let updated = UpdateArticleUseCase::new(repo.clone())
            .execute(
                &article.article_id,
                UpdateArticleInput {
                    tags: Some(Vec::new()),
                    ..Default::default()
                },
                &editor,
            )
            .await
            .unwrap();

        assert!(updated.tags.is_empty());
    }

    #[tokio::test]
    async fn renaming_to_a_taken_slug_is_rejected() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        create_article(&repo, &editor, create_input("One", "slug-one", &["a"])).await;
        let second =
            create_article(&repo, &editor, create_input("Two", "slug-two", &["b"])).await;

        let result = UpdateArticleUseCase::new(repo.clone())
            .execute(
                &second.article_id,
                UpdateArticleInput {
                    name: Some("slug-one".to_string()),
                    ..Default::default()
                },
                &editor,
            )
            .await;

        assert!(matches!(result, Err(ArticleError::SlugTaken)));
    }

    #[tokio::test]
    async fn renaming_to_the_current_slug_is_a_noop() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let article =
            create_article(&repo, &editor, create_input("Same", "same-slug", &["a"])).await;

        let updated = UpdateArticleUseCase::new(repo.clone())
            .execute(
                &article.article_id,
                UpdateArticleInput {
                    name: Some("same-slug".to_string()),
                    ..Default::default()
                },
                &editor,
            )
            .await
            .unwrap();

        assert_eq!(updated.slug.as_str(), "same-slug");
    }

    #[tokio::test]
    async fn updating_a_missing_article_is_not_found() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let editor = user_with_role("Ed", "ed@example.com", UserRole::Editor);

        let result = UpdateArticleUseCase::new(repo.clone())
            .execute(
                &ArticleId::new(),
                UpdateArticleInput::default(),
                &editor,
            )
            .await;

        assert!(matches!(result, Err(ArticleError::NotFound)));
    }
}

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn editors_cannot_delete_other_peoples_articles() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let author = user_with_role("Author", "author@example.com", UserRole::Editor);
        let other_editor = user_with_role("Other Ed", "other-ed@example.com", UserRole::Editor);
        let article = create_article(&repo, &author, create_input("Post", "post", &["a"])).await;

        let result = DeleteArticleUseCase::new(repo.clone())
            .execute(&article.article_id, &other_editor)
            .await;

        assert!(matches!(result, Err(ArticleError::DeleteForbidden)));
    }

    #[tokio::test]
    async fn admins_can_delete_any_article() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let author = user_with_role("Author", "author@example.com", UserRole::Editor);
        let admin = user_with_role("Admin", "admin@example.com", UserRole::Admin);
        let article = create_article(&repo, &author, create_input("Post", "post", &["a"])).await;

        DeleteArticleUseCase::new(repo.clone())
            .execute(&article.article_id, &admin)
            .await
            .unwrap();

        assert!(repo.find_by_id(&article.article_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn authors_can_delete_their_own() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let author = user_with_role("Author", "author@example.com", UserRole::Editor);
        let article = create_article(&repo, &author, create_input("Post", "post", &["a"])).await;

        DeleteArticleUseCase::new(repo.clone())
            .execute(&article.article_id, &author)
            .await
            .unwrap();

        assert!(repo.find_by_id(&article.article_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_a_missing_article_is_not_found() {
        let repo = Arc::new(InMemoryArticleStore::new());
        let admin = user_with_role("Admin", "admin@example.com", UserRole::Admin);

        let result = DeleteArticleUseCase::new(repo.clone())
            .execute(&ArticleId::new(), &admin)
            .await;

        assert!(matches!(result, Err(ArticleError::NotFound)));
    }
}

mod stats_tests {
    use super::*;

    #[tokio::test]
    async fn aggregates_counts_categories_and_popular() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let repo = Arc::new(InMemoryArticleStore::new());

        let mut seed = vec![
            article_at("P1", "p1", ArticleStatus::Published, Category::Projects, 1, &author),
            article_at("P2", "p2", ArticleStatus::Published, Category::Projects, 2, &author),
            article_at("P3", "p3", ArticleStatus::Published, Category::General, 3, &author),
            article_at("D1", "d1", ArticleStatus::Draft, Category::Events, 4, &author),
            article_at("A1", "a1", ArticleStatus::Archived, Category::Projects, 5, &author),
        ];
        seed[0].view_count = 5;
        seed[1].view_count = 11;
        seed[2].view_count = 2;
        seed[3].view_count = 100; // draft; must not appear in popular
        for article in &seed {
            repo.insert(article).await.unwrap();
        }

        let stats = ArticleStatsUseCase::new(repo.clone()).execute().await.unwrap();

        assert_eq!(stats.total, 5);
        assert_eq!(stats.published, 3);
        assert_eq!(stats.draft, 1);
        assert_eq!(stats.archived, 1);

        // Categories sorted by count, descending
        assert_eq!(stats.categories[0].category, Category::Projects);
        assert_eq!(stats.categories[0].count, 3);

        // Popular is published-only, most viewed first
        let popular: Vec<(&str, i64)> = stats
            .popular
            .iter()
            .map(|p| (p.slug.as_str(), p.view_count))
            .collect();
        assert_eq!(popular, vec![("p2", 11), ("p1", 5), ("p3", 2)]);
    }

    #[tokio::test]
    async fn popular_is_capped_at_five() {
        let author = user_with_role("Ed", "ed@example.com", UserRole::Editor);
        let repo = Arc::new(InMemoryArticleStore::new());

        for i in 0..8 {
            let mut article = article_at(
                &format!("P{i}"),
                &format!("p-{i}"),
                ArticleStatus::Published,
                Category::General,
                i,
                &author,
            );
            article.view_count = i;
            repo.insert(&article).await.unwrap();
        }

        let stats = ArticleStatsUseCase::new(repo.clone()).execute().await.unwrap();
        assert_eq!(stats.popular.len(), 5);
        assert_eq!(stats.popular[0].view_count, 7);
    }
}
