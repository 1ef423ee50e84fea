//! PostgreSQL Repository Implementation

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::{
    Comment, CommentDetail, CommentWithPost, NewComment, NewPost, Post, PostDetail, PostPatch,
    PostSummary, UserActivity, UserProfile,
};
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};
use kernel::id::{CommentId, Id, PostId, UserId};

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load comments for a set of post heads and assemble details,
    /// preserving the head ordering
    async fn attach_comments(&self, heads: Vec<PostHeadRow>) -> ContentResult<Vec<PostDetail>> {
        if heads.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<i64> = heads.iter().map(|h| h.id).collect();

        let rows = sqlx::query_as::<_, CommentDetailRow>(
            r#"
            SELECT c.id, c.comment_text, c.post_id, c.user_id, c.created_at, u.username
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.post_id = ANY($1)
            ORDER BY c.created_at
            "#,
        )
        .bind(&post_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_post: HashMap<i64, Vec<CommentDetail>> = HashMap::new();
        for row in rows {
            by_post
                .entry(row.post_id)
                .or_default()
                .push(row.into_detail());
        }

        Ok(heads
            .into_iter()
            .map(|head| {
                let comments = by_post.remove(&head.id).unwrap_or_default();
                head.into_detail(comments)
            })
            .collect())
    }
}

impl ContentRepository for PgContentRepository {
    // ------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------

    async fn feed(&self) -> ContentResult<Vec<PostDetail>> {
        let heads = sqlx::query_as::<_, PostHeadRow>(
            r#"
            SELECT p.id, p.title, p.post_text, p.created_at, u.username
            FROM posts p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        self.attach_comments(heads).await
    }

    async fn find_post(&self, id: PostId) -> ContentResult<Option<PostDetail>> {
        let head = sqlx::query_as::<_, PostHeadRow>(
            r#"
            SELECT p.id, p.title, p.post_text, p.created_at, u.username
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        match head {
            Some(head) => Ok(self.attach_comments(vec![head]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn posts_by_author(&self, user_id: UserId) -> ContentResult<Vec<PostDetail>> {
        let heads = sqlx::query_as::<_, PostHeadRow>(
            r#"
            SELECT p.id, p.title, p.post_text, p.created_at, u.username
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.user_id = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        self.attach_comments(heads).await
    }

    async fn create_post(&self, new_post: &NewPost) -> ContentResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, post_text, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, post_text, user_id, created_at
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.post_text)
        .bind(new_post.user_id.as_i64())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post())
    }

    async fn update_post(&self, id: PostId, patch: &PostPatch) -> ContentResult<u64> {
        let affected = sqlx::query(
            r#"
            UPDATE posts SET
                title = COALESCE($2, title),
                post_text = COALESCE($3, post_text)
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(patch.title.as_deref())
        .bind(patch.post_text.as_deref())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected)
    }

    async fn delete_post(&self, id: PostId) -> ContentResult<u64> {
        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    async fn list_comments(&self) -> ContentResult<Vec<CommentDetail>> {
        let rows = sqlx::query_as::<_, CommentDetailRow>(
            r#"
            SELECT c.id, c.comment_text, c.post_id, c.user_id, c.created_at, u.username
            FROM comments c
            JOIN users u ON u.id = c.user_id
            ORDER BY c.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentDetailRow::into_detail).collect())
    }

    async fn create_comment(&self, new_comment: &NewComment) -> ContentResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (comment_text, user_id, post_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, comment_text, user_id, post_id, created_at
            "#,
        )
        .bind(&new_comment.comment_text)
        .bind(new_comment.user_id.as_i64())
        .bind(new_comment.post_id.as_i64())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_missing_post)?;

        Ok(row.into_comment())
    }

    async fn delete_comment(&self, id: CommentId) -> ContentResult<u64> {
        let deleted = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    // ------------------------------------------------------------------
    // User activity
    // ------------------------------------------------------------------

    async fn user_activity(&self, user_id: UserId) -> ContentResult<Option<UserActivity>> {
        // Password-free projection of the user row
        let user = sqlx::query_as::<_, UserProfileRow>(
            "SELECT id, username, email FROM users WHERE id = $1",
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        let posts = sqlx::query_as::<_, PostSummaryRow>(
            r#"
            SELECT id, title, post_text, created_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        // Each comment joined one level further to its parent post title
        let comments = sqlx::query_as::<_, CommentWithPostRow>(
            r#"
            SELECT c.id, c.comment_text, c.post_id, c.user_id, c.created_at,
                   p.title AS post_title
            FROM comments c
            JOIN posts p ON p.id = c.post_id
            WHERE c.user_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(UserActivity {
            user: user.into_profile(),
            posts: posts.into_iter().map(PostSummaryRow::into_summary).collect(),
            comments: comments
                .into_iter()
                .map(CommentWithPostRow::into_comment)
                .collect(),
        }))
    }
}

/// Map a foreign-key violation on comments.post_id to the typed error
fn map_missing_post(err: sqlx::Error) -> ContentError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23503")
            && db_err.constraint().is_some_and(|c| c.contains("post"))
        {
            return ContentError::PostNotFound;
        }
    }
    ContentError::Database(err)
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    post_text: String,
    user_id: i64,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: Id::from_i64(self.id),
            title: self.title,
            post_text: self.post_text,
            user_id: Id::from_i64(self.user_id),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostHeadRow {
    id: i64,
    title: String,
    post_text: String,
    created_at: DateTime<Utc>,
    username: String,
}

impl PostHeadRow {
    fn into_detail(self, comments: Vec<CommentDetail>) -> PostDetail {
        PostDetail {
            id: Id::from_i64(self.id),
            title: self.title,
            post_text: self.post_text,
            created_at: self.created_at,
            username: self.username,
            comments,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    comment_text: String,
    user_id: i64,
    post_id: i64,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            id: Id::from_i64(self.id),
            comment_text: self.comment_text,
            user_id: Id::from_i64(self.user_id),
            post_id: Id::from_i64(self.post_id),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentDetailRow {
    id: i64,
    comment_text: String,
    post_id: i64,
    user_id: i64,
    created_at: DateTime<Utc>,
    username: String,
}

impl CommentDetailRow {
    fn into_detail(self) -> CommentDetail {
        CommentDetail {
            id: Id::from_i64(self.id),
            comment_text: self.comment_text,
            post_id: Id::from_i64(self.post_id),
            user_id: Id::from_i64(self.user_id),
            created_at: self.created_at,
            username: self.username,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentWithPostRow {
    id: i64,
    comment_text: String,
    post_id: i64,
    user_id: i64,
    created_at: DateTime<Utc>,
    post_title: String,
}

impl CommentWithPostRow {
    fn into_comment(self) -> CommentWithPost {
        CommentWithPost {
            id: Id::from_i64(self.id),
            comment_text: self.comment_text,
            post_id: Id::from_i64(self.post_id),
            user_id: Id::from_i64(self.user_id),
            created_at: self.created_at,
            post_title: self.post_title,
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserProfileRow {
    id: i64,
    username: String,
    email: String,
}

impl UserProfileRow {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            id: Id::from_i64(self.id),
            username: self.username,
            email: self.email,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostSummaryRow {
    id: i64,
    title: String,
    post_text: String,
    created_at: DateTime<Utc>,
}

impl PostSummaryRow {
    fn into_summary(self) -> PostSummary {
        PostSummary {
            id: Id::from_i64(self.id),
            title: self.title,
            post_text: self.post_text,
            created_at: self.created_at,
        }
    }
}
