//! Repository-contract tests over an in-memory implementation
//!
//! The in-memory store mirrors the Postgres repository's contracts:
//! feed ordering, typed missing-post errors, mutation counts, and the
//! activity view's post-title join.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};

use crate::domain::entity::{
    Comment, CommentDetail, CommentWithPost, NewComment, NewPost, Post, PostDetail, PostPatch,
    PostSummary, UserActivity, UserProfile,
};
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};
use kernel::id::{CommentId, Id, PostId, UserId};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone)]
struct StoredUser {
    id: i64,
    username: String,
    email: String,
}

#[derive(Clone)]
struct MemoryContentRepository {
    users: Arc<Mutex<Vec<StoredUser>>>,
    posts: Arc<Mutex<Vec<Post>>>,
    comments: Arc<Mutex<Vec<Comment>>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryContentRepository {
    fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            posts: Arc::new(Mutex::new(Vec::new())),
            comments: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn add_user(&self, username: &str, email: &str) -> UserId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.users.lock().unwrap().push(StoredUser {
            id,
            username: username.to_string(),
            email: email.to_string(),
        });
        Id::from_i64(id)
    }

    fn username_of(&self, user_id: UserId) -> String {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id.as_i64())
            .map(|u| u.username.clone())
            .unwrap_or_default()
    }

    fn detail_of(&self, post: &Post) -> PostDetail {
        let comments = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post.id)
            .map(|c| CommentDetail {
                id: c.id,
                comment_text: c.comment_text.clone(),
                post_id: c.post_id,
                user_id: c.user_id,
                created_at: c.created_at,
                username: self.username_of(c.user_id),
            })
            .collect();

        PostDetail {
            id: post.id,
            title: post.title.clone(),
            post_text: post.post_text.clone(),
            created_at: post.created_at,
            username: self.username_of(post.user_id),
            comments,
        }
    }
}

impl ContentRepository for MemoryContentRepository {
    async fn feed(&self) -> ContentResult<Vec<PostDetail>> {
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts.iter().map(|p| self.detail_of(p)).collect())
    }

    async fn find_post(&self, id: PostId) -> ContentResult<Option<PostDetail>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .map(|p| self.detail_of(p)))
    }

    async fn posts_by_author(&self, user_id: UserId) -> ContentResult<Vec<PostDetail>> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts.iter().map(|p| self.detail_of(p)).collect())
    }

    async fn create_post(&self, new_post: &NewPost) -> ContentResult<Post> {
        let post = Post {
            id: Id::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst)),
            title: new_post.title.clone(),
            post_text: new_post.post_text.clone(),
            user_id: new_post.user_id,
            created_at: Utc::now(),
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: PostId, patch: &PostPatch) -> ContentResult<u64> {
        let mut posts = self.posts.lock().unwrap();
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(0);
        };
        if let Some(title) = &patch.title {
            post.title = title.clone();
        }
        if let Some(post_text) = &patch.post_text {
            post.post_text = post_text.clone();
        }
        Ok(1)
    }

    async fn delete_post(&self, id: PostId) -> ContentResult<u64> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok((before - posts.len()) as u64)
    }

    async fn list_comments(&self) -> ContentResult<Vec<CommentDetail>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .map(|c| CommentDetail {
                id: c.id,
                comment_text: c.comment_text.clone(),
                post_id: c.post_id,
                user_id: c.user_id,
                created_at: c.created_at,
                username: self.username_of(c.user_id),
            })
            .collect())
    }

    async fn create_comment(&self, new_comment: &NewComment) -> ContentResult<Comment> {
        // Mirrors the foreign key on comments.post_id
        if !self
            .posts
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.id == new_comment.post_id)
        {
            return Err(ContentError::PostNotFound);
        }

        let comment = Comment {
            id: Id::from_i64(self.next_id.fetch_add(1, Ordering::SeqCst)),
            comment_text: new_comment.comment_text.clone(),
            user_id: new_comment.user_id,
            post_id: new_comment.post_id,
            created_at: Utc::now(),
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn delete_comment(&self, id: CommentId) -> ContentResult<u64> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        Ok((before - comments.len()) as u64)
    }

    async fn user_activity(&self, user_id: UserId) -> ContentResult<Option<UserActivity>> {
        let user = {
            let users = self.users.lock().unwrap();
            let Some(user) = users.iter().find(|u| u.id == user_id.as_i64()) else {
                return Ok(None);
            };
            UserProfile {
                id: Id::from_i64(user.id),
                username: user.username.clone(),
                email: user.email.clone(),
            }
        };

        let posts: Vec<PostSummary> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .map(|p| PostSummary {
                id: p.id,
                title: p.title.clone(),
                post_text: p.post_text.clone(),
                created_at: p.created_at,
            })
            .collect();

        let posts_snapshot = self.posts.lock().unwrap().clone();
        let comments: Vec<CommentWithPost> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .map(|c| CommentWithPost {
                id: c.id,
                comment_text: c.comment_text.clone(),
                post_id: c.post_id,
                user_id: c.user_id,
                created_at: c.created_at,
                post_title: posts_snapshot
                    .iter()
                    .find(|p| p.id == c.post_id)
                    .map(|p| p.title.clone())
                    .unwrap_or_default(),
            })
            .collect();

        Ok(Some(UserActivity {
            user,
            posts,
            comments,
        }))
    }
}

// ============================================================================
// Tests
// ============================================================================

async fn create_post(repo: &MemoryContentRepository, title: &str, user_id: UserId) -> Post {
    repo.create_post(&NewPost::new(title.to_string(), "body".to_string(), user_id).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn feed_is_newest_first() {
    let repo = MemoryContentRepository::new();
    let author = repo.add_user("alice", "a@b.com");

    let first = create_post(&repo, "first", author).await;
    let second = create_post(&repo, "second", author).await;
    create_post(&repo, "third", author).await;

    // Force distinct timestamps (creation can land in the same tick)
    {
        let mut posts = repo.posts.lock().unwrap();
        let base = Utc::now();
        for post in posts.iter_mut() {
            let offset = if post.id == first.id {
                2
            } else if post.id == second.id {
                1
            } else {
                0
            };
            post.created_at = base - Duration::seconds(offset);
        }
    }

    let feed = repo.feed().await.unwrap();
    let titles: Vec<&str> = feed.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn feed_includes_author_and_comment_usernames() {
    let repo = MemoryContentRepository::new();
    let author = repo.add_user("alice", "a@b.com");
    let commenter = repo.add_user("bob", "b@b.com");

    let post = create_post(&repo, "hello", author).await;
    repo.create_comment(&NewComment::new("hi!".to_string(), commenter, post.id).unwrap())
        .await
        .unwrap();

    let feed = repo.feed().await.unwrap();
    assert_eq!(feed[0].username, "alice");
    assert_eq!(feed[0].comments.len(), 1);
    assert_eq!(feed[0].comments[0].username, "bob");
}

#[tokio::test]
async fn comment_on_missing_post_is_rejected() {
    let repo = MemoryContentRepository::new();
    let user = repo.add_user("alice", "a@b.com");

    let result = repo
        .create_comment(&NewComment::new("hi".to_string(), user, Id::from_i64(999)).unwrap())
        .await;

    assert!(matches!(result, Err(ContentError::PostNotFound)));
}

#[tokio::test]
async fn mutation_counts_signal_missing_rows() {
    let repo = MemoryContentRepository::new();
    let author = repo.add_user("alice", "a@b.com");
    let post = create_post(&repo, "hello", author).await;

    let patch = PostPatch {
        title: Some("renamed".to_string()),
        ..Default::default()
    };
    assert_eq!(repo.update_post(post.id, &patch).await.unwrap(), 1);
    assert_eq!(repo.update_post(Id::from_i64(999), &patch).await.unwrap(), 0);

    assert_eq!(repo.delete_post(post.id).await.unwrap(), 1);
    assert_eq!(repo.delete_post(post.id).await.unwrap(), 0);
}

#[tokio::test]
async fn user_activity_joins_post_titles() {
    let repo = MemoryContentRepository::new();
    let author = repo.add_user("alice", "a@b.com");
    let commenter = repo.add_user("bob", "b@b.com");

    let post = create_post(&repo, "hello world", author).await;
    repo.create_comment(&NewComment::new("nice".to_string(), commenter, post.id).unwrap())
        .await
        .unwrap();

    let activity = repo.user_activity(commenter).await.unwrap().unwrap();
    assert_eq!(activity.user.username, "bob");
    assert!(activity.posts.is_empty());
    assert_eq!(activity.comments.len(), 1);
    assert_eq!(activity.comments[0].post_title, "hello world");

    assert!(repo.user_activity(Id::from_i64(999)).await.unwrap().is_none());
}
