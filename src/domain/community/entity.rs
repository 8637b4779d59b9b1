// src/domain/community/entity.rs
use crate::domain::community::value_objects::{CommentBody, CommentId, DisplayName};
use crate::domain::library::UserId;
use crate::domain::story::StoryId;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub story_id: StoryId,
    pub parent_id: Option<CommentId>,
    pub body: CommentBody,
    pub author_name: DisplayName,
    pub upvotes: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id: UserId,
    pub story_id: StoryId,
    pub parent_id: Option<CommentId>,
    pub body: CommentBody,
    pub author_name: DisplayName,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<CommentThread>,
}

/// Arranges a flat list of comments into threads. Top-level threads come
/// newest first; replies inside a thread read oldest first. A reply whose
/// parent is missing is promoted to the top level.
pub fn build_threads(comments: Vec<Comment>) -> Vec<CommentThread> {
    let known: HashSet<CommentId> = comments.iter().map(|c| c.id).collect();
    let mut children: HashMap<CommentId, Vec<Comment>> = HashMap::new();
    let mut roots = Vec::new();

    for comment in comments {
        match comment.parent_id.filter(|parent| known.contains(parent)) {
            Some(parent) => children.entry(parent).or_default().push(comment),
            None => roots.push(comment),
        }
    }

    roots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    roots
        .into_iter()
        .map(|root| attach_replies(root, &mut children))
        .collect()
}

fn attach_replies(
    comment: Comment,
    children: &mut HashMap<CommentId, Vec<Comment>>,
) -> CommentThread {
    let mut replies = children.remove(&comment.id).unwrap_or_default();
    replies.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    CommentThread {
        replies: replies
            .into_iter()
            .map(|reply| attach_replies(reply, children))
            .collect(),
        comment,
    }
}
