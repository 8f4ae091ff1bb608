use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub author_id: String,
    pub content: String,
    pub project_id: Option<i64>,
    pub meeting_id: Option<i64>,
    pub topic_id: Option<i64>,
    pub action_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What a comment is attached to. The most specific scope wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentScope {
    Project(i64),
    Meeting { project_id: i64, meeting_id: i64 },
    Topic { project_id: i64, meeting_id: i64, topic_id: i64 },
    Action { project_id: i64, action_id: i64 },
}

impl CommentScope {
    pub fn project_id(&self) -> i64 {
        match *self {
            CommentScope::Project(id) => id,
            CommentScope::Meeting { project_id, .. }
            | CommentScope::Topic { project_id, .. }
            | CommentScope::Action { project_id, .. } => project_id,
        }
    }

    /// True when the comment is attached exactly to this scope.
    pub fn contains(&self, comment: &Comment) -> bool {
        if comment.project_id != Some(self.project_id()) {
            return false;
        }
        match *self {
            CommentScope::Project(_) => {
                comment.meeting_id.is_none()
                    && comment.topic_id.is_none()
                    && comment.action_id.is_none()
            }
            CommentScope::Meeting { meeting_id, .. } => {
                comment.meeting_id == Some(meeting_id) && comment.topic_id.is_none()
            }
            CommentScope::Topic { topic_id, .. } => comment.topic_id == Some(topic_id),
            CommentScope::Action { action_id, .. } => comment.action_id == Some(action_id),
        }
    }
}
