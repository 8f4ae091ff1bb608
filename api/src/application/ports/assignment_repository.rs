use async_trait::async_trait;

/// Entity that users and tags can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentTarget {
    Meeting(i64),
    Topic(i64),
    Action(i64),
}

impl AssignmentTarget {
    pub fn id(&self) -> i64 {
        match *self {
            AssignmentTarget::Meeting(id)
            | AssignmentTarget::Topic(id)
            | AssignmentTarget::Action(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AssignmentTarget::Meeting(_) => "meeting",
            AssignmentTarget::Topic(_) => "topic",
            AssignmentTarget::Action(_) => "action",
        }
    }
}

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    // true when the association row was newly created
    async fn assign_user(&self, target: AssignmentTarget, user_id: &str) -> anyhow::Result<bool>;
    async fn unassign_user(&self, target: AssignmentTarget, user_id: &str)
    -> anyhow::Result<bool>;
    async fn link_tag(&self, target: AssignmentTarget, tag_id: i64) -> anyhow::Result<bool>;
    async fn unlink_tag(&self, target: AssignmentTarget, tag_id: i64) -> anyhow::Result<bool>;
    async fn link_action_topic(&self, action_id: i64, topic_id: i64) -> anyhow::Result<bool>;
    async fn unlink_action_topic(&self, action_id: i64, topic_id: i64) -> anyhow::Result<bool>;
}
