use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::application::ports::action_repository::{ActionChanges, ActionRepository, NewAction};
use crate::application::ports::assignment_repository::{AssignmentRepository, AssignmentTarget};
use crate::application::ports::comment_repository::CommentRepository;
use crate::application::ports::meeting_repository::{
    MeetingChanges, MeetingRepository, NewMeeting,
};
use crate::application::ports::notification_repository::NotificationRepository;
use crate::application::ports::priority_repository::{PriorityInput, PriorityRepository};
use crate::application::ports::project_repository::ProjectRepository;
use crate::application::ports::tag_repository::TagRepository;
use crate::application::ports::topic_repository::{NewTopic, TopicChanges, TopicRepository};
use crate::application::ports::user_repository::{NameTaken, UserRepository};
use crate::domain::actions::{Action, ActionStateFilter};
use crate::domain::comments::{Comment, CommentScope};
use crate::domain::meetings::Meeting;
use crate::domain::notifications::{NewNotification, Notification};
use crate::domain::priorities::Priority;
use crate::domain::projects::Project;
use crate::domain::tags::Tag;
use crate::domain::topics::Topic;
use crate::domain::users::User;

struct Row<T> {
    value: T,
    deleted: bool,
}

impl<T> Row<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            deleted: false,
        }
    }
}

fn live<T: Clone>(rows: &BTreeMap<i64, Row<T>>, id: i64) -> Option<T> {
    rows.get(&id)
        .filter(|r| !r.deleted)
        .map(|r| r.value.clone())
}

fn bury<T>(rows: &mut BTreeMap<i64, Row<T>>, id: i64) -> bool {
    match rows.get_mut(&id) {
        Some(row) if !row.deleted => {
            row.deleted = true;
            true
        }
        _ => false,
    }
}

#[derive(Default)]
struct State {
    seq: i64,
    users: BTreeMap<String, User>,
    projects: BTreeMap<i64, Row<Project>>,
    members: BTreeSet<(i64, String)>,
    meetings: BTreeMap<i64, Row<Meeting>>,
    topics: BTreeMap<i64, Row<Topic>>,
    actions: BTreeMap<i64, Row<Action>>,
    comments: BTreeMap<i64, Row<Comment>>,
    tags: BTreeMap<i64, Row<Tag>>,
    priorities: BTreeMap<i64, Row<Priority>>,
    notifications: BTreeMap<i64, Notification>,
    user_links: BTreeSet<(&'static str, i64, String)>,
    tag_links: BTreeSet<(&'static str, i64, i64)>,
    action_topics: BTreeSet<(i64, i64)>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.seq += 1;
        self.seq
    }

    // strictly increasing, one second per inserted row
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).single().unwrap_or_else(Utc::now)
            + Duration::seconds(self.seq)
    }

    fn users_of(&self, kind: &str, id: i64) -> Vec<String> {
        self.user_links
            .iter()
            .filter(|(k, target, _)| *k == kind && *target == id)
            .map(|(_, _, user)| user.clone())
            .collect()
    }

    fn tags_of(&self, kind: &str, id: i64) -> Vec<i64> {
        self.tag_links
            .iter()
            .filter(|(k, target, _)| *k == kind && *target == id)
            .filter(|(_, _, tag)| live(&self.tags, *tag).is_some())
            .map(|(_, _, tag)| *tag)
            .collect()
    }

    // a topic disappears together with its meeting
    fn topic_visible(&self, row: &Row<Topic>) -> bool {
        !row.deleted && live(&self.meetings, row.value.meeting_id).is_some()
    }

    fn visible_topic(&self, id: i64) -> Option<Topic> {
        self.topics
            .get(&id)
            .filter(|r| self.topic_visible(r))
            .map(|r| self.hydrate_topic(r.value.clone()))
    }

    fn hydrate_meeting(&self, mut meeting: Meeting) -> Meeting {
        meeting.assigned_users = self.users_of("meeting", meeting.id);
        meeting.tag_ids = self.tags_of("meeting", meeting.id);
        meeting
    }

    fn hydrate_topic(&self, mut topic: Topic) -> Topic {
        topic.project_id = live(&self.meetings, topic.meeting_id).map(|m| m.project_id);
        topic.assigned_users = self.users_of("topic", topic.id);
        topic.tag_ids = self.tags_of("topic", topic.id);
        topic
    }

    fn hydrate_action(&self, mut action: Action) -> Action {
        action.assigned_users = self.users_of("action", action.id);
        action.tag_ids = self.tags_of("action", action.id);
        action.topic_ids = self
            .action_topics
            .iter()
            .filter(|(a, _)| *a == action.id)
            .filter(|(_, t)| self.topics.get(t).is_some_and(|r| self.topic_visible(r)))
            .map(|(_, t)| *t)
            .collect();
        action
    }
}

/// In-memory implementation of every repository port.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    fn with<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        let mut guard = self.state.lock().unwrap();
        f(&mut guard)
    }

    pub fn project_fixture(id: i64, owner: &str) -> Project {
        let now = Utc::now();
        Project {
            id,
            name: format!("Project {id}"),
            description: String::new(),
            preview_url: String::new(),
            owner_id: owner.to_string(),
            ai_enabled: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub async fn meeting_fixture(&self, project_id: i64) -> Meeting {
        let start = Utc::now();
        MeetingRepository::create(
            self,
            &NewMeeting {
                project_id,
                name: "Weekly sync".into(),
                description: String::new(),
                start_date: start,
                end_date: start + Duration::hours(1),
                creator_id: "alice".into(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn topic_fixture(&self, meeting: &Meeting, changes: TopicChanges) -> Topic {
        TopicRepository::create(
            self,
            &NewTopic {
                meeting_id: meeting.id,
                title: changes.title,
                description: changes.description,
                creator_id: "alice".into(),
                force_solution: changes.force_solution,
                priority_id: changes.priority_id,
            },
        )
        .await
        .unwrap()
    }

    pub async fn action_fixture(&self, project_id: i64, changes: ActionChanges) -> Action {
        ActionRepository::create(
            self,
            &NewAction {
                project_id,
                title: changes.title,
                description: changes.description,
                due_date: changes.due_date,
                priority_id: changes.priority_id,
                creator_id: "alice".into(),
            },
        )
        .await
        .unwrap()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn ensure_user(&self, id: &str) -> anyhow::Result<()> {
        self.with(|s| {
            let now = s.now();
            s.users.entry(id.to_string()).or_insert_with(|| User {
                id: id.to_string(),
                name: None,
                created_at: now,
                updated_at: now,
            });
        });
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        Ok(self.with(|s| s.users.get(id).cloned()))
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<User>> {
        Ok(self.with(|s| {
            s.users
                .values()
                .find(|u| u.name.as_deref() == Some(name))
                .cloned()
        }))
    }

    async fn set_name(&self, id: &str, name: &str) -> anyhow::Result<Option<User>> {
        self.with(|s| {
            if s
                .users
                .values()
                .any(|u| u.id != id && u.name.as_deref() == Some(name))
            {
                return Err(anyhow::Error::new(NameTaken));
            }
            let now = s.now();
            Ok(s.users.get_mut(id).map(|u| {
                u.name = Some(name.to_string());
                u.updated_at = now;
                u.clone()
            }))
        })
    }
}

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn create(
        &self,
        owner_id: &str,
        name: &str,
        description: &str,
    ) -> anyhow::Result<Project> {
        Ok(self.with(|s| {
            let id = s.next_id();
            let mut project = MemoryStore::project_fixture(id, owner_id);
            project.name = name.to_string();
            project.description = description.to_string();
            project.created_at = s.now();
            project.updated_at = project.created_at;
            s.projects.insert(id, Row::new(project.clone()));
            project
        }))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Project>> {
        Ok(self.with(|s| live(&s.projects, id)))
    }

    async fn list_owned(&self, user_id: &str) -> anyhow::Result<Vec<Project>> {
        Ok(self.with(|s| {
            s.projects
                .values()
                .filter(|r| !r.deleted && r.value.owner_id == user_id)
                .map(|r| r.value.clone())
                .collect()
        }))
    }

    async fn list_granted(&self, user_id: &str) -> anyhow::Result<Vec<Project>> {
        Ok(self.with(|s| {
            s.members
                .iter()
                .filter(|(_, user)| user == user_id)
                .filter_map(|(pid, _)| live(&s.projects, *pid))
                .collect()
        }))
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> anyhow::Result<Option<Project>> {
        Ok(self.with(|s| {
            let now = s.now();
            s.projects
                .get_mut(&id)
                .filter(|r| !r.deleted)
                .map(|r| {
                    r.value.name = name.to_string();
                    r.value.description = description.to_string();
                    r.value.updated_at = now;
                    r.value.clone()
                })
        }))
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| bury(&mut s.projects, id)))
    }

    async fn member_ids(&self, id: i64) -> anyhow::Result<Vec<String>> {
        Ok(self.with(|s| {
            s.members
                .iter()
                .filter(|(pid, _)| *pid == id)
                .map(|(_, user)| user.clone())
                .collect()
        }))
    }

    async fn add_member(&self, id: i64, user_id: &str) -> anyhow::Result<bool> {
        Ok(self.with(|s| s.members.insert((id, user_id.to_string()))))
    }

    async fn remove_member(&self, id: i64, user_id: &str) -> anyhow::Result<bool> {
        Ok(self.with(|s| s.members.remove(&(id, user_id.to_string()))))
    }
}

#[async_trait]
impl MeetingRepository for MemoryStore {
    async fn create(&self, meeting: &NewMeeting) -> anyhow::Result<Meeting> {
        Ok(self.with(|s| {
            let id = s.next_id();
            let now = s.now();
            let row = Meeting {
                id,
                project_id: meeting.project_id,
                name: meeting.name.clone(),
                description: meeting.description.clone(),
                start_date: meeting.start_date,
                end_date: meeting.end_date,
                creator_id: meeting.creator_id.clone(),
                assigned_users: Vec::new(),
                tag_ids: Vec::new(),
                created_at: now,
                updated_at: now,
            };
            s.meetings.insert(id, Row::new(row.clone()));
            row
        }))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Meeting>> {
        Ok(self.with(|s| live(&s.meetings, id).map(|m| s.hydrate_meeting(m))))
    }

    async fn list_for_project(&self, project_id: i64) -> anyhow::Result<Vec<Meeting>> {
        Ok(self.with(|s| {
            let mut list: Vec<Meeting> = s
                .meetings
                .values()
                .filter(|r| !r.deleted && r.value.project_id == project_id)
                .map(|r| s.hydrate_meeting(r.value.clone()))
                .collect();
            list.sort_by_key(|m| (m.start_date, m.id));
            list
        }))
    }

    async fn update(&self, id: i64, changes: &MeetingChanges) -> anyhow::Result<Option<Meeting>> {
        let updated = self.with(|s| {
            let now = s.now();
            s.meetings
                .get_mut(&id)
                .filter(|r| !r.deleted)
                .map(|r| {
                    r.value.name = changes.name.clone();
                    r.value.description = changes.description.clone();
                    r.value.start_date = changes.start_date;
                    r.value.end_date = changes.end_date;
                    r.value.updated_at = now;
                })
                .is_some()
        });
        if updated {
            MeetingRepository::find(self, id).await
        } else {
            Ok(None)
        }
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| bury(&mut s.meetings, id)))
    }
}

#[async_trait]
impl TopicRepository for MemoryStore {
    async fn create(&self, topic: &NewTopic) -> anyhow::Result<Topic> {
        Ok(self.with(|s| {
            let id = s.next_id();
            let now = s.now();
            let row = Topic {
                id,
                meeting_id: topic.meeting_id,
                project_id: None,
                title: topic.title.clone(),
                description: topic.description.clone(),
                creator_id: topic.creator_id.clone(),
                solution_id: None,
                closed_at: None,
                force_solution: topic.force_solution,
                priority_id: topic.priority_id,
                assigned_users: Vec::new(),
                tag_ids: Vec::new(),
                created_at: now,
                updated_at: now,
            };
            s.topics.insert(id, Row::new(row.clone()));
            s.hydrate_topic(row)
        }))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Topic>> {
        Ok(self.with(|s| s.visible_topic(id)))
    }

    async fn list_for_meeting(&self, meeting_id: i64) -> anyhow::Result<Vec<Topic>> {
        Ok(self.with(|s| {
            s.topics
                .values()
                .filter(|r| r.value.meeting_id == meeting_id && s.topic_visible(r))
                .map(|r| s.hydrate_topic(r.value.clone()))
                .collect()
        }))
    }

    async fn update(&self, id: i64, changes: &TopicChanges) -> anyhow::Result<Option<Topic>> {
        Ok(self.with(|s| {
            let now = s.now();
            if let Some(r) = s.topics.get_mut(&id).filter(|r| !r.deleted) {
                r.value.title = changes.title.clone();
                r.value.description = changes.description.clone();
                r.value.force_solution = changes.force_solution;
                r.value.priority_id = changes.priority_id;
                r.value.updated_at = now;
            }
            s.visible_topic(id)
        }))
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| bury(&mut s.topics, id)))
    }

    async fn set_closed(
        &self,
        id: i64,
        closed_at: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Option<Topic>> {
        Ok(self.with(|s| {
            if let Some(r) = s.topics.get_mut(&id).filter(|r| !r.deleted) {
                r.value.closed_at = closed_at;
            }
            s.visible_topic(id)
        }))
    }

    async fn set_solution(
        &self,
        id: i64,
        comment_id: Option<i64>,
    ) -> anyhow::Result<Option<Topic>> {
        Ok(self.with(|s| {
            if let Some(r) = s.topics.get_mut(&id).filter(|r| !r.deleted) {
                r.value.solution_id = comment_id;
            }
            s.visible_topic(id)
        }))
    }
}

#[async_trait]
impl ActionRepository for MemoryStore {
    async fn create(&self, action: &NewAction) -> anyhow::Result<Action> {
        Ok(self.with(|s| {
            let id = s.next_id();
            let now = s.now();
            let row = Action {
                id,
                project_id: action.project_id,
                title: action.title.clone(),
                description: action.description.clone(),
                due_date: action.due_date,
                priority_id: action.priority_id,
                closed_at: None,
                creator_id: action.creator_id.clone(),
                assigned_users: Vec::new(),
                tag_ids: Vec::new(),
                topic_ids: Vec::new(),
                created_at: now,
                updated_at: now,
            };
            s.actions.insert(id, Row::new(row.clone()));
            row
        }))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Action>> {
        Ok(self.with(|s| live(&s.actions, id).map(|a| s.hydrate_action(a))))
    }

    async fn list_for_project(
        &self,
        project_id: i64,
        state: ActionStateFilter,
    ) -> anyhow::Result<Vec<Action>> {
        Ok(self.with(|s| {
            s.actions
                .values()
                .filter(|r| !r.deleted && r.value.project_id == project_id)
                .filter(|r| match state {
                    ActionStateFilter::All => true,
                    ActionStateFilter::Open => r.value.closed_at.is_none(),
                    ActionStateFilter::Closed => r.value.closed_at.is_some(),
                })
                .map(|r| s.hydrate_action(r.value.clone()))
                .collect()
        }))
    }

    async fn update(&self, id: i64, changes: &ActionChanges) -> anyhow::Result<Option<Action>> {
        Ok(self.with(|s| {
            let now = s.now();
            let action = s
                .actions
                .get_mut(&id)
                .filter(|r| !r.deleted)
                .map(|r| {
                    r.value.title = changes.title.clone();
                    r.value.description = changes.description.clone();
                    r.value.due_date = changes.due_date;
                    r.value.priority_id = changes.priority_id;
                    r.value.updated_at = now;
                    r.value.clone()
                });
            action.map(|a| s.hydrate_action(a))
        }))
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| bury(&mut s.actions, id)))
    }

    async fn set_closed(
        &self,
        id: i64,
        closed_at: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Option<Action>> {
        Ok(self.with(|s| {
            let action = s.actions.get_mut(&id).filter(|r| !r.deleted).map(|r| {
                r.value.closed_at = closed_at;
                r.value.clone()
            });
            action.map(|a| s.hydrate_action(a))
        }))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn create(
        &self,
        author_id: &str,
        scope: &CommentScope,
        content: &str,
    ) -> anyhow::Result<Comment> {
        Ok(self.with(|s| {
            let id = s.next_id();
            let now = s.now();
            let (meeting_id, topic_id, action_id) = match *scope {
                CommentScope::Project(_) => (None, None, None),
                CommentScope::Meeting { meeting_id, .. } => (Some(meeting_id), None, None),
                CommentScope::Topic {
                    meeting_id,
                    topic_id,
                    ..
                } => (Some(meeting_id), Some(topic_id), None),
                CommentScope::Action { action_id, .. } => (None, None, Some(action_id)),
            };
            let row = Comment {
                id,
                author_id: author_id.to_string(),
                content: content.to_string(),
                project_id: Some(scope.project_id()),
                meeting_id,
                topic_id,
                action_id,
                created_at: now,
                updated_at: now,
            };
            s.comments.insert(id, Row::new(row.clone()));
            row
        }))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Comment>> {
        Ok(self.with(|s| live(&s.comments, id)))
    }

    async fn list_for_scope(&self, scope: &CommentScope) -> anyhow::Result<Vec<Comment>> {
        Ok(self.with(|s| {
            s.comments
                .values()
                .filter(|r| !r.deleted && scope.contains(&r.value))
                .map(|r| r.value.clone())
                .collect()
        }))
    }

    async fn update_content(&self, id: i64, content: &str) -> anyhow::Result<Option<Comment>> {
        Ok(self.with(|s| {
            let now = s.now();
            s.comments
                .get_mut(&id)
                .filter(|r| !r.deleted)
                .map(|r| {
                    r.value.content = content.to_string();
                    r.value.updated_at = now;
                    r.value.clone()
                })
        }))
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| bury(&mut s.comments, id)))
    }
}

#[async_trait]
impl TagRepository for MemoryStore {
    async fn create(&self, project_id: i64, title: &str, color: &str) -> anyhow::Result<Tag> {
        Ok(self.with(|s| {
            let id = s.next_id();
            let now = s.now();
            let tag = Tag {
                id,
                project_id,
                title: title.to_string(),
                color: color.to_string(),
                created_at: now,
                updated_at: now,
            };
            s.tags.insert(id, Row::new(tag.clone()));
            tag
        }))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Tag>> {
        Ok(self.with(|s| live(&s.tags, id)))
    }

    async fn list_for_project(&self, project_id: i64) -> anyhow::Result<Vec<Tag>> {
        Ok(self.with(|s| {
            let mut list: Vec<Tag> = s
                .tags
                .values()
                .filter(|r| !r.deleted && r.value.project_id == project_id)
                .map(|r| r.value.clone())
                .collect();
            list.sort_by(|a, b| a.title.cmp(&b.title));
            list
        }))
    }

    async fn update(&self, id: i64, title: &str, color: &str) -> anyhow::Result<Option<Tag>> {
        Ok(self.with(|s| {
            let now = s.now();
            s.tags.get_mut(&id).filter(|r| !r.deleted).map(|r| {
                r.value.title = title.to_string();
                r.value.color = color.to_string();
                r.value.updated_at = now;
                r.value.clone()
            })
        }))
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| bury(&mut s.tags, id)))
    }
}

#[async_trait]
impl PriorityRepository for MemoryStore {
    async fn create(&self, project_id: i64, input: &PriorityInput) -> anyhow::Result<Priority> {
        Ok(self.with(|s| {
            let id = s.next_id();
            let now = s.now();
            let priority = Priority {
                id,
                project_id,
                title: input.title.clone(),
                weight: input.weight,
                color: input.color.clone(),
                created_at: now,
                updated_at: now,
            };
            s.priorities.insert(id, Row::new(priority.clone()));
            priority
        }))
    }

    async fn find(&self, id: i64) -> anyhow::Result<Option<Priority>> {
        Ok(self.with(|s| live(&s.priorities, id)))
    }

    async fn list_for_project(&self, project_id: i64) -> anyhow::Result<Vec<Priority>> {
        Ok(self.with(|s| {
            let mut list: Vec<Priority> = s
                .priorities
                .values()
                .filter(|r| !r.deleted && r.value.project_id == project_id)
                .map(|r| r.value.clone())
                .collect();
            list.sort_by_key(|p| (std::cmp::Reverse(p.weight), p.id));
            list
        }))
    }

    async fn update(&self, id: i64, input: &PriorityInput) -> anyhow::Result<Option<Priority>> {
        Ok(self.with(|s| {
            let now = s.now();
            s.priorities
                .get_mut(&id)
                .filter(|r| !r.deleted)
                .map(|r| {
                    r.value.title = input.title.clone();
                    r.value.weight = input.weight;
                    r.value.color = input.color.clone();
                    r.value.updated_at = now;
                    r.value.clone()
                })
        }))
    }

    async fn soft_delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| {
            if !bury(&mut s.priorities, id) {
                return false;
            }
            for row in s.topics.values_mut() {
                if row.value.priority_id == Some(id) {
                    row.value.priority_id = None;
                }
            }
            for row in s.actions.values_mut() {
                if row.value.priority_id == Some(id) {
                    row.value.priority_id = None;
                }
            }
            true
        }))
    }
}

#[async_trait]
impl NotificationRepository for MemoryStore {
    async fn create(&self, notification: &NewNotification) -> anyhow::Result<Notification> {
        Ok(self.with(|s| {
            let id = s.next_id();
            let row = Notification {
                id,
                user_id: notification.user_id.clone(),
                title: notification.title.clone(),
                suffix: notification.suffix.clone(),
                description: notification.description.clone(),
                link: notification.link.clone(),
                link_title: notification.link_title.clone(),
                read_at: None,
                created_at: s.now(),
            };
            s.notifications.insert(id, row.clone());
            row
        }))
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        unread_only: bool,
    ) -> anyhow::Result<Vec<Notification>> {
        Ok(self.with(|s| {
            s.notifications
                .values()
                .rev()
                .filter(|n| n.user_id == user_id && (!unread_only || n.read_at.is_none()))
                .cloned()
                .collect()
        }))
    }

    async fn mark_read(&self, id: i64, user_id: &str) -> anyhow::Result<bool> {
        Ok(self.with(|s| {
            let now = s.now();
            match s.notifications.get_mut(&id) {
                Some(n) if n.user_id == user_id => {
                    n.read_at.get_or_insert(now);
                    true
                }
                _ => false,
            }
        }))
    }

    async fn mark_all_read(&self, user_id: &str) -> anyhow::Result<u64> {
        Ok(self.with(|s| {
            let now = s.now();
            let mut count = 0;
            for n in s.notifications.values_mut() {
                if n.user_id == user_id && n.read_at.is_none() {
                    n.read_at = Some(now);
                    count += 1;
                }
            }
            count
        }))
    }

    async fn delete(&self, id: i64, user_id: &str) -> anyhow::Result<bool> {
        Ok(self.with(|s| {
            let owned = s
                .notifications
                .get(&id)
                .is_some_and(|n| n.user_id == user_id);
            owned && s.notifications.remove(&id).is_some()
        }))
    }
}

#[async_trait]
impl AssignmentRepository for MemoryStore {
    async fn assign_user(&self, target: AssignmentTarget, user_id: &str) -> anyhow::Result<bool> {
        Ok(self.with(|s| {
            s.user_links
                .insert((target.kind(), target.id(), user_id.to_string()))
        }))
    }

    async fn unassign_user(
        &self,
        target: AssignmentTarget,
        user_id: &str,
    ) -> anyhow::Result<bool> {
        Ok(self.with(|s| {
            s.user_links
                .remove(&(target.kind(), target.id(), user_id.to_string()))
        }))
    }

    async fn link_tag(&self, target: AssignmentTarget, tag_id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| s.tag_links.insert((target.kind(), target.id(), tag_id))))
    }

    async fn unlink_tag(&self, target: AssignmentTarget, tag_id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| s.tag_links.remove(&(target.kind(), target.id(), tag_id))))
    }

    async fn link_action_topic(&self, action_id: i64, topic_id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| s.action_topics.insert((action_id, topic_id))))
    }

    async fn unlink_action_topic(&self, action_id: i64, topic_id: i64) -> anyhow::Result<bool> {
        Ok(self.with(|s| s.action_topics.remove(&(action_id, topic_id))))
    }
}
