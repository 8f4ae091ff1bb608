use crate::domain::actions::Action;
use crate::domain::comments::Comment;
use crate::domain::meetings::Meeting;
use crate::domain::priorities::Priority;
use crate::domain::projects::Project;
use crate::domain::tags::Tag;
use crate::domain::topics::Topic;

/// Answers whether a project-scoped entity belongs to the given project.
pub trait ProjectOwned {
    fn belongs_to_project(&self, project_id: i64) -> bool;
}

impl ProjectOwned for Project {
    fn belongs_to_project(&self, project_id: i64) -> bool {
        self.id == project_id
    }
}

impl ProjectOwned for Meeting {
    fn belongs_to_project(&self, project_id: i64) -> bool {
        self.project_id == project_id
    }
}

impl ProjectOwned for Topic {
    // The meeting may not have been loaded with the topic; then nothing matches.
    fn belongs_to_project(&self, project_id: i64) -> bool {
        self.project_id == Some(project_id)
    }
}

impl ProjectOwned for Action {
    fn belongs_to_project(&self, project_id: i64) -> bool {
        self.project_id == project_id
    }
}

impl ProjectOwned for Comment {
    fn belongs_to_project(&self, project_id: i64) -> bool {
        self.project_id == Some(project_id)
    }
}

impl ProjectOwned for Tag {
    fn belongs_to_project(&self, project_id: i64) -> bool {
        self.project_id == project_id
    }
}

impl ProjectOwned for Priority {
    fn belongs_to_project(&self, project_id: i64) -> bool {
        self.project_id == project_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn topic(project_id: Option<i64>) -> Topic {
        Topic {
            id: 10,
            meeting_id: 3,
            project_id,
            title: "Budget".into(),
            description: String::new(),
            creator_id: "alice".into(),
            solution_id: None,
            closed_at: None,
            force_solution: false,
            priority_id: None,
            assigned_users: vec![],
            tag_ids: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn topic_without_loaded_meeting_never_matches() {
        assert!(!topic(None).belongs_to_project(0));
        assert!(!topic(None).belongs_to_project(1));
        assert!(topic(Some(1)).belongs_to_project(1));
        assert!(!topic(Some(1)).belongs_to_project(2));
    }

    #[test]
    fn tag_and_priority_compare_project_id() {
        let now = Utc::now();
        let tag = Tag {
            id: 1,
            project_id: 4,
            title: "infra".into(),
            color: "#ff0000".into(),
            created_at: now,
            updated_at: now,
        };
        let prio = Priority {
            id: 2,
            project_id: 5,
            title: "high".into(),
            weight: 10,
            color: "#00ff00".into(),
            created_at: now,
            updated_at: now,
        };
        assert!(tag.belongs_to_project(4));
        assert!(!tag.belongs_to_project(5));
        assert!(prio.belongs_to_project(5));
        assert!(!prio.belongs_to_project(4));
    }

    #[test]
    fn project_matches_its_own_id() {
        let now = Utc::now();
        let project = Project {
            id: 9,
            name: "Board".into(),
            description: String::new(),
            preview_url: String::new(),
            owner_id: "alice".into(),
            ai_enabled: false,
            created_at: now,
            updated_at: now,
        };
        assert!(project.belongs_to_project(9));
        assert!(!project.belongs_to_project(10));
    }
}
