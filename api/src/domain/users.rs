use chrono::{DateTime, Utc};

/// A user known to the service. The ID is the subject issued by the identity provider.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
