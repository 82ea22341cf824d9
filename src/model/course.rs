use super::UserId;
use serde::{Deserialize, Serialize};

record_id!(
    /// Type-safe identifier for Courses.
    CourseId,
    "course"
);

/// A course. Its owner is the faculty member who approves student uploads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub owner_id: UserId,
}

#[derive(Debug, Clone)]
pub struct CourseCreate {
    pub name: String,
    pub owner_id: UserId,
}

/// Store filter for courses.
#[derive(Debug, Clone, Default)]
pub struct CourseQuery {
    pub owner_id: Option<UserId>,
}
