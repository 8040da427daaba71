//! Registered user rows.
//! Thin wrappers around the `users` table.

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    /// External identifier assigned by the calling application (bot chat id).
    pub user_id: i64,
    pub username: String,
    pub created_at: String,
}
