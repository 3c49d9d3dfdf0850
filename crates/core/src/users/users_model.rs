//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::serde_datetime;

/// Domain model for an account holder. The password hash never leaves the
/// backend; it is skipped during serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(with = "serde_datetime")]
    pub created_at: NaiveDateTime,
}

/// Input model for registering a user. `password_hash` is produced by the
/// server's auth layer; the core never sees plaintext passwords.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
}
