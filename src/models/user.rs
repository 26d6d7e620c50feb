//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User account stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated id (also used as document ID)
    pub id: String,
    /// Display name chosen at registration
    pub username: String,
}
