// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logged exercise model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored exercise record in Firestore.
///
/// `date` serializes as a `YYYY-MM-DD` string, so the store's
/// lexicographic field comparison orders records chronologically and the
/// log endpoint's range filter is a plain string compare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Generated id (also used as document ID)
    pub id: String,
    /// Owning user's id (not validated for existence at write time)
    pub user_id: String,
    /// What the exercise was
    pub description: String,
    /// Duration in minutes
    pub duration: i64,
    /// Calendar date the exercise happened
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_serializes_as_iso_string() {
        let exercise = Exercise {
            id: "abc123".to_string(),
            user_id: "user456".to_string(),
            description: "run".to_string(),
            duration: 30,
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        };

        let value = serde_json::to_value(&exercise).unwrap();
        assert_eq!(value["date"], serde_json::json!("2023-01-15"));
        assert_eq!(value["duration"], serde_json::json!(30));
    }

    #[test]
    fn test_date_round_trips() {
        let json = serde_json::json!({
            "id": "abc123",
            "user_id": "user456",
            "description": "swim",
            "duration": 45,
            "date": "2024-06-01",
        });

        let exercise: Exercise = serde_json::from_value(json).unwrap();
        assert_eq!(exercise.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }
}
