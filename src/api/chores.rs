//! Chore Endpoints
//!
//! One-shot chores and recurring chore schedules. Recurring rule strings
//! are built by `crate::recurrence` and submitted verbatim; the backend
//! validates them and owns all occurrence computation.

use super::client::{self, ApiMessage, FetchError};

/// One-shot chore from `/chores/chores`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Chore {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    pub chore_name: String,
    #[serde(default)]
    pub chore_description: String,
    #[serde(default)]
    pub assigned_user_id: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub recurring_chore_id: Option<String>,
}

/// Recurring chore schedule from `/chores/recurring-chores/`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct RecurringChore {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    pub chore_name: String,
    #[serde(default)]
    pub chore_description: String,
    #[serde(default)]
    pub assigned_user_ids: Vec<String>,
    pub rrule: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub next_due_date: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Fields for a new recurring chore schedule.
pub struct NewRecurringChore {
    pub name: String,
    pub description: String,
    pub assigned_usernames: Vec<String>,
    pub rrule: String,
    /// ISO-8601 UTC start timestamp
    pub start_date: String,
}

/// Partial update for an existing schedule; only provided fields are sent.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RecurringChoreUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn fetch_chores() -> Result<Vec<Chore>, FetchError> {
    let response = client::get("/chores/chores")
        .send()
        .await
        .map_err(|e| FetchError::Other(format!("Network error: {}", e)))?;

    match response.status() {
        401 => Err(FetchError::Unauthorized),
        _ if !response.ok() => Err(FetchError::Other(
            client::error_message(response, "Failed to fetch chores").await,
        )),
        _ => response
            .json::<Vec<Chore>>()
            .await
            .map_err(|e| FetchError::Other(format!("Parse error: {}", e))),
    }
}

/// Create a chore. An empty `assigned_username` means "assign to me".
pub async fn create_chore(
    name: &str,
    description: &str,
    assigned_username: Option<&str>,
) -> Result<String, String> {
    let mut fields = vec![
        ("chore_name", name.to_string()),
        ("chore_description", description.to_string()),
    ];
    if let Some(username) = assigned_username {
        fields.push(("assigned_username", username.to_string()));
    }

    let response = client::post_form("/chores/create-chore", &fields).await?;
    if !response.ok() {
        return Err(client::error_message(response, "Failed to create chore").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Chore created successfully"))
}

pub async fn complete_chore(chore_id: &str) -> Result<String, String> {
    let response = client::post(&format!("/chores/complete-chore/{}", chore_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(client::error_message(response, "Failed to complete chore").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Chore marked as complete"))
}

pub async fn delete_chore(chore_id: &str) -> Result<String, String> {
    let response = client::delete(&format!("/chores/delete-chore/{}", chore_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(client::error_message(response, "Failed to delete chore").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Chore deleted successfully"))
}

pub async fn fetch_recurring_chores() -> Result<Vec<RecurringChore>, FetchError> {
    let response = client::get("/chores/recurring-chores/")
        .send()
        .await
        .map_err(|e| FetchError::Other(format!("Network error: {}", e)))?;

    match response.status() {
        401 => Err(FetchError::Unauthorized),
        _ if !response.ok() => Err(FetchError::Other(
            client::error_message(response, "Failed to fetch recurring chores").await,
        )),
        _ => response
            .json::<Vec<RecurringChore>>()
            .await
            .map_err(|e| FetchError::Other(format!("Parse error: {}", e))),
    }
}

pub async fn create_recurring_chore(new: &NewRecurringChore) -> Result<String, String> {
    let mut fields = vec![
        ("chore_name", new.name.clone()),
        ("chore_description", new.description.clone()),
    ];
    // One entry per assignee; the backend reads a repeated form key
    for username in &new.assigned_usernames {
        fields.push(("assigned_usernames", username.clone()));
    }
    fields.push(("rrule_str", new.rrule.clone()));
    fields.push(("start_date_str", new.start_date.clone()));

    let response = client::post_form("/chores/recurring-chores/", &fields).await?;
    if !response.ok() {
        return Err(client::error_message(response, "Failed to create recurring chore").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Recurring chore created successfully"))
}

pub async fn update_recurring_chore(
    recurring_chore_id: &str,
    update: &RecurringChoreUpdate,
) -> Result<String, String> {
    let mut fields = Vec::new();
    if let Some(name) = &update.name {
        fields.push(("chore_name", name.clone()));
    }
    if let Some(description) = &update.description {
        fields.push(("chore_description", description.clone()));
    }
    if let Some(active) = update.is_active {
        fields.push(("is_active", active.to_string()));
    }

    let response = client::put_form(
        &format!("/chores/recurring-chores/{}", recurring_chore_id),
        &fields,
    )
    .await?;

    if !response.ok() {
        return Err(client::error_message(response, "Failed to update recurring chore").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Recurring chore updated successfully"))
}

/// Deleting a schedule cascades to its generated chores (backend contract).
pub async fn delete_recurring_chore(recurring_chore_id: &str) -> Result<String, String> {
    let response = client::delete(&format!("/chores/recurring-chores/{}", recurring_chore_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(client::error_message(response, "Failed to delete recurring chore").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Recurring chore deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chore_deserializes_backend_shape() {
        let chore: Chore = serde_json::from_str(
            r#"{
                "_id": "c1",
                "group_id": "g1",
                "chore_name": "Dishes",
                "chore_description": "Evening dishes",
                "assigned_user_id": "u2",
                "is_completed": false,
                "created_at": "2026-03-01T18:30:00"
            }"#,
        )
        .unwrap();
        assert_eq!(chore.id.as_deref(), Some("c1"));
        assert!(!chore.is_completed);
        assert!(chore.completed_at.is_none());
    }

    #[test]
    fn test_recurring_chore_defaults_active() {
        let rc: RecurringChore = serde_json::from_str(
            r#"{
                "_id": "r1",
                "chore_name": "Trash",
                "rrule": "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO",
                "assigned_user_ids": ["u1", "u2"],
                "next_due_date": "2026-03-02T08:00:00"
            }"#,
        )
        .unwrap();
        assert!(rc.is_active);
        assert_eq!(rc.assigned_user_ids.len(), 2);
    }
}
