//! Group Endpoints
//!
//! Household group lookup and membership actions. The backend returns
//! member ids and usernames as two parallel arrays; `Group::members` pairs
//! them up once so the positional assumption lives in a single place.

use super::client::{self, ApiMessage, FetchError};

/// Current group snapshot from `/groups/my-group`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Group {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub group_name: String,
    #[serde(default)]
    pub group_admin_id: String,
    #[serde(default)]
    pub group_admin_username: String,
    #[serde(default)]
    pub users_in_group: Vec<String>,
    #[serde(default)]
    pub users_in_group_usernames: Vec<String>,
}

/// A member id paired with its username.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub id: String,
    pub username: String,
}

impl Group {
    /// Pair member ids with usernames by position, truncating at the
    /// shorter array if the backend ever returns mismatched lengths.
    pub fn members(&self) -> Vec<Member> {
        self.users_in_group
            .iter()
            .zip(self.users_in_group_usernames.iter())
            .map(|(id, username)| Member {
                id: id.clone(),
                username: username.clone(),
            })
            .collect()
    }

    /// Username for a member id, for rendering assignees.
    pub fn username_for(&self, user_id: &str) -> String {
        self.members()
            .into_iter()
            .find(|m| m.id == user_id)
            .map(|m| m.username)
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Fetch the caller's group. `NotFound` means "not in a group yet".
pub async fn fetch_my_group() -> Result<Group, FetchError> {
    let response = client::get("/groups/my-group")
        .send()
        .await
        .map_err(|e| FetchError::Other(format!("Network error: {}", e)))?;

    match response.status() {
        401 => Err(FetchError::Unauthorized),
        404 => Err(FetchError::NotFound),
        _ if !response.ok() => Err(FetchError::Other(
            client::error_message(response, "Failed to fetch group").await,
        )),
        _ => response
            .json::<Group>()
            .await
            .map_err(|e| FetchError::Other(format!("Parse error: {}", e))),
    }
}

pub async fn create_group(group_name: &str) -> Result<String, String> {
    let response = client::post_form(
        "/groups/create-group",
        &[("group_name", group_name.to_string())],
    )
    .await?;

    if !response.ok() {
        return Err(client::error_message(response, "Failed to create group").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Group created successfully"))
}

pub async fn leave_group() -> Result<String, String> {
    let response = client::post("/groups/leave-group")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(client::error_message(response, "Failed to leave group").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("You have left the group"))
}

/// Email an invite link to a prospective member.
pub async fn invite_user(email: &str) -> Result<String, String> {
    let response =
        client::post_form("/groups/invite-user", &[("email", email.to_string())]).await?;

    if !response.ok() {
        return Err(client::error_message(response, "Failed to send invite").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Invite sent"))
}

/// Redeem an invite token. Returns the success message and, when the
/// backend includes it, the joined group's name.
pub async fn join_group(invite_token: &str) -> Result<(String, Option<String>), String> {
    let response = client::post_form(
        "/groups/join-group",
        &[("invite_token", invite_token.to_string())],
    )
    .await?;

    if !response.ok() {
        return Err(client::error_message(response, "Failed to join group").await);
    }

    let body = response.json::<ApiMessage>().await.unwrap_or_default();
    let group_name = body.group_name.clone();
    Ok((body.text_or("Successfully joined the group!"), group_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_with(ids: &[&str], usernames: &[&str]) -> Group {
        Group {
            id: Some("g1".to_string()),
            group_name: "Flat 4".to_string(),
            group_admin_id: "u1".to_string(),
            group_admin_username: "alice".to_string(),
            users_in_group: ids.iter().map(|s| s.to_string()).collect(),
            users_in_group_usernames: usernames.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_members_pairs_by_position() {
        let group = group_with(&["u1", "u2"], &["alice", "bob"]);
        let members = group.members();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].id, "u1");
        assert_eq!(members[0].username, "alice");
        assert_eq!(members[1].username, "bob");
    }

    #[test]
    fn test_members_truncates_on_length_mismatch() {
        let group = group_with(&["u1", "u2", "u3"], &["alice"]);
        assert_eq!(group.members().len(), 1);
    }

    #[test]
    fn test_username_for_unknown_id() {
        let group = group_with(&["u1"], &["alice"]);
        assert_eq!(group.username_for("u1"), "alice");
        assert_eq!(group.username_for("nope"), "Unknown");
    }

    #[test]
    fn test_group_deserializes_with_missing_username_array() {
        let group: Group = serde_json::from_str(
            r#"{
                "_id": "g1",
                "group_name": "Flat 4",
                "group_admin_id": "u1",
                "group_admin_username": "alice",
                "users_in_group": ["u1"]
            }"#,
        )
        .unwrap();
        assert!(group.members().is_empty());
        assert_eq!(group.username_for("u1"), "Unknown");
    }
}
