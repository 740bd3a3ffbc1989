//! Profile endpoints

use serde_json::json;

use crate::models::Profile;

pub async fn fetch() -> Result<Profile, String> {
    super::get("/profile", "profile").await
}

pub async fn update(name: &str, email: &str) -> Result<(), String> {
    super::put("/profile", json!({ "name": name, "email": email }))
        .await
        .map(|_| ())
}

pub async fn change_password(current: &str, new: &str) -> Result<(), String> {
    super::put(
        "/profile/password",
        json!({ "current_password": current, "new_password": new }),
    )
    .await
    .map(|_| ())
}
