//! Wire types for the demo API.
//!
//! Category fields keep their historical French names (`titre`, `couleur`,
//! ...); everything else is plain snake_case.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: u32,
    pub titre: String,
    pub description: String,
    pub couleur: String,
    pub icone: String,
    pub departement: String,
    pub proprietaire: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    pub titre: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub couleur: String,
    #[serde(default)]
    pub icone: String,
    #[serde(default)]
    pub departement: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    pub id: u32,
    pub title: String,
    pub category_id: Option<u32>,
    pub client_name: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentInput {
    pub title: String,
    #[serde(default)]
    pub category_id: Option<u32>,
    #[serde(default)]
    pub client_name: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub due_date: Option<String>,
    pub assignee: Option<String>,
    pub priority: String,
    pub completed: bool,
    pub status: String,
    pub department: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TaskInput {
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub department: Option<String>,
}

fn default_priority() -> String {
    "medium".to_string()
}

#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}
