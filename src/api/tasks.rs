//! Task endpoints

use serde::Serialize;
use serde_json::json;

use crate::models::{Task, TaskPriority, TaskStatus};

#[derive(Debug, Clone, Serialize)]
pub struct TaskInput {
    pub title: String,
    pub due_date: Option<String>,
    pub assignee: Option<String>,
    pub priority: TaskPriority,
    pub department: Option<String>,
}

pub async fn list() -> Result<Vec<Task>, String> {
    super::get("/tasks", "tasks").await
}

pub async fn create(input: &TaskInput) -> Result<(), String> {
    let body = serde_json::to_value(input).map_err(|_| "error.invalid_response".to_string())?;
    super::post("/tasks", body).await.map(|_| ())
}

pub async fn update_status(id: u32, status: TaskStatus) -> Result<(), String> {
    super::put(
        &format!("/tasks/{id}/status"),
        json!({ "status": status.as_str() }),
    )
    .await
    .map(|_| ())
}

pub async fn delete(id: u32) -> Result<(), String> {
    super::delete(&format!("/tasks/{id}")).await
}
