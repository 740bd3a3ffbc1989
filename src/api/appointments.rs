//! Appointment endpoints

use serde::Serialize;
use serde_json::json;

use crate::models::{Appointment, AppointmentStatus};

/// Body shared by create and full update.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentInput {
    pub title: String,
    pub category_id: Option<u32>,
    pub client_name: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub notes: Option<String>,
}

fn input_value(input: &AppointmentInput) -> Result<serde_json::Value, String> {
    serde_json::to_value(input).map_err(|_| "error.invalid_response".to_string())
}

pub async fn list(category_id: Option<u32>) -> Result<Vec<Appointment>, String> {
    let path = match category_id {
        Some(id) => format!("/appointments?category_id={id}"),
        None => "/appointments".to_string(),
    };
    super::get(&path, "appointments").await
}

pub async fn get(id: u32) -> Result<Appointment, String> {
    super::get(&format!("/appointments/{id}"), "appointment").await
}

pub async fn create(input: &AppointmentInput) -> Result<(), String> {
    super::post("/appointments", input_value(input)?)
        .await
        .map(|_| ())
}

pub async fn update(id: u32, input: &AppointmentInput) -> Result<(), String> {
    super::put(&format!("/appointments/{id}"), input_value(input)?)
        .await
        .map(|_| ())
}

pub async fn update_status(id: u32, status: AppointmentStatus) -> Result<(), String> {
    super::put(
        &format!("/appointments/{id}/status"),
        json!({ "status": status.as_str() }),
    )
    .await
    .map(|_| ())
}
