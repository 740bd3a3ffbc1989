//! Frontend Models
//!
//! Data structures matching the backend wire format. Category fields keep
//! their historical French names on the wire (`titre`, `couleur`, ...).

use serde::{Deserialize, Serialize};

/// Loading lifecycle of one section's data.
///
/// Every mutation triggers a full reload, so the `Ready` payload always
/// holds exactly the last server response and nothing older.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Error(String),
}

/// What a section body renders for a list load. Splitting this decision
/// out of the view keeps the empty-versus-rows rule in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    Loading,
    Error(String),
    Empty,
    Rows(Vec<T>),
}

impl<T> LoadState<Vec<T>> {
    pub fn into_list_view(self) -> ListView<T> {
        match self {
            LoadState::Loading => ListView::Loading,
            LoadState::Error(message) => ListView::Error(message),
            LoadState::Ready(list) if list.is_empty() => ListView::Empty,
            LoadState::Ready(list) => ListView::Rows(list),
        }
    }
}

/// Outcome of a modal submit: success closes the modal and reloads the
/// list, failure keeps it open showing the message.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    CloseAndReload,
    KeepOpen(String),
}

pub fn submit_outcome(result: Result<(), String>) -> SubmitOutcome {
    match result {
        Ok(()) => SubmitOutcome::CloseAndReload,
        Err(message) => SubmitOutcome::KeepOpen(message),
    }
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "couleur", default)]
    pub color: String,
    #[serde(rename = "icone", default)]
    pub icon: String,
    #[serde(rename = "departement", default)]
    pub department: String,
    #[serde(rename = "proprietaire", default)]
    pub owner: String,
}

/// Appointment status. The backend treats this as an open string set, so
/// unrecognized values deserialize as `Unknown` instead of failing the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    /// Wire value, also used as CSS badge class and i18n key suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Canceled => "canceled",
            AppointmentStatus::Unknown => "unknown",
        }
    }
}

/// Appointment data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub title: String,
    pub category_id: Option<u32>,
    #[serde(default)]
    pub client_name: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn from_str(raw: &str) -> Option<TaskPriority> {
        match raw {
            "low" => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high" => Some(TaskPriority::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Inprogress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::Inprogress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Inprogress => "inprogress",
            TaskStatus::Done => "done",
        }
    }

    pub fn from_str(raw: &str) -> Option<TaskStatus> {
        match raw {
            "todo" => Some(TaskStatus::Todo),
            "inprogress" => Some(TaskStatus::Inprogress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    pub priority: TaskPriority,
    pub completed: bool,
    pub status: TaskStatus,
    #[serde(default)]
    pub department: Option<String>,
}

/// Profile is a per-session singleton; only name and email are editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub security: ProfileSecurity,
    #[serde(default)]
    pub stats: ProfileStats,
    #[serde(default)]
    pub preferences: ProfilePreferences,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileSecurity {
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub two_factor: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub appointments_total: u32,
    #[serde(default)]
    pub tasks_open: u32,
    #[serde(default)]
    pub member_since: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfilePreferences {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub notifications: bool,
}

/// Aggregate KPIs and "today" lists for the dashboard summary section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    #[serde(default)]
    pub today_appointments: Vec<Appointment>,
    #[serde(default)]
    pub today_tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub appointments_today: u32,
    #[serde(default)]
    pub appointments_pending: u32,
    #[serde(default)]
    pub tasks_open: u32,
    #[serde(default)]
    pub categories_total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_uses_french_wire_names() {
        let json = r##"{"id":1,"titre":"Entretien","couleur":"#ff6b4a","departement":"RH"}"##;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.title, "Entretien");
        assert_eq!(category.color, "#ff6b4a");
        assert_eq!(category.department, "RH");
        assert!(category.description.is_empty());

        let back = serde_json::to_value(&category).unwrap();
        assert_eq!(back["titre"], "Entretien");
        assert!(back.get("title").is_none());
    }

    #[test]
    fn appointment_status_round_trips_lowercase() {
        let appointment: Appointment = serde_json::from_str(
            r#"{"id":3,"title":"Suivi","category_id":1,
                "start_time":"2026-03-01T09:00:00","end_time":"2026-03-01T09:30:00",
                "status":"confirmed"}"#,
        )
        .unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(
            serde_json::to_value(AppointmentStatus::Pending).unwrap(),
            "pending"
        );
    }

    #[test]
    fn unrecognized_status_maps_to_unknown() {
        let status: AppointmentStatus = serde_json::from_str("\"rescheduled\"").unwrap();
        assert_eq!(status, AppointmentStatus::Unknown);
    }

    #[test]
    fn empty_list_renders_the_placeholder_not_rows() {
        let empty: Vec<Category> = serde_json::from_str("[]").unwrap();
        assert_eq!(LoadState::Ready(empty).into_list_view(), ListView::Empty);
        assert_eq!(
            LoadState::<Vec<Category>>::Loading.into_list_view(),
            ListView::Loading
        );
        assert_eq!(
            LoadState::<Vec<Category>>::Error("HTTP 502".to_string()).into_list_view(),
            ListView::Error("HTTP 502".to_string())
        );
    }

    #[test]
    fn one_category_payload_renders_one_card() {
        let list: Vec<Category> =
            serde_json::from_str(r#"[{"id":1,"titre":"Entretien"}]"#).unwrap();
        match LoadState::Ready(list).into_list_view() {
            ListView::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].title, "Entretien");
            }
            other => panic!("expected rows, got {other:?}"),
        }
    }

    #[test]
    fn submit_success_closes_and_reloads_while_failure_keeps_the_modal() {
        assert_eq!(submit_outcome(Ok(())), SubmitOutcome::CloseAndReload);
        assert_eq!(
            submit_outcome(Err("Créneau déjà pris".to_string())),
            SubmitOutcome::KeepOpen("Créneau déjà pris".to_string())
        );
    }

    #[test]
    fn task_status_and_priority_wire_values() {
        let task: Task = serde_json::from_str(
            r#"{"id":7,"title":"Relance client","priority":"high",
                "completed":false,"status":"inprogress"}"#,
        )
        .unwrap();
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.status, TaskStatus::Inprogress);
        assert_eq!(task.status.as_str(), "inprogress");
    }
}
