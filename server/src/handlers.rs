use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::ApiError;
use crate::models::{
    Appointment, AppointmentInput, Category, CategoryInput, LoginRequest, PasswordChange,
    ProfileUpdate, RegisterRequest, StatusChange, Task, TaskInput,
};
use crate::state::{AppState, User, WIRE_FORMAT};

const APPOINTMENT_STATUSES: [&str; 3] = ["pending", "confirmed", "canceled"];
const TASK_STATUSES: [&str; 3] = ["todo", "inprogress", "done"];
const TASK_PRIORITIES: [&str; 3] = ["low", "medium", "high"];

// --- auth ---

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let identifier = payload.identifier.trim().to_string();
    let mut store = state.store.lock().await;

    let Some(user) = store
        .users
        .iter_mut()
        .find(|user| user.email == identifier || user.name == identifier)
    else {
        return Err(ApiError::rejected("Identifiants invalides"));
    };
    if user.password != payload.password {
        return Err(ApiError::rejected("Identifiants invalides"));
    }

    user.last_login = Some(Local::now().format(WIRE_FORMAT).to_string());
    let response = session_response(user);
    let id = user.id;
    store.current_user = id;
    info!("login for user {id}");
    Ok(Json(response))
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<Value>, ApiError> {
    let name = payload.name.trim().to_string();
    let email = payload.email.trim().to_string();
    if name.is_empty() || email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("Tous les champs sont requis"));
    }

    let mut store = state.store.lock().await;
    if store.users.iter().any(|user| user.email == email) {
        return Err(ApiError::rejected("Cet email est déjà utilisé"));
    }

    let id = store.next_user_id;
    store.next_user_id += 1;
    let user = User {
        id,
        name,
        email,
        password: payload.password,
        member_since: Local::now().date_naive().to_string(),
        last_login: Some(Local::now().format(WIRE_FORMAT).to_string()),
        two_factor: false,
        language: "fr".to_string(),
        notifications: true,
    };
    let response = session_response(&user);
    store.users.push(user);
    store.current_user = id;
    info!("registered user {id}");
    Ok(Json(response))
}

fn session_response(user: &User) -> Value {
    json!({
        "success": true,
        "token": format!("demo-token-{}", user.id),
        "user": { "name": user.name, "email": user.email },
    })
}

// --- categories ---

pub async fn list_categories(State(state): State<AppState>) -> Json<Value> {
    let store = state.store.lock().await;
    Json(json!({ "success": true, "categories": store.categories }))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryInput>,
) -> Result<Json<Value>, ApiError> {
    let titre = payload.titre.trim().to_string();
    if titre.is_empty() {
        return Err(ApiError::bad_request("Le titre est requis"));
    }

    let mut store = state.store.lock().await;
    let owner = store
        .user(store.current_user)
        .map(|user| user.name.clone())
        .unwrap_or_default();
    let id = store.next_category_id;
    store.next_category_id += 1;
    let category = Category {
        id,
        titre,
        description: payload.description.trim().to_string(),
        couleur: payload.couleur,
        icone: payload.icone,
        departement: payload.departement,
        proprietaire: owner,
    };
    store.categories.push(category.clone());
    Ok(Json(json!({ "success": true, "category": category })))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.lock().await;
    let Some(index) = store.categories.iter().position(|category| category.id == id) else {
        return Err(ApiError::not_found("Catégorie introuvable"));
    };
    store.categories.remove(index);
    // appointments keep existing but lose the dangling reference
    for appointment in &mut store.appointments {
        if appointment.category_id == Some(id) {
            appointment.category_id = None;
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- tasks ---

pub async fn list_tasks(State(state): State<AppState>) -> Json<Value> {
    let store = state.store.lock().await;
    Json(json!({ "success": true, "tasks": store.tasks }))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskInput>,
) -> Result<Json<Value>, ApiError> {
    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(ApiError::bad_request("Le titre est requis"));
    }
    if !TASK_PRIORITIES.contains(&payload.priority.as_str()) {
        return Err(ApiError::bad_request("Priorité inconnue"));
    }

    let mut store = state.store.lock().await;
    let id = store.next_task_id;
    store.next_task_id += 1;
    let task = Task {
        id,
        title,
        due_date: payload.due_date,
        assignee: payload.assignee,
        priority: payload.priority,
        completed: false,
        status: "todo".to_string(),
        department: payload.department,
    };
    store.tasks.push(task.clone());
    Ok(Json(json!({ "success": true, "task": task })))
}

pub async fn update_task_status(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<StatusChange>,
) -> Result<Json<Value>, ApiError> {
    if !TASK_STATUSES.contains(&payload.status.as_str()) {
        return Err(ApiError::bad_request("Statut inconnu"));
    }

    let mut store = state.store.lock().await;
    let Some(task) = store.tasks.iter_mut().find(|task| task.id == id) else {
        return Err(ApiError::not_found("Tâche introuvable"));
    };
    task.completed = payload.status == "done";
    task.status = payload.status;
    Ok(Json(json!({ "success": true })))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.lock().await;
    let Some(index) = store.tasks.iter().position(|task| task.id == id) else {
        return Err(ApiError::not_found("Tâche introuvable"));
    };
    store.tasks.remove(index);
    Ok(StatusCode::NO_CONTENT)
}

// --- appointments ---

#[derive(Debug, Deserialize)]
pub struct AppointmentFilter {
    pub category_id: Option<u32>,
}

pub async fn list_appointments(
    State(state): State<AppState>,
    Query(filter): Query<AppointmentFilter>,
) -> Json<Value> {
    let store = state.store.lock().await;
    let mut appointments: Vec<Appointment> = store
        .appointments
        .iter()
        .filter(|appointment| match filter.category_id {
            Some(id) => appointment.category_id == Some(id),
            None => true,
        })
        .cloned()
        .collect();
    appointments.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    Json(json!({ "success": true, "appointments": appointments }))
}

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.lock().await;
    let Some(appointment) = store.appointments.iter().find(|a| a.id == id) else {
        return Err(ApiError::not_found("Rendez-vous introuvable"));
    };
    Ok(Json(json!({ "success": true, "appointment": appointment })))
}

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<AppointmentInput>,
) -> Result<Json<Value>, ApiError> {
    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(ApiError::bad_request("Le titre est requis"));
    }
    validate_time_range(&payload.start_time, &payload.end_time)?;

    let mut store = state.store.lock().await;
    if let Some(category_id) = payload.category_id {
        if !store.categories.iter().any(|c| c.id == category_id) {
            return Err(ApiError::bad_request("Catégorie introuvable"));
        }
    }
    let id = store.next_appointment_id;
    store.next_appointment_id += 1;
    let appointment = Appointment {
        id,
        title,
        category_id: payload.category_id,
        client_name: payload.client_name,
        start_time: payload.start_time,
        end_time: payload.end_time,
        status: "pending".to_string(),
        notes: payload.notes,
    };
    store.appointments.push(appointment.clone());
    Ok(Json(json!({ "success": true, "appointment": appointment })))
}

pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<AppointmentInput>,
) -> Result<Json<Value>, ApiError> {
    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(ApiError::bad_request("Le titre est requis"));
    }
    validate_time_range(&payload.start_time, &payload.end_time)?;

    let mut store = state.store.lock().await;
    if let Some(category_id) = payload.category_id {
        if !store.categories.iter().any(|c| c.id == category_id) {
            return Err(ApiError::bad_request("Catégorie introuvable"));
        }
    }
    let Some(appointment) = store.appointments.iter_mut().find(|a| a.id == id) else {
        return Err(ApiError::not_found("Rendez-vous introuvable"));
    };
    appointment.title = title;
    appointment.category_id = payload.category_id;
    appointment.client_name = payload.client_name;
    appointment.start_time = payload.start_time;
    appointment.end_time = payload.end_time;
    appointment.notes = payload.notes;
    Ok(Json(json!({ "success": true, "appointment": appointment.clone() })))
}

pub async fn update_appointment_status(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<StatusChange>,
) -> Result<Json<Value>, ApiError> {
    if !APPOINTMENT_STATUSES.contains(&payload.status.as_str()) {
        return Err(ApiError::bad_request("Statut inconnu"));
    }

    let mut store = state.store.lock().await;
    let Some(appointment) = store.appointments.iter_mut().find(|a| a.id == id) else {
        return Err(ApiError::not_found("Rendez-vous introuvable"));
    };
    appointment.status = payload.status;
    Ok(Json(json!({ "success": true })))
}

fn validate_time_range(start: &str, end: &str) -> Result<(), ApiError> {
    let start = NaiveDateTime::parse_from_str(start, WIRE_FORMAT)
        .map_err(|_| ApiError::bad_request("Format de date invalide"))?;
    let end = NaiveDateTime::parse_from_str(end, WIRE_FORMAT)
        .map_err(|_| ApiError::bad_request("Format de date invalide"))?;
    if end <= start {
        return Err(ApiError::bad_request(
            "La fin doit être postérieure au début",
        ));
    }
    Ok(())
}

// --- dashboard ---

pub async fn dashboard_data(State(state): State<AppState>) -> Json<Value> {
    let store = state.store.lock().await;
    let today = Local::now().date_naive().to_string();

    let mut today_appointments: Vec<Appointment> = store
        .appointments
        .iter()
        .filter(|a| a.start_time.starts_with(&today))
        .cloned()
        .collect();
    today_appointments.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    let today_tasks: Vec<Task> = store
        .tasks
        .iter()
        .filter(|t| !t.completed && t.due_date.as_deref() == Some(today.as_str()))
        .cloned()
        .collect();

    let stats = json!({
        "appointments_today": today_appointments.len(),
        "appointments_pending": store
            .appointments
            .iter()
            .filter(|a| a.status == "pending")
            .count(),
        "tasks_open": store.tasks.iter().filter(|t| !t.completed).count(),
        "categories_total": store.categories.len(),
    });

    Json(json!({
        "success": true,
        "data": {
            "stats": stats,
            "today_appointments": today_appointments,
            "today_tasks": today_tasks,
        },
    }))
}

// --- profile ---

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let store = state.store.lock().await;
    let Some(user) = store.user(store.current_user) else {
        return Err(ApiError::not_found("Profil introuvable"));
    };
    let profile = json!({
        "name": user.name,
        "email": user.email,
        "security": {
            "last_login": user.last_login,
            "two_factor": user.two_factor,
        },
        "stats": {
            "appointments_total": store.appointments.len(),
            "tasks_open": store.tasks.iter().filter(|t| !t.completed).count(),
            "member_since": user.member_since,
        },
        "preferences": {
            "language": user.language,
            "notifications": user.notifications,
        },
    });
    Ok(Json(json!({ "success": true, "profile": profile })))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<Value>, ApiError> {
    let name = payload.name.trim().to_string();
    let email = payload.email.trim().to_string();
    if name.is_empty() || email.is_empty() {
        return Err(ApiError::bad_request("Tous les champs sont requis"));
    }

    let mut store = state.store.lock().await;
    let current = store.current_user;
    let Some(user) = store.user_mut(current) else {
        return Err(ApiError::not_found("Profil introuvable"));
    };
    user.name = name;
    user.email = email;
    Ok(Json(json!({ "success": true })))
}

pub async fn change_password(
    State(state): State<AppState>,
    Json(payload): Json<PasswordChange>,
) -> Result<Json<Value>, ApiError> {
    if payload.new_password.chars().count() < 8 {
        return Err(ApiError::bad_request("Mot de passe trop court"));
    }

    let mut store = state.store.lock().await;
    let current = store.current_user;
    let Some(user) = store.user_mut(current) else {
        return Err(ApiError::not_found("Profil introuvable"));
    };
    if user.password != payload.current_password {
        return Err(ApiError::rejected("Mot de passe actuel incorrect"));
    }
    user.password = payload.new_password;
    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range_requires_end_after_start() {
        assert!(validate_time_range("2026-03-01T09:00:00", "2026-03-01T09:30:00").is_ok());
        assert!(validate_time_range("2026-03-01T09:30:00", "2026-03-01T09:00:00").is_err());
        // equal bounds are an empty slot
        assert!(validate_time_range("2026-03-01T09:00:00", "2026-03-01T09:00:00").is_err());
    }

    #[test]
    fn time_range_rejects_malformed_input() {
        assert!(validate_time_range("pas-une-date", "2026-03-01T09:00:00").is_err());
        assert!(validate_time_range("2026-03-01T09:00:00", "09:00").is_err());
    }
}
