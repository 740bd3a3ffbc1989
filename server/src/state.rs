//! In-memory demo store.
//!
//! Everything lives behind one mutex and resets on restart. Passwords are
//! plaintext and the login token is a placeholder; this backend exists to
//! exercise the dashboard, not to be deployed.

use std::sync::Arc;

use chrono::{Duration, Local};
use tokio::sync::Mutex;

use crate::models::{Appointment, Category, Task};

pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub member_since: String,
    pub last_login: Option<String>,
    pub two_factor: bool,
    pub language: String,
    pub notifications: bool,
}

#[derive(Debug)]
pub struct DemoStore {
    pub users: Vec<User>,
    /// Single-session demo: login and register switch this.
    pub current_user: u32,
    pub categories: Vec<Category>,
    pub appointments: Vec<Appointment>,
    pub tasks: Vec<Task>,
    pub next_user_id: u32,
    pub next_category_id: u32,
    pub next_appointment_id: u32,
    pub next_task_id: u32,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<DemoStore>>,
}

impl AppState {
    pub fn seeded() -> Self {
        Self {
            store: Arc::new(Mutex::new(DemoStore::seeded())),
        }
    }
}

impl DemoStore {
    /// French demo dataset with appointments and tasks landing on the
    /// current day so the dashboard has something to show.
    pub fn seeded() -> Self {
        let now = Local::now().naive_local();
        let today = now.date();
        let at = |days: i64, time: &str| {
            format!("{}T{}", today + Duration::days(days), time)
        };

        let users = vec![User {
            id: 1,
            name: "Marie Dupont".to_string(),
            email: "demo@rdv.fr".to_string(),
            password: "demo1234".to_string(),
            member_since: "2025-01-15".to_string(),
            last_login: None,
            two_factor: false,
            language: "fr".to_string(),
            notifications: true,
        }];

        let categories = vec![
            Category {
                id: 1,
                titre: "Entretien".to_string(),
                description: "Entretiens individuels et annuels".to_string(),
                couleur: "#2f6fed".to_string(),
                icone: "📋".to_string(),
                departement: "RH".to_string(),
                proprietaire: "Marie Dupont".to_string(),
            },
            Category {
                id: 2,
                titre: "Consultation".to_string(),
                description: "Rendez-vous clients".to_string(),
                couleur: "#1d7a46".to_string(),
                icone: "🤝".to_string(),
                departement: "Commercial".to_string(),
                proprietaire: "Marie Dupont".to_string(),
            },
            Category {
                id: 3,
                titre: "Suivi".to_string(),
                description: "Points de suivi de dossier".to_string(),
                couleur: "#8a6116".to_string(),
                icone: "🔄".to_string(),
                departement: "Commercial".to_string(),
                proprietaire: "Marie Dupont".to_string(),
            },
        ];

        let appointments = vec![
            Appointment {
                id: 1,
                title: "Entretien annuel — J. Martin".to_string(),
                category_id: Some(1),
                client_name: Some("Jean Martin".to_string()),
                start_time: at(0, "09:00:00"),
                end_time: at(0, "09:45:00"),
                status: "confirmed".to_string(),
                notes: None,
            },
            Appointment {
                id: 2,
                title: "Consultation nouveau client".to_string(),
                category_id: Some(2),
                client_name: Some("Sophie Bernard".to_string()),
                start_time: at(0, "14:00:00"),
                end_time: at(0, "15:00:00"),
                status: "pending".to_string(),
                notes: Some("Premier contact".to_string()),
            },
            Appointment {
                id: 3,
                title: "Point de suivi trimestriel".to_string(),
                category_id: Some(3),
                client_name: Some("Ahmed Karimi".to_string()),
                start_time: at(1, "10:30:00"),
                end_time: at(1, "11:00:00"),
                status: "pending".to_string(),
                notes: None,
            },
        ];

        let tasks = vec![
            Task {
                id: 1,
                title: "Préparer le dossier client".to_string(),
                due_date: Some(today.to_string()),
                assignee: Some("Marie Dupont".to_string()),
                priority: "high".to_string(),
                completed: false,
                status: "todo".to_string(),
                department: Some("Commercial".to_string()),
            },
            Task {
                id: 2,
                title: "Relance téléphonique".to_string(),
                due_date: Some((today + Duration::days(2)).to_string()),
                assignee: Some("Paul Leroy".to_string()),
                priority: "medium".to_string(),
                completed: false,
                status: "inprogress".to_string(),
                department: Some("Commercial".to_string()),
            },
            Task {
                id: 3,
                title: "Archiver les comptes rendus".to_string(),
                due_date: None,
                assignee: None,
                priority: "low".to_string(),
                completed: true,
                status: "done".to_string(),
                department: Some("RH".to_string()),
            },
        ];

        Self {
            users,
            current_user: 1,
            categories,
            appointments,
            tasks,
            next_user_id: 2,
            next_category_id: 4,
            next_appointment_id: 4,
            next_task_id: 4,
        }
    }

    pub fn user(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn user_mut(&mut self, id: u32) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id == id)
    }
}
