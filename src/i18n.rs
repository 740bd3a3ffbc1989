//! Translator
//!
//! Flat key → string tables for the two supported languages. Lookup misses
//! log a console warning and fall back to the French table, then to the key
//! itself, so tagged text is never blanked by a missing entry.

use leptos::logging;
use leptos::prelude::*;

use crate::store::{SessionStore, SessionStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Fr,
    En,
}

impl Lang {
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "fr" => Some(Lang::Fr),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Lang::Fr => FR,
            Lang::En => EN,
        }
    }
}

/// Switch the UI language. Unsupported codes fail silently apart from a
/// logged error, leaving the current language in place.
pub fn set_language(session: SessionStore, code: &str) {
    match Lang::from_code(code) {
        Some(lang) => {
            session.lang().set(lang);
            set_document_lang(lang);
        }
        None => logging::error!("unsupported language code: {code}"),
    }
}

/// Keep `<html lang>` in sync for accessibility and date pickers.
pub fn set_document_lang(lang: Lang) {
    if let Some(root) = document().document_element() {
        let _ = root.set_attribute("lang", lang.code());
    }
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, text)| *text)
}

/// Translate one key. See module docs for the miss behavior.
pub fn translate(lang: Lang, key: &str) -> String {
    if let Some(text) = lookup(lang.table(), key) {
        return text.to_string();
    }
    logging::warn!("missing translation for {:?}: {key}", lang.code());
    lookup(FR, key).unwrap_or(key).to_string()
}

/// Render an API failure: generic failure classes travel as `error.*` keys
/// and get translated; server-provided messages are shown as-is.
pub fn error_text(lang: Lang, message: &str) -> String {
    if message.starts_with("error.") {
        translate(lang, message)
    } else {
        message.to_string()
    }
}

const FR: &[(&str, &str)] = &[
    ("nav.dashboard", "Tableau de bord"),
    ("nav.categories", "Catégories"),
    ("nav.appointments", "Rendez-vous"),
    ("nav.tasks", "Tâches"),
    ("nav.profile", "Profil"),
    ("common.loading", "Chargement..."),
    ("common.logout", "Déconnexion"),
    ("action.save", "Enregistrer"),
    ("action.saving", "Enregistrement..."),
    ("action.cancel", "Annuler"),
    ("action.delete", "Supprimer"),
    ("action.confirm_delete", "Supprimer ?"),
    ("action.edit", "Modifier"),
    ("auth.login_title", "Connexion"),
    ("auth.register_title", "Créer un compte"),
    ("auth.identifier", "Identifiant ou e-mail"),
    ("auth.password", "Mot de passe"),
    ("auth.name", "Nom"),
    ("auth.email", "E-mail"),
    ("auth.submit_login", "Se connecter"),
    ("auth.submit_register", "S'inscrire"),
    ("auth.switch_to_register", "Pas encore de compte ? S'inscrire"),
    ("auth.switch_to_login", "Déjà inscrit ? Se connecter"),
    ("auth.working", "Veuillez patienter..."),
    ("dashboard.appointments_today", "RDV aujourd'hui"),
    ("dashboard.appointments_pending", "RDV en attente"),
    ("dashboard.tasks_open", "Tâches ouvertes"),
    ("dashboard.categories_total", "Catégories"),
    ("dashboard.today_appointments", "Rendez-vous du jour"),
    ("dashboard.today_tasks", "Tâches du jour"),
    ("dashboard.no_appointments_today", "Aucun rendez-vous aujourd'hui"),
    ("dashboard.no_tasks_today", "Aucune tâche aujourd'hui"),
    ("categories.new", "Nouvelle catégorie"),
    ("categories.empty", "Aucune catégorie pour le moment"),
    ("categories.title_label", "Titre"),
    ("categories.description_label", "Description"),
    ("categories.color_label", "Couleur"),
    ("categories.icon_label", "Icône"),
    ("categories.department_label", "Département"),
    ("appointments.new", "Nouveau rendez-vous"),
    ("appointments.edit", "Modifier le rendez-vous"),
    ("appointments.empty", "Aucun rendez-vous"),
    ("appointments.filter_all", "Toutes les catégories"),
    ("appointments.title_label", "Titre"),
    ("appointments.client_label", "Client"),
    ("appointments.category_label", "Catégorie"),
    ("appointments.no_category", "Sans catégorie"),
    ("appointments.start_date_label", "Date de début"),
    ("appointments.start_time_label", "Heure de début"),
    ("appointments.end_date_label", "Date de fin"),
    ("appointments.end_time_label", "Heure de fin"),
    ("appointments.notes_label", "Notes"),
    ("appointments.confirm_action", "Confirmer"),
    ("appointments.cancel_action", "Annuler le RDV"),
    ("appointments.confirm_cancel", "Annuler ce rendez-vous ?"),
    ("appointments.col_title", "Titre"),
    ("appointments.col_client", "Client"),
    ("appointments.col_start", "Début"),
    ("appointments.col_end", "Fin"),
    ("appointments.col_status", "Statut"),
    ("appointments.col_actions", "Actions"),
    ("status.pending", "En attente"),
    ("status.confirmed", "Confirmé"),
    ("status.canceled", "Annulé"),
    ("status.unknown", "Inconnu"),
    ("tasks.new", "Nouvelle tâche"),
    ("tasks.empty", "Aucune tâche pour le moment"),
    ("tasks.title_label", "Titre"),
    ("tasks.due_label", "Échéance"),
    ("tasks.assignee_label", "Assigné à"),
    ("tasks.priority_label", "Priorité"),
    ("tasks.department_label", "Département"),
    ("tasks.col_title", "Titre"),
    ("tasks.col_due", "Échéance"),
    ("tasks.col_assignee", "Assigné"),
    ("tasks.col_priority", "Priorité"),
    ("tasks.col_status", "Statut"),
    ("tasks.col_actions", "Actions"),
    ("priority.low", "Basse"),
    ("priority.medium", "Moyenne"),
    ("priority.high", "Haute"),
    ("taskstatus.todo", "À faire"),
    ("taskstatus.inprogress", "En cours"),
    ("taskstatus.done", "Terminée"),
    ("profile.info_title", "Informations"),
    ("profile.name_label", "Nom"),
    ("profile.email_label", "E-mail"),
    ("profile.saved", "Profil enregistré"),
    ("profile.security_title", "Sécurité"),
    ("profile.last_login", "Dernière connexion"),
    ("profile.two_factor", "Double authentification"),
    ("profile.enabled", "Activée"),
    ("profile.disabled", "Désactivée"),
    ("profile.never", "Jamais"),
    ("profile.stats_title", "Statistiques"),
    ("profile.stat_appointments", "Rendez-vous au total"),
    ("profile.stat_tasks_open", "Tâches ouvertes"),
    ("profile.member_since", "Membre depuis"),
    ("profile.password_title", "Changer le mot de passe"),
    ("profile.current_password", "Mot de passe actuel"),
    ("profile.new_password", "Nouveau mot de passe"),
    ("profile.confirm_password", "Confirmer le mot de passe"),
    ("profile.password_saved", "Mot de passe modifié"),
    ("profile.prefs_title", "Préférences"),
    ("profile.pref_language", "Langue"),
    ("profile.pref_notifications", "Notifications"),
    ("error.network", "Erreur réseau, veuillez réessayer"),
    ("error.invalid_response", "Réponse invalide du serveur"),
    ("error.title_required", "Le titre est obligatoire"),
    ("error.fields_required", "Tous les champs sont obligatoires"),
    ("error.invalid_datetime", "Date ou heure invalide"),
    ("error.end_before_start", "L'heure de fin doit être après le début"),
    ("error.password_mismatch", "Les mots de passe ne correspondent pas"),
    ("error.password_too_short", "Le mot de passe doit faire au moins 8 caractères"),
];

const EN: &[(&str, &str)] = &[
    ("nav.dashboard", "Dashboard"),
    ("nav.categories", "Categories"),
    ("nav.appointments", "Appointments"),
    ("nav.tasks", "Tasks"),
    ("nav.profile", "Profile"),
    ("common.loading", "Loading..."),
    ("common.logout", "Log out"),
    ("action.save", "Save"),
    ("action.saving", "Saving..."),
    ("action.cancel", "Cancel"),
    ("action.delete", "Delete"),
    ("action.confirm_delete", "Delete?"),
    ("action.edit", "Edit"),
    ("auth.login_title", "Sign in"),
    ("auth.register_title", "Create an account"),
    ("auth.identifier", "Username or e-mail"),
    ("auth.password", "Password"),
    ("auth.name", "Name"),
    ("auth.email", "E-mail"),
    ("auth.submit_login", "Sign in"),
    ("auth.submit_register", "Sign up"),
    ("auth.switch_to_register", "No account yet? Sign up"),
    ("auth.switch_to_login", "Already registered? Sign in"),
    ("auth.working", "Please wait..."),
    ("dashboard.appointments_today", "Appointments today"),
    ("dashboard.appointments_pending", "Pending appointments"),
    ("dashboard.tasks_open", "Open tasks"),
    ("dashboard.categories_total", "Categories"),
    ("dashboard.today_appointments", "Today's appointments"),
    ("dashboard.today_tasks", "Today's tasks"),
    ("dashboard.no_appointments_today", "No appointments today"),
    ("dashboard.no_tasks_today", "No tasks today"),
    ("categories.new", "New category"),
    ("categories.empty", "No categories yet"),
    ("categories.title_label", "Title"),
    ("categories.description_label", "Description"),
    ("categories.color_label", "Color"),
    ("categories.icon_label", "Icon"),
    ("categories.department_label", "Department"),
    ("appointments.new", "New appointment"),
    ("appointments.edit", "Edit appointment"),
    ("appointments.empty", "No appointments"),
    ("appointments.filter_all", "All categories"),
    ("appointments.title_label", "Title"),
    ("appointments.client_label", "Client"),
    ("appointments.category_label", "Category"),
    ("appointments.no_category", "No category"),
    ("appointments.start_date_label", "Start date"),
    ("appointments.start_time_label", "Start time"),
    ("appointments.end_date_label", "End date"),
    ("appointments.end_time_label", "End time"),
    ("appointments.notes_label", "Notes"),
    ("appointments.confirm_action", "Confirm"),
    ("appointments.cancel_action", "Cancel appointment"),
    ("appointments.confirm_cancel", "Cancel this appointment?"),
    ("appointments.col_title", "Title"),
    ("appointments.col_client", "Client"),
    ("appointments.col_start", "Start"),
    ("appointments.col_end", "End"),
    ("appointments.col_status", "Status"),
    ("appointments.col_actions", "Actions"),
    ("status.pending", "Pending"),
    ("status.confirmed", "Confirmed"),
    ("status.canceled", "Canceled"),
    ("status.unknown", "Unknown"),
    ("tasks.new", "New task"),
    ("tasks.empty", "No tasks yet"),
    ("tasks.title_label", "Title"),
    ("tasks.due_label", "Due date"),
    ("tasks.assignee_label", "Assignee"),
    ("tasks.priority_label", "Priority"),
    ("tasks.department_label", "Department"),
    ("tasks.col_title", "Title"),
    ("tasks.col_due", "Due"),
    ("tasks.col_assignee", "Assignee"),
    ("tasks.col_priority", "Priority"),
    ("tasks.col_status", "Status"),
    ("tasks.col_actions", "Actions"),
    ("priority.low", "Low"),
    ("priority.medium", "Medium"),
    ("priority.high", "High"),
    ("taskstatus.todo", "To do"),
    ("taskstatus.inprogress", "In progress"),
    ("taskstatus.done", "Done"),
    ("profile.info_title", "Details"),
    ("profile.name_label", "Name"),
    ("profile.email_label", "E-mail"),
    ("profile.saved", "Profile saved"),
    ("profile.security_title", "Security"),
    ("profile.last_login", "Last login"),
    ("profile.two_factor", "Two-factor authentication"),
    ("profile.enabled", "Enabled"),
    ("profile.disabled", "Disabled"),
    ("profile.never", "Never"),
    ("profile.stats_title", "Statistics"),
    ("profile.stat_appointments", "Appointments overall"),
    ("profile.stat_tasks_open", "Open tasks"),
    ("profile.member_since", "Member since"),
    ("profile.password_title", "Change password"),
    ("profile.current_password", "Current password"),
    ("profile.new_password", "New password"),
    ("profile.confirm_password", "Confirm password"),
    ("profile.password_saved", "Password changed"),
    ("profile.prefs_title", "Preferences"),
    ("profile.pref_language", "Language"),
    ("profile.pref_notifications", "Notifications"),
    ("error.network", "Network error, please retry"),
    ("error.invalid_response", "Invalid response from server"),
    ("error.title_required", "Title is required"),
    ("error.fields_required", "All fields are required"),
    ("error.invalid_datetime", "Invalid date or time"),
    ("error.end_before_start", "End time must be after start time"),
    ("error.password_mismatch", "Passwords do not match"),
    ("error.password_too_short", "Password must be at least 8 characters"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn lang_codes_round_trip() {
        assert_eq!(Lang::from_code("fr"), Some(Lang::Fr));
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("de"), None);
        assert_eq!(Lang::Fr.code(), "fr");
        assert_eq!(Lang::default(), Lang::Fr);
    }

    #[test]
    fn tables_cover_the_same_keys_with_nonempty_text() {
        let fr_keys: BTreeSet<_> = FR.iter().map(|(key, _)| *key).collect();
        let en_keys: BTreeSet<_> = EN.iter().map(|(key, _)| *key).collect();
        assert_eq!(fr_keys, en_keys);
        assert_eq!(fr_keys.len(), FR.len(), "duplicate key in FR table");
        assert_eq!(en_keys.len(), EN.len(), "duplicate key in EN table");
        for (key, text) in FR.iter().chain(EN.iter()) {
            assert!(!text.is_empty(), "empty translation for {key}");
        }
    }

    #[test]
    fn translate_switches_languages() {
        assert_eq!(translate(Lang::Fr, "nav.tasks"), "Tâches");
        assert_eq!(translate(Lang::En, "nav.tasks"), "Tasks");
    }

    #[test]
    fn misses_fall_back_to_the_key() {
        assert_eq!(translate(Lang::En, "nav.does_not_exist"), "nav.does_not_exist");
    }

    #[test]
    fn error_text_translates_only_generic_keys() {
        assert_eq!(
            error_text(Lang::En, "error.network"),
            "Network error, please retry"
        );
        assert_eq!(error_text(Lang::En, "Créneau déjà pris"), "Créneau déjà pris");
    }
}
