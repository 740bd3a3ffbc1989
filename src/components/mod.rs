//! UI Components

pub mod appointments_section;
pub mod categories_section;
pub mod dashboard_section;
pub mod header;
pub mod login;
pub mod modal;
pub mod profile_section;
pub mod tasks_section;

pub use appointments_section::AppointmentsSection;
pub use categories_section::CategoriesSection;
pub use dashboard_section::DashboardSection;
pub use header::Header;
pub use login::LoginView;
pub use profile_section::ProfileSection;
pub use tasks_section::TasksSection;
