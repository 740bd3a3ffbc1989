pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;

pub use app::router;
pub use state::AppState;
