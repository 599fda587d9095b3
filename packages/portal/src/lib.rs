pub mod config;
pub mod describe;
pub mod error;
pub mod models;
pub mod password;
pub mod policy;
pub mod registry;
pub mod seed;
pub mod session;
pub mod state;
pub mod store;
pub mod views;

pub use error::{AppError, PortalError};
pub use registry::Registry;
pub use session::{SessionManager, SessionUser};
pub use state::AppState;
