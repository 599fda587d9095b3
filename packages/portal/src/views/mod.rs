pub mod admin;
pub mod dashboard;
pub mod navigation;

pub use admin::AdminPanel;
pub use dashboard::{Dashboard, FeedFilter};
pub use navigation::{Navigation, View, navigate, resolve};
