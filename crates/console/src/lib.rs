pub mod config;
pub mod controller;
pub mod notification;
pub mod render;
pub mod shell;

pub use config::Config;
pub use controller::MemberController;
pub use notification::{Notification, Severity};
