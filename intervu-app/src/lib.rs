pub mod session;
pub mod views;

pub use session::{Session, SessionError, CONFIG_KEY};
pub use views::{resolve_path, View};
