pub mod app;
pub mod drag;
pub mod settle;

pub use app::Host;
pub use drag::DragTracker;
pub use settle::SettleAnimation;
