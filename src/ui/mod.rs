pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod welcome;

pub use runtime::run;
