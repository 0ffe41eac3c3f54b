mod intent;
mod reducer;
mod state;
mod store;

pub use intent::GameIntent;
pub use reducer::GameReducer;
pub use state::{FetchStatus, GameState};
pub use store::GameStore;
