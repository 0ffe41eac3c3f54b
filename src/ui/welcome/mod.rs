mod intent;
mod reducer;
mod state;

pub use intent::{GridMove, WelcomeIntent};
pub use reducer::WelcomeReducer;
pub use state::WelcomeState;
