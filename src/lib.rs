pub mod avatar;
pub mod config;
pub mod game;
pub mod logging;
pub mod mvi;
pub mod quiz;
pub mod shuffle;
pub mod trivia;
pub mod ui;
