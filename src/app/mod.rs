pub mod action;
pub mod command;
pub mod config;
pub mod debounce;
pub mod handler;
pub mod input;
pub mod keymap;
pub mod logging;
pub mod r#loop;
pub mod recovery;
pub mod reducer;
pub mod state;
pub mod ui;
