//! Terminal front-end. Three nested screens (programs, one program, one
//! exercise) with popup forms, all reading and writing through the store.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
