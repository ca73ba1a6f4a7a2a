mod action_queue;
mod actions;
mod event_loop;
mod mouse;
mod views;

pub use event_loop::run_app;
