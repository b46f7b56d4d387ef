mod members_controller;
pub mod server;
mod session_controller;
