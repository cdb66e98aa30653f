pub mod context;
pub mod handlers;
pub mod preflight;
pub mod server;
