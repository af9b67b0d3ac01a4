pub mod chat;
pub mod config;
pub mod io;
pub mod language;
pub mod reflect;
pub mod rules;
pub mod session;
pub mod types;
