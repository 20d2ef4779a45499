#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod assets;
pub mod config;
pub mod connection_store;
pub mod controller;
pub mod draw;
pub mod engine;
pub mod error;
pub mod grid;
pub mod registry;
pub mod render;
pub mod status;
pub mod template;
pub mod terminal;
pub mod validator;
pub mod wire;

pub use app::App;
