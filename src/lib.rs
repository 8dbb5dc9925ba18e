pub mod config;
pub mod controller;
pub mod render;
pub mod request;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
