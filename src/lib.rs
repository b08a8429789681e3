#![doc = include_str!("RUSTDOC.md")]

pub mod analytics;
pub mod config;
pub mod dom;
pub mod http;
pub mod logger;
pub mod page;
pub mod platform;
pub mod user_info;
pub mod util;

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
pub mod web;

#[cfg(test)]
pub mod test_support;
