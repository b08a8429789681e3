pub mod environment;
#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
pub(crate) mod js;
pub mod runtime;
