//! Document and navigation seams used by the page flows.
//!
//! Every DOM mutation the bootstrap performs goes through [`Document`] and every navigation
//! through [`Location`]. [`MemoryDocument`] and [`MemoryLocation`] record mutations in-process;
//! with the `wasm-web` feature on `wasm32`, [`BrowserDocument`] and [`BrowserLocation`] drive
//! the real page through `web-sys`.

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
mod browser;
mod document;
pub mod error;
mod memory;

#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
pub use browser::{BrowserDocument, BrowserLocation};
pub use document::{element_ids, ClickHandler, Display, Document, Location};
pub use error::{DomError, DomResult};
pub use memory::{ElementSnapshot, MemoryDocument, MemoryLocation};
