//! Page detection and the per-page bootstrap sequence.

mod controller;
mod kind;

pub use controller::{PageController, PageHosts};
pub use kind::PageKind;
