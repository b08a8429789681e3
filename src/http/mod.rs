//! JSON-over-HTTP seam for the backend endpoints (`/api/config`, `/api/user-info`).

mod client;
pub mod error;

pub use client::{HttpClient, ReqwestHttpClient};
pub use error::{HttpError, HttpErrorCode, HttpResult};
