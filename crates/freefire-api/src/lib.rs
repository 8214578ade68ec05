//! Remote profile service client for the HL Gaming Free Fire account API.
//!
//! `ProfileClient` performs the fetch; `extract` maps the raw payload to a
//! fully-resolved `ProfileView`; `render` turns the view into the final
//! `Report`. Extraction and rendering are total: any response shape,
//! including `{}`, produces a complete report.

pub mod client;
pub mod error;
pub mod extract;
pub mod render;
pub mod timestamp;

pub use client::ProfileClient;
pub use error::{Error, Result};
pub use extract::extract;
pub use render::render;
pub use timestamp::normalize;
