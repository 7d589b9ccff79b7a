//! Interactive client for the case study gateway.

mod client;
mod clipboard;
mod state;
pub mod terminal;

pub use client::{CaseStudySource, GatewayClient, GatewayError};
pub use clipboard::{Clipboard, Osc52Clipboard};
pub use state::{Studio, StudioError, ViewState, INVALID_SELECTION_MESSAGE};
