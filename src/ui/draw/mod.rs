//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Reusable UI components (header, footer, search bar, toast, spinners)
//! - `modals`: Modal dialogs (server URL input)
//! - `panels`: Main panels (endpoints list, details panel)
//! - `tabs`: Detail tabs (endpoint, request, headers, response)
//! - `styling`: Color schemes and style constants

mod components;
mod modals;
mod panels;
mod styling;
mod tabs;

pub use components::{render_footer, render_header, render_search_bar, render_toast};
pub use modals::render_url_input_modal;
pub use panels::{render_details_panel, render_endpoints_panel};
pub use styling::SPINNER_FRAMES;
