//! Sample form schemas shared by tests and demos.

pub mod contact;
pub mod edge_cases;
pub mod volunteer;

pub use contact::contact_form;
pub use edge_cases::{MALFORMED_SOURCES, overlapping_sections, unordered_sections};
pub use volunteer::{VOLUNTEER_JSON, volunteer_form};
