//! REST API implementation
//!
//! Modular REST API with clean separation of concerns:
//! - types: Response envelope and state definitions
//! - extractors: Lenient JSON body and validated path extractors
//! - handlers: Health and course endpoint handlers
//! - profile: Static profile endpoint
//! - router: Router creation and configuration
//! - tests: Unit tests for all components

mod extractors;
mod handlers;
mod profile;
mod router;
pub mod types;

// Re-export public API
pub use extractors::{CourseIdPath, JsonBody, StudentIdPath};
pub use profile::author_profile;
pub use router::{create_router, create_router_with_options, RouterOptions};
pub use types::{AppState, CourseSummary, Envelope, StudentCourses};
