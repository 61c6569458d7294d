//! Storage layer for the student and course registry
//!
//! Handlers talk to storage through the traits in [`traits`]; the only
//! backend today is [`MemoryRepository`], populated at startup from a
//! [`SeedSource`].
//!
//! # Quick Start
//!
//! ```no_run
//! use campus_repository::{CourseRepository, MemoryRepository, SeedSource};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let seed = SeedSource::Builtin.load().await?;
//!     let repo = MemoryRepository::from_seed(seed)?;
//!
//!     for course in repo.list_courses().await? {
//!         println!("{} {}", course.course_id, course.course_title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

pub use error::{RepositoryError, RepositoryResult};
pub use memory::MemoryRepository;
pub use seed::{SeedData, SeedSource};
pub use traits::{CourseRepository, Registry, StudentRepository};
