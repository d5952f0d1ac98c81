//! Database integration for seeding test data.
//!
//! The [`Seeder`] wipes a [`Store`](octofit::Store) and inserts the
//! superhero dataset; [`audit_references`] reports cross-kind references
//! that point at missing records.

mod audit;
mod seeder;

pub use audit::{DanglingReference, ReferenceReport, audit_references};
pub use seeder::{SeedError, SeedSummary, Seeder};
