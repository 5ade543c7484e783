//! ID type wrappers for type safety.

#[macro_use]
mod id_macro;

pub mod collection_name;
pub mod submission_id;

pub use collection_name::CollectionName;
pub use submission_id::SubmissionId;
