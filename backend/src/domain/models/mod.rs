//! Domain models used by the services. The REST layer maps these to and from
//! the DTOs in the `shared` crate.

pub mod area;
pub mod child;
pub mod completion;
pub mod task;

pub use area::AreaFilter;
pub use child::Child;
pub use completion::Completion;
pub use task::LearningTask;
