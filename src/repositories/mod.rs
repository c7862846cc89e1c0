mod fixtures;
mod in_memory;
mod traits;

pub use fixtures::sample_contacts;
pub use in_memory::InMemoryContactRepository;
pub use traits::{ContactRepository, PageResult};
