//! Resource locator adapters.

mod file_system;
mod memory;

pub use file_system::FileSystemLocator;
pub use memory::InMemoryLocator;
