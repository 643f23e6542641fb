//! # larder-storage
//!
//! Persistence for Larder recipes.
//!
//! - [`StoragePort`]: a single slot holding the serialized collection
//! - [`MemoryStorage`] and [`FileStorage`]: the two port implementations
//! - [`RecipeStore`]: list/get/add/update/delete over a port
//! - [`Clock`]: time source for record timestamps

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod file;
pub mod memory;
pub mod port;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, StorageError};
pub use file::{DEFAULT_NAMESPACE, FileStorage};
pub use memory::MemoryStorage;
pub use port::StoragePort;
pub use store::{Durability, RecipeStore, Saved};
