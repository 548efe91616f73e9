pub mod loader;

pub use loader::{ScheduleParams, SlabLoader, SlabLoaderError, SlabRecord};
