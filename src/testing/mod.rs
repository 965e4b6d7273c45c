//! Test doubles for the ports.

mod fixed_clock;
mod memory_artifact_store;
mod outline_builder;

#[allow(unused_imports)]
pub use fixed_clock::FixedClock;
#[allow(unused_imports)]
pub use memory_artifact_store::MemoryArtifactStore;
#[allow(unused_imports)]
pub use outline_builder::OutlineBuilder;
