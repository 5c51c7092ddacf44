mod completion;
mod memory;

pub use completion::{FailingCompletion, FixedCompletion, RecordingCompletion};
pub use memory::{FailingMemoryStore, RecordingMemoryStore, StubMemoryStore};
