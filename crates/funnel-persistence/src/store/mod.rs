pub mod atomic_writer;
pub mod envelope;
pub mod json_file_store;
pub mod memory_store;

pub use atomic_writer::AtomicWriter;
pub use envelope::JsonEnvelope;
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
