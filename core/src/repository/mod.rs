pub mod file;
pub mod http;
pub mod memory;
pub mod traits;

pub use file::FileRecordStore;
pub use http::HttpRecordStore;
pub use memory::MemoryRecordStore;
pub use traits::RecordStore;
