pub mod config;
pub mod error;
pub mod id;
pub mod logging;
pub mod result;

pub use config::AppConfig;
pub use error::FunnelError;
pub use id::{generate_id, IdGenerator, SequentialGenerator, UuidGenerator};
pub use result::FunnelResult;
