pub mod migration;
pub mod serialization;
pub mod store;
pub mod traits;
pub mod workspace;

pub use migration::*;
pub use serialization::*;
pub use store::*;
pub use traits::*;
pub use workspace::Workspace;
