pub mod applicant;
pub mod config;
pub mod error;
pub mod pagination;
pub mod roster;

pub use applicant::*;
pub use config::*;
pub use error::*;
pub use roster::*;
