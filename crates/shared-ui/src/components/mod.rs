// Standalone components (no primitives)
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod page_header;

// Primitive wrapper
pub mod dialog;

// Depends on button
pub mod pagination;

pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
