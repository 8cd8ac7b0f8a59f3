pub mod item;
pub mod list;

pub use item::*;
pub use list::*;
