pub mod item;
pub mod list;

pub use item::{ItemController, ItemView};
pub use list::{Key, ListController};
