//! In-memory presentation tree the controllers use as their state store.
//!
//! Item state lives in classes and element text exactly as it would on a
//! page; there is no separate model object behind it.

pub mod chrome;
pub mod class_list;
pub mod input;
pub mod location;
pub mod node;
pub mod template;

pub use chrome::*;
pub use class_list::*;
pub use input::*;
pub use location::*;
pub use node::*;
pub use template::*;
