pub mod cli;
pub mod controller;
pub mod dom;
pub mod events;
pub mod io;
pub mod logging;
pub mod model;
pub mod session;
pub mod tui;
pub mod util;
