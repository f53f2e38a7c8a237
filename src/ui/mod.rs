pub mod console;
pub mod messages;

pub use console::Console;
