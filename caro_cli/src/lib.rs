mod command;
mod save_file;
mod session;
pub use command::*;
pub use save_file::*;
pub use session::*;
