mod board;
mod bot;
mod logging;
mod persist;
mod session;
mod ship;
mod turn;
mod types;

pub use board::*;
pub use bot::*;
pub use logging::init_logging;
pub use persist::*;
pub use session::*;
pub use ship::*;
pub use turn::*;
pub use types::*;
