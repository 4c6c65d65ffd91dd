mod board;
pub use board::*;
mod state;
pub use state::*;
