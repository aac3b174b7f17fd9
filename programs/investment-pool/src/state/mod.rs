pub mod investor;
pub mod pool_state;

pub use investor::*;
pub use pool_state::*;
