pub mod components;
pub mod utils;

pub use components::*;
pub use utils::*;
