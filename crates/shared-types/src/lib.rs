pub mod consultation;
pub mod error;
pub mod feature_flags;
pub mod health;
pub mod role;
pub mod view;

pub use consultation::*;
pub use error::*;
pub use feature_flags::*;
pub use health::*;
pub use role::*;
pub use view::*;
