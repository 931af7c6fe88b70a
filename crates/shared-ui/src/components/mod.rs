pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod page_header;
pub mod skeleton;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_select::*;
pub use page_header::*;
pub use skeleton::*;
