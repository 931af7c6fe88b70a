pub mod consultation_list;
pub mod health_status;
pub mod page_shell;

pub use consultation_list::*;
pub use health_status::*;
pub use page_shell::*;
