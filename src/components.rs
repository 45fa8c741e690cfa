mod user_form;
pub use user_form::*;
mod user_list;
pub use user_list::*;
