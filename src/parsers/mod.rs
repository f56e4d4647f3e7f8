pub mod detail;
pub mod list;


pub use detail::parse_character_page;
pub use list::{ListParser, parse_character_list};
