pub mod a001_page_type;
pub mod common;
