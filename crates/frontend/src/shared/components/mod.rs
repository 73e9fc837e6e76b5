pub mod action_dialog;
pub mod filter_tab_bar;
pub mod page_header;
pub mod pagination_controls;
pub mod table;
