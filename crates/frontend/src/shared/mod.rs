pub mod api_utils;
pub mod bulk_actions;
pub mod components;
pub mod filter_tabs;
pub mod icons;
pub mod list_settings;
pub mod list_utils;
pub mod modal;
pub mod notifier;
pub mod pagination;
pub mod storage;
