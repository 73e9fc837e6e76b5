//! Per-list UI settings persisted in the browser (rows per page).

use super::storage::{read_json, write_json, KeyValueStorage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const STORAGE_KEY: &str = "listConfig";

pub const DEFAULT_ROW_NUMBER: u32 = 20;

/// Значения для выбора размера страницы
pub const ROW_NUMBER_OPTIONS: [u32; 5] = [10, 20, 30, 50, 100];

/// Списки, у которых есть собственные настройки
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListView {
    PageTypes,
}

impl ListView {
    pub fn storage_name(&self) -> &'static str {
        match self {
            ListView::PageTypes => "PAGE_TYPES_LIST",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSettings {
    pub row_number: u32,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            row_number: DEFAULT_ROW_NUMBER,
        }
    }
}

type ListConfig = HashMap<String, ListSettings>;

pub fn load_list_settings(storage: &impl KeyValueStorage, view: ListView) -> ListSettings {
    read_json::<ListConfig>(storage, STORAGE_KEY)
        .and_then(|config| config.get(view.storage_name()).copied())
        .filter(|s| s.row_number > 0)
        .unwrap_or_default()
}

pub fn save_list_settings(storage: &impl KeyValueStorage, view: ListView, settings: ListSettings) {
    let mut config: ListConfig = read_json(storage, STORAGE_KEY).unwrap_or_default();
    config.insert(view.storage_name().to_string(), settings);
    write_json(storage, STORAGE_KEY, &config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_defaults_when_nothing_saved() {
        let storage = MemoryStorage::default();
        assert_eq!(
            load_list_settings(&storage, ListView::PageTypes).row_number,
            DEFAULT_ROW_NUMBER
        );
    }

    #[test]
    fn test_save_keeps_other_views() {
        let storage = MemoryStorage::default();
        storage
            .set(STORAGE_KEY, r#"{"PRODUCTS_LIST":{"row_number":50}}"#)
            .unwrap();

        save_list_settings(&storage, ListView::PageTypes, ListSettings { row_number: 30 });

        assert_eq!(load_list_settings(&storage, ListView::PageTypes).row_number, 30);
        let raw = storage.get(STORAGE_KEY).unwrap();
        assert!(raw.contains("PRODUCTS_LIST"));
    }

    #[test]
    fn test_zero_row_number_falls_back_to_default() {
        let storage = MemoryStorage::default();
        save_list_settings(&storage, ListView::PageTypes, ListSettings { row_number: 0 });
        assert_eq!(
            load_list_settings(&storage, ListView::PageTypes),
            ListSettings::default()
        );
    }
}
