//! Сохранённые наборы фильтров ("вкладки") списков.
//!
//! Вкладки хранятся JSON-массивом под ключом конкретного списка.
//! Индексы, которые видит экран, начинаются с 1, вкладка 0 означает "Все".

use super::storage::{read_json, write_json, KeyValueStorage};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTab<T> {
    pub name: String,
    pub data: T,
}

pub fn get_filter_tabs<T: DeserializeOwned>(
    storage: &impl KeyValueStorage,
    key: &str,
) -> Vec<FilterTab<T>> {
    read_json(storage, key).unwrap_or_default()
}

/// Raw stored entries. Each entry stays a `serde_json::Value`, so an entry
/// written in an older shape survives saves and deletes. `None` when the
/// stored value is not a JSON array.
fn read_entries(storage: &impl KeyValueStorage, key: &str) -> Option<Vec<serde_json::Value>> {
    match storage.get(key) {
        None => Some(Vec::new()),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(entries) => Some(entries),
            Err(e) => {
                log::warn!("Saved filter tabs under '{}' are unreadable: {}", key, e);
                None
            }
        },
    }
}

pub fn save_filter_tab<T: Serialize>(storage: &impl KeyValueStorage, key: &str, name: &str, data: T) {
    let mut entries = read_entries(storage, key).unwrap_or_else(|| {
        log::warn!("Replacing unreadable saved filter tabs under '{}'", key);
        Vec::new()
    });
    let tab = FilterTab {
        name: name.trim().to_string(),
        data,
    };
    match serde_json::to_value(&tab) {
        Ok(entry) => entries.push(entry),
        Err(e) => {
            log::warn!("Failed to serialize filter tab '{}': {}", tab.name, e);
            return;
        }
    }
    write_json(storage, key, &entries);
}

/// Removes the tab with the given 1-based index. Out-of-range indexes are ignored.
/// The key is cleared once the last tab is gone.
pub fn delete_filter_tab(storage: &impl KeyValueStorage, key: &str, index: usize) {
    let Some(mut entries) = read_entries(storage, key) else {
        return;
    };
    if index == 0 || index > entries.len() {
        log::warn!("No saved filter tab #{} under '{}'", index, key);
        return;
    }
    entries.remove(index - 1);
    if entries.is_empty() {
        storage.remove(key);
    } else {
        write_json(storage, key, &entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    const KEY: &str = "testFilters";

    #[test]
    fn test_save_appends_and_delete_is_one_based() {
        let storage = MemoryStorage::default();
        save_filter_tab(&storage, KEY, " first ", "a".to_string());
        save_filter_tab(&storage, KEY, "second", "b".to_string());
        save_filter_tab(&storage, KEY, "third", "c".to_string());

        let tabs: Vec<FilterTab<String>> = get_filter_tabs(&storage, KEY);
        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs[0].name, "first");

        delete_filter_tab(&storage, KEY, 2);
        let names: Vec<String> = get_filter_tabs::<String>(&storage, KEY)
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn test_delete_out_of_range_keeps_tabs() {
        let storage = MemoryStorage::default();
        save_filter_tab(&storage, KEY, "only", 1u32);

        delete_filter_tab(&storage, KEY, 0);
        delete_filter_tab(&storage, KEY, 5);

        assert_eq!(get_filter_tabs::<u32>(&storage, KEY).len(), 1);
    }

    #[test]
    fn test_deleting_last_tab_clears_key() {
        let storage = MemoryStorage::default();
        save_filter_tab(&storage, KEY, "only", 1u32);

        delete_filter_tab(&storage, KEY, 1);

        assert_eq!(storage.get(KEY), None);
        assert!(get_filter_tabs::<u32>(&storage, KEY).is_empty());
    }

    #[test]
    fn test_save_keeps_entries_of_another_shape() {
        let storage = MemoryStorage::default();
        storage
            .set(KEY, r#"[{"name":"legacy","data":{"query":"old"}}]"#)
            .unwrap();

        save_filter_tab(&storage, KEY, "new", "a".to_string());

        let raw: Vec<serde_json::Value> = read_json(&storage, KEY).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0]["name"], "legacy");
        assert_eq!(raw[1]["data"], "a");
    }

    #[test]
    fn test_save_replaces_unreadable_value() {
        let storage = MemoryStorage::default();
        storage.set(KEY, "{broken").unwrap();

        save_filter_tab(&storage, KEY, "fresh", 7u32);

        let tabs: Vec<FilterTab<u32>> = get_filter_tabs(&storage, KEY);
        assert_eq!(tabs, vec![FilterTab { name: "fresh".into(), data: 7 }]);
    }
}
