pub mod filters;
pub mod handlers;
pub mod query;
pub mod sort;

use self::handlers::{page_types_word, ListEffects};
use self::query::build_query_variables;
use crate::domain::a001_page_type::api;
use crate::domain::a001_page_type::urls::{
    page_type_add_url, page_type_url, PageTypeListUrlDialog, PageTypeListUrlQueryParams,
    PageTypeListUrlSortField,
};
use crate::shared::bulk_actions::BulkSelection;
use crate::shared::components::action_dialog::{ActionDialog, ConfirmButtonState};
use crate::shared::components::filter_tab_bar::FilterTabBar;
use crate::layout::configuration::CONFIGURATION_MENU_URL;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_settings::{load_list_settings, save_list_settings, ListSettings, ListView};
use crate::shared::list_utils::SearchInput;
use crate::shared::notifier::{use_notifier, Notifier};
use crate::shared::pagination::{adjust_page_info, create_pagination_state};
use crate::shared::storage::BrowserStorage;
use contracts::domain::a001_page_type::dto::PageTypeListResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use thaw::*;

/// Эффекты списка в браузере: сигналы экрана, уведомления и роутер
struct ViewEffects<N> {
    selection: RwSignal<BulkSelection>,
    notifier: Notifier,
    refresh: RwSignal<u64>,
    navigate: N,
}

impl<N: Fn(&str, NavigateOptions)> ListEffects for ViewEffects<N> {
    fn reset_selection(&self) {
        self.selection.update(|s| s.reset());
    }

    fn navigate(&self, url: &str, replace: bool) {
        (self.navigate)(
            url,
            NavigateOptions {
                replace,
                ..Default::default()
            },
        );
    }

    fn notify_success(&self, text: &str) {
        self.notifier.success(text);
    }

    fn refetch(&self) {
        self.refresh.update(|n| *n += 1);
    }
}

/// `false` when a newer list request was issued or the list view is gone
fn is_latest_request(request_seq: StoredValue<u64>, seq: u64) -> bool {
    request_seq.try_get_value() == Some(seq)
}

#[component]
pub fn PageTypeList() -> impl IntoView {
    let location = use_location();
    let params = Memo::new(move |_| PageTypeListUrlQueryParams::parse(&location.search.get()));

    let notifier = use_notifier();
    let selection = RwSignal::new(BulkSelection::new(params.get_untracked().ids));
    let refresh = RwSignal::new(0u64);
    let fx = StoredValue::new_local(ViewEffects {
        selection,
        notifier,
        refresh,
        navigate: use_navigate(),
    });

    let row_number =
        RwSignal::new(load_list_settings(&BrowserStorage, ListView::PageTypes).row_number);
    let query_vars = Memo::new(move |_| build_query_variables(&params.get(), row_number.get()));

    let (data, set_data) = signal(None::<PageTypeListResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let request_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let vars = query_vars.get();
        refresh.track();

        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_loading.set(true);

        spawn_local(async move {
            let result = api::list_page_types(&vars).await;
            if !is_latest_request(request_seq, seq) {
                log::debug!("Dropping stale page type list response #{}", seq);
                return;
            }
            match result {
                Ok(resp) => {
                    set_data.set(Some(resp));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load page types: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    // Вкладки читаются из хранилища заново после сохранения / удаления
    let tabs_version = RwSignal::new(0u32);
    let tabs = Memo::new(move |_| {
        tabs_version.track();
        filters::get_filter_tabs(&BrowserStorage)
    });
    let tab_names =
        Signal::derive(move || tabs.with(|t| t.iter().map(|t| t.name.clone()).collect::<Vec<_>>()));
    let current_tab = Memo::new(move |_| filters::current_tab(&params.get(), tabs.with(|t| t.len())));

    let items = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.items.clone()).unwrap_or_default())
    });
    let visible_ids =
        Signal::derive(move || items.with(|rows| rows.iter().map(|r| r.id.clone()).collect::<Vec<_>>()));
    let total_count = Signal::derive(move || data.with(|d| d.as_ref().map_or(0, |d| d.total_count)));
    let page_info = Memo::new(move |_| {
        let info = data.with(|d| d.as_ref().map(|d| d.page_info.clone()).unwrap_or_default());
        let state = create_pagination_state(row_number.get(), &params.get());
        adjust_page_info(&info, &state)
    });

    // Поле поиска пересоздаётся при смене вкладки, чтобы показать её фильтр
    let search_key = RwSignal::new(0u32);

    let on_search = Callback::new(move |value: String| {
        fx.with_value(|fx| handlers::change_filter_field(fx, &params.get_untracked(), &value));
    });

    let on_tab_change = Callback::new(move |tab: usize| {
        fx.with_value(|fx| handlers::change_tab(fx, &BrowserStorage, tab));
        search_key.update(|k| *k += 1);
    });

    let on_sort = Callback::new(move |key: &'static str| {
        if let Some(field) = PageTypeListUrlSortField::from_key(key) {
            fx.with_value(|fx| handlers::sort(fx, &params.get_untracked(), field));
        }
    });

    let on_next_page = Callback::new(move |_: ()| {
        fx.with_value(|fx| {
            handlers::next_page(fx, &params.get_untracked(), &page_info.get_untracked())
        });
    });

    let on_previous_page = Callback::new(move |_: ()| {
        fx.with_value(|fx| {
            handlers::previous_page(fx, &params.get_untracked(), &page_info.get_untracked())
        });
    });

    let on_row_number_change = Callback::new(move |value: u32| {
        save_list_settings(
            &BrowserStorage,
            ListView::PageTypes,
            ListSettings { row_number: value },
        );
        row_number.set(value);
    });

    let open_dialog = move |action: PageTypeListUrlDialog, ids: Vec<String>| {
        fx.with_value(|fx| handlers::open_dialog(fx, &params.get_untracked(), action, ids));
    };
    let close_dialog = Callback::new(move |_: ()| {
        fx.with_value(|fx| handlers::close_dialog(fx, &params.get_untracked()));
    });

    // Массовое удаление
    let remove_state = RwSignal::new(ConfirmButtonState::Default);
    let remove_count = Memo::new(move |_| params.with(|p| p.ids.len()));

    let open_remove_dialog = move |_: leptos::ev::MouseEvent| {
        remove_state.set(ConfirmButtonState::Default);
        let ids = selection.with_untracked(|s| s.list_elements().to_vec());
        open_dialog(PageTypeListUrlDialog::Remove, ids);
    };

    let on_remove_confirm = Callback::new(move |_: ()| {
        let ids = params.with_untracked(|p| p.ids.clone());
        remove_state.set(ConfirmButtonState::Loading);
        spawn_local(async move {
            match api::bulk_delete_page_types(ids).await {
                Ok(response) => {
                    // Экран мог быть закрыт, пока шёл запрос
                    let Some(current) = params.try_get_untracked() else {
                        return;
                    };
                    let Some(done) = fx.try_with_value(|fx| {
                        handlers::on_bulk_delete_completed(fx, &current, &response)
                    }) else {
                        return;
                    };
                    remove_state.set(if done {
                        ConfirmButtonState::Default
                    } else {
                        ConfirmButtonState::Error
                    });
                }
                Err(e) => {
                    log::error!("Bulk delete failed: {}", e);
                    remove_state.set(ConfirmButtonState::Error);
                }
            }
        });
    });

    // Сохранение и удаление вкладок
    let tab_name = RwSignal::new(String::new());

    let on_save_tab_open = Callback::new(move |_: ()| {
        tab_name.set(String::new());
        open_dialog(PageTypeListUrlDialog::SaveSearch, Vec::new());
    });

    let on_save_tab_confirm = Callback::new(move |_: ()| {
        let name = tab_name.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        fx.with_value(|fx| handlers::save_tab(fx, &BrowserStorage, &params.get_untracked(), &name));
        tabs_version.update(|v| *v += 1);
    });

    let on_delete_tab_open = Callback::new(move |_: ()| {
        open_dialog(PageTypeListUrlDialog::DeleteSearch, Vec::new());
    });

    let on_delete_tab_confirm = Callback::new(move |_: ()| {
        fx.with_value(|fx| handlers::delete_tab(fx, &BrowserStorage, &params.get_untracked()));
        tabs_version.update(|v| *v += 1);
        search_key.update(|k| *k += 1);
    });

    let current_tab_name = move || {
        let index = current_tab.get();
        tabs.with(|t| {
            index
                .checked_sub(1)
                .and_then(|i| t.get(i))
                .map(|tab| tab.name.clone())
        })
        .unwrap_or_else(|| "(без названия)".to_string())
    };

    let on_fill_test_data = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            match api::insert_test_data().await {
                Ok(()) => {
                    notifier.success("Тестовые данные добавлены");
                    refresh.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("Failed to insert test data: {}", e);
                    notifier.error(e);
                }
            }
        });
    };

    view! {
        <div class="page" id="a001_page_type--list">
            <PageHeader
                title="Типы страниц"
                back_href=CONFIGURATION_MENU_URL.to_string()
                subtitle=Signal::derive(move || {
                    let n = total_count.get() as usize;
                    Some(format!("{} {}", n, page_types_word(n)))
                })
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| fx.with_value(|fx| fx.navigate(&page_type_add_url(), false))
                >
                    {icon("plus")}
                    "Добавить"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh.update(|n| *n += 1)>
                    {icon("refresh")}
                    "Обновить"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=on_fill_test_data>
                    "Тестовые данные"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || selection.with(|s| s.is_empty()))
                    on_click=open_remove_dialog
                >
                    {icon("delete")}
                    {move || format!("Удалить ({})", selection.with(|s| s.len()))}
                </Button>
            </PageHeader>

            <FilterTabBar
                tabs=tab_names
                current=current_tab
                all_label="Все типы страниц"
                on_change=on_tab_change
                on_save=on_save_tab_open
                on_delete=on_delete_tab_open
            />

            {move || {
                search_key.track();
                let initial = params.with_untracked(|p| p.query.clone().unwrap_or_default());
                view! {
                    <SearchInput
                        initial=initial
                        on_change=on_search
                        placeholder="Поиск по наименованию или slug"
                    />
                }
            }}

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table" class:table--loading=move || loading.get()>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                selected_count=Signal::derive(move || {
                                    let sel = selection.get();
                                    visible_ids.with(|ids| ids.iter().filter(|id| sel.is_selected(id)).count())
                                })
                                total_count=Signal::derive(move || visible_ids.with(|ids| ids.len()))
                                on_toggle_all=Callback::new(move |_: ()| {
                                    let ids = visible_ids.get_untracked();
                                    selection.update(|s| s.toggle_all(&ids));
                                })
                            />
                            <SortableHeaderCell
                                label="Наименование"
                                sort_field=PageTypeListUrlSortField::Name.as_str()
                                current_sort_field=Signal::derive(move || {
                                    params.with(|p| p.sort.unwrap_or_default().as_str().to_string())
                                })
                                sort_ascending=Signal::derive(move || params.with(sort::is_ascending))
                                on_sort=on_sort
                                min_width=240.0
                            />
                            <SortableHeaderCell
                                label="Slug"
                                sort_field=PageTypeListUrlSortField::Slug.as_str()
                                current_sort_field=Signal::derive(move || {
                                    params.with(|p| p.sort.unwrap_or_default().as_str().to_string())
                                })
                                sort_ascending=Signal::derive(move || params.with(sort::is_ascending))
                                on_sort=on_sort
                            />
                            <TableHeaderCell min_width=160.0>"Изменён"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id.clone();
                            let id_for_click = row.id.clone();
                            let id_for_checked = row.id.clone();
                            view! {
                                <TableRow
                                    class="table__row--clickable"
                                    on:click=move |_| {
                                        let url = page_type_url(&id_for_click);
                                        fx.with_value(|fx| fx.navigate(&url, false));
                                    }
                                >
                                    <TableCellCheckbox
                                        item_id=id
                                        checked=Signal::derive(move || selection.with(|s| s.is_selected(&id_for_checked)))
                                        on_toggle=Callback::new(move |id: String| selection.update(|s| s.toggle(&id)))
                                    />
                                    <TableCell>
                                        <TableCellLayout>{row.name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                            {row.slug}
                                        </Badge>
                                    </TableCell>
                                    <TableCell>{row.updated_at}</TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
                <Show when=move || !loading.get() && data.with(|d| d.as_ref().is_some_and(|d| d.items.is_empty()))>
                    <div class="table__empty">"Типы страниц не найдены"</div>
                </Show>
            </div>

            <PaginationControls
                has_previous_page=Signal::derive(move || page_info.with(|p| p.has_previous_page))
                has_next_page=Signal::derive(move || page_info.with(|p| p.has_next_page))
                total_count=total_count
                row_number=row_number
                on_previous_page=on_previous_page
                on_next_page=on_next_page
                on_row_number_change=on_row_number_change
                disabled=Signal::derive(move || loading.get())
            />

            <ActionDialog
                open=Signal::derive(move || params.with(|p| p.is_dialog_open(PageTypeListUrlDialog::Remove)))
                title="Удаление типов страниц"
                confirm_label="Удалить"
                confirm_state=remove_state
                danger=true
                confirm_disabled=Signal::derive(move || remove_count.get() == 0)
                on_confirm=on_remove_confirm
                on_close=close_dialog
            >
                <p>
                    {move || {
                        let n = remove_count.get();
                        format!("Удалить {} {}? Действие нельзя отменить.", n, page_types_word(n))
                    }}
                </p>
            </ActionDialog>

            <ActionDialog
                open=Signal::derive(move || params.with(|p| p.is_dialog_open(PageTypeListUrlDialog::SaveSearch)))
                title="Сохранить поиск"
                confirm_label="Сохранить"
                confirm_state=Signal::derive(|| ConfirmButtonState::Default)
                confirm_disabled=Signal::derive(move || tab_name.with(|n| n.trim().is_empty()))
                on_confirm=on_save_tab_confirm
                on_close=close_dialog
            >
                <div class="form-group">
                    <label>"Название вкладки"</label>
                    <Input value=tab_name placeholder="Например: Блоги" />
                </div>
            </ActionDialog>

            <ActionDialog
                open=Signal::derive(move || params.with(|p| p.is_dialog_open(PageTypeListUrlDialog::DeleteSearch)))
                title="Удалить вкладку"
                confirm_label="Удалить"
                confirm_state=Signal::derive(|| ConfirmButtonState::Default)
                danger=true
                on_confirm=on_delete_tab_confirm
                on_close=close_dialog
            >
                <p>{move || format!("Удалить вкладку \"{}\"?", current_tab_name())}</p>
            </ActionDialog>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_request_tracks_sequence() {
        let owner = Owner::new();
        let request_seq = owner.with(|| StoredValue::new(1u64));

        assert!(is_latest_request(request_seq, 1));
        request_seq.set_value(2);
        assert!(!is_latest_request(request_seq, 1));
        assert!(is_latest_request(request_seq, 2));
    }

    #[test]
    fn test_response_after_view_is_gone_is_dropped() {
        let owner = Owner::new();
        let request_seq = owner.with(|| StoredValue::new(1u64));
        drop(owner);

        assert!(!is_latest_request(request_seq, 1));
    }
}
