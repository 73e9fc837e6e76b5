use crate::domain::a001_page_type::ui::create::PageTypeCreate;
use crate::domain::a001_page_type::ui::details::PageTypeDetails;
use crate::domain::a001_page_type::ui::list::PageTypeList;
use crate::domain::a001_page_type::urls::PAGE_TYPE_SECTION;
use crate::layout::configuration::ConfigurationMenu;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="table__empty">"Страница не найдена"</div> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=PAGE_TYPE_SECTION /> } />
                    <Route path=path!("/configuration") view=ConfigurationMenu />
                    <Route path=path!("/page-types") view=PageTypeList />
                    <Route path=path!("/page-types/add") view=PageTypeCreate />
                    <Route path=path!("/page-types/:id") view=PageTypeDetails />
                </Routes>
            </Shell>
        </Router>
    }
}
