use crate::Route;
use camview_ui::AppLayoutView;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        AppLayoutView {
            on_title_click: move |_| {
                navigator().push(Route::Cameras {});
            },
            Outlet::<Route> {}
        }
    }
}
