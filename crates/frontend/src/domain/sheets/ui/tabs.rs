use crate::domain::sheets::SheetWorkspace;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// One button per sheet; clicking re-fetches that sheet.
#[component]
pub fn SheetTabs() -> impl IntoView {
    let ws = use_context::<SheetWorkspace>().expect("SheetWorkspace not provided in context");
    let session = ws.session;

    view! {
        <nav class="sheet-tabs">
            <For
                each=move || session.with(|s| s.sheet_names.clone())
                key=|name| name.clone()
                children=move |name: String| {
                    let name_for_active = name.clone();
                    let is_active = Memo::new(move |_| session.with(|s| s.is_active(&name_for_active)));
                    let ws = ws.clone();
                    let name_for_click = name.clone();
                    let data_name = name.clone();
                    let on_click = move |_| {
                        let ws = ws.clone();
                        let name = name_for_click.clone();
                        spawn_local(async move {
                            let _ = ws.select_sheet(name).await;
                        });
                    };
                    view! {
                        <button
                            class="sheet-tab"
                            class:active=is_active
                            data-sheet-name=data_name
                            on:click=on_click
                        >
                            {name}
                        </button>
                    }
                }
            />
        </nav>
    }
}
