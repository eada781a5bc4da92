use super::record_form_modal::RecordFormModal;
use super::table::SheetTable;
use super::tabs::SheetTabs;
use crate::domain::sheets::SheetWorkspace;
use crate::shared::confirm::ConfirmDialog;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn SheetConsolePage() -> impl IntoView {
    let ws = use_context::<SheetWorkspace>().expect("SheetWorkspace not provided in context");
    let session = ws.session;
    let confirmation = ws.confirmation;

    // Escape closes only the topmost modal
    let escape_ws = ws.clone();
    let _ = window_event_listener(leptos::ev::keydown, move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            escape_ws.handle_escape();
        }
    });

    let add_record = {
        let ws = ws.clone();
        move |_| {
            let _ = ws.open_create_form();
        }
    };

    let refresh = {
        let ws = ws.clone();
        move |_| {
            let ws = ws.clone();
            spawn_local(async move {
                let _ = ws.reload_active().await;
            });
        }
    };

    let on_confirm = {
        let ws = ws.clone();
        Callback::new(move |_| {
            let ws = ws.clone();
            spawn_local(async move {
                let _ = ws.confirm().await;
            });
        })
    };
    let on_cancel = {
        let ws = ws.clone();
        Callback::new(move |_| ws.cancel_confirm())
    };

    let has_sheet = Signal::derive(move || session.with(|s| s.active.is_some()));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || session.with(|s| s.active.clone()).unwrap_or_else(|| "Sheets".to_string())}
                    </h1>
                    <Badge>{move || session.with(|s| s.rows.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=add_record
                        disabled=Signal::derive(move || !has_sheet.get())
                    >
                        {icon("plus")}
                        " Add New Record"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=refresh
                        disabled=Signal::derive(move || !has_sheet.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <SheetTabs />

            <div class="page__content">
                <SheetTable />
            </div>

            <RecordFormModal />
            <ConfirmDialog
                state=ws.confirm_modal
                message=Signal::derive(move || confirmation.with(|c| c.message().to_string()))
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </div>
    }
}
