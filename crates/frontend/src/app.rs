use crate::domain::sheets::ui::SheetConsolePage;
use crate::domain::sheets::SheetWorkspace;
use crate::shared::busy::{BusyIndicator, BusyOverlay};
use crate::shared::config::AppConfig;
use crate::shared::gateway::{FetchTransport, GatewayClient};
use crate::shared::notifications::{Notifications, ToastHost};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let config = Arc::new(AppConfig::from_location());
    let busy = BusyIndicator::new();
    let notifications = Notifications::new();

    let gateway = config.endpoint.as_ref().map(|endpoint| {
        log::info!("Using gateway {}", endpoint);
        GatewayClient::new(Arc::new(FetchTransport::new(endpoint.clone())), busy)
    });
    let workspace = SheetWorkspace::new(config.clone(), gateway, notifications);

    provide_context(busy);
    provide_context(notifications);
    provide_context(workspace.clone());

    spawn_local(async move {
        let _ = workspace.load_sheet_names().await;
    });

    view! {
        <SheetConsolePage />
        <BusyOverlay />
        <ToastHost lifetime_ms=config.toast_ms />
    }
}
