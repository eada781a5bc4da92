use leptos::prelude::*;
use thaw::Spinner;

/// Shared "work in progress" state behind the loading overlay.
///
/// Every pending call holds a [`BusyGuard`]; the overlay stays up while at
/// least one guard is alive, so overlapping calls don't hide it early.
#[derive(Clone, Copy)]
pub struct BusyIndicator {
    pending: RwSignal<usize>,
}

impl BusyIndicator {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(0),
        }
    }

    pub fn acquire(&self) -> BusyGuard {
        self.pending.update(|n| *n += 1);
        BusyGuard { pending: self.pending }
    }

    /// Reactive: re-runs the caller when the indicator flips.
    pub fn is_busy(&self) -> bool {
        self.pending.get() > 0
    }

    pub fn pending(&self) -> usize {
        self.pending.get_untracked()
    }
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Released on drop, whichever way the call ended.
#[must_use = "the indicator drops back as soon as the guard is dropped"]
pub struct BusyGuard {
    pending: RwSignal<usize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.pending.try_update(|n| *n = n.saturating_sub(1));
    }
}

/// Full-page overlay shown while anything is pending
#[component]
pub fn BusyOverlay() -> impl IntoView {
    let busy = use_context::<BusyIndicator>().expect("BusyIndicator not provided in context");

    view! {
        <Show when=move || busy.is_busy()>
            <div class="loader-overlay">
                <Spinner />
            </div>
        </Show>
    }
}
