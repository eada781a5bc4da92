use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Delay between showing the overlay and applying `visible`, so the CSS
/// transition starts from the hidden style.
pub const OPEN_DELAY_MS: u32 = 10;
/// Must be at least the CSS fade duration.
pub const CLOSE_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Phase plus an epoch that changes on every open/close request.
///
/// Delayed settles carry the epoch they were scheduled for; a settle from a
/// superseded request is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalTransition {
    phase: ModalPhase,
    epoch: u64,
}

impl ModalTransition {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn open(&mut self) -> Option<u64> {
        match self.phase {
            ModalPhase::Closed | ModalPhase::Closing => {
                self.phase = ModalPhase::Opening;
                self.epoch += 1;
                Some(self.epoch)
            }
            ModalPhase::Opening | ModalPhase::Open => None,
        }
    }

    pub fn close(&mut self) -> Option<u64> {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => {
                self.phase = ModalPhase::Closing;
                self.epoch += 1;
                Some(self.epoch)
            }
            ModalPhase::Closed | ModalPhase::Closing => None,
        }
    }

    /// Completes the pending transition scheduled at `epoch`.
    pub fn settle(&mut self, epoch: u64) -> Option<ModalPhase> {
        if epoch != self.epoch {
            return None;
        }
        let next = match self.phase {
            ModalPhase::Opening => ModalPhase::Open,
            ModalPhase::Closing => ModalPhase::Closed,
            ModalPhase::Open | ModalPhase::Closed => return None,
        };
        self.phase = next;
        Some(next)
    }

    /// The overlay is in the layout (`display: flex`)
    pub fn is_displayed(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// The `visible` class is applied
    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Open
    }
}

/// Reactive handle on one modal's transition state
#[derive(Clone, Copy)]
pub struct ModalState {
    transition: RwSignal<ModalTransition>,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            transition: RwSignal::new(ModalTransition::default()),
        }
    }

    pub fn open(&self) -> Option<u64> {
        self.transition.try_update(|t| t.open()).flatten()
    }

    pub fn close(&self) -> Option<u64> {
        self.transition.try_update(|t| t.close()).flatten()
    }

    pub fn settle(&self, epoch: u64) -> Option<ModalPhase> {
        self.transition.try_update(|t| t.settle(epoch)).flatten()
    }

    pub fn phase(&self) -> ModalPhase {
        self.transition.with_untracked(|t| t.phase())
    }

    pub fn epoch(&self) -> u64 {
        self.transition.with_untracked(|t| t.epoch())
    }

    pub fn is_displayed(&self) -> bool {
        self.transition.with(|t| t.is_displayed())
    }

    pub fn is_visible(&self) -> bool {
        self.transition.with(|t| t.is_visible())
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay + surface driven by a [`ModalState`].
///
/// Runs the timed half of every transition; `on_hidden` fires once the close
/// fade has finished and the overlay left the layout.
#[component]
pub fn ModalFrame(
    state: ModalState,
    /// Called when the modal should close (overlay click).
    on_close: Callback<()>,
    #[prop(optional)] on_hidden: Option<Callback<()>>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    Effect::new(move |_| {
        let transition = state.transition.get();
        let delay = match transition.phase() {
            ModalPhase::Opening => OPEN_DELAY_MS,
            ModalPhase::Closing => CLOSE_DELAY_MS,
            ModalPhase::Open | ModalPhase::Closed => return,
        };
        let epoch = transition.epoch();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if state.settle(epoch) == Some(ModalPhase::Closed) {
                if let Some(on_hidden) = on_hidden {
                    on_hidden.run(());
                }
            }
        });
    });

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so a text selection dragged outside the surface keeps the modal open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            on_close.run(());
        }
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            class:visible=move || state.is_visible()
            style:display=move || if state.is_displayed() { "flex" } else { "none" }
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_cycle() {
        let mut t = ModalTransition::default();
        assert!(!t.is_displayed());

        let opening = t.open().unwrap();
        assert_eq!(t.phase(), ModalPhase::Opening);
        assert!(t.is_displayed());
        assert!(!t.is_visible());

        assert_eq!(t.settle(opening), Some(ModalPhase::Open));
        assert!(t.is_visible());

        let closing = t.close().unwrap();
        assert_eq!(t.phase(), ModalPhase::Closing);
        assert!(t.is_displayed());
        assert!(!t.is_visible());

        assert_eq!(t.settle(closing), Some(ModalPhase::Closed));
        assert!(!t.is_displayed());
    }

    #[test]
    fn test_reopen_during_close_ignores_old_timer() {
        let mut t = ModalTransition::default();
        let opening = t.open().unwrap();
        t.settle(opening);

        let closing = t.close().unwrap();
        let reopening = t.open().unwrap();

        assert_eq!(t.settle(closing), None);
        assert_eq!(t.phase(), ModalPhase::Opening);
        assert_eq!(t.settle(reopening), Some(ModalPhase::Open));
    }

    #[test]
    fn test_redundant_requests_are_noops() {
        let mut t = ModalTransition::default();
        assert_eq!(t.close(), None);

        t.open();
        assert_eq!(t.open(), None);
        assert_eq!(t.settle(t.epoch() + 1), None);
    }

    #[test]
    fn test_modal_state_signal() {
        let owner = Owner::new();
        owner.set();

        let state = ModalState::new();
        let epoch = state.open().unwrap();
        assert_eq!(state.phase(), ModalPhase::Opening);
        assert_eq!(state.settle(epoch), Some(ModalPhase::Open));
        assert!(state.close().is_some());
        assert_eq!(state.phase(), ModalPhase::Closing);
    }
}
