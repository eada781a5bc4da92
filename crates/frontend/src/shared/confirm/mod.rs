use crate::shared::modal_frame::{ModalFrame, ModalState};
use leptos::prelude::*;

/// A yes/no question with exactly one pending answer.
///
/// Binding replaces whatever was pending; taking the action empties the
/// slot, so a bound action fires at most once and never alongside an older
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmSlot<A> {
    message: String,
    action: Option<A>,
}

impl<A> Default for ConfirmSlot<A> {
    fn default() -> Self {
        Self {
            message: String::new(),
            action: None,
        }
    }
}

impl<A> ConfirmSlot<A> {
    pub fn bind(&mut self, message: impl Into<String>, action: A) {
        self.message = message.into();
        self.action = Some(action);
    }

    pub fn take(&mut self) -> Option<A> {
        self.action.take()
    }

    pub fn clear(&mut self) {
        self.action = None;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_pending(&self) -> bool {
        self.action.is_some()
    }
}

#[component]
pub fn ConfirmDialog(
    state: ModalState,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalFrame state=state on_close=on_cancel modal_class="confirm-modal".to_string()>
            <p class="confirm-message">{move || message.get()}</p>
            <div class="modal-actions">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="button button--danger" on:click=move |_| on_confirm.run(())>
                    "OK"
                </button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    type Action = Box<dyn FnOnce()>;

    fn counting(counter: &Rc<Cell<u32>>) -> Action {
        let counter = counter.clone();
        Box::new(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn test_second_binding_replaces_first() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot: ConfirmSlot<Action> = ConfirmSlot::default();

        slot.bind("Delete row 2?", counting(&first));
        slot.bind("Delete row 5?", counting(&second));
        assert_eq!(slot.message(), "Delete row 5?");

        if let Some(action) = slot.take() {
            action();
        }

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_action_fires_once() {
        let fired = Rc::new(Cell::new(0));
        let mut slot: ConfirmSlot<Action> = ConfirmSlot::default();
        slot.bind("Sure?", counting(&fired));

        for _ in 0..3 {
            if let Some(action) = slot.take() {
                action();
            }
        }

        assert_eq!(fired.get(), 1);
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_clear_drops_pending_action() {
        let fired = Rc::new(Cell::new(0));
        let mut slot: ConfirmSlot<Action> = ConfirmSlot::default();
        slot.bind("Sure?", counting(&fired));
        slot.clear();

        assert!(slot.take().is_none());
        assert_eq!(fired.get(), 0);
    }
}
