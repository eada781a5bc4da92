use crate::domain::sheets::record_form::{FieldKind, FormField};
use crate::domain::sheets::SheetWorkspace;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Shape of the open form; typing changes values only, so the inputs are
/// not rebuilt on every keystroke.
#[derive(Debug, Clone, PartialEq)]
struct FormLayout {
    title: &'static str,
    fields: Vec<(String, FieldKind)>,
}

#[component]
pub fn RecordFormModal() -> impl IntoView {
    let ws = use_context::<SheetWorkspace>().expect("SheetWorkspace not provided in context");
    let record_form = ws.record_form;
    let form_modal = ws.form_modal;

    let layout = Memo::new(move |_| {
        record_form.with(|form| {
            form.as_ref().map(|form| FormLayout {
                title: form.title(),
                fields: form
                    .fields
                    .iter()
                    .map(|f| (f.header.clone(), f.kind))
                    .collect(),
            })
        })
    });

    let close = {
        let ws = ws.clone();
        Callback::new(move |_| ws.close_form())
    };
    let hidden = {
        let ws = ws.clone();
        Callback::new(move |_| ws.form_hidden())
    };

    let on_submit = {
        let ws = ws.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let ws = ws.clone();
            spawn_local(async move {
                let _ = ws.submit_form().await;
            });
        }
    };

    let field_view = move |(position, (header, kind)): (usize, (String, FieldKind))| {
        let ws = ws.clone();
        let value = move || {
            record_form.with(|form| {
                form.as_ref()
                    .and_then(|f| f.fields.get(position))
                    .map(|f| f.value.clone())
                    .unwrap_or_default()
            })
        };
        let input_id = FormField::input_id(position);
        let label_for = input_id.clone();
        let label = header.clone();
        view! {
            <div class="form-group">
                <label for=label_for>{label}</label>
                <input
                    type=kind.input_type()
                    id=input_id
                    name=header
                    required=true
                    prop:value=value
                    on:input=move |ev| ws.set_field(position, event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <ModalFrame
            state=form_modal
            on_close=close
            on_hidden=hidden
            modal_class="form-modal".to_string()
        >
            <div class="modal-header">
                <h2 class="modal-title">
                    {move || layout.with(|l| l.as_ref().map(|l| l.title).unwrap_or_default())}
                </h2>
                <button type="button" class="button button--icon modal__close" on:click=move |_| close.run(())>
                    {icon("x")}
                </button>
            </div>
            <form class="record-form" on:submit=on_submit>
                <div class="form-fields">
                    {move || {
                        layout
                            .get()
                            .map(|l| l.fields.into_iter().enumerate().map(field_view.clone()).collect_view())
                    }}
                </div>
                <div class="modal-actions">
                    <button type="button" class="button button--secondary" on:click=move |_| close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary">
                        {icon("save")}
                        " Save"
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
