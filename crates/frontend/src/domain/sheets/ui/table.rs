use crate::domain::sheets::table_model::{DisplayRow, TableModel};
use crate::domain::sheets::SheetWorkspace;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "sheet-data-table";

#[component]
pub fn SheetTable() -> impl IntoView {
    let ws = use_context::<SheetWorkspace>().expect("SheetWorkspace not provided in context");
    let session = ws.session;
    let model = Memo::new(move |_| session.with(TableModel::from_session));

    let row_view = {
        let ws = ws.clone();
        move |row: DisplayRow| {
            let edit_ws = ws.clone();
            let edit_index = row.row_index.clone();
            let delete_ws = ws.clone();
            let delete_index = row.row_index.clone();
            view! {
                <TableRow attr:data-row-index=row.key.clone()>
                    {row
                        .cells
                        .into_iter()
                        .map(|cell| {
                            view! {
                                <TableCell attr:data-label=cell.label>
                                    <TableCellLayout truncate=true>{cell.text}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view()}
                    <TableCell class="actions-cell">
                        <div class="row-actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                size=ButtonSize::Small
                                on_click=move |_| {
                                    let _ = edit_ws.open_edit_form(edit_index.clone());
                                }
                            >
                                {icon("edit")}
                                " Edit"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| delete_ws.request_delete(delete_index.clone())
                            >
                                {icon("trash")}
                                " Delete"
                            </Button>
                        </div>
                    </TableCell>
                </TableRow>
            }
        }
    };

    view! {
        <div class="table-wrapper">
            <Table attr:id=TABLE_ID attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {move || {
                            model
                                .with(|m| m.headers.clone())
                                .into_iter()
                                .map(|header| {
                                    view! { <TableHeaderCell resizable=false>{header}</TableHeaderCell> }
                                })
                                .collect_view()
                        }}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        model
                            .with(|m| m.rows.clone())
                            .into_iter()
                            .map(row_view.clone())
                            .collect_view()
                    }}
                </TableBody>
            </Table>
            <Show when=move || model.with(|m| m.rows.is_empty())>
                <div class="table-empty">"No records in this sheet."</div>
            </Show>
        </div>
    }
}
