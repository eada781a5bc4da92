use super::state::SheetSession;
use crate::shared::date_utils::display_cell;
use contracts::sheets::RowIndex;

pub const ACTIONS_HEADER: &str = "Actions";

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCell {
    /// Header of the column, repeated for the stacked mobile layout
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub row_index: RowIndex,
    pub key: String,
    pub cells: Vec<DisplayCell>,
}

/// What the table shows for the current session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableModel {
    pub headers: Vec<String>,
    pub rows: Vec<DisplayRow>,
}

impl TableModel {
    pub fn from_session(session: &SheetSession) -> Self {
        let mut headers = session.headers.clone();
        headers.push(ACTIONS_HEADER.to_string());

        let rows = session
            .rows
            .iter()
            .map(|row| DisplayRow {
                row_index: row.row_index.clone(),
                key: row.row_index.key(),
                cells: (0..row.data.len())
                    .map(|position| DisplayCell {
                        label: session.headers.get(position).cloned().unwrap_or_default(),
                        text: display_cell(&row.cell(position)),
                    })
                    .collect(),
            })
            .collect();

        Self { headers, rows }
    }

    /// Data columns plus the actions column
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::sheets::{SheetData, SheetRow};
    use serde_json::json;

    fn session_with(data: SheetData) -> SheetSession {
        let mut session = SheetSession::default();
        let ticket = session.begin_load("Clientes");
        session.apply_data(&ticket, data);
        session
    }

    #[test]
    fn test_counts_follow_response() {
        let session = session_with(SheetData {
            headers: vec!["Nombre".into(), "Email".into(), "Fecha".into()],
            rows: vec![
                SheetRow { row_index: RowIndex::new(2), data: vec![json!("Ana"), json!("a@x.es"), json!("")] },
                SheetRow { row_index: RowIndex::new(3), data: vec![json!("Luis"), json!("l@x.es"), json!("")] },
            ],
        });

        let model = TableModel::from_session(&session);
        assert_eq!(model.rows.len(), 2);
        assert_eq!(model.column_count(), 4);
        assert_eq!(model.headers.last().map(String::as_str), Some(ACTIONS_HEADER));
        assert_eq!(model.rows[1].key, "3");
        assert_eq!(model.rows[1].cells[1].label, "Email");
    }

    #[test]
    fn test_iso_cells_render_as_dates() {
        let session = session_with(SheetData {
            headers: vec!["Nombre".into(), "Fecha alta".into()],
            rows: vec![SheetRow {
                row_index: RowIndex::new(2),
                data: vec![json!("Ana"), json!("2024-03-15T12:00:00.000Z")],
            }],
        });

        let model = TableModel::from_session(&session);
        let cells = &model.rows[0].cells;
        assert_eq!(cells[0].text, "Ana");
        assert_ne!(cells[1].text, "2024-03-15T12:00:00.000Z");
        assert!(cells[1].text.contains("2024"));
    }

    #[test]
    fn test_empty_session_has_only_actions_column() {
        let model = TableModel::from_session(&SheetSession::default());
        assert!(model.rows.is_empty());
        assert_eq!(model.headers, vec![ACTIONS_HEADER.to_string()]);
    }
}
