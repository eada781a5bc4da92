use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Backend-assigned identifier of a row within a sheet.
///
/// The gateway may send it as a number or a string; it is kept exactly as
/// received and echoed back unchanged on update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowIndex(Value);

impl RowIndex {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Stable string form, used as a DOM key and `data-row-index` attribute.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// One record of a sheet: its index plus cells aligned to the headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRow {
    pub row_index: RowIndex,
    #[serde(default)]
    pub data: Vec<Value>,
}

impl SheetRow {
    /// Text of the cell at `position`; missing cells read as empty.
    pub fn cell(&self, position: usize) -> String {
        self.data.get(position).map(cell_text).unwrap_or_default()
    }
}

/// Payload of `getData`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetData {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<SheetRow>,
}

/// Raw text of a cell as the spreadsheet would show it when untyped.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sheet_data_from_gateway_payload() {
        let data: SheetData = serde_json::from_value(json!({
            "headers": ["Nombre", "Fecha alta", "Importe"],
            "rows": [
                { "rowIndex": 2, "data": ["Ana", "2024-03-15T12:00:00.000Z", 10.5] },
                { "rowIndex": "7", "data": ["Luis", null, true] }
            ]
        }))
        .unwrap();

        assert_eq!(data.headers.len(), 3);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0].row_index, RowIndex::new(2));
        assert_eq!(data.rows[0].cell(2), "10.5");
        assert_eq!(data.rows[1].cell(1), "");
        assert_eq!(data.rows[1].cell(2), "true");
        assert_eq!(data.rows[1].cell(9), "");
    }

    #[test]
    fn test_row_index_keeps_wire_form() {
        let numeric = RowIndex::new(5);
        let textual = RowIndex::new("5");

        assert_eq!(numeric.key(), "5");
        assert_eq!(textual.key(), "5");
        assert_ne!(numeric, textual);
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "5");
        assert_eq!(serde_json::to_string(&textual).unwrap(), "\"5\"");
    }
}
