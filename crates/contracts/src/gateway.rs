use crate::sheets::{cell_text, RowIndex};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope status the gateway uses to flag a failed script run
pub const STATUS_ERROR: &str = "error";

/// Read actions, sent as the `action` query parameter of a GET
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadAction {
    GetSheetNames,
    GetData,
}

/// Query string of a read request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadQuery {
    pub action: ReadAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_name: Option<String>,
}

impl ReadQuery {
    pub fn sheet_names() -> Self {
        Self {
            action: ReadAction::GetSheetNames,
            sheet_name: None,
        }
    }

    pub fn sheet_data(sheet_name: impl Into<String>) -> Self {
        Self {
            action: ReadAction::GetData,
            sheet_name: Some(sheet_name.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MutationAction {
    Create,
    Update,
    Delete,
}

/// JSON body of a POST
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationRequest {
    pub action: MutationAction,
    pub sheet_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_data: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<RowIndex>,
}

impl MutationRequest {
    pub fn create(sheet_name: impl Into<String>, row_data: Vec<String>) -> Self {
        Self {
            action: MutationAction::Create,
            sheet_name: sheet_name.into(),
            row_data: Some(row_data),
            row_index: None,
        }
    }

    pub fn update(sheet_name: impl Into<String>, row_index: RowIndex, row_data: Vec<String>) -> Self {
        Self {
            action: MutationAction::Update,
            sheet_name: sheet_name.into(),
            row_data: Some(row_data),
            row_index: Some(row_index),
        }
    }

    pub fn delete(sheet_name: impl Into<String>, row_index: RowIndex) -> Self {
        Self {
            action: MutationAction::Delete,
            sheet_name: sheet_name.into(),
            row_data: None,
            row_index: Some(row_index),
        }
    }
}

/// `data` of a successful mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationOutcome {
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationOutcome {
    /// The mutation already succeeded once the envelope did, so any `data`
    /// shape is accepted; only a string `message` field is picked up.
    pub fn from_data(data: &Value) -> Self {
        Self {
            message: data
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Every gateway response is wrapped in this envelope.
///
/// Only `status == "error"` marks a failure; any other status (or none)
/// is a success and `data` carries the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    pub fn is_error(&self) -> bool {
        matches!(&self.status, Some(Value::String(s)) if s == STATUS_ERROR)
    }

    pub fn into_result(self) -> Result<Value, String> {
        if self.is_error() {
            let message = self.message.as_ref().map(cell_text).unwrap_or_default();
            if message.is_empty() {
                Err("unknown script error".to_string())
            } else {
                Err(message)
            }
        } else {
            Ok(self.data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mutation_bodies_match_gateway_shape() {
        let create = MutationRequest::create("Clientes", vec!["Ana".into(), "2024-03-15".into()]);
        assert_eq!(
            serde_json::to_value(&create).unwrap(),
            json!({ "action": "create", "sheetName": "Clientes", "rowData": ["Ana", "2024-03-15"] })
        );

        let update = MutationRequest::update("Clientes", RowIndex::new(4), vec!["Eva".into()]);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "action": "update", "sheetName": "Clientes", "rowData": ["Eva"], "rowIndex": 4 })
        );

        let delete = MutationRequest::delete("Clientes", RowIndex::new("9"));
        assert_eq!(
            serde_json::to_value(&delete).unwrap(),
            json!({ "action": "delete", "sheetName": "Clientes", "rowIndex": "9" })
        );
    }

    #[test]
    fn test_envelope_error_status() {
        let envelope: Envelope =
            serde_json::from_value(json!({ "status": "error", "message": "Sheet not found" })).unwrap();
        assert_eq!(envelope.into_result(), Err("Sheet not found".to_string()));
    }

    #[test]
    fn test_envelope_other_status_is_success() {
        let envelope: Envelope =
            serde_json::from_value(json!({ "status": "ok", "data": ["A", "B"] })).unwrap();
        assert_eq!(envelope.into_result(), Ok(json!(["A", "B"])));

        let bare: Envelope = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bare.into_result(), Ok(Value::Null));
    }

    #[test]
    fn test_envelope_non_string_status_is_success() {
        let numeric: Envelope =
            serde_json::from_value(json!({ "status": 200, "data": ["A"] })).unwrap();
        assert_eq!(numeric.into_result(), Ok(json!(["A"])));

        let flag: Envelope = serde_json::from_value(json!({ "status": true, "message": 7 })).unwrap();
        assert!(!flag.is_error());
    }

    #[test]
    fn test_envelope_error_message_is_read_as_text() {
        let coded: Envelope =
            serde_json::from_value(json!({ "status": "error", "message": 404 })).unwrap();
        assert_eq!(coded.into_result(), Err("404".to_string()));

        let silent: Envelope =
            serde_json::from_value(json!({ "status": "error", "message": null })).unwrap();
        assert_eq!(silent.into_result(), Err("unknown script error".to_string()));
    }

    #[test]
    fn test_mutation_outcome_accepts_any_data() {
        assert_eq!(
            MutationOutcome::from_data(&json!({ "message": "Fila añadida" })).message.as_deref(),
            Some("Fila añadida")
        );
        assert_eq!(MutationOutcome::from_data(&json!("Fila añadida")), MutationOutcome::default());
        assert_eq!(MutationOutcome::from_data(&json!({ "message": 3 })), MutationOutcome::default());
        assert_eq!(MutationOutcome::from_data(&Value::Null), MutationOutcome::default());
    }
}
