use crate::shared::config::AppConfig;
use crate::shared::date_utils::date_input_value;
use contracts::gateway::MutationRequest;
use contracts::sheets::{RowIndex, SheetRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
}

impl FieldKind {
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Date => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub header: String,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    pub fn input_id(position: usize) -> String {
        format!("field-{}", position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordMode {
    Create,
    Edit(RowIndex),
}

/// The record being added or edited while the form modal is open.
///
/// One field per header, in header order; that order is the order of
/// `rowData` sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordForm {
    pub mode: RecordMode,
    pub fields: Vec<FormField>,
}

impl RecordForm {
    pub fn for_create(headers: &[String], config: &AppConfig) -> Self {
        Self::build(RecordMode::Create, headers, None, config)
    }

    pub fn for_edit(headers: &[String], row: &SheetRow, config: &AppConfig) -> Self {
        Self::build(
            RecordMode::Edit(row.row_index.clone()),
            headers,
            Some(row),
            config,
        )
    }

    fn build(mode: RecordMode, headers: &[String], row: Option<&SheetRow>, config: &AppConfig) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(position, header)| {
                let kind = if config.is_date_header(header) {
                    FieldKind::Date
                } else {
                    FieldKind::Text
                };
                let raw = row.map(|r| r.cell(position)).unwrap_or_default();
                let value = match kind {
                    FieldKind::Date => date_input_value(&raw),
                    FieldKind::Text => raw,
                };
                FormField {
                    header: header.clone(),
                    kind,
                    value,
                }
            })
            .collect();

        Self { mode, fields }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            RecordMode::Create => "Add New Record",
            RecordMode::Edit(_) => "Edit Record",
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, RecordMode::Edit(_))
    }

    pub fn set_value(&mut self, position: usize, value: String) {
        if let Some(field) = self.fields.get_mut(position) {
            field.value = value;
        }
    }

    /// First required field left empty. Whitespace counts as a value, as it
    /// does for the input's `required` attribute.
    pub fn first_missing(&self) -> Option<&FormField> {
        self.fields.iter().find(|f| f.value.is_empty())
    }

    pub fn row_data(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    pub fn to_request(&self, sheet_name: &str) -> MutationRequest {
        match &self.mode {
            RecordMode::Create => MutationRequest::create(sheet_name, self.row_data()),
            RecordMode::Edit(row_index) => {
                MutationRequest::update(sheet_name, row_index.clone(), self.row_data())
            }
        }
    }
}
