use contracts::sheets::{RowIndex, SheetData, SheetRow};

/// Identifies one `getData` request; only the newest ticket may apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub sheet: String,
    generation: u64,
}

/// In-memory mirror of the gateway: sheet list, active sheet and its data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetSession {
    pub sheet_names: Vec<String>,
    pub active: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
    generation: u64,
}

impl SheetSession {
    /// Replaces the sheet list and activates the first sheet, if any.
    pub fn set_sheet_names(&mut self, names: Vec<String>) -> Option<String> {
        self.sheet_names = names;
        self.active = self.sheet_names.first().cloned();
        self.active.clone()
    }

    /// Makes `name` active; unknown names are refused.
    pub fn activate(&mut self, name: &str) -> bool {
        if !self.sheet_names.iter().any(|n| n == name) {
            return false;
        }
        self.active = Some(name.to_string());
        true
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.as_deref() == Some(name)
    }

    pub fn begin_load(&mut self, sheet: &str) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            sheet: sheet.to_string(),
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies a successful load; stale tickets are dropped.
    pub fn apply_data(&mut self, ticket: &LoadTicket, data: SheetData) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.headers = data.headers;
        self.rows = data.rows;
        true
    }

    /// A failed load never leaves the previous sheet's data on screen.
    pub fn clear_data(&mut self, ticket: &LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.headers.clear();
        self.rows.clear();
        true
    }

    pub fn find_row(&self, row_index: &RowIndex) -> Option<&SheetRow> {
        self.rows.iter().find(|r| &r.row_index == row_index)
    }
}
