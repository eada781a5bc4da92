use crate::shared::gateway::{GatewayClient, GatewayError};
use contracts::gateway::{MutationOutcome, MutationRequest, ReadQuery};
use serde_json::Value;
use contracts::sheets::SheetData;

// A success envelope without `data` reads as an empty payload.

/// Fetch the names of all sheets, in workbook order
pub async fn fetch_sheet_names(gateway: &GatewayClient) -> Result<Vec<String>, GatewayError> {
    let names: Option<Vec<String>> = gateway.get(&ReadQuery::sheet_names()).await?;
    Ok(names.unwrap_or_default())
}

/// Fetch headers and rows of one sheet
pub async fn fetch_sheet_data(gateway: &GatewayClient, sheet_name: &str) -> Result<SheetData, GatewayError> {
    let data: Option<SheetData> = gateway.get(&ReadQuery::sheet_data(sheet_name)).await?;
    Ok(data.unwrap_or_default())
}

/// Create, update or delete a row. The row is already written once the
/// envelope reports success, whatever `data` looks like.
pub async fn submit_mutation(
    gateway: &GatewayClient,
    request: &MutationRequest,
) -> Result<MutationOutcome, GatewayError> {
    let data: Value = gateway.post(request).await?;
    Ok(MutationOutcome::from_data(&data))
}
