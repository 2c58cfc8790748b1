use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Single deal
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_deal_sheet(input_json: String) -> NapiResult<String> {
    let input: deal_economics_core::deal_sheet::DealSheetInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        deal_economics_core::deal_sheet::calculate_deal_sheet(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn run_sensitivity_analysis(input_json: String) -> NapiResult<String> {
    let input: deal_economics_core::deal_sheet::DealSheetInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = deal_economics_core::sensitivity::run_sensitivity_analysis(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn price_cost_grid(input_json: String) -> NapiResult<String> {
    let input: deal_economics_core::sensitivity::PriceCostGridInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = deal_economics_core::sensitivity::evaluate_price_cost_grid(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Community
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_community_proforma(input_json: String) -> NapiResult<String> {
    let input: deal_economics_core::community::CommunityProformaInputs =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = deal_economics_core::community::calculate_community_proforma(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
