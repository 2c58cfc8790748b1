pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a scalar JSON value without quotes; decimals arrive as strings.
pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// A price x cost grid result: two axes plus a row-major matrix.
pub(crate) struct GridView<'a> {
    pub rows: &'a [Value],
    pub columns: &'a [Value],
    pub matrix: &'a [Value],
}

impl<'a> GridView<'a> {
    pub fn from_result(result: &'a Value) -> Option<Self> {
        Some(GridView {
            rows: result.get("sales_price_values")?.as_array()?,
            columns: result.get("cost_factor_values")?.as_array()?,
            matrix: result.get("matrix")?.as_array()?,
        })
    }

    pub fn header(&self) -> Vec<String> {
        std::iter::once("price \\ cost".to_string())
            .chain(self.columns.iter().map(|c| format!("x{}", format_scalar(c))))
            .collect()
    }

    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().zip(self.matrix).map(|(price, row)| {
            let cells = row.as_array().map(Vec::as_slice).unwrap_or(&[]);
            std::iter::once(format_scalar(price))
                .chain(cells.iter().map(format_scalar))
                .collect()
        })
    }
}
