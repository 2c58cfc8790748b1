use serde_json::Value;

use super::format_scalar;

/// Headline figure of each command, in priority order. Dotted keys reach
/// into nested records.
const PRIORITY_KEYS: [&str; 6] = [
    "net_profit",
    "breakeven_asp",
    "lp_waterfall.gp_share",
    "phase1.gross_margin",
    "base_case_value",
    "total_fixed_per_house",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);
    println!("{}", headline(result_obj));
}

fn headline(result: &Value) -> String {
    for key in PRIORITY_KEYS {
        if let Some(val) = lookup(result, key) {
            if !val.is_null() {
                return format_scalar(val);
            }
        }
    }

    if let Value::Object(map) = result {
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_scalar(val));
        }
    }
    format_scalar(result)
}

fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |node, key| node.get(key))
}
