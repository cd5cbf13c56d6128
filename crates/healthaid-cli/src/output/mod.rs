use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Table, TableOptions};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects become key/value rows; arrays of objects become one row each.
/// Nested objects are flattened to dotted keys.
fn render_table(value: &Value, options: TableOptions) -> anyhow::Result<String> {
    let table = match value {
        Value::Array(items) if items.is_empty() => return Ok(String::from("(no rows)")),
        Value::Array(items) if items.iter().all(Value::is_object) => object_rows(items),
        Value::Array(items) => {
            let mut table = Table::new(["value"]);
            for item in items {
                table.push_row(vec![cell(item)]);
            }
            table
        }
        Value::Object(map) => {
            let mut table = Table::new(["key", "value"]);
            for (key, value) in flatten(map) {
                table.push_row(vec![key, cell(&value)]);
            }
            table
        }
        scalar => {
            let mut table = Table::new(["value"]);
            table.push_row(vec![cell(scalar)]);
            table
        }
    };
    Ok(table.render(options))
}

fn object_rows(items: &[Value]) -> Table {
    let flattened = items
        .iter()
        .filter_map(Value::as_object)
        .map(flatten)
        .collect::<Vec<_>>();

    // Column order follows first appearance.
    let mut headers = Vec::<String>::new();
    for row in &flattened {
        for (key, _) in row {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let mut table = Table::new(headers.iter().map(String::as_str));
    for row in &flattened {
        table.push_row(
            headers
                .iter()
                .map(|header| {
                    row.iter()
                        .find(|(key, _)| key == header)
                        .map_or_else(|| String::from("-"), |(_, value)| cell(value))
                })
                .collect(),
        );
    }
    table
}

fn flatten(map: &Map<String, Value>) -> Vec<(String, Value)> {
    let mut out = Vec::with_capacity(map.len());
    flatten_into(None, map, &mut out);
    out
}

fn flatten_into(prefix: Option<&str>, map: &Map<String, Value>, out: &mut Vec<(String, Value)>) {
    for (key, value) in map {
        let key = prefix.map_or_else(|| key.clone(), |prefix| format!("{prefix}.{key}"));
        match value {
            Value::Object(inner) if !inner.is_empty() => flatten_into(Some(&key), inner, out),
            other => out.push((key, other.clone())),
        }
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if !items.is_empty() => {
            labels(items).map_or_else(|| compact(value), |labels| labels.join(", "))
        }
        other => compact(other),
    }
}

/// Every item's `label`, or `None` if any item lacks one.
fn labels(items: &[Value]) -> Option<Vec<&str>> {
    items
        .iter()
        .map(|item| item.get("label").and_then(Value::as_str))
        .collect()
}

fn compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>"))
}
