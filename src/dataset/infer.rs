//! Column type inference for raw CSV cells.

use super::{ColumnType, Value};

/// Cell contents read as missing, in addition to blank cells.
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell is treated as a missing value.
pub fn is_missing(cell: &str) -> bool {
    let v = cell.trim();
    v.is_empty() || MISSING_MARKERS.contains(&v)
}

fn parse_bool(v: &str) -> Option<bool> {
    if v.eq_ignore_ascii_case("true") {
        Some(true)
    } else if v.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_real(v: &str) -> Option<f64> {
    v.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Classify a single non-missing cell.
fn classify(cell: &str) -> ColumnType {
    let v = cell.trim();
    if v.parse::<i64>().is_ok() {
        ColumnType::Integer
    } else if parse_real(v).is_some() {
        ColumnType::Real
    } else if parse_bool(v).is_some() {
        ColumnType::Boolean
    } else {
        ColumnType::Text
    }
}

fn merge(prev: ColumnType, next: ColumnType) -> ColumnType {
    match (prev, next) {
        (a, b) if a == b => a,
        (ColumnType::Integer, ColumnType::Real) | (ColumnType::Real, ColumnType::Integer) => {
            ColumnType::Real
        }
        _ => ColumnType::Text,
    }
}

/// Infer a column's type from all of its cells.
///
/// `None` marks a cell padded in for a short row. Missing cells do not vote;
/// a column with no present cells is `Text`.
pub fn infer_column_type<'a, I>(cells: I) -> ColumnType
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut current: Option<ColumnType> = None;

    for cell in cells.into_iter().flatten() {
        if is_missing(cell) {
            continue;
        }
        let ty = match current {
            None => classify(cell),
            Some(prev) => merge(prev, classify(cell)),
        };
        if ty == ColumnType::Text {
            return ColumnType::Text;
        }
        current = Some(ty);
    }

    current.unwrap_or(ColumnType::Text)
}

/// Convert a raw cell into a typed value for a column of type `ty`.
pub fn convert(cell: Option<&str>, ty: ColumnType) -> Value {
    let raw = match cell {
        Some(raw) if !is_missing(raw) => raw,
        _ => return Value::Null,
    };
    let v = raw.trim();

    let typed = match ty {
        ColumnType::Integer => v.parse::<i64>().ok().map(Value::Integer),
        ColumnType::Real => parse_real(v).map(Value::Real),
        ColumnType::Boolean => parse_bool(v).map(Value::Boolean),
        ColumnType::Text => None,
    };

    typed.unwrap_or_else(|| Value::Text(raw.to_string()))
}

/// Like [`convert`], but moves text cells instead of copying them.
pub fn convert_owned(cell: Option<String>, ty: ColumnType) -> Value {
    match cell {
        Some(raw) if ty == ColumnType::Text && !is_missing(&raw) => Value::Text(raw),
        other => convert(other.as_deref(), ty),
    }
}
