//! Generic tabular presentation model.
//!
//! One rendering engine serves all four record types: a [`Column`] list is
//! data, not code tied to the renderer, and [`render`] never inspects rows
//! except through the columns' render functions.

pub mod columns;

use rust_decimal::Decimal;

/// Style category for a status badge, chosen by a deterministic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Healthy / complete states.
    Positive,
    /// In-progress or attention states.
    Caution,
    /// Failed / terminal states.
    Negative,
    /// Anything not otherwise classified.
    Neutral,
}

impl BadgeTone {
    /// Classify a status label into a badge tone.
    #[must_use]
    pub fn for_status(label: &str) -> Self {
        match label {
            "Active" | "Completed" | "Open" | "Approved" => Self::Positive,
            "On Leave" | "Processing" | "Interviewing" | "Pending" => Self::Caution,
            "Terminated" | "Failed" | "Rejected" => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// Presentable value produced by a column's render function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Plain text.
    Text(String),
    /// Visually emphasized text (names, titles, amounts).
    Emphasis(String),
    /// Status badge with label and tone.
    Badge {
        /// Displayed status label.
        label: String,
        /// Style category for the badge.
        tone: BadgeTone,
    },
    /// Row action button label (view, review).
    Action(String),
}

/// Declarative description of one table column for record type `R`.
///
/// Owned by the domain-specific column model; consumed read-only by the
/// renderer. `render` must be total over any record of the declared shape
/// and perform no I/O.
pub struct Column<R> {
    /// Field name the column reads, or a synthetic id for action columns.
    pub key: &'static str,
    /// Display label for the column header.
    pub header: &'static str,
    /// Cell-rendering rule.
    pub render: fn(&R) -> CellValue,
}

/// One rendered grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridRow {
    /// An ordinary data row, one cell per column.
    Cells(Vec<CellValue>),
    /// Informational row shown when the collection is empty.
    Placeholder {
        /// Displayed message.
        message: String,
        /// Number of columns the row spans.
        span: usize,
    },
}

/// A rendered grid: headers plus rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Column headers in display order.
    pub headers: Vec<String>,
    /// Rendered rows.
    pub rows: Vec<GridRow>,
}

/// Render records through a column model into a grid.
///
/// Record-shape-agnostic: rows are touched only via the columns' render
/// functions. An empty row sequence yields exactly one placeholder row
/// spanning all columns.
#[must_use]
pub fn render<R>(columns: &[Column<R>], rows: &[R]) -> Grid {
    let headers = columns.iter().map(|c| c.header.to_owned()).collect();

    if rows.is_empty() {
        return Grid {
            headers,
            rows: vec![GridRow::Placeholder {
                message: "No results.".into(),
                span: columns.len(),
            }],
        };
    }

    let rows = rows
        .iter()
        .map(|record| GridRow::Cells(columns.iter().map(|c| (c.render)(record)).collect()))
        .collect();

    Grid { headers, rows }
}

/// Format a decimal amount as US-dollar currency with thousands separators,
/// e.g. `$125,500.00`.
#[must_use]
pub fn format_usd(amount: &Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::new();
    let digits = int_part.as_bytes();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*digit));
    }

    let cents = format!("{frac_part:0<2}");
    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
