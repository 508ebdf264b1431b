use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;
const MIN_COLUMN_WIDTH: usize = 6;

pub fn terminal_width() -> usize {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(120);
    cmp::max(from_env, 40)
}

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Renders an aligned table, shrinking oversized columns to fit
/// `max_width` and marking truncated cells with a trailing ellipsis.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>], max_width: usize) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let mut widths: Vec<usize> = columns
        .iter()
        .map(|column| cmp::max(column.name.len(), MIN_COLUMN_WIDTH))
        .collect();
    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = cmp::max(*slot, value.chars().count());
            }
        }
    }

    let gap_total = COLUMN_GAP * columns.len().saturating_sub(1);
    let budget = max_width.saturating_sub(INDENT + gap_total);
    shrink_to_budget(&mut widths, budget);

    let mut output = Vec::with_capacity(rows.len() + 1);
    let header: Vec<String> = columns.iter().map(|column| column.name.to_string()).collect();
    output.push(format_row(columns, &header, &widths));
    for row in rows {
        output.push(format_row(columns, row, &widths));
    }
    output
}

/// Trims the widest column one character at a time until the row fits;
/// columns never shrink below the minimum, so very narrow terminals just
/// overflow instead of losing whole columns.
fn shrink_to_budget(widths: &mut [usize], budget: usize) {
    let mut total: usize = widths.iter().sum();
    while total > budget {
        let Some((widest_index, widest)) = widths
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|(_, width)| *width)
        else {
            return;
        };
        if widest <= MIN_COLUMN_WIDTH {
            return;
        }
        widths[widest_index] = widest - 1;
        total -= 1;
    }
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let mut pieces = Vec::with_capacity(columns.len());
    for (index, column) in columns.iter().enumerate() {
        let width = *widths.get(index).unwrap_or(&MIN_COLUMN_WIDTH);
        let value = clip(cells.get(index).map(String::as_str).unwrap_or(""), width);

        let piece = match column.align {
            Align::Left => format!("{value:<width$}"),
            Align::Right => format!("{value:>width$}"),
        };
        pieces.push(piece);
    }

    format!("{}{}", " ".repeat(INDENT), pieces.join("  "))
}

fn clip(value: &str, width: usize) -> String {
    let length = value.chars().count();
    if length <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut clipped: String = value.chars().take(width - 1).collect();
    clipped.push('…');
    clipped
}

/// `$1,234,567.89` style money formatting; negatives keep a leading sign.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::{Align, Column, format_usd, key_value_rows, render_table};

    #[test]
    fn key_value_rows_align_labels() {
        let rows = key_value_rows(
            &[
                ("Rows read:", "100".to_string()),
                ("States:", "12".to_string()),
            ],
            2,
        );
        assert_eq!(rows[0], "  Rows read:  100");
        assert_eq!(rows[1], "  States:     12");
    }

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(-2500.0), "-$2,500.00");
        assert_eq!(format_usd(999.9), "$999.90");
    }

    #[test]
    fn table_renders_header_and_aligned_cells() {
        let columns = [
            Column {
                name: "State",
                align: Align::Left,
            },
            Column {
                name: "Amount",
                align: Align::Right,
            },
        ];
        let rows = vec![vec!["MD".to_string(), "$100.00".to_string()]];
        let rendered = render_table(&columns, &rows, 80);
        assert!(rendered[0].contains("State"));
        assert!(rendered[0].contains("Amount"));
        assert!(rendered[1].contains("MD"));
        assert!(rendered[1].ends_with("$100.00"));
    }

    #[test]
    fn oversized_cells_are_clipped_with_ellipsis() {
        let columns = [
            Column {
                name: "Recipient",
                align: Align::Left,
            },
            Column {
                name: "Amount",
                align: Align::Right,
            },
        ];
        let rows = vec![vec![
            "AN EXTREMELY LONG RECIPIENT NAME THAT CANNOT POSSIBLY FIT".to_string(),
            "$1.00".to_string(),
        ]];
        let rendered = render_table(&columns, &rows, 40);
        assert!(rendered[1].contains('…'));
        for line in &rendered {
            assert!(line.len() <= 44, "line too wide: {line}");
        }
    }
}
