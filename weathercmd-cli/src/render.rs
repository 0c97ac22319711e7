//! Plain-text table printing for [`RenderedTable`] values.

use weathercmd_core::RenderedTable;

/// Columns narrower than this are never shrunk further when a width cap is
/// in effect.
const MIN_COLUMN_WIDTH: usize = 5;

/// Print the table to stdout. `terminal_width`, when given, caps the total
/// table width by narrowing the widest columns.
pub fn print_table(table: &RenderedTable, terminal_width: Option<usize>) {
    let mut widths = column_widths(table);
    if let Some(max) = terminal_width {
        shrink_to_fit(&mut widths, max);
    }

    let total = total_width(&widths);
    println!("{:^1$}", table.title, total);

    let border = border(&widths);
    println!("{border}");
    println!("{}", render_row(&table.columns, &widths));
    println!("{border}");
    for row in &table.rows {
        println!("{}", render_row(row, &widths));
    }
    println!("{border}");
}

fn column_widths(table: &RenderedTable) -> Vec<usize> {
    let mut widths: Vec<usize> = table.columns.iter().map(|header| header.chars().count()).collect();

    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    widths
}

// Each column costs its width plus two padding spaces and one separator;
// the final border adds one more.
fn total_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + 3 * widths.len() + 1
}

fn shrink_to_fit(widths: &mut [usize], max: usize) {
    while total_width(widths) > max {
        let Some(widest) = widths.iter_mut().max() else {
            return;
        };
        if *widest <= MIN_COLUMN_WIDTH {
            return;
        }
        *widest -= 1;
    }
}

fn border(widths: &[usize]) -> String {
    let mut out = String::from("+");
    for width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut out = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let cell = fit(cell, *width);
        let padding = width.saturating_sub(cell.chars().count());

        out.push(' ');
        out.push_str(&cell);
        out.push_str(&" ".repeat(padding));
        out.push_str(" |");
    }
    out
}

fn fit(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_string();
    }

    let mut out: String = cell.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RenderedTable {
        RenderedTable {
            title: "Current weather for Greensboro".to_string(),
            columns: vec!["Temperature (C)".to_string(), "Humidity".to_string()],
            rows: vec![vec!["297".to_string(), "79%".to_string()]],
        }
    }

    #[test]
    fn widths_fit_headers_and_cells() {
        let widths = column_widths(&sample());
        assert_eq!(widths, vec![15, 8]);
    }

    #[test]
    fn border_matches_widths() {
        assert_eq!(border(&[3, 2]), "+-----+----+");
    }

    #[test]
    fn rows_are_padded() {
        let rendered = render_row(&["297".to_string(), "79%".to_string()], &[15, 8]);
        assert_eq!(rendered, "| 297             | 79%      |");
    }

    #[test]
    fn shrink_narrows_widest_column_first() {
        let mut widths = vec![20, 6];
        shrink_to_fit(&mut widths, 25);
        assert_eq!(total_width(&widths), 25);
        assert_eq!(widths, vec![12, 6]);
    }

    #[test]
    fn shrink_respects_minimum_width() {
        let mut widths = vec![6, 6];
        shrink_to_fit(&mut widths, 5);
        assert_eq!(widths, vec![MIN_COLUMN_WIDTH, MIN_COLUMN_WIDTH]);
    }

    #[test]
    fn long_cells_are_truncated_with_ellipsis() {
        assert_eq!(fit("thunderstorm", 6), "thund…");
        assert_eq!(fit("short", 10), "short");
    }
}
