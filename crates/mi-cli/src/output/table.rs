/// Column separator for borderless tables.
pub const COLUMN_SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

impl TableOptions {
    /// Width limit from `COLUMNS`, ignored when unset or narrower than 40.
    #[must_use]
    pub fn from_env() -> Self {
        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);
        Self { max_width }
    }
}

/// Render a borderless, left-aligned table.
///
/// The header is the first line and is not followed by a divider. Missing
/// cells render blank. Trailing padding is trimmed from every line.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let mut lines = Vec::with_capacity(1 + rows.len());
    lines.push(render_line(headers.iter().copied(), &widths));
    for row in rows {
        let cells = (0..widths.len()).map(|index| row.get(index).map_or("", String::as_str));
        lines.push(render_line(cells, &widths));
    }
    lines.join("\n")
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths.iter())
        .map(|(cell, width)| format_cell(&truncate_text(cell, *width), *width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);
    line.trim_end().to_string()
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * COLUMN_SEPARATOR.len();
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].chars().count();
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn format_cell(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(value.chars().count());
    format!("{}{}", value, " ".repeat(pad))
}
