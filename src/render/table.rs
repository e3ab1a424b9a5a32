//! Plain-text box tables.

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";
const T_DOWN: &str = "┬";
const T_UP: &str = "┴";
const T_RIGHT: &str = "├";
const T_LEFT: &str = "┤";
const CROSS: &str = "┼";

/// Cells longer than this are cut with an ellipsis.
pub const MAX_CELL_CHARS: usize = 48;

/// Truncate to `max` chars, ending in a single ellipsis if anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            title: None,
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a row. Short rows are padded with empty cells, extra cells are kept
    /// and widen the table.
    pub fn add_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    fn cell(row: &[String], idx: usize) -> String {
        row.get(idx)
            .map(|c| truncate_chars(c, MAX_CELL_CHARS))
            .unwrap_or_default()
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.column_count())
            .map(|i| {
                std::iter::once(&self.headers)
                    .chain(self.rows.iter())
                    .map(|r| Self::cell(r, i).chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
        let inner: Vec<String> = widths.iter().map(|w| H.repeat(w + 2)).collect();
        format!("{left}{}{right}", inner.join(mid))
    }

    fn content_line(cells: &[String]) -> String {
        let inner: Vec<String> = cells.iter().map(|c| format!(" {c} ")).collect();
        format!("{V}{}{V}", inner.join(V))
    }

    /// Render with caller-supplied styling of the title and header cells.
    ///
    /// Styling is applied after padding, so escape sequences never disturb the layout.
    pub fn render_with(
        &self,
        style_title: impl Fn(&str) -> String,
        style_header: impl Fn(&str) -> String,
    ) -> Vec<String> {
        let widths = self.column_widths();
        let total_width = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
        let mut lines = Vec::new();

        if let Some(title) = &self.title {
            let title = truncate_chars(title, total_width.max(MAX_CELL_CHARS));
            let pad = total_width.saturating_sub(title.chars().count()) / 2;
            lines.push(format!("{}{}", " ".repeat(pad), style_title(&title)));
        }

        lines.push(Self::rule(&widths, TL, T_DOWN, TR));
        let header: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| style_header(&pad_right(&Self::cell(&self.headers, i), *w)))
            .collect();
        lines.push(Self::content_line(&header));
        lines.push(Self::rule(&widths, T_RIGHT, CROSS, T_LEFT));
        for row in &self.rows {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad_right(&Self::cell(row, i), *w))
                .collect();
            lines.push(Self::content_line(&cells));
        }
        lines.push(Self::rule(&widths, BL, T_UP, BR));
        lines
    }

    pub fn lines(&self) -> Vec<String> {
        self.render_with(str::to_string, str::to_string)
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_to_widest_cell() {
        let mut t = Table::new(["Name", "Total"]);
        t.add_row(["South Africa", "1.2 million"]);
        t.add_row(["Chad", "7"]);
        let lines = t.lines();
        assert_eq!(lines.len(), 6);
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "{lines:#?}");
        assert_eq!(
            lines[1],
            format!("│ Name{} │ Total{} │", " ".repeat(8), " ".repeat(6))
        );
        assert!(lines[4].starts_with("│ Chad"));
    }

    #[test]
    fn title_is_centered_above_the_box() {
        let t = Table::new(["A"]).with_title("T");
        let lines = t.lines();
        assert_eq!(lines[0].trim(), "T");
        assert!(lines[1].starts_with(TL));
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(MAX_CELL_CHARS + 10);
        assert_eq!(truncate_chars(&long, MAX_CELL_CHARS).chars().count(), MAX_CELL_CHARS);
        assert!(truncate_chars(&long, 5).ends_with('…'));
        assert_eq!(truncate_chars("abc", 5), "abc");
    }

    #[test]
    fn short_rows_are_padded() {
        let mut t = Table::new(["A", "B", "C"]);
        t.add_row(["1"]);
        let body = &t.lines()[3];
        assert_eq!(body.matches(V).count(), 4);
    }
}
