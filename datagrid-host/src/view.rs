//! Plain-text rendering of the table for the demo shell.

use std::fmt::Write;

use datagrid::DataTable;
use datagrid::editor::{Editor, FilterEditor};
use datagrid::grid::{Alignment, GridRow, GridView};
use unicode_width::UnicodeWidthStr;

/// Pads `text` to `width` display columns.
pub fn pad(text: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(fill)),
        Alignment::Right => format!("{}{}", " ".repeat(fill), text),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

/// Renders the grid as an aligned table with a leading row-position column.
///
/// Hovered rows are marked `>`, the active row `*`.
pub fn grid_text(view: &GridView) -> String {
    let headers: Vec<String> = view
        .header
        .iter()
        .map(|h| {
            let glyph = h.indicator.glyph();
            if glyph.is_empty() {
                h.header.clone()
            } else {
                format!("{} {}", h.header, glyph)
            }
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &view.rows {
        for (width, cell) in widths.iter_mut().zip(row.cells.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .zip(&view.header)
        .map(|((text, &width), cell)| pad(text, width, cell.align))
        .collect();
    let _ = writeln!(out, "     {}", header_line.join(" | "));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "     {}", rule.join("-+-"));

    for (i, row) in view.rows.iter().enumerate() {
        let marker = match (row.active, row.hovered) {
            (true, _) => '*',
            (false, true) => '>',
            _ => ' ',
        };
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .zip(&view.header)
            .map(|((text, &width), cell)| pad(text, width, cell.align))
            .collect();
        let _ = writeln!(out, "{}{:>3} {}", marker, i + 1, cells.join(" | "));
    }
    if view.rows.is_empty() {
        let _ = writeln!(out, "     (no rows)");
    }
    out
}

/// Renders the open editor form.
pub fn editor_text(editor: &Editor) -> String {
    let mut out = format!("[{}]\n", editor.title());
    for field in editor.fields() {
        let _ = write!(out, "  {}: {}", field.label, field.value);
        if !field.options.is_empty() {
            let _ = write!(out, "  ({})", field.options.join(" / "));
        }
        out.push('\n');
        if let Some(error) = field.error {
            let _ = writeln!(out, "    ! {}", error);
        }
    }
    out.push_str("  submit | cancel\n");
    out
}

/// Renders the filter bar, the table and the page footer.
pub fn table_text<T: GridRow>(table: &mut DataTable<T>) -> String {
    let mut out = String::new();

    let filters = table.filters();
    if filters.is_empty() {
        out.push_str("Filters: none\n");
    } else {
        let labels: Vec<String> = filters
            .applied()
            .iter()
            .map(|f| {
                let name = filters
                    .option(f.field())
                    .map_or(f.field(), |o| o.display_name.as_str());
                f.label(name)
            })
            .collect();
        let _ = writeln!(out, "Filters: {}", labels.join(", "));
    }

    if !table.search_text().is_empty() {
        let names: Vec<&str> = table
            .filter_options()
            .into_iter()
            .map(|o| o.display_name.as_str())
            .collect();
        let _ = writeln!(out, "Search \"{}\": {}", table.search_text(), names.join(", "));
        if let Some(quick) = table.quick_suggestion() {
            let _ = writeln!(out, "  quick: {} contains \"{}\"", quick.display_name, quick.value);
        }
    }

    if let Some(editor) = table.editor() {
        out.push_str(&editor_text(editor));
    }

    let view = table.render();
    out.push_str(&grid_text(&view));

    let pages = table.paginator();
    let _ = writeln!(
        out,
        "{}  page {}/{}  size {} of {:?}{}{}",
        pages.page_info(),
        pages.page_index() + 1,
        pages.page_count(),
        pages.pagination().limit,
        pages.page_sizes(),
        if pages.has_previous() { "  [prev]" } else { "" },
        if pages.has_next() { "  [next]" } else { "" },
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("東京", 6, Alignment::Left), "東京  ");
        assert_eq!(pad("7", 3, Alignment::Right), "  7");
        assert_eq!(pad("ab", 5, Alignment::Center), " ab  ");
        assert_eq!(pad("long text", 4, Alignment::Left), "long text");
    }
}
