//! Pipe-table rewriting.
//!
//! Runs over a prose segment before any other rewriting, replacing each
//! recognized table block with final `<table>` HTML and leaving everything
//! else untouched. A table block is a header line containing a pipe, an
//! alignment line whose cells all look like `:---:`-style separators, and
//! one or more body lines containing pipes.

/// Per-column alignment parsed from the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    fn css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Replace every table block in `text` with rendered HTML.
///
/// Non-table lines pass through unchanged, so the result is still a line
/// stream the inline rewriter and wrappers can process. Ragged body rows are
/// rendered with whatever cells they have; alignment lookup past the parsed
/// columns falls back to left.
pub fn format_tables(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if let Some(rows) = table_extent(&lines, i) {
            let alignments = parse_alignment_row(lines[i + 1]);
            out.push(render_table(lines[i], &lines[i + 2..i + 2 + rows], &alignments));
            i += 2 + rows;
        } else {
            out.push(lines[i].to_string());
            i += 1;
        }
    }

    out.join("\n")
}

/// Number of body rows if a table block starts at `start`, else None.
fn table_extent(lines: &[&str], start: usize) -> Option<usize> {
    if !lines[start].contains('|') {
        return None;
    }
    if start + 2 >= lines.len() || !is_alignment_row(lines[start + 1]) {
        return None;
    }
    let body = lines[start + 2..]
        .iter()
        .take_while(|line| line.contains('|'))
        .count();
    (body > 0).then_some(body)
}

/// An alignment row is pipe-separated cells that each match `:?-+:?`.
fn is_alignment_row(line: &str) -> bool {
    let cells: Vec<&str> = split_cells(line);
    !cells.is_empty() && cells.iter().all(|cell| is_alignment_cell(cell))
}

fn is_alignment_cell(cell: &str) -> bool {
    let inner = cell.strip_prefix(':').unwrap_or(cell);
    let inner = inner.strip_suffix(':').unwrap_or(inner);
    !inner.is_empty() && inner.chars().all(|c| c == '-')
}

fn parse_alignment_row(line: &str) -> Vec<Alignment> {
    split_cells(line)
        .iter()
        .map(|cell| {
            if cell.starts_with(':') && cell.ends_with(':') {
                Alignment::Center
            } else if cell.ends_with(':') {
                Alignment::Right
            } else {
                Alignment::Left
            }
        })
        .collect()
}

/// Split a row on `|`, trim each cell, and drop the empty leading/trailing
/// cells produced by outer pipes. Interior empty cells are kept.
fn split_cells(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first() == Some(&"") {
        cells.remove(0);
    }
    if cells.last() == Some(&"") {
        cells.pop();
    }
    cells
}

fn column_alignment(alignments: &[Alignment], index: usize) -> Alignment {
    alignments.get(index).copied().unwrap_or(Alignment::Left)
}

fn render_table(header: &str, body: &[&str], alignments: &[Alignment]) -> String {
    let mut html = String::from("<table>\n  <thead>\n    <tr>\n");
    for (i, cell) in split_cells(header).iter().enumerate() {
        html.push_str(&format!(
            "      <th style=\"text-align: {}\">{}</th>\n",
            column_alignment(alignments, i).css(),
            cell
        ));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for row in body {
        html.push_str("    <tr>\n");
        for (i, cell) in split_cells(row).iter().enumerate() {
            html.push_str(&format!(
                "      <td style=\"text-align: {}\">{}</td>\n",
                column_alignment(alignments, i).css(),
                cell
            ));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>");
    html
}
