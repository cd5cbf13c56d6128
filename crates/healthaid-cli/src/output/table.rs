//! Plain aligned tables for `--format table`.

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Header row plus string cells; missing cells render as `-`.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut widths = self.natural_widths();
        shrink_to_fit(&mut widths, options.max_width);

        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(text, width)| pad(&truncate(text, *width), *width))
            .collect::<Vec<_>>()
            .join(GAP);
        let rule = "-".repeat(header.chars().count());

        let mut lines = vec![header, rule];
        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let cell = row.get(index).map_or("-", String::as_str);
                    let text = truncate(cell, *width);
                    let padded = pad(&text, *width);
                    if options.color {
                        highlight(&text, padded)
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join(GAP);
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn natural_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain([header.chars().count(), MIN_COLUMN])
                    .max()
                    .unwrap_or(MIN_COLUMN)
            })
            .collect()
    }
}

/// Narrow the widest column one step at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = widths.len().saturating_sub(1) * GAP.len();

    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value
        .chars()
        .take(width.saturating_sub(1))
        .collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(fill))
}

/// Color well-known state words; `padded` keeps its trailing spaces outside the escape.
fn highlight(text: &str, padded: String) -> String {
    let code = match text {
        "expanded" | "true" | "app" => "32",
        "collapsed" | "auth" => "33",
        "false" | "empty" => "31",
        _ => return padded,
    };
    let fill = &padded[text.len()..];
    format!("\u{1b}[{code}m{text}\u{1b}[0m{fill}")
}
