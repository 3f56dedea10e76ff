//! Text renderers for a matched [`Grid`].
//!
//! Three output formats are supported: IRC colour codes with per-row
//! run-length compression, bare glyphs, and a self-contained HTML page.

use crate::matcher::{Grid, Match};
use crate::{BlockError, Result};
use std::fmt;
use std::str::FromStr;

/// Longest IRC line, in characters including the line break, that most
/// servers relay intact.
pub const IRC_LINE_LIMIT: usize = 468;

/// mIRC colour control character.
const IRC_COLOR: char = '\x03';

const HTML_HEADER: &str = concat!(
    "<!DOCTYPE html><html><head><meta charset=\"UTF-8\">",
    "<style>body { line-height:12px; font-size:12px }</style>",
    "</head><body>"
);
const HTML_FOOTER: &str = "</body></html>";

/// Output format selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colour-coded, run-length compressed text.
    #[default]
    Irc,
    /// Glyphs only.
    Raw,
    /// HTML markup with inline styles.
    Html,
}

impl FromStr for OutputFormat {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "irc" => Ok(OutputFormat::Irc),
            "raw" => Ok(OutputFormat::Raw),
            "html" => Ok(OutputFormat::Html),
            other => Err(BlockError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Irc => "irc",
            OutputFormat::Raw => "raw",
            OutputFormat::Html => "html",
        })
    }
}

/// Rendered output plus diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Longest line in characters, including the line break. Only reported
    /// by the IRC renderer.
    pub max_line_length: Option<usize>,
}

impl Rendered {
    /// Whether any line is likely to be cut by an IRC server.
    pub fn exceeds_irc_limit(&self) -> bool {
        self.max_line_length.is_some_and(|n| n > IRC_LINE_LIMIT)
    }
}

/// A match repeated `count` times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub cell: Match,
    pub count: usize,
}

/// Collapses consecutive identical matches of a row.
pub fn compress_row(row: &[Match]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for cell in row {
        match runs.last_mut() {
            Some(run) if run.cell == *cell => run.count += 1,
            _ => runs.push(Run { cell: *cell, count: 1 }),
        }
    }
    runs
}

/// Inverse of [`compress_row`].
pub fn expand_runs(runs: &[Run]) -> Vec<Match> {
    runs.iter()
        .flat_map(|run| std::iter::repeat_n(run.cell, run.count))
        .collect()
}

/// Renders `grid` in the requested format.
#[must_use = "this returns the rendered text"]
pub fn render(grid: &Grid, format: OutputFormat) -> Rendered {
    match format {
        OutputFormat::Irc => render_irc(grid),
        OutputFormat::Raw => render_raw(grid),
        OutputFormat::Html => render_html(grid),
    }
}

/// Renders IRC colour-coded text, compressing repeated blocks in each row.
///
/// Every run is written as `\x03FG,BG` followed by its glyph repeated. Solid
/// blocks use the background index for the foreground as well.
pub fn render_irc(grid: &Grid) -> Rendered {
    let mut out = String::new();
    let mut max_line_length = 0;

    for row in grid.rows() {
        let start = out.len();
        for run in compress_row(row) {
            let background = run.cell.background.index;
            let foreground = run.cell.display_foreground().index;
            out.push(IRC_COLOR);
            out.push_str(&format!("{foreground},{background}"));
            out.extend(std::iter::repeat_n(run.cell.mask.glyph(), run.count));
        }
        out.push('\n');
        max_line_length = max_line_length.max(out[start..].chars().count());
    }

    if max_line_length > IRC_LINE_LIMIT {
        log::warn!("longest IRC line is {max_line_length} characters, over the {IRC_LINE_LIMIT} limit");
    }

    Rendered {
        text: out,
        max_line_length: Some(max_line_length),
    }
}

/// Renders the glyphs only, one line per grid row.
pub fn render_raw(grid: &Grid) -> Rendered {
    let mut out = String::with_capacity(grid.height() * (grid.width() * 3 + 1));
    for row in grid.rows() {
        out.extend(row.iter().map(|m| m.mask.glyph()));
        out.push('\n');
    }
    Rendered {
        text: out,
        max_line_length: None,
    }
}

/// Renders an HTML page with one inline-styled span per block.
pub fn render_html(grid: &Grid) -> Rendered {
    let mut out = String::from(HTML_HEADER);
    for row in grid.rows() {
        for m in row {
            out.push_str(&format!(
                "<span style='background:{};color:{}'>{}</span>",
                m.background.rgb,
                m.display_foreground().rgb,
                m.mask.glyph()
            ));
        }
        out.push_str("<br/>");
    }
    out.push_str(HTML_FOOTER);
    Rendered {
        text: out,
        max_line_length: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::Mask;
    use crate::palette::by_name;

    fn cell(bg: &str, fg: &str, mask: Mask) -> Match {
        Match {
            background: by_name(bg).unwrap(),
            foreground: by_name(fg).unwrap(),
            mask,
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("irc".parse::<OutputFormat>().unwrap(), OutputFormat::Irc);
        assert_eq!("raw".parse::<OutputFormat>().unwrap(), OutputFormat::Raw);
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!(matches!(
            "ansi".parse::<OutputFormat>(),
            Err(BlockError::UnsupportedFormat(s)) if s == "ansi"
        ));
        assert!("IRC".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_compress_row() {
        let a = cell("red", "white", Mask::Solid);
        let b = cell("red", "black", Mask::Solid);
        let c = cell("red", "black", Mask::AntiDiagonal);
        let row = [a, a, b, c, c, c, a];
        let runs = compress_row(&row);
        assert_eq!(
            runs.iter().map(|r| r.count).collect::<Vec<_>>(),
            vec![2, 1, 3, 1]
        );
        assert_eq!(expand_runs(&runs), row.to_vec());
        assert!(compress_row(&[]).is_empty());
    }

    #[test]
    fn test_irc_solid_uses_background() {
        let grid = Grid::new(1, 1, vec![cell("red", "white", Mask::Solid)]).unwrap();
        let rendered = render_irc(&grid);
        assert_eq!(rendered.text, "\x034,4▖\n");
        assert_eq!(rendered.max_line_length, Some(6));
        assert!(!rendered.exceeds_irc_limit());
    }

    #[test]
    fn test_irc_two_colours() {
        let grid = Grid::new(
            3,
            1,
            vec![
                cell("black", "yellow", Mask::NoLowerLeft),
                cell("black", "yellow", Mask::NoLowerLeft),
                cell("lightgrey", "blue", Mask::NoUpperRight),
            ],
        )
        .unwrap();
        assert_eq!(render_irc(&grid).text, "\x038,1▜▜\x0312,15▙\n");
    }

    #[test]
    fn test_irc_long_line_flagged() {
        let cells: Vec<Match> = (0..200)
            .map(|i| {
                if i % 2 == 0 {
                    cell("white", "black", Mask::AntiDiagonal)
                } else {
                    cell("black", "white", Mask::AntiDiagonal)
                }
            })
            .collect();
        let grid = Grid::new(200, 1, cells).unwrap();
        let rendered = render_irc(&grid);
        // "\x03" + "1,0" + glyph = 5 characters per block
        assert_eq!(rendered.max_line_length, Some(200 * 5 + 1));
        assert!(rendered.exceeds_irc_limit());
    }

    #[test]
    fn test_raw() {
        let grid = Grid::new(
            2,
            2,
            vec![
                cell("white", "black", Mask::Solid),
                cell("white", "black", Mask::Solid),
                cell("white", "black", Mask::NoUpperLeft),
                cell("red", "black", Mask::NoLowerRight),
            ],
        )
        .unwrap();
        let rendered = render_raw(&grid);
        assert_eq!(rendered.text, "▖▖\n▟▛\n");
        assert_eq!(rendered.max_line_length, None);
    }

    #[test]
    fn test_html() {
        let grid = Grid::new(
            2,
            1,
            vec![
                cell("red", "white", Mask::Solid),
                cell("black", "lightgrey", Mask::NoUpperLeft),
            ],
        )
        .unwrap();
        let text = render_html(&grid).text;
        assert!(text.starts_with(HTML_HEADER));
        assert!(text.ends_with("<br/></body></html>"));
        assert!(text.contains("<span style='background:rgb(255, 0, 0);color:rgb(255, 0, 0)'>▖</span>"));
        assert!(text.contains("<span style='background:rgb(0, 0, 0);color:rgb(192, 192, 192)'>▟</span>"));
    }

    #[test]
    fn test_render_dispatch() {
        let grid = Grid::new(1, 1, vec![cell("green", "white", Mask::Solid)]).unwrap();
        assert_eq!(render(&grid, OutputFormat::Raw), render_raw(&grid));
        assert_eq!(render(&grid, OutputFormat::Irc), render_irc(&grid));
        assert_eq!(render(&grid, OutputFormat::Html), render_html(&grid));
    }
}
