//! Paginated export: re-wraps the RPP text to a fixed width and lays it out on
//! A4 pages, breaking to a new page when vertical space runs out.
//!
//! The output is a positioned-line document a client hands to its PDF drawer
//! one `text(x, y)` call per line.

use serde::{Deserialize, Serialize};

use crate::export::metrics::text_width_mm;

pub const DOCUMENT_TITLE: &str = "Rencana Pelaksanaan Pembelajaran (RPP)";

const TAB_WIDTH: usize = 4;

/// Geometry of an exported page. All distances in millimetres from the top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_left_mm: f32,
    /// Width body lines are wrapped to.
    pub text_width_mm: f32,
    pub title_y_mm: f32,
    pub title_font_pt: f32,
    pub info_start_y_mm: f32,
    pub info_step_mm: f32,
    pub info_font_pt: f32,
    /// Distance from the last info line to the first body line.
    pub body_gap_mm: f32,
    pub body_font_pt: f32,
    pub line_step_mm: f32,
    /// Where body text resumes on continuation pages.
    pub page_top_mm: f32,
    /// A line whose baseline would pass this point moves to the next page.
    pub page_bottom_mm: f32,
}

/// A4 portrait, 20 mm left margin, 170 mm text block.
pub fn default_page_layout() -> PageLayout {
    PageLayout {
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        margin_left_mm: 20.0,
        text_width_mm: 170.0,
        title_y_mm: 20.0,
        title_font_pt: 20.0,
        info_start_y_mm: 40.0,
        info_step_mm: 10.0,
        info_font_pt: 12.0,
        body_gap_mm: 15.0,
        body_font_pt: 10.0,
        line_step_mm: 5.0,
        page_top_mm: 20.0,
        page_bottom_mm: 280.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub x_mm: f32,
    pub y_mm: f32,
    pub font_size_pt: f32,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedDocument {
    pub filename: String,
    pub layout: PageLayout,
    pub pages: Vec<Page>,
}

/// Lays out the title, the `info_lines` header and the wrapped `body`.
pub fn paginate(
    body: &str,
    info_lines: &[String],
    filename: String,
    layout: &PageLayout,
) -> PaginatedDocument {
    let x = layout.margin_left_mm;
    let mut pages = vec![Page {
        number: 1,
        lines: Vec::new(),
    }];

    pages[0].lines.push(PlacedLine {
        x_mm: x,
        y_mm: layout.title_y_mm,
        font_size_pt: layout.title_font_pt,
        text: DOCUMENT_TITLE.to_string(),
    });

    let mut last_info_y = layout.info_start_y_mm;
    for (i, info) in info_lines.iter().enumerate() {
        last_info_y = layout.info_start_y_mm + i as f32 * layout.info_step_mm;
        pages[0].lines.push(PlacedLine {
            x_mm: x,
            y_mm: last_info_y,
            font_size_pt: layout.info_font_pt,
            text: info.clone(),
        });
    }

    let mut y = last_info_y + layout.body_gap_mm;
    for line in wrap_text(body, layout.text_width_mm, layout.body_font_pt) {
        if y > layout.page_bottom_mm {
            pages.push(Page {
                number: pages.len() + 1,
                lines: Vec::new(),
            });
            y = layout.page_top_mm;
        }
        if let Some(page) = pages.last_mut() {
            page.lines.push(PlacedLine {
                x_mm: x,
                y_mm: y,
                font_size_pt: layout.body_font_pt,
                text: line,
            });
        }
        y += layout.line_step_mm;
    }

    PaginatedDocument {
        filename,
        layout: layout.clone(),
        pages,
    }
}

/// Greedy word wrap. Existing line breaks are kept, blank lines survive as
/// empty lines, leading indentation of a paragraph is kept on its first line,
/// and a word wider than the line is split across lines.
pub fn wrap_text(text: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<String> {
    let fits = |s: &str| text_width_mm(s, font_size_pt) <= max_width_mm;
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let paragraph = raw.trim_end_matches('\r').replace('\t', &" ".repeat(TAB_WIDTH));
        let content = paragraph.trim_start_matches(' ');
        if content.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let indent = &paragraph[..paragraph.len() - content.len()];
        let mut current = indent.to_string();
        let mut line_has_word = false;

        for word in content.split(' ').filter(|w| !w.is_empty()) {
            let candidate = if line_has_word {
                format!("{current} {word}")
            } else {
                format!("{current}{word}")
            };

            if fits(&candidate) {
                current = candidate;
                line_has_word = true;
                continue;
            }

            if line_has_word {
                lines.push(std::mem::take(&mut current));
            }

            // Start a fresh line with this word, splitting it if it is too wide alone.
            let mut piece = if line_has_word { String::new() } else { current };
            for c in word.chars() {
                piece.push(c);
                if !fits(&piece) && piece.chars().count() > 1 {
                    piece.pop();
                    lines.push(std::mem::take(&mut piece));
                    piece.push(c);
                }
            }
            current = piece;
            line_has_word = true;
        }

        lines.push(current);
    }

    lines
}
