//! Turning combobox state into terminal lines.

use selectkit::{ComboOption, Combobox};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::surface::TermSurface;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub bold: bool,
    pub dim: bool,
    pub reversed: bool,
}

impl Line {
    fn plain(text: String) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }
}

/// One screen worth of lines plus where the cursor goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Line>,
    pub cursor: (u16, u16),
}

/// Lay out the input line and, while the popup is open, the visible window of
/// option rows.
pub fn build_frame<T: ComboOption>(combo: &Combobox<T>, surface: &TermSurface, width: u16) -> Frame {
    let width = width as usize;
    let prompt = if combo.is_user_input_valid() { "> " } else { "! " };
    let value = combo.value();

    let mut lines = Vec::new();
    let input = if value.is_empty() && !combo.config().placeholder.is_empty() {
        Line {
            text: fit(&format!("{}{}", prompt, combo.config().placeholder), width),
            dim: true,
            ..Default::default()
        }
    } else {
        Line::plain(fit(&format!("{}{}", prompt, value), width))
    };
    lines.push(input);

    let cursor_x = (prompt.width() + value.width()).min(width.saturating_sub(1));

    if combo.popup_visible() {
        if let Some(message) = combo.empty_message() {
            lines.push(Line {
                text: fit(&format!("  {}", message), width),
                dim: true,
                ..Default::default()
            });
        } else {
            let views = combo.option_views();
            for view in views.get(surface.window()).unwrap_or_default() {
                let marker = if view.is_selected { '*' } else { ' ' };
                lines.push(Line {
                    text: fit(&format!("{} {}", marker, view.label), width),
                    bold: view.is_selected,
                    reversed: view.is_active,
                    ..Default::default()
                });
            }
        }
    }

    Frame {
        lines,
        cursor: (cursor_x as u16, 0),
    }
}

/// Cut `text` to at most `width` terminal columns.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
