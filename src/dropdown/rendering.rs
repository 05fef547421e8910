//! View rendering for the dropdown.
//!
//! The trigger is always one line. When the list is open the option rows
//! follow it: every row in plain mode, only the visible window in virtual
//! mode. Each option takes `row_height` lines; the label sits on the first.

use super::model::Model;
use super::style::{ARROW_DOWN, ARROW_UP, CHECK_MARK, CLEAR_MARK, ELLIPSIS};
use super::types::FocusTarget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pads `text` with spaces to exactly `width` columns, cutting it with an
/// ellipsis when it is too wide.
pub(super) fn fit(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

impl Model {
    /// Renders the trigger line and, when open, the rendered option rows.
    pub fn view(&self) -> String {
        let mut lines = vec![self.trigger_view()];
        for i in self.rendered_range() {
            lines.push(self.row_view(i));
            for _ in 1..self.row_height {
                lines.push(" ".repeat(self.width));
            }
        }
        lines.join("\n")
    }

    fn trigger_view(&self) -> String {
        let mut icons = String::new();
        if self.on_clear.is_some() && !self.values.is_empty() {
            icons.push_str(CLEAR_MARK);
            icons.push(' ');
        }
        icons.push_str(if self.is_open() { ARROW_UP } else { ARROW_DOWN });

        let label_width = self
            .width
            .saturating_sub(UnicodeWidthStr::width(icons.as_str()) + 1);

        let label = if self.values.is_empty() {
            self.styles
                .placeholder
                .render(&fit(&self.placeholder, label_width))
        } else {
            let labels: Vec<&str> = self
                .index
                .selected_items(&self.values)
                .iter()
                .map(|item| item.value.as_str())
                .collect();
            let style = if self.target == FocusTarget::Trigger {
                &self.styles.trigger_focused
            } else {
                &self.styles.trigger
            };
            style.render(&fit(&labels.join(", "), label_width))
        };

        format!("{label} {}", self.styles.icon.render(&icons))
    }

    fn row_view(&self, i: usize) -> String {
        let Some(item) = self.options.get(i) else {
            return String::new();
        };
        let selected = self.index.is_selected(&item.id);

        let check = match (self.multi, selected) {
            (true, true) => format!("{CHECK_MARK} "),
            (true, false) => "  ".to_string(),
            (false, _) => String::new(),
        };
        let text = fit(&format!("{check}{}", item.value), self.width);

        let style = if self.target == FocusTarget::Row(i) {
            &self.styles.focused_option
        } else if selected {
            &self.styles.selected_option
        } else {
            &self.styles.option
        };
        style.render(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("ab", 4), "ab  ");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abcdef", 0), "");
    }

    #[test]
    fn test_fit_counts_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(fit("日本語", 5), "日本…");
    }
}
