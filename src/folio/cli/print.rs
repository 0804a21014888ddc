use colored::Colorize;
use folio::api::{CmdMessage, MessageLevel};
use folio::draft::Draft;
use folio::model::Page;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const UNTITLED: &str = "(untitled)";
const RULE: &str = "--------------------------------";

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn display_title(title: &str) -> &str {
    if title.trim().is_empty() {
        UNTITLED
    } else {
        title
    }
}

/// One line per page: id, title, and a preview of the first paragraph.
pub(super) fn render_page_list(pages: &[Page], preview_width: usize) -> String {
    if pages.is_empty() {
        return "No pages yet.\n".to_string();
    }

    let id_width = pages
        .iter()
        .map(|p| p.id.to_string().width())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for page in pages {
        let id = format!("{:>width$}.", page.id, width = id_width);
        let mut line = format!("{} {}", id.yellow(), display_title(&page.title).bold());

        let preview = page
            .lead()
            .map(|lead| {
                let flat: String = lead
                    .chars()
                    .map(|c| if c == '\n' { ' ' } else { c })
                    .collect();
                truncate_to_width(&flat, preview_width)
            })
            .unwrap_or_default();
        if !preview.is_empty() {
            line.push_str(&format!("  {}", preview.dimmed()));
        }

        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Full page: title, a rule, then every paragraph separated by a blank line.
pub(super) fn render_page(page: &Page) -> String {
    let mut out = format!("{}\n{}\n", display_title(&page.title).bold(), RULE);
    if page.paragraphs.is_empty() {
        out.push_str(&format!("{}\n", "(no paragraphs)".dimmed()));
        return out;
    }
    let body = page.paragraphs.join("\n\n");
    out.push_str(&body);
    out.push('\n');
    out
}

/// The working state of a compose session, with the local ids to refer to.
pub(super) fn render_draft(draft: &Draft) -> String {
    let mut out = format!("{} {}\n", "Title:".dimmed(), display_title(draft.title()));
    if draft.is_empty() {
        out.push_str(&format!("{}\n", "(no paragraphs)".dimmed()));
    }
    for paragraph in draft.iter() {
        let tag = format!("[{}]", paragraph.id);
        out.push_str(&format!("{} {}\n", tag.yellow(), paragraph.content));
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::model::PageId;

    fn plain() {
        colored::control::set_override(false);
    }

    fn page(id: u64, title: &str, paragraphs: &[&str]) -> Page {
        Page::new(
            PageId(id),
            title.to_string(),
            paragraphs.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn truncation_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn truncation_counts_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn empty_list_says_so() {
        plain();
        assert_eq!(render_page_list(&[], 50), "No pages yet.\n");
    }

    #[test]
    fn list_lines_carry_id_title_and_preview() {
        plain();
        let pages = vec![
            page(1, "Groceries", &["milk\nand eggs"]),
            page(12, "", &[]),
        ];
        let out = render_page_list(&pages, 50);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " 1. Groceries  milk and eggs");
        assert_eq!(lines[1], "12. (untitled)");
    }

    #[test]
    fn zero_preview_width_hides_preview() {
        plain();
        let out = render_page_list(&[page(1, "T", &["body"])], 0);
        assert_eq!(out, "1. T\n");
    }

    #[test]
    fn page_renders_paragraphs_in_order() {
        plain();
        let out = render_page(&page(1, "Test Page", &["first", "second"]));
        assert_eq!(out, format!("Test Page\n{}\nfirst\n\nsecond\n", RULE));
    }

    #[test]
    fn draft_shows_local_ids() {
        plain();
        let mut draft = Draft::new("Plan");
        draft.append("a");
        draft.append("b");
        let out = render_draft(&draft);
        assert_eq!(out, "Title: Plan\n[1] a\n[2] b\n");
    }
}
