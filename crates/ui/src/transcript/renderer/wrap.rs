use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `text` to `max_width` display columns
///
/// Source newlines are kept, blank source lines become blank rows, and words
/// wider than the row are split by character. Always yields at least one row.
pub(crate) fn wrap_text_to_width(text: &str, max_width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    if max_width == 0 {
        return vec![String::new()];
    }

    for source_line in text.split('\n') {
        let source_line = source_line.trim_end_matches('\r');
        if source_line.trim().is_empty() {
            rows.push(String::new());
        } else {
            wrap_line(source_line, max_width, &mut rows);
        }
    }

    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

fn wrap_line(text: &str, max_width: usize, rows: &mut Vec<String>) {
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let space_width = if current_line.is_empty() { 0 } else { 1 };

        if current_width + space_width + word_width > max_width {
            if !current_line.is_empty() {
                rows.push(std::mem::take(&mut current_line));
                current_width = 0;
            }

            if word_width > max_width {
                let mut chunk = String::new();
                let mut chunk_width = 0;

                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if chunk_width + ch_width > max_width && !chunk.is_empty() {
                        rows.push(std::mem::take(&mut chunk));
                        chunk_width = 0;
                    }
                    chunk.push(ch);
                    chunk_width += ch_width;
                }

                current_line = chunk;
                current_width = chunk_width;
                continue;
            }
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += 1;
        }
        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        rows.push(current_line);
    }
}

/// Pad `text` with spaces to `width` columns, on the right or the left
pub(crate) fn pad_to_width(text: &str, width: usize, align_right: bool) -> String {
    let fill = width.saturating_sub(text.width());
    if align_right {
        format!("{}{}", " ".repeat(fill), text)
    } else {
        format!("{}{}", text, " ".repeat(fill))
    }
}
