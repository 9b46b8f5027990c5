use unicode_width::UnicodeWidthChar;

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Word-wrap styled runs of text to `width` display columns.
///
/// Whitespace is collapsed to single spaces, words longer than a line are
/// split, and adjacent characters that share a style are merged back into one
/// run on each output line.
pub fn wrap_styled<T: Clone + PartialEq>(runs: &[(String, T)], width: usize) -> Vec<Vec<(String, T)>> {
    if width == 0 {
        return vec![];
    }

    let mut words: Vec<(Option<(char, T)>, Vec<(char, T)>)> = vec![];
    let mut pending_space: Option<(char, T)> = None;
    let mut word: Vec<(char, T)> = vec![];
    for (text, style) in runs {
        for c in text.chars() {
            if c.is_whitespace() {
                if !word.is_empty() {
                    words.push((pending_space.take(), std::mem::take(&mut word)));
                }
                if pending_space.is_none() {
                    pending_space = Some((' ', style.clone()));
                }
            } else {
                word.push((c, style.clone()));
            }
        }
    }
    if !word.is_empty() {
        words.push((pending_space.take(), word));
    }

    let mut lines: Vec<Vec<(char, T)>> = vec![];
    let mut current: Vec<(char, T)> = vec![];
    let mut current_width = 0;

    for (space, word) in words {
        let word_width: usize = word.iter().map(|(c, _)| char_width(*c)).sum();

        if !current.is_empty() {
            if current_width + 1 + word_width <= width {
                if let Some(space) = space {
                    current.push(space);
                    current_width += 1;
                }
                current_width += word_width;
                current.extend(word);
                continue;
            }
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current_width = word_width;
            current = word;
            continue;
        }

        for (c, style) in word {
            let w = char_width(c);
            if current_width + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push((c, style));
            current_width += w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.into_iter().map(merge_runs).collect()
}

fn merge_runs<T: PartialEq>(chars: Vec<(char, T)>) -> Vec<(String, T)> {
    let mut runs: Vec<(String, T)> = vec![];
    for (c, style) in chars {
        match runs.last_mut() {
            Some((text, last)) if *last == style => text.push(c),
            _ => runs.push((c.to_string(), style)),
        }
    }
    runs
}

/// Word-wrap plain text to `width` display columns.
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    wrap_styled(&[(s.to_string(), ())], width)
        .into_iter()
        .map(|line| line.into_iter().map(|(text, _)| text).collect())
        .collect()
}

/// Keep at most `max_lines` lines, replacing the tail with an ellipsis line.
pub fn truncate_lines(mut lines: Vec<String>, max_lines: usize) -> Vec<String> {
    if max_lines == 0 {
        return vec![];
    }
    if lines.len() > max_lines {
        lines.truncate(max_lines - 1);
        lines.push(String::from("..."));
    }
    lines
}
