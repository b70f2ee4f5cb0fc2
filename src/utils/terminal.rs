//! Terminal output sanitization
//!
//! History files record whatever was typed, including pasted escape sequences. Every
//! line printed by the `search` command goes through [`strip_ansi_codes`] so a stored
//! `\x1b[2J` cannot clear the user's screen.

/// Strips ANSI CSI escape sequences and other control characters
///
/// Tabs are kept; everything else below `0x20` (bell, backspace, ...) and `ESC[...X`
/// sequences are removed.
///
/// # Examples
///
/// ```
/// use search_directory_history::utils::terminal::strip_ansi_codes;
///
/// let line = "2024-01-02: echo \x1b[31mred\x1b[0m";
/// assert_eq!(strip_ansi_codes(line), "2024-01-02: echo red");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI ends at its first letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    result
}
