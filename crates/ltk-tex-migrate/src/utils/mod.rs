use std::sync::LazyLock;

use regex::Regex;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\x1b\\[[0-9;]*m").expect("ANSI escape pattern must compile"));

#[macro_export]
macro_rules! println_pad {
    ($($arg:tt)*) => {{
        let __s = format!($($arg)*);
        for __line in __s.lines() {
            println!("    {}", __line);
        }
    }};
}

/// Number of characters a terminal shows for `s`, ignoring ANSI color codes.
pub fn visible_len(s: &str) -> usize {
    ANSI_ESCAPE.replace_all(s, "").chars().count()
}

/// Renders the provided lines inside an ASCII box
pub fn boxed_lines(lines: &[String]) -> Vec<String> {
    let width = lines
        .iter()
        .map(|s| visible_len(s.as_str()))
        .max()
        .unwrap_or(0);

    let border = "-".repeat(width + 4);
    let mut boxed = Vec::with_capacity(lines.len() + 2);
    boxed.push(border.clone());
    for line in lines {
        let pad = width - visible_len(line.as_str());
        boxed.push(format!("| {}{} |", line, " ".repeat(pad)));
    }
    boxed.push(border);
    boxed
}

/// Prints the provided lines inside an ASCII box
pub fn print_ansi_boxed_lines(lines: &[String]) {
    for line in boxed_lines(lines) {
        println_pad!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_len_ignores_ansi_codes() {
        assert_eq!(visible_len("\x1b[1;32mMigrated:\x1b[0m 3"), 11);
        assert_eq!(visible_len("plain"), 5);
    }

    #[test]
    fn boxed_lines_pads_to_widest_line() {
        let boxed = boxed_lines(&["ab".to_string(), "\x1b[31mabcd\x1b[0m".to_string()]);

        assert_eq!(boxed.len(), 4);
        assert_eq!(boxed[0], "--------");
        assert_eq!(boxed[1], "| ab   |");
        assert_eq!(boxed[2], "| \x1b[31mabcd\x1b[0m |");
        assert_eq!(boxed[3], "--------");
    }
}
