/// Prefix marking a line of the path list as a comment
pub const COMMENT_MARKER: &str = "//";

/// Split a newline-delimited path list into entries, dropping blank lines
/// and `//` comments. Input order is preserved.
pub fn parse_paths(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}

/// Last non-empty `/`-delimited segment of a path, or `""` when there is none
pub fn last_segment(path: &str) -> &str {
    path.split('/')
        .rfind(|segment| !segment.is_empty())
        .unwrap_or("")
}

/// Sanitize filename to remove invalid characters
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths_skips_blank_and_comment_lines() {
        let raw = "/courses/a/lesson-1/\n\n   \n// skipped\n  //also skipped\n/courses/a/lesson-2/\n";
        assert_eq!(
            parse_paths(raw),
            vec!["/courses/a/lesson-1/", "/courses/a/lesson-2/"]
        );
    }

    #[test]
    fn test_parse_paths_preserves_order_and_trims() {
        let raw = "  c \r\na\r\n\tb\t";
        assert_eq!(parse_paths(raw), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_parse_paths_empty_input() {
        assert!(parse_paths("").is_empty());
        assert!(parse_paths("\n\n// only comments\n").is_empty());
    }

    #[test]
    fn test_parse_paths_single_slash_is_not_a_comment() {
        assert_eq!(parse_paths("/lesson-1\n/ lesson-2"), vec!["/lesson-1", "/ lesson-2"]);
    }

    #[test]
    fn test_parse_paths_is_pure() {
        let raw = "x\n// y\nz";
        assert_eq!(parse_paths(raw), parse_paths(raw));
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/courses/example/lesson-3/"), "lesson-3");
        assert_eq!(last_segment("lesson-1"), "lesson-1");
        assert_eq!(last_segment("a//b"), "b");
        assert_eq!(last_segment("///"), "");
        assert_eq!(last_segment(""), "");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("test/file.vtt"), "test_file.vtt");
        assert_eq!(sanitize_filename("0-intro:part?1.vtt"), "0-intro_part_1.vtt");
        assert_eq!(sanitize_filename("normal-name.vtt"), "normal-name.vtt");
    }
}
