// Title markup: inline font size changes written as *NNpx*
//
// grammar Title {
//   token line    { [ <marker> | <text> ]* }
//   token marker  { '*' <digit>+ 'px*' }
//   token text    { .+? <?before <marker> || $ > }
// };

use nom::{
    bytes::complete::tag,
    character::complete::digit1,
    combinator::map_res,
    sequence::delimited,
};

/// Size used for text before the first marker, and for lines without markup
pub const DEFAULT_TITLE_SIZE: u32 = 72;

/// A run of title text at one font size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSegment {
    pub size: u32,
    pub text: String,
}

impl TitleSegment {
    pub fn new(size: u32, text: impl Into<String>) -> Self {
        Self {
            size,
            text: text.into(),
        }
    }
}

// Markers look like "*64px*"
fn size_marker(input: &str) -> nom::IResult<&str, u32> {
    delimited(tag("*"), map_res(digit1, str::parse::<u32>), tag("px*"))(input)
}

/// Split one title line into sized segments.
///
/// Text is emitted at the size that is active when it is reached; markers
/// switch the size for what follows and never produce text of their own.
/// A line made only of markers comes back verbatim at the default size.
pub fn parse_segments(line: &str) -> Vec<TitleSegment> {
    let mut segments = Vec::new();
    let mut size = DEFAULT_TITLE_SIZE;
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(offset) = line[cursor..].find('*') {
        let star = cursor + offset;
        match size_marker(&line[star..]) {
            Ok((rest, new_size)) => {
                if star > text_start {
                    segments.push(TitleSegment::new(size, &line[text_start..star]));
                }
                size = new_size;
                cursor = line.len() - rest.len();
                text_start = cursor;
            }
            Err(_) => {
                cursor = star + 1;
            }
        }
    }

    if text_start < line.len() {
        segments.push(TitleSegment::new(size, &line[text_start..]));
    }

    if segments.is_empty() {
        segments.push(TitleSegment::new(DEFAULT_TITLE_SIZE, line));
    }

    segments
}

/// The tallest segment of a line decides its height
pub fn line_size(segments: &[TitleSegment]) -> u32 {
    segments
        .iter()
        .map(|s| s.size)
        .max()
        .unwrap_or(DEFAULT_TITLE_SIZE)
}

/// Title lines as drawn: trimmed, with blank lines dropped
pub fn title_lines(title: &str) -> Vec<&str> {
    title
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_size_marker() {
        assert_eq!(size_marker("*25px*rest"), Ok(("rest", 25)));
        assert!(size_marker("*25pt*").is_err());
        assert!(size_marker("*px*").is_err());
        assert!(size_marker("25px*").is_err());
    }

    #[test]
    fn test_plain_line_is_one_segment() {
        assert_eq!(
            parse_segments("JOGOS DO DIA"),
            vec![TitleSegment::new(72, "JOGOS DO DIA")]
        );
    }

    #[test]
    fn test_mixed_sizes() {
        assert_eq!(
            parse_segments("*25px* Jogos em *64px*DESTAQUE"),
            vec![
                TitleSegment::new(25, " Jogos em "),
                TitleSegment::new(64, "DESTAQUE"),
            ]
        );
    }

    #[test]
    fn test_text_before_first_marker_uses_default() {
        assert_eq!(
            parse_segments("TOP *40px*small"),
            vec![TitleSegment::new(72, "TOP "), TitleSegment::new(40, "small")]
        );
    }

    #[test]
    fn test_trailing_marker_emits_nothing() {
        assert_eq!(
            parse_segments("BIG*30px*"),
            vec![TitleSegment::new(72, "BIG")]
        );
    }

    #[test]
    fn test_adjacent_markers_skip_empty_text() {
        assert_eq!(
            parse_segments("*10px**90px*X"),
            vec![TitleSegment::new(90, "X")]
        );
    }

    #[test]
    fn test_digits_and_stars_elsewhere_are_text() {
        assert_eq!(
            parse_segments("RODADA 38 *5* 2px*"),
            vec![TitleSegment::new(72, "RODADA 38 *5* 2px*")]
        );
        assert_eq!(
            parse_segments("**12px*A"),
            vec![TitleSegment::new(72, "*"), TitleSegment::new(12, "A")]
        );
    }

    // Nothing visible would be left, so the markup is shown as typed
    #[test]
    fn test_marker_only_line_is_literal() {
        assert_eq!(
            parse_segments("*50px*"),
            vec![TitleSegment::new(72, "*50px*")]
        );
    }

    #[test]
    fn test_oversized_number_is_literal() {
        let line = "*99999999999px*X";
        assert_eq!(parse_segments(line), vec![TitleSegment::new(72, line)]);
    }

    #[test]
    fn test_segments_concatenate_to_line_without_markers() {
        let line = "A*10px*B*20px*C*nope*D";
        let joined: String = parse_segments(line).into_iter().map(|s| s.text).collect();
        assert_eq!(joined, "ABC*nope*D");
    }

    #[test]
    fn test_line_size() {
        assert_eq!(line_size(&parse_segments("*25px*a*64px*b")), 64);
        assert_eq!(line_size(&parse_segments("*25px*a")), 25);
        assert_eq!(line_size(&[]), 72);
    }

    #[test]
    fn test_title_lines() {
        let title = indoc! {"
              JOGOS DO DIA

            *40px*rodada 12
        "};
        assert_eq!(title_lines(title), vec!["JOGOS DO DIA", "*40px*rodada 12"]);
        assert!(title_lines("  \n\t\n").is_empty());
    }
}
