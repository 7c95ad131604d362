use crate::ast::{Line, RawGroup};

/// Splits the source into its lines, dropping `\n`, `\r\n` or lone `\r` terminators.
pub fn lines(src: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;

    std::iter::from_fn(move || {
        if offset >= src.len() {
            return None;
        }

        let start = offset;
        let rest = &src[start..];

        let end = match rest.find(['\n', '\r']) {
            Some(index) => {
                let terminator = if rest[index..].starts_with("\r\n") { 2 } else { 1 };
                offset = start + index + terminator;
                start + index
            }
            None => {
                offset = src.len();
                src.len()
            }
        };

        Some(Line {
            text: &src[start..end],
            span: start..end,
        })
    })
}

/// Splits the source into groups separated by blank or whitespace-only lines.
///
/// Blank lines are never part of a group and runs of them never produce empty groups.
pub fn segment(src: &str) -> Vec<RawGroup<'_>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for line in lines(src) {
        if line.text.trim().is_empty() {
            if !current.is_empty() {
                groups.push(RawGroup {
                    lines: std::mem::take(&mut current),
                });
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        groups.push(RawGroup { lines: current });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'src>(groups: &[RawGroup<'src>]) -> Vec<Vec<&'src str>> {
        groups
            .iter()
            .map(|group| group.lines.iter().map(|line| line.text).collect())
            .collect()
    }

    #[test]
    fn two_groups() {
        let groups = segment("enum A\n a,\n\nenum B\n b,\n");
        assert_eq!(texts(&groups), [vec!["enum A", " a,"], vec!["enum B", " b,"]]);
    }

    #[test]
    fn consecutive_blank_lines() {
        let groups = segment("enum A\n a,\n\n  \n\t\nenum B\n b,");
        assert_eq!(groups.len(), 2);
        assert_eq!(texts(&groups)[1], ["enum B", " b,"]);
    }

    #[test]
    fn empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("\n\n   \n").is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let src = "enum A\r\n a,\r\n\r\nenum B\r\n";
        let groups = segment(src);

        assert_eq!(texts(&groups), [vec!["enum A", " a,"], vec!["enum B"]]);

        let second = &groups[0].lines[1];
        assert_eq!(&src[second.span.clone()], " a,");
    }

    #[test]
    fn lone_carriage_returns() {
        let src = "enum A\r a,\r\renum B\r b,\r";
        let groups = segment(src);

        assert_eq!(texts(&groups), [vec!["enum A", " a,"], vec!["enum B", " b,"]]);
        for line in groups.iter().flat_map(|group| &group.lines) {
            assert_eq!(&src[line.span.clone()], line.text);
        }
    }

    #[test]
    fn mixed_line_endings() {
        let lines: Vec<_> = lines("a\r\nb\rc\n\nd").map(|line| line.text).collect();
        assert_eq!(lines, ["a", "b", "c", "", "d"]);
    }

    #[test]
    fn spans_point_into_source() {
        let src = "\nenum Light {\n    Point,\n};\n";
        let groups = segment(src);

        assert_eq!(groups.len(), 1);
        for line in &groups[0].lines {
            assert_eq!(&src[line.span.clone()], line.text);
        }
        assert_eq!(&src[groups[0].span()], "enum Light {\n    Point,\n};");
    }
}
