use std::ops::Range;

pub type Span = Range<usize>;

/// A single source line with its line terminator removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'src> {
    pub text: &'src str,
    pub span: Span,
}

/// A blank-line-delimited run of lines describing one enum.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawGroup<'src> {
    pub lines: Vec<Line<'src>>,
}

impl<'src> RawGroup<'src> {
    pub fn declaration(&self) -> &Line<'src> {
        &self.lines[0]
    }

    pub fn body(&self) -> &[Line<'src>] {
        &self.lines[1..]
    }

    pub fn span(&self) -> Span {
        let start = self.declaration().span.start;
        let end = self.lines.last().map_or(start, |line| line.span.end);
        start..end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: String,
    pub members: Vec<Member>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub span: Span,
}

impl EnumDescriptor {
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|member| member.name.as_str())
    }
}
