use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::ast::{EnumDescriptor, Line, Member, RawGroup, Span};

/// `enum [class|struct] Name [: underlying] [{ [inline members] [}] [;]] [// comment]`
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*enum(?:\s+(?:class|struct))?\s+(?P<name>[A-Za-z]\w*)",
        r"(?:\s*:\s*[A-Za-z_][\w:]*(?:\s+[A-Za-z_][\w:]*)*)?",
        r"\s*(?:\{(?P<body>[^}]*)(?:\}\s*;?)?)?\s*(?://.*)?$",
    ))
    .expect("declaration pattern is valid")
});

/// `Member [= literal] [,] [// comment]`
static VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<name>\w+)\s*",
        r"(?:=\s*[-+]?(?:0[xX][0-9A-Fa-f']+|0[bB][01']+|\d[\d']*)[uUlL]*\s*)?",
        r",?\s*(?://.*)?$",
    ))
    .expect("value pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("expected an enum declaration, found `{text}`")]
    NotADeclaration { text: String, span: Span },
}

impl DescriptorError {
    pub fn span(&self) -> Span {
        match self {
            DescriptorError::NotADeclaration { span, .. } => span.clone(),
        }
    }
}

/// Extracts the enum name and members from a group.
///
/// The first line must be a declaration. Every following line that looks like an enumerator
/// contributes one member, and every other line is ignored.
pub fn parse_group(group: &RawGroup) -> Result<EnumDescriptor, DescriptorError> {
    let declaration = group.declaration();

    let captures = DECLARATION.captures(declaration.text).ok_or_else(|| {
        DescriptorError::NotADeclaration {
            text: declaration.text.trim().to_owned(),
            span: declaration.span.clone(),
        }
    })?;

    let name = captures["name"].to_owned();
    let mut members = Vec::new();

    if let Some(body) = captures.name("body") {
        let mut offset = declaration.span.start + body.start();

        for piece in body.as_str().split(',') {
            if let Some(captures) = VALUE.captures(piece) {
                members.push(member(&captures, offset));
            }
            offset += piece.len() + ','.len_utf8();
        }
    }

    members.extend(group.body().iter().filter_map(value_line));

    Ok(EnumDescriptor {
        name,
        members,
        span: group.span(),
    })
}

fn value_line(line: &Line) -> Option<Member> {
    VALUE
        .captures(line.text)
        .map(|captures| member(&captures, line.span.start))
}

fn member(captures: &Captures, offset: usize) -> Member {
    let name = &captures["name"];
    let start = offset + captures.name("name").map_or(0, |m| m.start());

    Member {
        name: name.to_owned(),
        span: start..start + name.len(),
    }
}
