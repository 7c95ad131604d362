use std::{
    fmt::Arguments,
    io::{Result, Write},
};

/// Writes tab-indented C-family source text.
///
/// Blank lines are only emitted lazily, before the next line that actually has content, so a
/// requested blank line directly after an opening brace or at the very end is dropped.
pub struct SourceWriter<Writer> {
    writer: Writer,
    indent_level: usize,
    line_started: bool,
    blank_line: BlankLineState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlankLineState {
    Normal,
    Requested,
    Prohibited,
}

impl<Writer: Write> SourceWriter<Writer> {
    const INDENT: &str = "\t";
    const BANNER_RULE: &str = "====================";

    pub fn new(writer: Writer) -> SourceWriter<Writer> {
        SourceWriter {
            writer,
            indent_level: 0,
            line_started: false,
            blank_line: BlankLineState::Prohibited,
        }
    }

    fn try_start_line(&mut self) -> Result<()> {
        if !self.line_started {
            if self.blank_line == BlankLineState::Requested {
                self.writer.write_all(b"\n")?;
            }
            self.blank_line = BlankLineState::Normal;

            self.line_started = true;

            for _ in 0..self.indent_level {
                self.writer.write_all(Self::INDENT.as_bytes())?;
            }
        }

        Ok(())
    }

    pub fn nl(&mut self) -> Result<()> {
        self.writer.write_all(b"\n")?;
        self.line_started = false;
        Ok(())
    }

    pub fn write(&mut self, str: &str) -> Result<()> {
        self.try_start_line()?;
        self.writer.write_all(str.as_bytes())?;
        Ok(())
    }

    pub fn write_nl(&mut self, str: &str) -> Result<()> {
        self.write(str)?;
        self.nl()
    }

    pub fn write_fmt(&mut self, fmt: Arguments) -> Result<()> {
        self.try_start_line()?;
        self.writer.write_fmt(fmt)?;
        Ok(())
    }

    pub fn write_fmt_nl(&mut self, fmt: Arguments) -> Result<()> {
        self.write_fmt(fmt)?;
        self.nl()
    }

    /// Writes `{` on its own line and indents everything up to the matching [`Self::close`].
    pub fn open(&mut self) -> Result<()> {
        self.write_nl("{")?;
        self.indent_level += 1;
        self.blank_line = BlankLineState::Prohibited;
        Ok(())
    }

    pub fn close(&mut self, suffix: &str) -> Result<()> {
        self.indent_level = self.indent_level.saturating_sub(1);
        self.blank_line = BlankLineState::Prohibited;
        self.write("}")?;
        self.write_nl(suffix)
    }

    /// Writes a boxed title naming the file the following section belongs in.
    pub fn banner(&mut self, title: &str) -> Result<()> {
        self.blank_line();
        self.write_nl(Self::BANNER_RULE)?;
        self.write_fmt_nl(format_args!("{}{title}", Self::INDENT))?;
        self.write_nl(Self::BANNER_RULE)?;
        self.blank_line();
        Ok(())
    }

    pub fn blank_line(&mut self) {
        if self.blank_line != BlankLineState::Prohibited {
            self.blank_line = BlankLineState::Requested;
        }
    }

    pub fn into_inner(self) -> Writer {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut SourceWriter<&mut Vec<u8>>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut SourceWriter::new(&mut buffer)).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn blocks_are_indented_with_tabs() {
        let text = render(|writer| {
            writer.write_nl("void f()")?;
            writer.open()?;
            writer.write_nl("switch (x)")?;
            writer.open()?;
            writer.write_nl("default: break;")?;
            writer.close("")?;
            writer.close("")
        });

        assert_eq!(text, "void f()\n{\n\tswitch (x)\n\t{\n\t\tdefault: break;\n\t}\n}\n");
    }

    #[test]
    fn blank_lines_are_lazy() {
        let text = render(|writer| {
            writer.blank_line();
            writer.write_nl("a")?;
            writer.blank_line();
            writer.blank_line();
            writer.write_nl("b")?;
            writer.open()?;
            writer.blank_line();
            writer.close(";")?;
            writer.blank_line();
            Ok(())
        });

        assert_eq!(text, "a\n\nb\n{\n};\n");
    }

    #[test]
    fn banner() {
        let text = render(|writer| {
            writer.banner("Parse.h")?;
            writer.write_nl("x")
        });

        assert_eq!(
            text,
            "====================\n\tParse.h\n====================\n\nx\n"
        );
    }
}
