use std::{ops::Range, slice};

type Report<'filename> = ariadne::Report<'static, (&'filename str, Range<usize>)>;

/// Diagnostics collected while parsing a single input file.
///
/// Every error corresponds to one skipped group, warnings never cause a group to be skipped.
#[derive(Debug, Default)]
pub struct Reports<'filename> {
    reports: Vec<Report<'filename>>,
    errors: usize,
}

impl<'filename> Reports<'filename> {
    pub fn add_error(&mut self, report: Report<'filename>) {
        self.reports.push(report);
        self.errors += 1;
    }

    pub fn add_warning(&mut self, report: Report<'filename>) {
        self.reports.push(report);
    }

    pub fn has_any(&self) -> bool {
        !self.reports.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn warning_count(&self) -> usize {
        self.reports.len() - self.errors
    }
}

impl<'a, 'filename> IntoIterator for &'a Reports<'filename> {
    type Item = &'a Report<'filename>;
    type IntoIter = slice::Iter<'a, Report<'filename>>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}
