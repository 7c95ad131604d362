use std::collections::{HashMap, hash_map::Entry};

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind};

use crate::{
    ast::{EnumDescriptor, Member, Span},
    codegen::idents::secondary_name,
    reports::Reports,
    syntax::{
        descriptor::{DescriptorError, parse_group},
        segmenter::segment,
    },
};

pub mod descriptor;
pub mod segmenter;

/// Segments the source and parses every group.
///
/// Groups that fail to parse are reported and left out of the result, so the returned
/// descriptors are in source order but may be fewer than the groups in the source.
pub fn parse<'filename>(
    src: &str,
    reports: &mut Reports<'filename>,
    filename: &'filename str,
) -> Vec<EnumDescriptor> {
    let groups = segment(src);
    let mut descriptors = Vec::with_capacity(groups.len());

    for group in &groups {
        match parse_group(group) {
            Ok(descriptor) => {
                tracing::debug!(
                    name = %descriptor.name,
                    secondary = %secondary_name(&descriptor.name),
                    members = ?descriptor.member_names().collect::<Vec<_>>(),
                    "parsed enum"
                );

                if descriptor.members.is_empty() {
                    reports.add_warning(make_report(
                        ReportKind::Warning,
                        format!("enum `{}` has no members", descriptor.name),
                        "only the fallback branches will be generated for this enum",
                        descriptor.span.clone(),
                        filename,
                    ));
                }

                report_duplicates(&descriptor, reports, filename);

                descriptors.push(descriptor);
            }
            Err(error) => {
                tracing::debug!(%error, "skipping group");

                reports.add_error(make_report(
                    ReportKind::Error,
                    error.to_string(),
                    match error {
                        DescriptorError::NotADeclaration { .. } => {
                            "this line should declare an enum, so this group was skipped"
                        }
                    },
                    error.span(),
                    filename,
                ));
            }
        }
    }

    descriptors
}

/// Duplicates are still emitted; parsing will always return the first of them.
fn report_duplicates<'filename>(
    descriptor: &EnumDescriptor,
    reports: &mut Reports<'filename>,
    filename: &'filename str,
) {
    let mut seen: HashMap<&str, &Member> = HashMap::new();

    for member in &descriptor.members {
        match seen.entry(member.name.as_str()) {
            Entry::Occupied(entry) => {
                let first = *entry.get();

                let report = Report::build(ReportKind::Warning, (filename, member.span.clone()))
                    .with_config(Config::new().with_index_type(IndexType::Byte))
                    .with_message(format!(
                        "`{}` is declared more than once in enum `{}`",
                        member.name, descriptor.name
                    ))
                    .with_label(
                        Label::new((filename, member.span.clone()))
                            .with_message("parsing only ever matches the first declaration")
                            .with_color(Color::Yellow),
                    )
                    .with_label(
                        Label::new((filename, first.span.clone()))
                            .with_message("it was first declared here")
                            .with_color(Color::Blue),
                    )
                    .finish();

                reports.add_warning(report);
            }
            Entry::Vacant(entry) => {
                entry.insert(member);
            }
        }
    }
}

fn make_report<'filename>(
    kind: ReportKind<'static>,
    message: String,
    label: &str,
    span: Span,
    filename: &'filename str,
) -> Report<'static, (&'filename str, Span)> {
    let color = match kind {
        ReportKind::Error => Color::Red,
        _ => Color::Yellow,
    };

    Report::build(kind, (filename, span.clone()))
        .with_config(Config::new().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span))
                .with_message(label)
                .with_color(color),
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_malformed_groups_and_continues() {
        let mut reports = Reports::default();
        let descriptors = parse(
            "enum A\n a,\n\nnotAnEnum\n b,\n\n\n\nenum C {\n c,\n};\n",
            &mut reports,
            "input.txt",
        );

        let names: Vec<_> = descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
        assert_eq!(reports.error_count(), 1);
        assert_eq!(reports.warning_count(), 0);
    }

    #[test]
    fn warnings_do_not_skip() {
        let mut reports = Reports::default();
        let descriptors = parse(
            "enum Empty {\n};\n\nenum Dup {\n X,\n Y,\n X,\n X,\n};\n",
            &mut reports,
            "input.txt",
        );

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[1].members.len(), 4);
        assert_eq!(reports.error_count(), 0);
        // One for the empty enum, one for each repeated `X`.
        assert_eq!(reports.warning_count(), 3);
    }

    #[test]
    fn nothing_to_report() {
        let mut reports = Reports::default();
        let descriptors = parse("", &mut reports, "input.txt");

        assert!(descriptors.is_empty());
        assert!(!reports.has_any());
    }
}
