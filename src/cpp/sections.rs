use std::io::{Result, Write};

use crate::{
    ast::EnumDescriptor,
    codegen::{
        idents::{common_prefix, secondary_name},
        source_writer::SourceWriter,
    },
    cpp::CppOptions,
};

/// Names derived from one enum that appear throughout its generated functions.
struct Context<'a> {
    options: &'a CppOptions,
    descriptor: &'a EnumDescriptor,
    name: &'a str,
    secondary: String,
    prefix: &'a str,
}

impl<'a> Context<'a> {
    fn new(descriptor: &'a EnumDescriptor, options: &'a CppOptions) -> Self {
        let prefix = if options.strip_prefix {
            common_prefix(descriptor.member_names())
        } else {
            ""
        };

        Context {
            options,
            descriptor,
            name: &descriptor.name,
            secondary: secondary_name(&descriptor.name),
            prefix,
        }
    }

    /// Pairs of the full member identifier and the string it converts to and from.
    fn members(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        let prefix = self.prefix;
        self.descriptor
            .member_names()
            .map(move |member| (member, &member[prefix.len()..]))
    }
}

fn qualified(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("{namespace}::")
    }
}

pub fn emit_enums(
    writer: &mut SourceWriter<impl Write>,
    descriptors: &[EnumDescriptor],
    options: &CppOptions,
) -> Result<()> {
    for descriptor in descriptors {
        emit_enum(writer, descriptor, options)?;
    }

    Ok(())
}

pub fn emit_enum(
    writer: &mut SourceWriter<impl Write>,
    descriptor: &EnumDescriptor,
    options: &CppOptions,
) -> Result<()> {
    let context = Context::new(descriptor, options);

    writer.banner("ToString.h")?;
    emit_to_string_declaration(writer, &context)?;

    writer.banner("ToString.cpp")?;
    emit_to_string_definition(writer, &context)?;

    writer.banner("Parse.h")?;
    emit_parse_declarations(writer, &context)?;

    writer.banner("Parse.cpp")?;
    emit_parse_definitions(writer, &context)?;

    Ok(())
}

fn emit_to_string_declaration(
    writer: &mut SourceWriter<impl Write>,
    context: &Context,
) -> Result<()> {
    let name = context.name;
    let string_type = &context.options.string_type;

    writer.write_fmt_nl(format_args!("{string_type} to_string({name} const obj);"))?;
    writer.blank_line();

    writer.write_nl("template<>")?;
    writer.write_fmt_nl(format_args!("inline {string_type} to_string({name} const& obj)"))?;
    writer.open()?;
    writer.write_nl("return to_string(obj);")?;
    writer.close("")
}

fn emit_to_string_definition(
    writer: &mut SourceWriter<impl Write>,
    context: &Context,
) -> Result<()> {
    let name = context.name;
    let namespace = qualified(&context.options.namespace);

    writer.write_fmt_nl(format_args!(
        "{} {namespace}to_string({name} const obj)",
        context.options.string_type
    ))?;
    writer.open()?;
    writer.write_nl("switch (obj)")?;
    writer.open()?;

    for (member, text) in context.members() {
        writer.write_fmt_nl(format_args!("case {name}::{member}: return \"{text}\";"))?;
    }
    writer.write_nl("default: return \"\";")?;

    writer.close("")?;
    writer.close("")
}

fn emit_parse_declarations(
    writer: &mut SourceWriter<impl Write>,
    context: &Context,
) -> Result<()> {
    let Context { name, secondary, .. } = context;
    let CppOptions {
        string_type,
        bool_type,
        ..
    } = context.options;

    writer.write_fmt_nl(format_args!("{name} to_{secondary}({string_type} const& string);"))?;
    writer.write_fmt_nl(format_args!(
        "{bool_type} try_{secondary}({string_type} const& string, {name}& value);"
    ))?;
    writer.blank_line();

    writer.write_nl("template<>")?;
    writer.write_fmt_nl(format_args!(
        "inline void parse_to({string_type} const& string, {name}& value)"
    ))?;
    writer.open()?;
    writer.write_fmt_nl(format_args!("value = to_{secondary}(string);"))?;
    writer.close("")?;
    writer.blank_line();

    writer.write_nl("template<>")?;
    writer.write_fmt_nl(format_args!(
        "inline {bool_type} parse_try({string_type} const& string, {name}& value)"
    ))?;
    writer.open()?;
    writer.write_fmt_nl(format_args!("return try_{secondary}(string, value);"))?;
    writer.close("")
}

/// The try variant compares against a default-constructed value, so it reports failure when
/// the input names whichever member is the default.
fn emit_parse_definitions(
    writer: &mut SourceWriter<impl Write>,
    context: &Context,
) -> Result<()> {
    let Context { name, secondary, .. } = context;
    let CppOptions {
        string_type,
        bool_type,
        ..
    } = context.options;
    let namespace = qualified(&context.options.parse_namespace);

    writer.write_fmt_nl(format_args!(
        "{name} {namespace}to_{secondary}({string_type} const& string)"
    ))?;
    writer.open()?;

    for (member, text) in context.members() {
        writer.write_fmt_nl(format_args!(
            "if (string == \"{text}\") return {name}::{member};"
        ))?;
    }
    writer.blank_line();
    writer.write_fmt_nl(format_args!("return {name}();"))?;

    writer.close("")?;
    writer.blank_line();

    writer.write_fmt_nl(format_args!(
        "{bool_type} {namespace}try_{secondary}({string_type} const& string, {name}& value)"
    ))?;
    writer.open()?;
    writer.write_fmt_nl(format_args!("value = to_{secondary}(string);"))?;
    writer.write_fmt_nl(format_args!("return value != {name}();"))?;
    writer.close("")
}
