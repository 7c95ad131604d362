use std::{
    fs,
    io::{Write, stdout},
    path::PathBuf,
};

use crate::{
    codegen::source_writer::SourceWriter,
    cpp::sections::emit_enums,
    error::{Error, ResultExt},
    load_file,
};

mod sections;


/// Knobs controlling the text of the generated functions.
#[derive(Debug, Clone)]
pub struct CppOptions {
    namespace: String,
    parse_namespace: String,
    string_type: String,
    bool_type: String,
    strip_prefix: bool,
}

impl CppOptions {
    pub fn new(
        namespace: String,
        parse_namespace: Option<String>,
        string_type: String,
        bool_type: String,
        strip_prefix: bool,
    ) -> Self {
        let parse_namespace = parse_namespace.unwrap_or_else(|| {
            if namespace.is_empty() {
                "Parse".to_owned()
            } else {
                format!("{namespace}::Parse")
            }
        });

        Self {
            namespace,
            parse_namespace,
            string_type,
            bool_type,
            strip_prefix,
        }
    }
}

impl Default for CppOptions {
    fn default() -> Self {
        Self::new(
            "Minty".to_owned(),
            None,
            "String".to_owned(),
            "Bool".to_owned(),
            false,
        )
    }
}

/// Everything a single generation run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    /// Standard output is used when this is `None`.
    pub output: Option<PathBuf>,
    pub options: CppOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub generated: usize,
    pub skipped: usize,
    pub warnings: usize,
}

/// Generates conversion functions for every enum in the input and writes them out in one go.
///
/// Groups that fail to parse are skipped after being reported; they never abort the run.
pub fn generate(config: &Config) -> Result<Summary, Error> {
    let loaded = load_file(&config.input)?;

    let mut writer = SourceWriter::new(Vec::new());
    emit_enums(&mut writer, &loaded.descriptors, &config.options).with_path(&config.input)?;
    let buffer = writer.into_inner();

    match &config.output {
        Some(path) => fs::write(path, &buffer).with_path(path)?,
        None => {
            let mut stdout = stdout().lock();
            stdout
                .write_all(&buffer)
                .and_then(|()| stdout.flush())
                .with_stdout()?;
        }
    }

    let summary = Summary {
        generated: loaded.descriptors.len(),
        skipped: loaded.skipped,
        warnings: loaded.warnings,
    };
    tracing::info!(?summary, "generation finished");

    Ok(summary)
}
