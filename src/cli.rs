//! Minimal CLI: read JSON sample(s) → emit class/model declarations.
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;

use crate::profile::{Profile, CSHARP, PYDANTIC};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate class/model declarations from sample JSON documents
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit C# classes with public auto-properties
    #[command(name = "csharp")]
    CSharp(EmitTarget),
    /// emit Python Pydantic models
    Pydantic(EmitTarget),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct EmitTarget {
    #[command(flatten)]
    input_settings: InputSettings,

    /// top-level class/model name
    #[arg(long, default_value = "Root")]
    root_name: String,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap()
});

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::CSharp(target) => target.emit(&CSHARP, self),
            Command::Pydantic(target) => target.emit(&PYDANTIC, self),
        }
    }
}

impl EmitTarget {
    fn emit(&self, profile: &Profile, parent: &CommandLineInterface) -> Result<()> {
        // debug path
        if self.no_op {
            eprintln!("{parent:#?}");
            return Ok(());
        }

        if !IDENTIFIER.is_match(&self.root_name) {
            bail!("root name is not a valid identifier: {:?}", self.root_name);
        }

        let source_paths = resolve_file_path_patterns(&self.input_settings.input)?;

        // one conversion per input file; conversion itself cannot fail, so
        // only I/O errors surface here
        let rendered = source_paths
            .par_iter()
            .map(|source_path| -> Result<String> {
                let source = std::fs::read_to_string(source_path)
                    .with_context(|| format!("failed to read {}", source_path.display()))?;
                Ok(crate::convert::convert_str(&source, profile, &self.root_name))
            })
            .collect::<Result<Vec<String>>>()?;
        let output = rendered.join("\n\n");

        if let Some(out) = self.out.as_ref() {
            if let Some(parent_dir) = out.parent() {
                std::fs::create_dir_all(parent_dir)
                    .with_context(|| format!("failed to create {}", parent_dir.display()))?;
            }
            std::fs::write(out, &output)
                .with_context(|| format!("failed to write {}", out.display()))?;
            eprintln!("{} {}", "wrote".green().bold(), out.display());
        } else {
            println!("{output}");
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern).context("invalid glob pattern")? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            // Treat as a literal path
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_paths_pass_through() {
        let paths = resolve_file_path_patterns(["a.json", "dir/b.json"]).unwrap();
        assert_eq!(paths, vec![PathBuf::from("a.json"), PathBuf::from("dir/b.json")]);
    }

    #[test]
    fn unmatched_glob_is_an_error() {
        let err = resolve_file_path_patterns(["/nonexistent-xyz/*.json"]).unwrap_err();
        assert!(err.to_string().contains("matched no files"));
    }

    #[test]
    fn identifier_regex_rejects_bad_root_names() {
        assert!(IDENTIFIER.is_match("Root"));
        assert!(IDENTIFIER.is_match("_payload2"));
        assert!(!IDENTIFIER.is_match("2fast"));
        assert!(!IDENTIFIER.is_match("has space"));
        assert!(!IDENTIFIER.is_match(""));
    }
}
