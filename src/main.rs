//! propdoc: generate component property tables from docgen JSON.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `propdoc < docgenInfo.json` writes every component to stdout
//! - **file mode**: `propdoc -o docs/components -p _prefix.mdx docgen/*.json`
//!   writes one file per component

mod model;
mod render;
mod rows;
mod signature;
mod source;
mod table;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashSet;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "propdoc",
    about = "Generate component property tables from docgen JSON"
)]
struct Cli {
    /// Input JSON files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Prefix template file or directory containing _prefix.mdx.
    /// Supports ${name} substitution.
    #[arg(short = 'p', long)]
    prefix: Option<String>,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Disable YAML frontmatter in markdown output
    #[arg(long)]
    no_frontmatter: bool,

    /// Only document components with this name. Can be specified multiple times.
    #[arg(short = 'c', long = "component")]
    components: Vec<String>,

    /// Log progress to stderr (overridden by RUST_LOG)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// stdin mode: read docgen JSON from stdin, write all tables to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mut components = source::parse(&input)?;
    filter_components(&mut components, &cli.components);

    let renderer = render::create_renderer(&cli.format)?;
    let doc = model::Document {
        components: components.iter().map(table::build_page).collect(),
    };
    print!("{}", renderer.render(&doc));
    Ok(())
}

/// file mode: process multiple files, write one output file per component.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    // Fail on a bad format before touching the filesystem
    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();
    let frontmatter = ext == "mdx" && !cli.no_frontmatter;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let prefix_template = resolve_prefix(cli.prefix.as_deref(), output_dir)?;
    let input_files = expand_globs(&cli.files)?;

    let mut written: HashSet<String> = HashSet::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut components = match source::parse(&content) {
            Ok(components) => components,
            Err(e) => {
                warn!("skipping {}: {:#}", path.display(), e);
                continue;
            }
        };
        filter_components(&mut components, &cli.components);
        debug!(file = %path.display(), components = components.len(), "parsed");

        for component in &components {
            let page = table::build_page(component);
            let name = page
                .title
                .clone()
                .unwrap_or_else(|| file_stem(path));
            let file_name = derive_output_name(&name);

            if !written.insert(file_name.clone()) {
                warn!("{} documented more than once; overwriting {}.{}", name, file_name, ext);
            }

            let mut output = String::new();

            if frontmatter {
                output.push_str(&format!("---\ntitle: {}\n---\n\n", yaml_quote(&name)));
            }

            if let Some(ref tpl) = prefix_template {
                output.push_str(&tpl.replace("${name}", &name));
                output.push('\n');
            }

            output.push_str(&renderer.render(&model::Document {
                components: vec![page],
            }));

            let out_path = output_dir.join(format!("{}.{}", file_name, ext));
            fs::write(&out_path, &output)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
            debug!(path = %out_path.display(), "wrote");
        }
    }

    Ok(())
}

/// Resolve the prefix template from the -p flag.
///
/// A file is used as-is, a directory must contain `_prefix.mdx`. Without
/// -p, `_prefix.mdx` in the output directory is used when present.
fn resolve_prefix(prefix_arg: Option<&str>, output_dir: &Path) -> Result<Option<String>> {
    match prefix_arg {
        Some(p) => {
            let path = Path::new(p);
            if path.is_file() {
                Ok(Some(fs::read_to_string(path).with_context(|| {
                    format!("failed to read prefix file: {}", path.display())
                })?))
            } else if path.is_dir() {
                let candidate = path.join("_prefix.mdx");
                if candidate.is_file() {
                    Ok(Some(fs::read_to_string(&candidate)?))
                } else {
                    Ok(None)
                }
            } else {
                anyhow::bail!("prefix not found: {}", p);
            }
        }
        None => {
            let candidate = output_dir.join("_prefix.mdx");
            if candidate.is_file() {
                Ok(Some(fs::read_to_string(&candidate)?))
            } else {
                Ok(None)
            }
        }
    }
}

/// Expand glob patterns into a list of real file paths.
/// Bare directories are scanned (non-recursively) for `.json` files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("json") {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Keep only the named components. No names keeps everything.
fn filter_components(components: &mut Vec<model::ComponentDoc>, names: &[String]) {
    if names.is_empty() {
        return;
    }
    components.retain(|c| c.title().is_some_and(|t| names.contains(&t)));
}

/// Double-quoted YAML scalar, so titles with `:` or `#` stay one value.
fn yaml_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "component".to_string())
}

/// File name (without extension) for a component title.
/// "Button" → "Button", "Form.Field" → "Form.Field", "a/b c" → "a_b_c"
fn derive_output_name(title: &str) -> String {
    let name: String = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let name = name.trim_start_matches('.');
    if name.is_empty() {
        "component".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_plain() {
        assert_eq!(derive_output_name("Button"), "Button");
        assert_eq!(derive_output_name("Form.Field"), "Form.Field");
    }

    #[test]
    fn output_name_sanitized() {
        assert_eq!(derive_output_name("a/b c"), "a_b_c");
        assert_eq!(derive_output_name("../x"), "_x");
        assert_eq!(derive_output_name(""), "component");
    }

    #[test]
    fn filter_by_title() {
        let mut components = source::parse(
            r#"[{ "displayName": "Button" }, { "displayName": "Label" }, { "props": {} }]"#,
        )
        .unwrap();
        filter_components(&mut components, &["Label".to_string()]);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].title().as_deref(), Some("Label"));
    }

    #[test]
    fn no_filter_keeps_all() {
        let mut components = source::parse(r#"[{ "displayName": "Button" }, { "props": {} }]"#).unwrap();
        filter_components(&mut components, &[]);
        assert_eq!(components.len(), 2);
    }

    #[test]
    fn yaml_title_quoted() {
        assert_eq!(yaml_quote("Button"), "\"Button\"");
        assert_eq!(yaml_quote("Form: Field #1"), "\"Form: Field #1\"");
        assert_eq!(yaml_quote("say \"hi\"\\"), "\"say \\\"hi\\\"\\\\\"");
    }

    #[test]
    fn stem_of_path() {
        assert_eq!(file_stem(Path::new("docs/Button.json")), "Button");
    }
}
