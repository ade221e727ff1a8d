//! Artifact template management
//!
//! Templates are customized by exporting the built-ins, editing the
//! `<artifact>.hbs` files and pointing `generator.template_dir` at the
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use console::{style, Emoji};
use panelgen::generator::TEMPLATE_EXTENSION;
use panelgen::templates::{find_builtin, BuiltinTemplate, BUILTIN_TEMPLATES};
use similar::TextDiff;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static SKIP: Emoji<'_, '_> = Emoji("- ", "");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");
static CUSTOM: Emoji<'_, '_> = Emoji("✨ ", "");
static DEFAULT: Emoji<'_, '_> = Emoji("  ", "");

/// Template management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum TemplatesCommand {
    /// List artifacts and whether a directory customizes them
    List {
        /// Override directory to check
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Write the built-in templates as `<artifact>.hbs` files
    Export {
        /// Target directory
        dir: PathBuf,
        /// Replace files that already exist
        #[arg(long)]
        force: bool,
    },
    /// Show how customized templates differ from the built-ins
    Diff {
        /// Override directory
        dir: PathBuf,
        /// Only this artifact
        template: Option<String>,
    },
}

impl TemplatesCommand {
    /// Execute the templates command
    ///
    /// # Errors
    ///
    /// Returns an error if a template file cannot be read or written
    pub fn execute(&self) -> Result<()> {
        match self {
            Self::List { dir } => {
                list_templates(dir.as_deref());
                Ok(())
            }
            Self::Export { dir, force } => {
                let written = export_templates(dir, *force)?;
                println!(
                    "\n{CHECK}Exported {} templates to {}",
                    written.len(),
                    style(dir.display()).cyan()
                );
                println!(
                    "  Set {} to use them",
                    style(format!("generator.template_dir = \"{}\"", dir.display())).yellow()
                );
                Ok(())
            }
            Self::Diff { dir, template } => diff_templates(dir, template.as_deref()),
        }
    }
}

/// Path of the override file for an artifact
#[must_use]
pub fn override_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{TEMPLATE_EXTENSION}"))
}

/// Built-in artifacts that have an override file in `dir`
#[must_use]
pub fn customized_templates(dir: &Path) -> Vec<&'static BuiltinTemplate> {
    BUILTIN_TEMPLATES
        .iter()
        .filter(|t| override_path(dir, t.name).is_file())
        .collect()
}

/// Write every built-in template into `dir`
///
/// Existing files are kept unless `force` is set. Returns the files written.
///
/// # Errors
///
/// Returns an error if the directory or a file cannot be written
pub fn export_templates(dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut written = Vec::new();
    for template in BUILTIN_TEMPLATES {
        let path = override_path(dir, template.name);
        if path.exists() && !force {
            println!("  {SKIP}{} (exists)", style(path.display()).dim());
            continue;
        }
        fs::write(&path, template.source)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        println!("  {CHECK}{}", style(path.display()).green());
        written.push(path);
    }
    Ok(written)
}

/// Unified diff of a customized template against its built-in source
///
/// Returns `None` when the two are identical.
#[must_use]
pub fn template_diff(name: &str, builtin: &str, custom: &str) -> Option<String> {
    if builtin == custom {
        return None;
    }
    let old_header = format!("builtin/{name}");
    let new_header = format!("custom/{name}");
    let diff = TextDiff::from_lines(builtin, custom);
    let unified = diff
        .unified_diff()
        .header(&old_header, &new_header)
        .to_string();
    Some(unified)
}

fn list_templates(dir: Option<&Path>) {
    println!("{FOLDER}Artifact Templates");
    if let Some(dir) = dir {
        println!("  Overrides: {}", style(dir.display()).cyan());
    }
    println!();

    let mut customized = 0;
    for template in BUILTIN_TEMPLATES {
        let is_custom = dir.is_some_and(|d| override_path(d, template.name).is_file());
        let marker = if is_custom { &CUSTOM } else { &DEFAULT };
        let name = if is_custom {
            style(template.name).yellow()
        } else {
            style(template.name).bold()
        };
        println!(
            "  {marker}{name:<20} {:<12} {}",
            style(template.scope.as_str()).dim(),
            style(template.path).dim()
        );
        if is_custom {
            customized += 1;
        }
    }

    println!();
    println!(
        "  {} customized, {} built-in",
        style(customized).yellow(),
        style(BUILTIN_TEMPLATES.len() - customized).dim()
    );
}

fn diff_templates(dir: &Path, template: Option<&str>) -> Result<()> {
    let targets = match template {
        Some(name) => {
            let Some(builtin) = find_builtin(name) else {
                bail!("Unknown template '{name}'");
            };
            if !override_path(dir, name).is_file() {
                bail!("Template '{name}' is not customized in {}", dir.display());
            }
            vec![builtin]
        }
        None => customized_templates(dir),
    };

    if targets.is_empty() {
        println!("No customized templates found in {}.", dir.display());
        return Ok(());
    }

    for builtin in targets {
        let path = override_path(dir, builtin.name);
        let custom = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        print_diff(builtin.name, builtin.source, &custom);
    }
    Ok(())
}

fn print_diff(name: &str, builtin: &str, custom: &str) {
    println!("{FILE}{}", style(name).bold());
    let Some(diff) = template_diff(name, builtin, custom) else {
        println!("  {}", style("identical to built-in").dim());
        println!();
        return;
    };

    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", style(line).bold());
        } else if line.starts_with("@@") {
            println!("{}", style(line).cyan());
        } else if line.starts_with('+') {
            println!("{}", style(line).green());
        } else if line.starts_with('-') {
            println!("{}", style(line).red());
        } else {
            println!("{line}");
        }
    }
    println!();
}
