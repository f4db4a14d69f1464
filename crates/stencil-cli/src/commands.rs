use crate::cli::{Commands, Stencil};
use std::io::{self, Write};
use std::path::Path;

use stencil_core::config::ensure_snippets_dir;
use stencil_core::{discover, Renderer, Result, Snippet, StencilError};

pub fn handle_command(args: Stencil) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => ensure_snippets_dir()?,
    };

    match args.command {
        Some(Commands::List { json }) => list_snippets(&root, "", json),
        Some(Commands::Search { query, json }) => list_snippets(&root, &query, json),
        Some(Commands::Vars { file }) => show_variables(&file),
        Some(Commands::Render {
            file,
            set,
            interactive,
        }) => render_snippet(&file, &set, interactive),
        None => list_snippets(&root, "", false), // Default: list everything
    }
}

fn list_snippets(root: &Path, query: &str, json: bool) -> Result<()> {
    let snippets = discover(root, query);

    if json {
        let summaries: Vec<_> = snippets.iter().map(Snippet::summary).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if snippets.is_empty() {
        println!("No snippets found under {}", root.display());
        return Ok(());
    }

    for snippet in snippets {
        println!("{:<30} {}", snippet.name, snippet.description);
    }

    Ok(())
}

fn show_variables(file: &Path) -> Result<()> {
    let snippet = load_snippet(file)?;

    if snippet.variables.is_empty() {
        println!("{} declares no variables", snippet.name);
        return Ok(());
    }

    for var in snippet.variables.iter() {
        match &var.default {
            Some(default) => println!("{:<20} {} (default: {})", var.name, var.label, default),
            None => println!("{:<20} {}", var.name, var.label),
        }
    }

    Ok(())
}

fn render_snippet(file: &Path, assignments: &[String], interactive: bool) -> Result<()> {
    let mut snippet = load_snippet(file)?;

    for assignment in assignments {
        let (name, value) = parse_assignment(assignment)?;
        snippet.set_value(name, value)?;
    }

    if interactive {
        prompt_for_variables(&mut snippet)?;
    }

    let output = Renderer::new().render(&snippet)?;
    println!("{}", output);

    Ok(())
}

fn load_snippet(file: &Path) -> Result<Snippet> {
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string_lossy().into_owned());

    Snippet::load(&name, file)
}

fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    assignment
        .split_once('=')
        .map(|(name, value)| (name.trim(), value))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| {
            StencilError::Other(format!(
                "invalid assignment '{}', expected NAME=VALUE",
                assignment
            ))
        })
}

/// Ask for each still-unresolved variable on stdin, in declaration order.
/// Blank input falls back to the declared default when there is one.
fn prompt_for_variables(snippet: &mut Snippet) -> Result<()> {
    let pending: Vec<(String, String, Option<String>)> = snippet
        .variables
        .iter()
        .filter(|var| !var.is_resolved())
        .map(|var| (var.name.clone(), var.label.clone(), var.default.clone()))
        .collect();

    let stdin = io::stdin();
    for (name, label, default) in pending {
        match &default {
            Some(default) => print!("{} [{}]: ", label, default),
            None => print!("{}: ", label),
        }
        io::stdout().flush()?;

        let mut input = String::new();
        stdin.read_line(&mut input)?;
        let input = input.trim();

        if !input.is_empty() {
            snippet.set_value(&name, input)?;
        } else if let Some(default) = default {
            snippet.set_value(&name, default)?;
        }
    }

    Ok(())
}
