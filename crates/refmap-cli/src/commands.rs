use std::io::{self, Write};

use anyhow::{bail, Context};
use colored::Colorize;
use refmap_refspec::{RefSpec, RefSpecDirection};
use refmap_remote::{FileRemotes, RefSpecs, RemoteBackend};
use serde::Serialize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let backend = FileRemotes::open(&cli.config);
    tracing::debug!(config = %cli.config.display(), "using remotes file");
    let stdout = io::stdout();
    execute(&backend, cli.command, cli.format, &mut stdout.lock())
}

/// Run `command` against `backend`, writing results to `out`.
pub fn execute<B: RemoteBackend>(
    backend: &B,
    command: Command,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Remote(args) => match args.action {
            None | Some(RemoteAction::List) => cmd_remote_list(backend, format, out),
            Some(RemoteAction::Add { name, url }) => cmd_remote_add(backend, &name, &url, format, out),
            Some(RemoteAction::Remove { name }) => cmd_remote_remove(backend, &name, out),
        },
        Command::Refspec(args) => match args.action {
            RefspecAction::List { remote } => cmd_refspec_list(backend, &remote, format, out),
            RefspecAction::Add { remote, spec, push } => {
                cmd_refspec_add(backend, &remote, &spec, direction(push), format, out)
            }
            RefspecAction::Remove { remote, index } => {
                cmd_refspec_remove(backend, &remote, index, format, out)
            }
            RefspecAction::Clear { remote } => cmd_refspec_clear(backend, &remote, out),
            RefspecAction::Map { remote, reference, push } => {
                cmd_refspec_map(backend, &remote, &reference, direction(push), format, out)
            }
        },
    }
}

fn direction(push: bool) -> RefSpecDirection {
    if push {
        RefSpecDirection::Push
    } else {
        RefSpecDirection::Fetch
    }
}

/// One refspec as printed by `--format json`.
#[derive(Serialize)]
struct RefSpecRow<'a> {
    index: usize,
    direction: RefSpecDirection,
    spec: &'a str,
    source: &'a str,
    destination: &'a str,
    force: bool,
}

impl<'a> RefSpecRow<'a> {
    fn new(index: usize, rs: &'a RefSpec) -> Self {
        Self {
            index,
            direction: rs.direction(),
            spec: rs.specification(),
            source: rs.source(),
            destination: rs.destination(),
            force: rs.force_update(),
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_row(out: &mut impl Write, index: usize, rs: &RefSpec) -> io::Result<()> {
    let dir = match rs.direction() {
        RefSpecDirection::Fetch => "fetch".cyan(),
        RefSpecDirection::Push => "push ".magenta(),
    };
    writeln!(out, "{:>3}  {}  {}", index.to_string().dimmed(), dir, rs.specification().yellow())
}

fn cmd_remote_list<B: RemoteBackend>(
    backend: &B,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let names = backend.remote_names()?;
    if format == OutputFormat::Json {
        return write_json(out, &names);
    }
    if names.is_empty() {
        writeln!(out, "No remotes configured.")?;
    }
    for name in names {
        writeln!(out, "{}", name.bold())?;
    }
    Ok(())
}

fn cmd_remote_add<B: RemoteBackend>(
    backend: &B,
    name: &str,
    url: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let remote = backend
        .add_remote(name, url)
        .with_context(|| format!("failed to add remote {name}"))?;
    let fetch = remote.fetch_refspecs()?;
    if format == OutputFormat::Json {
        let rows: Vec<RefSpecRow<'_>> =
            fetch.iter().enumerate().map(|(i, rs)| RefSpecRow::new(i, rs)).collect();
        return write_json(out, &rows);
    }
    writeln!(out, "{} Added remote {} → {}", "✓".green().bold(), name.bold(), url.blue())?;
    for (i, rs) in fetch.iter().enumerate() {
        write_row(out, i, rs)?;
    }
    Ok(())
}

fn cmd_remote_remove<B: RemoteBackend>(
    backend: &B,
    name: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if !backend.delete_remote(name)? {
        bail!("no such remote: {name}");
    }
    writeln!(out, "Removed remote {}", name.bold())?;
    Ok(())
}

fn cmd_refspec_list<B: RemoteBackend>(
    backend: &B,
    remote: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let specs = backend.remote(remote)?.refspecs();
    let all = specs.to_vec()?;
    if format == OutputFormat::Json {
        let rows: Vec<RefSpecRow<'_>> =
            all.iter().enumerate().map(|(i, rs)| RefSpecRow::new(i, rs)).collect();
        return write_json(out, &rows);
    }
    if all.is_empty() {
        writeln!(out, "No refspecs for {}.", remote.bold())?;
    }
    for (i, rs) in all.iter().enumerate() {
        write_row(out, i, rs)?;
    }
    Ok(())
}

fn cmd_refspec_add<B: RemoteBackend>(
    backend: &B,
    remote: &str,
    spec: &str,
    direction: RefSpecDirection,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let (index, added) = backend.remote(remote)?.refspecs().append(spec, direction)?;
    if format == OutputFormat::Json {
        return write_json(out, &RefSpecRow::new(index, &added));
    }
    writeln!(out, "{} Added {} refspec to {}", "✓".green().bold(), direction, remote.bold())?;
    write_row(out, index, &added)?;
    Ok(())
}

fn cmd_refspec_remove<B: RemoteBackend>(
    backend: &B,
    remote: &str,
    index: usize,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let removed = backend.remote(remote)?.refspecs().remove(index)?;
    if format == OutputFormat::Json {
        return write_json(out, &RefSpecRow::new(index, &removed));
    }
    writeln!(out, "Removed refspec {} from {}", removed.specification().yellow(), remote.bold())?;
    Ok(())
}

fn cmd_refspec_clear<B: RemoteBackend>(
    backend: &B,
    remote: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    backend.remote(remote)?.refspecs().clear()?;
    writeln!(out, "Cleared refspecs of {}", remote.bold())?;
    Ok(())
}

fn cmd_refspec_map<B: RemoteBackend>(
    backend: &B,
    remote: &str,
    reference: &str,
    direction: RefSpecDirection,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mapped = backend.remote(remote)?.refspecs().map_ref(direction, reference)?;
    if format == OutputFormat::Json {
        return write_json(out, &mapped);
    }
    match mapped {
        Some(target) => writeln!(out, "{} → {}", reference, target.green())?,
        None => writeln!(out, "No {direction} refspec of {} matches {reference}", remote.bold())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use refmap_remote::{FileRemotes, InMemoryRemotes};

    fn run<B: RemoteBackend>(backend: &B, args: &[&str]) -> anyhow::Result<String> {
        let mut argv = vec!["refmap"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        execute(backend, cli.command, cli.format, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn add_remote_then_list_refspecs_as_json() {
        let backend = InMemoryRemotes::new();
        run(&backend, &["remote", "add", "origin", "https://example.com"]).unwrap();
        run(&backend, &["refspec", "add", "origin", "+refs/my/*:refs/theirs/*", "--push"]).unwrap();

        let json = run(&backend, &["--format", "json", "refspec", "list", "origin"]).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 2);
        assert_eq!(rows[1]["direction"], "push");
        assert_eq!(rows[1]["spec"], "+refs/my/*:refs/theirs/*");
        assert_eq!(rows[1]["force"], true);
    }

    #[test]
    fn add_reports_stored_index() {
        let backend = InMemoryRemotes::new();
        run(&backend, &["remote", "add", "origin", "x"]).unwrap();
        run(&backend, &["refspec", "add", "origin", "refs/a:refs/b"]).unwrap();

        let json = run(&backend, &["--format", "json", "refspec", "add", "origin", "refs/c:refs/d", "--push"]).unwrap();
        let row: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(row["index"], 2);
        assert_eq!(row["spec"], "refs/c:refs/d");
    }

    #[test]
    fn remove_and_clear() {
        let backend = InMemoryRemotes::new();
        run(&backend, &["remote", "add", "origin", "x"]).unwrap();
        run(&backend, &["refspec", "add", "origin", "refs/a:refs/b"]).unwrap();

        let text = run(&backend, &["refspec", "remove", "origin", "0"]).unwrap();
        assert!(text.contains("refs/heads/*"), "got: {text}");
        assert!(run(&backend, &["refspec", "remove", "origin", "1"]).is_err());

        run(&backend, &["refspec", "clear", "origin"]).unwrap();
        let text = run(&backend, &["refspec", "list", "origin"]).unwrap();
        assert!(text.contains("No refspecs"), "got: {text}");
    }

    #[test]
    fn map_reference_through_default_fetch() {
        let backend = InMemoryRemotes::new();
        run(&backend, &["remote", "add", "origin", "x"]).unwrap();

        let json = run(&backend, &["--format", "json", "refspec", "map", "origin", "refs/heads/main"]).unwrap();
        assert_eq!(json.trim(), "\"refs/remotes/origin/main\"");

        let json = run(&backend, &["--format", "json", "refspec", "map", "origin", "refs/heads/main", "--push"]).unwrap();
        assert_eq!(json.trim(), "null");
    }

    #[test]
    fn invalid_refspec_is_reported() {
        let backend = InMemoryRemotes::new();
        run(&backend, &["remote", "add", "origin", "x"]).unwrap();
        let err = run(&backend, &["refspec", "add", "origin", "not-a-refspec"]).unwrap_err();
        assert!(err.to_string().contains("not-a-refspec"), "got: {err}");
    }

    #[test]
    fn remote_lifecycle() {
        let backend = InMemoryRemotes::new();
        let text = run(&backend, &["remote"]).unwrap();
        assert!(text.contains("No remotes"));

        run(&backend, &["remote", "add", "origin", "x"]).unwrap();
        let json = run(&backend, &["--format", "json", "remote", "list"]).unwrap();
        assert_eq!(serde_json::from_str::<Vec<String>>(&json).unwrap(), vec!["origin"]);

        run(&backend, &["remote", "remove", "origin"]).unwrap();
        assert!(run(&backend, &["remote", "remove", "origin"]).is_err());
    }

    #[test]
    fn file_backend_persists_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".refmap").join("remotes.toml");

        run(&FileRemotes::open(&path), &["remote", "add", "origin", "x"]).unwrap();
        run(&FileRemotes::open(&path), &["refspec", "add", "origin", "refs/tags/*:refs/tags/*"]).unwrap();

        let json = run(&FileRemotes::open(&path), &["--format", "json", "refspec", "list", "origin"]).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(rows[1]["source"], "refs/tags/*");
        assert_eq!(rows[1]["direction"], "fetch");
    }
}
