use anyhow::{Result, bail};
use clap::Parser;
use routelens::config::Config;
use routelens::model::LineResolution;
use routelens::resolver::method::LocateMode;
use routelens::{cli, resolver, util};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    match args.command {
        cli::Command::Scan {
            project,
            routes_dir,
            controllers_dir,
        } => {
            let config = Config::get();
            let routes_root =
                resolve_root(&project, routes_dir.as_deref(), &config.routes_dir, "routes")?;
            let controllers_root = resolve_root(
                &project,
                controllers_dir.as_deref(),
                &config.controllers_dir,
                "controllers",
            )?;
            let records = resolver::resolve_all(&routes_root, &controllers_root)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        cli::Command::Goto {
            project,
            file,
            line,
            text,
            controllers_dir,
            declaration,
        } => {
            let config = Config::get();
            let controllers_root = resolve_root(
                &project,
                controllers_dir.as_deref(),
                &config.controllers_dir,
                "controllers",
            )?;

            let line_text = match (file, text) {
                (Some(file), _) => {
                    let path = if file.is_absolute() {
                        file
                    } else {
                        project.join(file)
                    };
                    if !util::is_route_file(&path) {
                        bail!("not a route file: {}", path.display());
                    }
                    let number = match line {
                        Some(value) => value,
                        None => bail!("--line is required with --file"),
                    };
                    let content = util::read_to_string(&path)?;
                    match util::line_at(&content, number) {
                        Some(value) => value.to_string(),
                        None => bail!("line {number} is out of range for {}", path.display()),
                    }
                }
                (None, Some(text)) => text,
                (None, None) => bail!("either --file or --text is required"),
            };

            let mode = if declaration {
                LocateMode::Declaration
            } else {
                LocateMode::Definition
            };
            match resolver::resolve_at_line_with_mode(&line_text, &controllers_root, mode)? {
                LineResolution::Target(target) => {
                    println!("{}", serde_json::to_string_pretty(&target)?);
                    Ok(())
                }
                LineResolution::NoMatch => bail!("no route definition found on this line"),
                LineResolution::ControllerNotFound { controller_name } => {
                    bail!("controller {controller_name} not found")
                }
                LineResolution::MethodNotFound {
                    controller_name,
                    method_name,
                    controller_file_path,
                } => bail!(
                    "method {method_name} not found in controller {controller_name} ({})",
                    controller_file_path.display()
                ),
            }
        }
    }
}

fn resolve_root(
    project: &Path,
    flag: Option<&Path>,
    conventional: &str,
    label: &str,
) -> Result<PathBuf> {
    let dir = flag
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(conventional));
    let root = if dir.is_absolute() {
        dir
    } else {
        project.join(dir)
    };
    if !root.is_dir() {
        bail!("{label} directory not found: {}", root.display());
    }
    Ok(root)
}
