use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "routelens",
    version,
    about = "Laravel route navigator v1",
    after_help = r#"Examples:
  routelens scan --project .
  routelens scan --project /srv/shop --controllers-dir app/Http/Controllers
  routelens goto --project . --file routes/web.php --line 12
  routelens goto --text "Route::get('/users', 'UserController@index')"
  routelens goto --text "Route::get('/users', 'UserController@index')" --declaration
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve every route declaration in the project and print the records as JSON.
    Scan {
        #[arg(long, default_value = ".")]
        project: PathBuf,
        /// Route-declaration directory, relative to the project root.
        #[arg(long)]
        routes_dir: Option<PathBuf>,
        /// Controller directory, relative to the project root.
        #[arg(long)]
        controllers_dir: Option<PathBuf>,
    },
    /// Resolve the declaration on one line and print its navigation target.
    Goto {
        #[arg(long, default_value = ".")]
        project: PathBuf,
        /// Route file to take the line from.
        #[arg(long, requires = "line", conflicts_with = "text")]
        file: Option<PathBuf>,
        /// 1-based line number within --file.
        #[arg(long)]
        line: Option<usize>,
        /// Declaration text to resolve directly, bypassing the route-file check.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Controller directory, relative to the project root.
        #[arg(long)]
        controllers_dir: Option<PathBuf>,
        /// Match the method declaration without requiring an opening brace.
        #[arg(long)]
        declaration: bool,
    },
}
