use clap::{Parser, Subcommand};
use mdpress::{config, generate, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdpress")]
#[command(about = "Convert a directory of markdown files into styled HTML pages")]
#[command(long_about = "\
Convert a directory of markdown files into styled HTML pages

Every *.md file in the source directory becomes one HTML page in the output
directory, wrapped in a styled page shell, plus a JSON manifest listing all
converted documents:

  output/
  ├── g.about.html         # one page per source file
  ├── g.notes.html
  └── g.blog-list.json     # [{filename, title}, …] in input order

Titles come from the first # heading, then a frontmatter title: key, then
the filename. The reserved source name 'append.md' emits its converted
fragment without the page shell and is excluded from the manifest.

An optional config.toml next to the markdown files controls the page shell
(site name, canonical base URL, stylesheet). Run 'mdpress gen-config' to
print a documented stock config.")]
#[command(version)]
struct Cli {
    /// Source directory of markdown files
    #[arg(long, default_value = "markdown", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "output", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert all markdown files and write the manifest
    Build,
    /// List the markdown files that would be converted, without writing
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let records = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&records);
        }
        Command::Check => {
            let files = scan::find_markdown_files(&cli.source)?;
            output::print_check_output(&files, &cli.source);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
