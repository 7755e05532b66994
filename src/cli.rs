use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atmention")]
#[command(author, version)]
#[command(about = "A mention rewriter for HTML documents")]
#[command(
    long_about = "Atmention finds mentions in HTML, either written as @[label](id) or \
    rendered by a Markdown converter as an @ followed by a link, and rewrites each one \
    into <span data-type=\"mention\" data-id=\"id\">@label</span>."
)]
#[command(after_help = "\
EXAMPLES:

    # Transform a file to stdout
    atmention transform comment.html

    # Transform from stdin
    cat comment.html | atmention transform

    # Check whether a file still contains unconverted mentions
    atmention transform --check comment.html

    # Transform in place
    atmention transform --write comment.html

    # List the mentions in a file
    atmention mentions comment.html

    # Inspect the parsed tree as JSON
    atmention parse --json comment.html

CONFIGURATION:

Atmention looks for configuration files in this order:
  1. Explicit --config path
  2. atmention.toml or .atmention.toml in current/parent directories
  3. ~/.config/atmention/config.toml (XDG)
  4. Built-in defaults

Example .atmention.toml:

    bracket_mentions = true
    link_mentions = true
    prune_empty_text = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, atmention will \
        search for .atmention.toml or atmention.toml in the current directory and its parents, \
        then fall back to ~/.config/atmention/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite the mentions in an HTML document
    #[command(
        long_about = "Rewrite the mentions in an HTML document into mention spans. By default, \
        outputs the transformed document to stdout. Use --write to transform in place or \
        --check to verify that there is nothing left to rewrite."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Transform to stdout
    atmention transform comment.html

    # Transform from stdin
    echo '<p>@[Ann](u1)</p>' | atmention transform

    # Check (exit code 1 if the document would change)
    atmention transform --check comment.html

    # Transform in place
    atmention transform --write comment.html

REWRITE RULES:

  - @[label](id) inside text becomes a mention span with data-id=\"id\"
  - an @ directly followed by <a href=\"id\">label</a> becomes the same span
  - everything else is left untouched
  - transforming twice = transforming once")]
    Transform {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        #[arg(
            long_help = "Path to the input HTML file. If not provided, reads from stdin. \
            The input is treated as the body of an HTML document."
        )]
        file: Option<PathBuf>,

        /// Check if the document has no mentions left to rewrite
        #[arg(long, conflicts_with = "write")]
        #[arg(help = "Check if file is already transformed (exit code 1 if not)")]
        #[arg(
            long_help = "Check whether the document already has all of its mentions rewritten, \
            without making any changes. If the transform would change the document, displays a \
            diff and exits with code 1. Useful for CI/CD pipelines."
        )]
        check: bool,

        /// Transform files in place
        #[arg(long)]
        #[arg(help = "Transform the file in place")]
        #[arg(
            long_help = "Write the transformed output back to the input file, modifying it in \
            place. Cannot be used with stdin input."
        )]
        write: bool,
    },
    /// List the mentions found in an HTML document
    #[command(
        long_about = "Transform a document and print one line per mention, in document order, \
        as the id and the label separated by a tab."
    )]
    Mentions {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Parse and display the document tree for debugging
    #[command(
        long_about = "Parse a document and display the tree the transform operates on, \
        without transforming it."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file and show the tree
    atmention parse comment.html

    # Print hast-style JSON instead
    atmention parse --json comment.html")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Print the tree as JSON
        #[arg(long)]
        #[arg(help = "Print the tree as hast-style JSON")]
        json: bool,
    },
}
