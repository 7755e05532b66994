use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use similar::{ChangeTag, TextDiff};

use atmention::{Config, extract_mentions, parse_html, to_html, transform_html};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = atmention::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(cfg)
}

fn print_diff(file_path: &str, original: &str, transformed: &str) {
    let diff = TextDiff::from_lines(original, transformed);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("---");
        }

        // Print header similar to rustfmt
        println!("Diff in {}:{}:", file_path, group[0].old_range().start + 1);

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", "\x1b[31m"), // red
                    ChangeTag::Insert => ("+", "\x1b[32m"), // green
                    ChangeTag::Equal => (" ", "\x1b[0m"),   // normal
                };

                print!("{}{}{}", style, sign, change.value());

                // Reset color at end of line if it was colored
                if change.tag() != ChangeTag::Equal {
                    print!("\x1b[0m");
                }
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transform { file, check, write } => {
            if write && file.is_none() {
                eprintln!("Error: --write requires an input file");
                std::process::exit(2);
            }

            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let output = transform_html(&input, Some(cfg))?;

            if check {
                // Serializer normalization alone is not a pending rewrite.
                let normalized = to_html(&parse_html(&input))?;
                if normalized != output {
                    let file_name = file.as_ref().and_then(|p| p.to_str()).unwrap_or("<stdin>");
                    print_diff(file_name, &normalized, &output);
                    std::process::exit(1);
                }
                if file.is_some() {
                    println!("File has no mentions left to rewrite");
                }
            } else if let (true, Some(file_path)) = (write, &file) {
                fs::write(file_path, &output)?;
                println!("Transformed {}", file_path.display());
            } else {
                print!("{output}");
            }

            Ok(())
        }
        Commands::Mentions { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;

            for mention in extract_mentions(&input, Some(cfg)) {
                println!("{}\t{}", mention.id, mention.label);
            }

            Ok(())
        }
        Commands::Parse { file, json } => {
            let input = read_all(file.as_ref())?;
            let tree = parse_html(&input);

            if json {
                let out = serde_json::to_string_pretty(&tree).map_err(io::Error::other)?;
                println!("{out}");
            } else {
                println!("{:#?}", tree);
            }

            Ok(())
        }
    }
}
