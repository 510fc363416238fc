use clap::Parser;

use crate::resolver::DEFAULT_DEP5_PATH;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository root that candidate paths are relative to
    pub root: String,

    /// Files to resolve (read one per line from stdin when omitted)
    pub files: Vec<String>,

    /// Output file path
    #[arg(short, long, default_value = "reuse.json")]
    pub output_file: String,

    /// Stop scanning each file for tags after this many lines
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// DEP5 manifest location, relative to the root
    #[arg(long, default_value = DEFAULT_DEP5_PATH)]
    pub dep5_path: String,

    /// Exclude patterns (glob patterns like "*.tmp" or "vendor/*")
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["reusescan", "."]);

        assert_eq!(cli.root, ".");
        assert!(cli.files.is_empty());
        assert_eq!(cli.output_file, "reuse.json");
        assert_eq!(cli.max_lines, None);
        assert_eq!(cli.dep5_path, ".reuse/dep5");
    }

    #[test]
    fn test_files_and_options() {
        let cli = Cli::parse_from([
            "reusescan",
            "repo",
            "src/a.c",
            "README.md",
            "-o",
            "out.json",
            "--max-lines",
            "40",
            "-e",
            "*.lock,vendor/*",
        ]);

        assert_eq!(cli.files, vec!["src/a.c", "README.md"]);
        assert_eq!(cli.output_file, "out.json");
        assert_eq!(cli.max_lines, Some(40));
        assert_eq!(cli.exclude, vec!["*.lock", "vendor/*"]);
    }
}
