//! The static language table.
//!
//! Entries are matched by [`super::lookup`]; order only matters for the order
//! of candidates reported in an ambiguity error.

use super::{LanguageDefinition, MultiLineMarker};

const C_BLOCK: Option<MultiLineMarker> = Some(MultiLineMarker {
    start: "/*",
    end: "*/",
});

const XML_BLOCK: Option<MultiLineMarker> = Some(MultiLineMarker {
    start: "<!--",
    end: "-->",
});

const fn hash_style(
    name: &'static str,
    extensions: &'static [&'static str],
    filenames: &'static [&'static str],
) -> LanguageDefinition {
    LanguageDefinition {
        name,
        extensions,
        filenames,
        single_line: Some("#"),
        multi_line: None,
        single_quote: true,
        double_quote: true,
        backtick: false,
    }
}

const fn c_style(
    name: &'static str,
    extensions: &'static [&'static str],
    single_quote: bool,
    backtick: bool,
) -> LanguageDefinition {
    LanguageDefinition {
        name,
        extensions,
        filenames: &[],
        single_line: Some("//"),
        multi_line: C_BLOCK,
        single_quote,
        double_quote: true,
        backtick,
    }
}

const fn markup(name: &'static str, extensions: &'static [&'static str]) -> LanguageDefinition {
    LanguageDefinition {
        name,
        extensions,
        filenames: &[],
        single_line: None,
        multi_line: XML_BLOCK,
        single_quote: false,
        double_quote: false,
        backtick: false,
    }
}

pub static LANGUAGES: &[LanguageDefinition] = &[
    c_style("C", &["c", "h"], true, false),
    c_style("C++", &["cpp", "cc", "cxx", "hpp", "hh", "hxx", "ino"], true, false),
    c_style("C#", &["cs"], true, false),
    c_style("Java", &["java"], true, false),
    c_style("JavaScript", &["js", "mjs", "cjs", "jsx"], true, true),
    c_style("TypeScript", &["ts", "mts", "cts", "tsx"], true, true),
    c_style("Go", &["go"], true, true),
    c_style("Kotlin", &["kt", "kts"], true, false),
    c_style("Scala", &["scala", "sc"], true, false),
    c_style("Swift", &["swift"], false, false),
    c_style("Dart", &["dart"], true, false),
    c_style("Groovy", &["groovy", "gradle"], true, false),
    c_style("PHP", &["php"], true, false),
    c_style("Objective-C", &["m", "mm"], true, false),
    // Lifetimes make `'` useless as a string delimiter in Rust.
    c_style("Rust", &["rs"], false, false),
    c_style("Zig", &["zig"], true, false),
    c_style("Protocol Buffers", &["proto"], true, false),
    LanguageDefinition {
        name: "CSS",
        extensions: &["css"],
        filenames: &[],
        single_line: None,
        multi_line: C_BLOCK,
        single_quote: true,
        double_quote: true,
        backtick: false,
    },
    c_style("SCSS", &["scss", "less"], true, false),
    hash_style("Python", &["py", "pyi", "pyx"], &["SConstruct", "SConscript"]),
    hash_style("Shell", &["sh", "bash", "zsh", "ksh", "fish"], &[".bashrc", ".profile"]),
    hash_style("Ruby", &["rb", "rake", "gemspec"], &["Gemfile", "Rakefile"]),
    hash_style("Perl", &["pl", "pm", "t"], &[]),
    hash_style("R", &["r"], &[]),
    hash_style("Elixir", &["ex", "exs"], &[]),
    hash_style("Nim", &["nim"], &[]),
    hash_style("PowerShell", &["ps1", "psm1"], &[]),
    LanguageDefinition {
        name: "Nix",
        extensions: &["nix"],
        filenames: &[],
        single_line: Some("#"),
        multi_line: C_BLOCK,
        single_quote: false,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        // `#` is checked before `#=`, so block comments read as line comments.
        name: "Julia",
        extensions: &["jl"],
        filenames: &[],
        single_line: Some("#"),
        multi_line: Some(MultiLineMarker {
            start: "#=",
            end: "=#",
        }),
        single_quote: false,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        name: "YAML",
        extensions: &["yml", "yaml"],
        filenames: &[".clang-format", ".clang-tidy"],
        single_line: Some("#"),
        multi_line: None,
        single_quote: false,
        double_quote: false,
        backtick: false,
    },
    LanguageDefinition {
        name: "TOML",
        extensions: &["toml"],
        filenames: &["Cargo.lock", "Pipfile"],
        single_line: Some("#"),
        multi_line: None,
        single_quote: true,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        name: "Config",
        extensions: &["cfg", "conf", "properties"],
        filenames: &[
            ".gitignore",
            ".gitattributes",
            ".gitmodules",
            ".dockerignore",
            ".editorconfig",
            "requirements.txt",
        ],
        single_line: Some("#"),
        multi_line: None,
        single_quote: false,
        double_quote: false,
        backtick: false,
    },
    LanguageDefinition {
        name: "INI",
        extensions: &["ini"],
        filenames: &[],
        single_line: Some(";"),
        multi_line: None,
        single_quote: false,
        double_quote: false,
        backtick: false,
    },
    LanguageDefinition {
        name: "Makefile",
        extensions: &["mk", "mak"],
        filenames: &["Makefile", "GNUmakefile", "makefile"],
        single_line: Some("#"),
        multi_line: None,
        single_quote: false,
        double_quote: false,
        backtick: false,
    },
    LanguageDefinition {
        name: "Dockerfile",
        extensions: &["dockerfile"],
        filenames: &["Dockerfile", "Containerfile"],
        single_line: Some("#"),
        multi_line: None,
        single_quote: false,
        double_quote: false,
        backtick: false,
    },
    LanguageDefinition {
        name: "CMake",
        extensions: &["cmake"],
        filenames: &["CMakeLists.txt"],
        single_line: Some("#"),
        multi_line: None,
        single_quote: false,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        name: "Prolog",
        extensions: &["pl", "pro"],
        filenames: &[],
        single_line: Some("%"),
        multi_line: C_BLOCK,
        single_quote: true,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        name: "MATLAB",
        extensions: &["m"],
        filenames: &[],
        single_line: Some("%"),
        multi_line: Some(MultiLineMarker {
            start: "%{",
            end: "%}",
        }),
        single_quote: false,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        name: "TeX",
        extensions: &["tex", "sty", "cls", "bib"],
        filenames: &[],
        single_line: Some("%"),
        multi_line: None,
        single_quote: false,
        double_quote: false,
        backtick: false,
    },
    LanguageDefinition {
        name: "Erlang",
        extensions: &["erl", "hrl"],
        filenames: &["rebar.config"],
        single_line: Some("%"),
        multi_line: None,
        single_quote: true,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        // `--` is checked before `--[[`, so block openers read as line comments.
        name: "Lua",
        extensions: &["lua"],
        filenames: &[],
        single_line: Some("--"),
        multi_line: Some(MultiLineMarker {
            start: "--[[",
            end: "]]",
        }),
        single_quote: true,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        name: "SQL",
        extensions: &["sql"],
        filenames: &[],
        single_line: Some("--"),
        multi_line: C_BLOCK,
        single_quote: true,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        name: "Haskell",
        extensions: &["hs", "lhs"],
        filenames: &[],
        single_line: Some("--"),
        multi_line: Some(MultiLineMarker {
            start: "{-",
            end: "-}",
        }),
        single_quote: false,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        name: "Lisp",
        extensions: &["lisp", "el", "scm", "clj", "cljs", "edn"],
        filenames: &[],
        single_line: Some(";"),
        multi_line: None,
        single_quote: false,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        name: "Fortran",
        extensions: &["f90", "f95", "f03", "f08"],
        filenames: &[],
        single_line: Some("!"),
        multi_line: None,
        single_quote: true,
        double_quote: true,
        backtick: false,
    },
    LanguageDefinition {
        name: "VHDL",
        extensions: &["vhd", "vhdl"],
        filenames: &[],
        single_line: Some("--"),
        multi_line: None,
        single_quote: false,
        double_quote: true,
        backtick: false,
    },
    markup("HTML", &["html", "htm", "xhtml", "vue", "svelte"]),
    markup("XML", &["xml", "xsd", "xsl", "xslt", "svg", "plist", "csproj", "pom"]),
    markup("Markdown", &["md", "markdown"]),
];
