/// File extension and comment prefix for a language slug, used when writing
/// a snippet and its commented description to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub extension: &'static str,
    pub comment: &'static str,
}

/// Fallback for slugs the table does not know; writing proceeds with a plain
/// text file rather than failing.
pub const DEFAULT_LANGUAGE: LanguageInfo = LanguageInfo {
    extension: "txt",
    comment: "#",
};

/// Slugs the site currently hands out snippets for; `ALL` on the command
/// line expands to this list.
pub const KNOWN_SLUGS: &[&str] = &[
    "bash",
    "c",
    "cpp",
    "csharp",
    "elixir",
    "erlang",
    "golang",
    "java",
    "javascript",
    "kotlin",
    "mssql",
    "mysql",
    "oraclesql",
    "php",
    "python",
    "python3",
    "racket",
    "ruby",
    "rust",
    "scala",
    "swift",
    "typescript",
];

const fn info(extension: &'static str, comment: &'static str) -> LanguageInfo {
    LanguageInfo { extension, comment }
}

pub fn lookup(slug: &str) -> LanguageInfo {
    match slug {
        "bash" => info("sh", "#"),
        "c" => info("c", "//"),
        "cpp" => info("cpp", "//"),
        "csharp" => info("cs", "//"),
        "elixir" => info("ex", "#"),
        "erlang" => info("erl", "%"),
        "golang" => info("go", "//"),
        "java" => info("java", "//"),
        "javascript" => info("js", "//"),
        "kotlin" => info("kt", "//"),
        "mssql" | "mysql" | "oraclesql" => info("sql", "--"),
        "php" => info("php", "//"),
        "python" | "python3" => info("py", "#"),
        "racket" => info("rkt", ";"),
        "ruby" => info("rb", "#"),
        "rust" => info("rs", "//"),
        "scala" => info("scala", "//"),
        "swift" => info("swift", "//"),
        "typescript" => info("ts", "//"),
        _ => DEFAULT_LANGUAGE,
    }
}
