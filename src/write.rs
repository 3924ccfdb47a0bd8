extern crate log;

use lc_downloader::{
    catalog::{Catalog, Problem},
    langs,
};
use log::{debug, warn};
use std::{
    fs::{self, File},
    io::{self, Write},
    path::Path,
};

/// Writes one starter file per requested language for every problem in the
/// catalog: a `"{id} - {title}"` directory holding `"{id}_{slug}.{ext}"`
/// files, each starting with the description as comment lines.
pub fn write_catalog(
    catalog: &Catalog,
    languages: &[String],
    dest: &Path,
    overwrite: bool,
) -> io::Result<()> {
    for problem in catalog.problems.values() {
        let content = match &problem.content {
            Some(content) => content,
            None => {
                warn!("skipping unpopulated question `{}`", problem);
                continue;
            }
        };
        let folder = dest.join(format!("{} - {}", problem.question_id, problem.title));
        debug!("creating problem folder `{}`", folder.display());
        fs::create_dir_all(&folder)?;
        for slug in languages {
            write_problem_file(problem, content, slug, &folder, overwrite)?;
        }
    }
    Ok(())
}

fn write_problem_file(
    problem: &Problem,
    content: &str,
    slug: &str,
    folder: &Path,
    overwrite: bool,
) -> io::Result<()> {
    let snippet = match problem.snippet(slug) {
        Some(snippet) => snippet,
        None => {
            // the site does not hand out every language for every problem
            warn!(
                "no `{}` snippet for question `{}`, only {:?} available",
                slug,
                problem,
                problem.available_snippets()
            );
            return Ok(());
        }
    };
    let lang = langs::lookup(slug);
    let path = folder.join(format!(
        "{}_{}.{}",
        problem.question_id, problem.slug, lang.extension
    ));
    if path.exists() && !overwrite {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "the file `{}` already exists and --overwrite was not provided",
                path.display()
            ),
        ));
    }
    debug!("writing `{}`", path.display());
    let mut file = File::create(&path)?;
    for line in content.lines() {
        writeln!(file, "{} {}", lang.comment, line)?;
    }
    writeln!(file)?;
    file.write_all(snippet.code.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_downloader::catalog::{CodeSnippet, Difficulty};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn populated_problem() -> Problem {
        let bare = Problem {
            question_id: 1,
            title: "Two Sum".to_owned(),
            slug: "two-sum".to_owned(),
            difficulty: Difficulty::Easy,
            paid_only: false,
            content: None,
            snippets: None,
        };
        let mut snippets = BTreeMap::new();
        snippets.insert(
            "rust".to_owned(),
            CodeSnippet {
                language: "Rust".to_owned(),
                language_slug: "rust".to_owned(),
                code: "impl Solution {}\n".to_owned(),
            },
        );
        snippets.insert(
            "brainfuck".to_owned(),
            CodeSnippet {
                language: "Brainfuck".to_owned(),
                language_slug: "brainfuck".to_owned(),
                code: "+-\n".to_owned(),
            },
        );
        bare.with_details("Given `nums`.\nReturn indices.\n".to_owned(), snippets)
    }

    fn catalog_of(problems: Vec<Problem>) -> Catalog {
        Catalog {
            problems: problems.into_iter().map(|p| (p.question_id, p)).collect(),
        }
    }

    #[test]
    fn writes_commented_description_then_code() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_of(vec![populated_problem()]);
        write_catalog(&catalog, &["rust".to_owned()], dir.path(), false).unwrap();
        let written =
            fs::read_to_string(dir.path().join("1 - Two Sum").join("1_two-sum.rs")).unwrap();
        assert_eq!(
            written,
            "// Given `nums`.\n// Return indices.\n\nimpl Solution {}\n"
        );
    }

    #[test]
    fn unknown_slug_gets_the_default_extension_and_comment() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_of(vec![populated_problem()]);
        write_catalog(&catalog, &["brainfuck".to_owned()], dir.path(), false).unwrap();
        let written =
            fs::read_to_string(dir.path().join("1 - Two Sum").join("1_two-sum.txt")).unwrap();
        assert!(written.starts_with("# Given `nums`.\n"));
    }

    #[test]
    fn existing_file_without_overwrite_is_an_error() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_of(vec![populated_problem()]);
        let languages = ["rust".to_owned()];
        write_catalog(&catalog, &languages, dir.path(), false).unwrap();
        let err = write_catalog(&catalog, &languages, dir.path(), false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        write_catalog(&catalog, &languages, dir.path(), true).unwrap();
    }

    #[test]
    fn missing_snippet_language_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_of(vec![populated_problem()]);
        write_catalog(&catalog, &["swift".to_owned()], dir.path(), false).unwrap();
        assert!(fs::read_dir(dir.path().join("1 - Two Sum"))
            .unwrap()
            .next()
            .is_none());
    }

    #[test]
    fn unpopulated_problem_is_skipped() {
        let dir = TempDir::new().unwrap();
        let mut bare = populated_problem();
        bare.content = None;
        bare.snippets = None;
        let catalog = catalog_of(vec![bare]);
        write_catalog(&catalog, &["rust".to_owned()], dir.path(), false).unwrap();
        assert!(!dir.path().join("1 - Two Sum").exists());
    }
}
