use std::{collections::BTreeMap, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}
impl Difficulty {
    pub(crate) fn from_level(level: u64) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}
impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

/// Starter source the site's editor pre-fills for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippet {
    pub language: String,
    pub language_slug: String,
    pub code: String,
}

/// One problem. The listing parse leaves `content` and `snippets` unset;
/// the detail fetch produces a fully populated replacement record.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub question_id: u64,
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
    pub paid_only: bool,
    pub content: Option<String>,
    pub snippets: Option<BTreeMap<String, CodeSnippet>>,
}
impl Problem {
    /// Copy-with-override: a new record with the detail fields filled in.
    /// The input record is left untouched.
    pub fn with_details(
        &self,
        content: String,
        snippets: BTreeMap<String, CodeSnippet>,
    ) -> Problem {
        Problem {
            content: Some(content),
            snippets: Some(snippets),
            ..self.clone()
        }
    }
    pub fn snippet(&self, language_slug: &str) -> Option<&CodeSnippet> {
        self.snippets.as_ref()?.get(language_slug)
    }
    pub fn available_snippets(&self) -> Vec<&str> {
        match &self.snippets {
            Some(snippets) => snippets.keys().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }
}
impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.question_id, self.title)
    }
}

/// All harvested problems for one run, iterated in ascending-identifier
/// order.
#[derive(Debug)]
pub struct Catalog {
    pub problems: BTreeMap<u64, Problem>,
}
impl Catalog {
    pub fn len(&self) -> usize {
        self.problems.len()
    }
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}
