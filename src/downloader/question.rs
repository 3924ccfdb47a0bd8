extern crate log;
extern crate reqwest;
extern crate serde;
extern crate serde_json;

use crate::{
    catalog::{CodeSnippet, Problem},
    client::Request,
    config,
    error::{auth_error, config_error, field, Result},
    markdown::TextConverter,
    session::Session,
};
use log::debug;
use reqwest::header::{self, HeaderName, HeaderValue};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;

/// Query document sent to the structured-query endpoint, naming the
/// `questionData` operation.
const QUESTION_DATA_QUERY: &str = "query questionData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionId
    questionFrontendId
    boundTopicId
    title
    titleSlug
    content
    codeSnippets {
      lang
      langSlug
      code
      __typename
    }
  }
}
";

#[derive(Debug, Deserialize)]
pub struct QuestionDataResponse {
    pub data: Option<QuestionData>,
}
#[derive(Debug, Deserialize)]
pub struct QuestionData {
    pub question: Option<QuestionBody>,
}
#[derive(Debug, Deserialize)]
pub struct QuestionBody {
    pub content: Option<String>,
    #[serde(rename = "codeSnippets")]
    pub code_snippets: Option<Vec<SnippetEntry>>,
}
#[derive(Debug, Deserialize)]
pub struct SnippetEntry {
    pub lang: Option<String>,
    #[serde(rename = "langSlug")]
    pub lang_slug: Option<String>,
    pub code: Option<String>,
}

/// Fetches the description and per-language starter code for one problem and
/// returns a new, fully populated record. The input record is not touched.
pub async fn fetch(
    session: &Session,
    converter: &TextConverter,
    problem: &Problem,
) -> Result<Problem> {
    let response = session.execute(build_request(session, problem)?).await?;
    let decoded = response.json::<QuestionDataResponse>().await?;
    let (content, snippets) = decode_question(decoded)?;
    debug!(
        "have {} snippets to process for question `{}`",
        snippets.len(),
        problem
    );
    Ok(problem.with_details(converter.convert(&content), snippets))
}

fn build_request(session: &Session, problem: &Problem) -> Result<Request> {
    let mut headers = session.common_headers();
    headers.insert(
        HeaderName::from_static(config::site::CSRF_HEADER),
        HeaderValue::from_str(&session.csrf_token()?).map_err(|e| {
            auth_error(format!(
                "anti-forgery token is not a valid header value: {}",
                e
            ))
        })?,
    );
    headers.insert(
        header::REFERER,
        HeaderValue::from_str(&session.site().problem_page_url(&problem.slug))
            .map_err(|e| config_error(format!("invalid referer value: {}", e)))?,
    );
    Ok(Request::post(session.site().graphql_url())
        .headers(headers)
        .json(json!({
            "operationName": "questionData",
            "variables": { "titleSlug": problem.slug },
            "query": QUESTION_DATA_QUERY,
        })))
}

fn decode_question(
    response: QuestionDataResponse,
) -> Result<(String, BTreeMap<String, CodeSnippet>)> {
    let question = field(field(response.data, "data")?.question, "data.question")?;
    let content = field(question.content, "data.question.content")?;
    let entries = field(question.code_snippets, "data.question.codeSnippets")?;
    let mut snippets = BTreeMap::new();
    for entry in entries {
        let snippet = CodeSnippet {
            language: field(entry.lang, "codeSnippets[].lang")?,
            language_slug: field(entry.lang_slug, "codeSnippets[].langSlug")?,
            code: field(entry.code, "codeSnippets[].code")?,
        };
        // duplicate slug in one response: the later entry wins
        snippets.insert(snippet.language_slug.clone(), snippet);
    }
    Ok((content, snippets))
}
