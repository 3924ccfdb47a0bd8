extern crate log;
extern crate tokio;

use crate::{
    account::Account,
    catalog::Catalog,
    client::Request,
    error::Result,
    listing::{parse_problem_list, ProblemListResponse},
    markdown::TextConverter,
    question,
    session::Session,
};
use log::{debug, info, warn};
use std::{collections::BTreeMap, time::Duration};
use tokio::time::sleep;

/// Runs the whole harvest: login, bulk listing, then one paced detail fetch
/// per problem, strictly in ascending-identifier order.
pub struct Downloader<'a> {
    session: &'a Session,
    delay: Duration,
    keep_going: bool,
    converter: TextConverter,
}

impl<'a> Downloader<'a> {
    pub fn new(session: &'a Session, delay: Duration) -> Self {
        Downloader {
            session,
            delay,
            keep_going: false,
            converter: TextConverter::new(),
        }
    }

    /// Collect per-problem detail failures instead of aborting on the first
    /// one. Failed records stay unpopulated; the default aborts.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub async fn get_all_problems(&self, account: &Account) -> Result<Catalog> {
        self.session.login(account).await?;
        let catalog = parse_problem_list(self.fetch_problem_list().await?)?;
        self.fetch_all_details(catalog).await
    }

    async fn fetch_problem_list(&self) -> Result<ProblemListResponse> {
        let response = self
            .session
            .execute(
                Request::get(self.session.site().problems_all_url())
                    .headers(self.session.common_headers()),
            )
            .await?;
        Ok(response.json().await?)
    }

    /// Threads a fresh catalog through the per-problem fetches; each stage
    /// replaces records, it never mutates them in place.
    async fn fetch_all_details(&self, catalog: Catalog) -> Result<Catalog> {
        let mut problems = BTreeMap::new();
        for (id, problem) in &catalog.problems {
            info!("updating question `{}`", problem);
            let updated = match question::fetch(self.session, &self.converter, problem).await {
                Ok(updated) => updated,
                Err(e) if self.keep_going => {
                    warn!("question `{}` left unpopulated: {}", problem, e);
                    problem.clone()
                }
                Err(e) => return Err(e),
            };
            problems.insert(*id, updated);
            debug!("sleeping for {:?} before the next request", self.delay);
            sleep(self.delay).await;
        }
        Ok(Catalog { problems })
    }
}
