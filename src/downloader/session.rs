extern crate log;
extern crate reqwest;

use crate::{
    account::Account,
    client::{Request, Transport},
    config,
    error::{auth_error, config_error, Result},
};
use log::{debug, info};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Response, Url,
};

/// The remote site's endpoints, derived from one base URL so tests can point
/// the whole pipeline at a stub server.
pub struct Site {
    base: String,
    origin: Url,
}
impl Site {
    pub fn new(base: &str) -> Result<Self> {
        let base = base.trim_end_matches('/');
        let origin = Url::parse(base)
            .map_err(|e| config_error(format!("invalid base url `{}`: {}", base, e)))?;
        Ok(Site {
            base: base.to_owned(),
            origin,
        })
    }
    pub fn home_url(&self) -> String {
        self.base.clone()
    }
    pub fn login_url(&self) -> String {
        format!("{}{}", self.base, config::site::LOGIN_PATH)
    }
    pub fn problems_all_url(&self) -> String {
        format!("{}{}", self.base, config::site::PROBLEMS_ALL_PATH)
    }
    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.base, config::site::GRAPHQL_PATH)
    }
    pub fn problem_page_url(&self, slug: &str) -> String {
        format!("{}{}/{}", self.base, config::site::PROBLEM_PATH, slug)
    }
    pub(crate) fn origin(&self) -> &Url {
        &self.origin
    }
}

fn common_headers(site: &Site) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(config::client::ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(config::client::ACCEPT_LANGUAGE),
    );
    headers.insert(
        header::ACCEPT_ENCODING,
        HeaderValue::from_static(config::client::ACCEPT_ENCODING),
    );
    headers.insert(header::DNT, HeaderValue::from_static("1"));
    headers.insert(
        header::REFERER,
        HeaderValue::from_str(&format!("{}/", site.base))
            .map_err(|e| config_error(format!("invalid referer value: {}", e)))?,
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        HeaderValue::from_static("1"),
    );
    Ok(headers)
}

/// Authenticated session against the site. `login` walks the whole
/// bootstrap: root fetch, anti-forgery token from the cookie jar, credential
/// POST, re-read of the rotated token.
pub struct Session {
    transport: Transport,
    site: Site,
    headers: HeaderMap,
}
impl Session {
    pub fn new(site: Site) -> Result<Self> {
        let headers = common_headers(&site)?;
        Ok(Session {
            transport: Transport::new()?,
            site,
            headers,
        })
    }

    pub fn site(&self) -> &Site {
        &self.site
    }
    pub fn common_headers(&self) -> HeaderMap {
        self.headers.clone()
    }
    pub async fn execute(&self, request: Request) -> Result<Response> {
        self.transport.execute(request).await
    }

    /// Current anti-forgery token, read from the cookie jar on demand.
    pub fn csrf_token(&self) -> Result<String> {
        self.transport
            .cookie(self.site.origin(), config::site::CSRF_COOKIE)
            .ok_or_else(|| {
                auth_error(format!(
                    "cookie `{}` not present in the session cookie jar",
                    config::site::CSRF_COOKIE
                ))
            })
    }

    async fn acquire_token(&self) -> Result<String> {
        self.transport
            .execute(Request::get(self.site.home_url()))
            .await?;
        self.csrf_token()
    }

    pub async fn login(&self, account: &Account) -> Result<()> {
        let token = self.acquire_token().await?;
        debug!("anti-forgery token from the cookie jar is `{}`", token);
        info!("logging in as `{}`", account.login);
        self.transport
            .execute(
                Request::post(self.site.login_url())
                    .headers(self.common_headers())
                    .form(vec![
                        ("login", account.login.clone()),
                        ("password", account.password.clone()),
                        ("next", config::site::LOGIN_NEXT.to_owned()),
                        ("csrfmiddlewaretoken", token),
                    ]),
            )
            .await?;
        // logging in rotates the token; all later calls read the fresh value
        self.csrf_token().map(|_| ())
    }
}
