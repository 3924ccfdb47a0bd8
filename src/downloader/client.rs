extern crate log;
extern crate reqwest;
extern crate serde_json;

use crate::{
    config,
    error::{status_error, Result},
};
use log::debug;
use reqwest::{
    cookie::{CookieStore, Jar},
    header::HeaderMap,
    Client, Method, Response, StatusCode, Url,
};
use std::sync::Arc;

pub enum Body {
    Form(Vec<(&'static str, String)>),
    Json(serde_json::Value),
}

/// A fully formed request description. Built once, executed by [`Transport`].
pub struct Request {
    pub method: Method,
    pub url: String,
    pub query: Option<Vec<(String, String)>>,
    pub body: Option<Body>,
    pub headers: Option<HeaderMap>,
}
impl Request {
    fn new(method: Method, url: String) -> Self {
        Request {
            method,
            url,
            query: None,
            body: None,
            headers: None,
        }
    }
    pub fn get(url: String) -> Self {
        Self::new(Method::GET, url)
    }
    pub fn post(url: String) -> Self {
        Self::new(Method::POST, url)
    }
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = Some(query);
        self
    }
    pub fn form(mut self, form: Vec<(&'static str, String)>) -> Self {
        self.body = Some(Body::Form(form));
        self
    }
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(Body::Json(body));
        self
    }
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Stateful HTTP session: cookies set by earlier responses are attached to
/// later requests, and can be read back through [`Transport::cookie`].
pub struct Transport {
    client: Client,
    jar: Arc<Jar>,
}
impl Transport {
    pub fn new() -> Result<Self> {
        let jar = Arc::new(Jar::default());
        Ok(Transport {
            client: Client::builder()
                .user_agent(config::client::USER_AGENT)
                .cookie_provider(jar.clone())
                .build()?,
            jar,
        })
    }

    /// Executes the request. Any status other than 200 is an error carrying
    /// the status and response body.
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let Request {
            method,
            url,
            query,
            body,
            headers,
        } = request;
        debug!("http request: {} - {}", method, url);
        let mut builder = self.client.request(method.clone(), url.as_str());
        if let Some(query) = &query {
            builder = builder.query(query);
        }
        match body {
            Some(Body::Form(form)) => builder = builder.form(&form),
            Some(Body::Json(json)) => builder = builder.json(&json),
            None => {}
        }
        if let Some(headers) = headers {
            builder = builder.headers(headers);
        }
        let response = builder.send().await?;
        let status = response.status();
        debug!("http request: {} - {} -> {}", method, url, status);
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, url, body));
        }
        Ok(response)
    }

    pub fn cookie(&self, url: &Url, name: &str) -> Option<String> {
        let cookies = self.jar.cookies(url)?;
        let cookies = cookies.to_str().ok()?;
        cookies
            .split("; ")
            .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('=').map(str::to_owned))
    }
}
