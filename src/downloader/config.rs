pub mod client {
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:69.0) Gecko/20100101 Firefox/69.0";
    pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
    pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
    // the server speaks brotli, and answers with binary instead of JSON text
    // when "br" is offered
    pub const ACCEPT_ENCODING: &str = "gzip, deflate";
}
pub mod site {
    pub const BASE_URL: &str = "https://leetcode.com";
    pub const LOGIN_PATH: &str = "/accounts/login";
    pub const PROBLEMS_ALL_PATH: &str = "/api/problems/all";
    pub const GRAPHQL_PATH: &str = "/graphql";
    pub const PROBLEM_PATH: &str = "/problems";
    pub const LOGIN_NEXT: &str = "/problems";
    pub const CSRF_COOKIE: &str = "csrftoken";
    pub const CSRF_HEADER: &str = "x-csrftoken";
}
pub mod rate {
    use std::time::Duration;
    pub const QUESTION_FETCH_DELAY: Duration = Duration::from_secs(5);
}
