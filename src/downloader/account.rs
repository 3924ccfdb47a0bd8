extern crate serde;
extern crate serde_yaml;

use serde::{Deserialize, Serialize};
use std::io::Read;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
    pub password: String,
}

pub fn from_reader<R: Read>(rdr: R) -> Result<Account, serde_yaml::Error> {
    serde_yaml::from_reader(rdr)
}
