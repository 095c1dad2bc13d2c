use crate::client::Client;
use crate::endpoint::is_zero;
use crate::error::Result;
use crate::util::{self, Page, PageOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const USERS: &str = "users";

/// A member of the organization (not a database user).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersOptions {
    #[serde(skip_serializing_if = "is_zero")]
    pub page: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

impl PageOptions for ListUsersOptions {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }
}

impl Client {
    pub fn list_users(&self, options: Option<&ListUsersOptions>) -> Result<Page<User>> {
        let mut builder = self.request(Method::GET, &[USERS])?;
        if let Some(opts) = options {
            builder = builder.query(opts);
        }
        self.send_json(builder)
    }

    pub fn list_user_pages<F>(&self, options: Option<&ListUsersOptions>, callback: F) -> Result<()>
    where
        F: FnMut(Vec<User>, bool) -> bool,
    {
        util::paginate(options, |opts| self.list_users(Some(opts)), callback)
    }
}
