use crate::client::{require_id, Client};
use crate::endpoint::is_zero;
use crate::error::Result;
use crate::util::{self, Page, PageOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

const PROJECTS: &str = "projects";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tenant_id: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsOptions {
    #[serde(skip_serializing_if = "is_zero")]
    pub page: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

impl PageOptions for ListProjectsOptions {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectPayload {
    pub name: String,
}

impl Client {
    pub fn list_projects(&self, options: Option<&ListProjectsOptions>) -> Result<Page<Project>> {
        let mut builder = self.request(Method::GET, &[PROJECTS])?;
        if let Some(opts) = options {
            builder = builder.query(opts);
        }
        self.send_json(builder)
    }

    /// Iterates over all projects, see [`Client::list_cluster_pages`].
    pub fn list_project_pages<F>(
        &self,
        options: Option<&ListProjectsOptions>,
        callback: F,
    ) -> Result<()>
    where
        F: FnMut(Vec<Project>, bool) -> bool,
    {
        util::paginate(options, |opts| self.list_projects(Some(opts)), callback)
    }

    pub fn get_project(&self, id: &str) -> Result<Project> {
        require_id("project id", id)?;
        let builder = self.request(Method::GET, &[PROJECTS, id])?;
        self.send_json(builder)
    }

    pub fn create_project(&self, payload: &CreateProjectPayload) -> Result<()> {
        let builder = self.request(Method::POST, &[PROJECTS])?;
        self.send(util::json_body(builder, payload)?)
    }

    pub fn delete_project(&self, project: &Project) -> Result<()> {
        require_id("project id", &project.id)?;
        let builder = self.request(Method::DELETE, &[PROJECTS, project.id.as_str()])?;
        self.send(builder)
    }
}
