//! The `Clickup` facade: one configured `Request` shared by every route.
//!
//! # Design
//! Each facade owns its own `Request` behind an `Arc`, and every route holds
//! a clone of that `Arc`. Nothing is global, so facades with different tokens
//! or prefix URLs can coexist, and cloning a facade is cheap.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::options::ClientOptions;
use crate::request::Request;
use crate::routes::{
    Authorization, Checklists, Comments, Folders, Goals, KeyResults, Lists, Spaces, Tasks, Teams,
    Views, Webhooks,
};

/// Typed entry point to the ClickUp v2 API.
///
/// ```no_run
/// # async fn run() -> clickup_core::Result<()> {
/// use clickup_core::Clickup;
///
/// let clickup = Clickup::new("pk_123")?;
/// let teams = clickup.teams().get().await?;
/// println!("{teams}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Clickup {
    request: Arc<Request>,
    authorization: Authorization,
    checklists: Checklists,
    comments: Comments,
    folders: Folders,
    goals: Goals,
    key_results: KeyResults,
    lists: Lists,
    spaces: Spaces,
    tasks: Tasks,
    teams: Teams,
    views: Views,
    webhooks: Webhooks,
}

impl Clickup {
    /// A client with the default options.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_options(token, ClientOptions::default())
    }

    pub fn with_options(token: impl Into<String>, options: ClientOptions) -> Result<Self> {
        let request = Arc::new(Request::new(token, &options)?);
        debug!("wiring ClickUp routes");

        Ok(Self {
            authorization: Authorization::new(Arc::clone(&request)),
            checklists: Checklists::new(Arc::clone(&request)),
            comments: Comments::new(Arc::clone(&request)),
            folders: Folders::new(Arc::clone(&request)),
            goals: Goals::new(Arc::clone(&request)),
            key_results: KeyResults::new(Arc::clone(&request)),
            lists: Lists::new(Arc::clone(&request)),
            spaces: Spaces::new(Arc::clone(&request)),
            tasks: Tasks::new(Arc::clone(&request)),
            teams: Teams::new(Arc::clone(&request)),
            views: Views::new(Arc::clone(&request)),
            webhooks: Webhooks::new(Arc::clone(&request)),
            request,
        })
    }

    /// The shared request layer and its effective configuration.
    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn authorization(&self) -> &Authorization {
        &self.authorization
    }

    pub fn checklists(&self) -> &Checklists {
        &self.checklists
    }

    pub fn comments(&self) -> &Comments {
        &self.comments
    }

    pub fn folders(&self) -> &Folders {
        &self.folders
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    pub fn key_results(&self) -> &KeyResults {
        &self.key_results
    }

    pub fn lists(&self) -> &Lists {
        &self.lists
    }

    pub fn spaces(&self) -> &Spaces {
        &self.spaces
    }

    pub fn tasks(&self) -> &Tasks {
        &self.tasks
    }

    pub fn teams(&self) -> &Teams {
        &self.teams
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn webhooks(&self) -> &Webhooks {
        &self.webhooks
    }
}
