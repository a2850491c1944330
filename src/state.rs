use crate::config::Config;
use crate::github::GithubClient;
use crate::posts::PostStore;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub posts: PostStore,
    pub github: GithubClient,
    /// Held across list, rebuild and save so concurrent edits do not drop each other.
    pub post_writes: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>, github: GithubClient) -> Self {
        Self {
            config: Arc::new(config),
            posts: PostStore::new(store),
            github,
            post_writes: Arc::new(Mutex::new(())),
        }
    }
}
