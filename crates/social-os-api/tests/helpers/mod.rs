//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p social-os-api`.
//! The AI model and the Graph API are replaced by in-process fakes that
//! record how often they were called.

#![allow(dead_code)]

pub mod fakes;
pub mod fixtures;

use axum_test::TestServer;
use social_os_api::setup::{routes, services};
use social_os_core::{Config, SocialConfig};
use social_os_plugins::{MediaPublisher, VisionModel};
use social_os_storage::{LocalStorage, Storage};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub use fakes::{FakePublisher, FakeVision, RemoteOutcome};

/// Variables every test app starts from; tests override or add to them.
const BASE_VARS: &[(&str, &str)] = &[
    ("ENVIRONMENT", "test"),
    ("GEMINI_API_KEY", "test-gemini-key"),
    ("META_ACCESS_TOKEN", "test-meta-token"),
    ("INSTAGRAM_BUSINESS_ACCOUNT_ID", "default-ig"),
];

/// Test application: server, fakes, and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub vision: Arc<FakeVision>,
    pub publisher: Arc<FakePublisher>,
    pub config: Config,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        self._temp_dir.path()
    }

    /// Names of the files currently in the blob store.
    pub fn stored_files(&self) -> Vec<String> {
        std::fs::read_dir(self.upload_dir())
            .expect("Failed to read upload dir")
            .map(|entry| {
                entry
                    .expect("Failed to read dir entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }
}

/// Build a config from [`BASE_VARS`] plus overrides. A value of `""` unsets
/// the variable.
pub fn create_test_config(overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = BASE_VARS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    let config = SocialConfig::from_vars(|key| vars.get(key).cloned())
        .expect("Failed to build test config");
    Config(Box::new(config))
}

/// Setup test app with fake AI and Graph clients and a temporary blob store.
pub async fn setup_test_app(
    overrides: &[(&str, &str)],
    vision: FakeVision,
    publisher: FakePublisher,
) -> TestApp {
    let vision = Arc::new(vision);
    let publisher = Arc::new(publisher);
    let (server, config, temp_dir) = build_server(
        overrides,
        vision.clone() as Arc<dyn VisionModel>,
        publisher.clone() as Arc<dyn MediaPublisher>,
    )
    .await;

    TestApp {
        server,
        vision,
        publisher,
        config,
        _temp_dir: temp_dir,
    }
}

/// Setup a server around arbitrary clients, e.g. a real `InstagramGraph`
/// pointed at a mock HTTP server.
pub async fn build_server(
    overrides: &[(&str, &str)],
    vision: Arc<dyn VisionModel>,
    publisher: Arc<dyn MediaPublisher>,
) -> (TestServer, Config, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = create_test_config(overrides);

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(
            temp_dir.path(),
            config.public_base_url().map(str::to_string),
        )
        .await
        .expect("Failed to create local storage"),
    );

    let state = services::build_state(&config, storage, vision, publisher);
    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    (server, config, temp_dir)
}
