use serde_json::json;
use serial_fetch_api::{FetchConfig, FetchError, RunReport, SerialRunner};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const FIRST_NAMES: [&str; 3] = ["Emily", "Michael", "Sophia"];

pub struct TestApp {
    pub test_server: MockServer,
    pub config: FetchConfig,
}

impl TestApp {
    pub async fn mount_user(&self, id: u32, first_name: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "firstName": first_name,
                "lastName": "Doe",
                "email": format!("{}@x.dummyjson.com", first_name.to_lowercase()),
            })))
            .mount(&self.test_server)
            .await;
    }

    pub async fn mount_all_users(&self) {
        for (id, name) in (1..).zip(FIRST_NAMES) {
            self.mount_user(id, name).await;
        }
    }

    /// Runs the blocking runner off the async executor and returns what it
    /// wrote alongside the result.
    pub async fn run(&self) -> (Result<RunReport, FetchError>, String) {
        run_with(self.config.clone()).await
    }

    pub async fn received_paths(&self) -> Vec<String> {
        self.test_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }
}

pub async fn run_with(config: FetchConfig) -> (Result<RunReport, FetchError>, String) {
    tokio::task::spawn_blocking(move || {
        let runner = SerialRunner::from_config(config).expect("failed to build runner");
        let mut out = Vec::new();
        let result = runner.run(&mut out);
        (result, String::from_utf8(out).expect("output is not utf-8"))
    })
    .await
    .expect("runner thread panicked")
}

pub async fn spawn_test_app() -> TestApp {
    let test_server = MockServer::start().await;
    let config = FetchConfig::with_base_url(&test_server.uri()).expect("mock server uri is valid");
    TestApp {
        test_server,
        config,
    }
}
