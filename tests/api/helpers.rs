use once_cell::sync::Lazy;
use reqwest::Response;

use delivery_comms::{
    config::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

// Initialised once for the whole test binary. Set TEST_LOG to see the logs.
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = String::from("info");
    let subscriber_name = String::from("test");

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let mut config = get_configuration().expect("Missing configuration file.");

        // We are using port 0 as way to define a different port per each test. Port 0 is a special case that operating systems
        // take into account: when port is 0, the OS will search for the first available port
        config.set_app_port(0);

        let application = Application::build(config.clone())
            .await
            .expect("Failed to build application.");

        let address = format!("http://127.0.0.1:{}", application.get_port());

        tokio::spawn(application.run_until_stop());

        TestApp { address }
    }

    pub async fn get_next_delivery(&self, customer_id: &str) -> Response {
        let client = reqwest::Client::new();
        let url = format!("{}/comms/your-next-delivery/{}", self.address, customer_id);

        client
            .get(&url)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
