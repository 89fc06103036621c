use delivery_comms::config::get_configuration;
use delivery_comms::startup::Application;
use delivery_comms::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(
        String::from("delivery_comms"),
        String::from("info"),
        std::io::stdout,
    );

    init_subscriber(subscriber);

    let config = get_configuration().expect("Missing configuration file.");
    let application = Application::build(config.clone())
        .await
        .expect("Failed to build application.");

    tracing::info!(
        "Server listening on {}:{}",
        config.application.get_host(),
        application.get_port()
    );

    application.run_until_stop().await
}
