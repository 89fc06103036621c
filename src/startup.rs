use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use crate::config::Settings;
use crate::delivery::DeliveryNotifier;
use crate::directory::{CustomerDirectory, DirectoryError};
use crate::routes::{handle_next_delivery, health_check};

pub struct Application {
    pub port: u16,
    pub server: Server,
}

#[derive(thiserror::Error, Debug)]
pub enum StartupError {
    #[error("Failed to load the customer directory.")]
    DirectoryError(#[from] DirectoryError),
    #[error("Failed to bind the address.")]
    BindError(#[from] std::io::Error),
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, StartupError> {
        let directory = CustomerDirectory::load(config.get_directory_path())?;
        let notifier = DeliveryNotifier::new(directory);

        let listener = TcpListener::bind(config.get_address())?;
        let port = listener.local_addr()?.port();
        let server = run(listener, notifier)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, notifier: DeliveryNotifier) -> Result<Server, std::io::Error> {
    // Shared read-only by every worker
    let notifier = web::Data::new(notifier);

    let server = HttpServer::new(move || {
        App::new()
            // 'wrap' method adds a middleware to the App. This specific middleware provide incoming
            // request logger
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route(
                "/comms/your-next-delivery/{customer_id}",
                web::get().to(handle_next_delivery),
            )
            .app_data(notifier.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
