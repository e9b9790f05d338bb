use std::net::TcpListener;

use anyhow::Context;

use newsletter_composer::app;
use newsletter_composer::composer::Composer;
use newsletter_composer::settings::Settings;
use newsletter_composer::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::create_subscriber("info", std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let settings = Settings::load()?;

    let store = settings.storage.store()?;
    let composer = Composer::load(store, settings.composer);

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    app::run(listener, composer)?.await.context("Failed to run app")
}
