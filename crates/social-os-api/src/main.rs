use social_os_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (storage, clients, routes)
    let (_state, router) = social_os_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    social_os_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
