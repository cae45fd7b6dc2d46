use anyhow::Context;
use genie_api::ApiServer;
use genie_config::GenieConfig;
use genie_relay::RelayServer;
use tokio::sync::oneshot;

use crate::cli::root_commands::ServeArgs;

/// Handle `genie serve`: the API on a blocking thread, the relay on the
/// runtime, both stopped by Ctrl-C.
pub async fn handle(args: &ServeArgs, mut config: GenieConfig) -> anyhow::Result<()> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(port) = args.relay_port {
        config.relay.port = port;
    }
    config.validate()?;

    let api = ApiServer::bind(&config.server).context("failed to start API server")?;
    let api_shutdown = api.shutdown_handle();
    let relay = RelayServer::bind(&config.relay)
        .await
        .with_context(|| format!("failed to bind relay on {}", config.relay.bind_addr()))?;

    tracing::info!(
        api = %config.server.bind_addr(),
        relay = %config.relay.bind_addr(),
        frontend = %config.server.frontend_url,
        environment = %config.server.environment,
        "travel genie running"
    );

    let api_task = tokio::task::spawn_blocking(move || api.serve());
    let (stop_relay, relay_stopped) = oneshot::channel::<()>();
    let mut relay_task = tokio::spawn(relay.run(async move {
        let _ = relay_stopped.await;
    }));

    let finished_early = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            None
        }
        finished = &mut relay_task => Some(finished),
    };
    let relay_result = match finished_early {
        Some(finished) => finished,
        None => {
            tracing::info!("shutting down");
            let _ = stop_relay.send(());
            relay_task.await
        }
    };

    api_shutdown.shutdown();
    api_task.await.context("API thread panicked")?;
    relay_result
        .context("relay task panicked")?
        .context("relay stopped with an error")
}
