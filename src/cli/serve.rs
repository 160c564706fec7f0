// ABOUTME: CLI serve command - run the mock trade-in API until Ctrl+C

use super::ServeArgs;
use crate::config::ServerConfig;
use crate::server;
use anyhow::Result;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: ServerConfig) -> Result<()> {
    apply_args(&args, &mut config);
    server::run_server(&config).await
}

/// Command-line flags win over config and environment
fn apply_args(args: &ServeArgs, config: &mut ServerConfig) {
    if let Some(host) = &args.host {
        config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.port = port;
    }
}
