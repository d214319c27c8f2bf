use anyhow::Context;
use regulars_core::config::Config;
use std::path::Path;

pub fn run(root: &Path, port: Option<u16>, open: bool, secret: Option<String>) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let port = port.unwrap_or(config.server.port);

    let secret = match secret.filter(|s| !s.is_empty()) {
        Some(s) => s.into_bytes(),
        None => {
            tracing::warn!("REGULARS_SECRET not set; tokens will not survive a restart");
            regulars_server::auth::ephemeral_secret()
        }
    };

    let rt = tokio::runtime::Runtime::new()?;
    let root_buf = root.to_path_buf();

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
            .await
            .with_context(|| format!("failed to bind port {port}"))?;
        let actual_port = listener.local_addr()?.port();
        println!("regulars → http://localhost:{actual_port}");

        tokio::select! {
            res = regulars_server::serve_on(root_buf, secret, listener, open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
