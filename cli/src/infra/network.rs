//! Network infrastructure — implements `PortProbe` using `spawn_blocking`.

use crate::application::ports::PortProbe;

/// Production implementation that attempts a real bind on the host.
///
/// The listener is dropped immediately; the probe only proves the address
/// was bindable at that moment.
pub struct TcpPortProbe;

impl PortProbe for TcpPortProbe {
    async fn try_bind(&self, host: &str, port: u16) -> std::io::Result<()> {
        let addr = format!("{host}:{port}");
        tokio::task::spawn_blocking(move || std::net::TcpListener::bind(addr.as_str()).map(drop))
            .await
            .map_err(|e| std::io::Error::other(format!("spawn_blocking panicked: {e}")))?
    }
}
