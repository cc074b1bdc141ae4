use std::time::Duration;

#[derive(Debug, Default)]
pub struct Client {
    pub addr: String,
    pub timeout: Duration,
    pub keep_alive: Duration,
    pub read_timeout: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct Window(pub Duration, pub u32);

// Silent: positional construction
pub fn window() -> Window {
    Window(Duration::from_secs(1), 4)
}

// Flagged: keep_alive
pub fn local() -> Client {
    Client {
        addr: "127.0.0.1".into(),
        timeout: Duration::from_secs(1),
        ..Default::default()
    }
}
