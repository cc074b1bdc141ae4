pub mod net;

use std::time::Duration;

use net::Client;

#[derive(Debug, Default)]
pub struct Options {
    pub retries: u32,
    pub connect_timeout: Duration,
    pub timeout_secs: u64,
}

// Flagged: connect_timeout comes from Default
pub fn options() -> Options {
    Options {
        retries: 3,
        ..Default::default()
    }
}

// Silent: every field spelled out
pub fn explicit() -> Options {
    Options {
        retries: 3,
        connect_timeout: Duration::from_secs(5),
        timeout_secs: 5,
    }
}

// Flagged twice: timeout and keep_alive
pub fn client(addr: &str) -> Client {
    Client {
        addr: addr.to_string(),
        ..Client::default()
    }
}
