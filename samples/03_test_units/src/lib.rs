#[cfg(test)]
mod tests;

use std::time::Duration;

#[derive(Debug, Default)]
pub struct Client {
    pub addr: String,
    pub timeout: Duration,
}

// Flagged: the only literal outside test code
pub fn client() -> Client {
    Client {
        addr: "localhost".into(),
        ..Default::default()
    }
}
