mod broken;

use std::time::Duration;

#[derive(Debug, Default)]
pub struct Client {
    pub timeout: Duration,
}

// Flagged even though a sibling file fails to parse
pub fn client() -> Client {
    Client { ..Default::default() }
}
