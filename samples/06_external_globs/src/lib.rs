use std::io::prelude::*;
use std::time::Duration;
use serde::*;
use tokio::prelude::*;
use futures::prelude::*;

pub mod pool;

#[derive(Default)]
pub struct Client {
    pub addr: String,
    pub timeout: Duration,
    pub keep_alive: Duration,
}

pub fn connect(addr: &str) -> Client {
    Client {
        addr: addr.to_string(),
        timeout: Duration::from_secs(5),
        ..Default::default()
    }
}
