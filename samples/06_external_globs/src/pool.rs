use super::*;
use std::io::prelude::*;

pub fn pooled() -> Client {
    Client {
        keep_alive: Duration::from_secs(90),
        ..connect("localhost")
    }
}
