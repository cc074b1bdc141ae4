use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct Opts {
    pub timeout: Duration,
    pub retries: u32,
    cache: HashMap<String, String>,
    pub(crate) label: String,
}

pub type Headers = HashMap<String, String>;

// Flagged: timeout only
pub fn opts() -> Opts {
    Opts {
        retries: 3,
        ..Default::default()
    }
}

// Silent: cache and label are not exported
pub fn full() -> Opts {
    Opts {
        timeout: Duration::from_secs(1),
        retries: 3,
        ..Default::default()
    }
}

pub fn headers() -> Headers {
    Headers::new()
}
