use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct Pool {
    pub size: usize,
    pub idle_timeout: Duration,
    pub tcp_keepalive: Duration,
}

pub enum Backoff {
    Fixed { timeout: Duration },
}

pub fn pool() -> Pool {
    Pool {
        size: 8,
        idle_timeout: Duration::from_secs(30),
        tcp_keepalive: Duration::from_secs(60),
    }
}

pub fn resized(base: &Pool) -> Pool {
    Pool {
        size: 16,
        idle_timeout: base.idle_timeout,
        tcp_keepalive: base.tcp_keepalive,
    }
}

pub fn backoff() -> Backoff {
    Backoff::Fixed {
        timeout: Duration::from_millis(250),
    }
}
