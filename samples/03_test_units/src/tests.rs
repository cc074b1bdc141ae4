use super::*;

#[test]
fn defaults() {
    let c = Client { ..Default::default() };
    assert_eq!(c.timeout, Duration::ZERO);
}
