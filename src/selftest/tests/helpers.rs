use crate::selftest::{Class, Level, SelfTest, SelfTestConfig};
use std::io;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber controlled by `RUST_LOG` env var.
/// Safe to call multiple times; only the first call takes effect.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An initialized harness writing into memory.
pub fn harness(class: Class, level: Level) -> SelfTest<Vec<u8>> {
    init_tracing();
    let mut test = SelfTest::with_sink(Vec::new());
    test.init(SelfTestConfig { class, level });
    test
}

/// Everything written to the sink so far.
pub fn report(test: &SelfTest<Vec<u8>>) -> String {
    String::from_utf8(test.sink().clone()).unwrap()
}

/// A sink that rejects every write.
pub struct BrokenSink;

impl io::Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
