use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Log an error using the alternate selector, which emits the error chain.
pub fn log_error(e: impl Into<anyhow::Error>) {
    let e: anyhow::Error = e.into();
    tracing::error!("{e:#}");
}

/// Pretty stderr subscriber. `RUST_LOG` wins over `default_filter` when set.
pub fn get_subscriber(default_filter: &str) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let stderr = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .pretty()
        .with_span_events(fmt::format::FmtSpan::CLOSE);
    Registry::default().with(env_filter).with(stderr)
}

/// Register a subscriber as the global default and route `log` records
/// through it. Fails if a global subscriber is already set, so tests that
/// spawn many servers should ignore the error.
pub fn init_subscriber(
    subscriber: impl Subscriber + Sync + Send,
) -> anyhow::Result<()> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use anyhow::Context;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn log_error_emits_the_whole_chain() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = fmt::Subscriber::builder()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let error = Err::<(), _>(io::Error::other("connection reset"))
            .context("serving search api")
            .unwrap_err();
        tracing::subscriber::with_default(subscriber, || log_error(error));

        let output = String::from_utf8(captured.0.lock().unwrap().clone())
            .unwrap();
        assert!(output.contains("ERROR"), "{output}");
        assert!(
            output.contains("serving search api: connection reset"),
            "{output}"
        );
    }
}
