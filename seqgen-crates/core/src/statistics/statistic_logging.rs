//! Writes statistics as `{prefix} {name}={value}` lines to a configurable writer.
//!
//! Nothing is written until [`configure_statistic_logging`] has been called; the first
//! configuration is kept for the remainder of the process.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::Write;
use std::io::stdout;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

struct StatisticOptions {
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl Debug for StatisticOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("casing", &self.casing)
            .field("writer", &"<Writer>")
            .finish()
    }
}

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions>> = OnceLock::new();

/// Configures the logging of statistics.
///
/// Every statistic is written on its own line, preceded by `prefix`. The names of the statistics
/// are converted to `casing` if it is provided. When `writer` is [`None`], statistics are written
/// to stdout.
pub fn configure_statistic_logging(
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        Mutex::new(StatisticOptions {
            prefix,
            postfix,
            casing,
            writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Logs the statistic `name` with `value` if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Some(options) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut options) = options.lock() else {
        return;
    };

    let name = match options.casing {
        Some(casing) => name.to_string().to_case(casing),
        None => name.to_string(),
    };
    let prefix = options.prefix;
    let _ = writeln!(options.writer, "{prefix} {name}={value}");
}

/// Writes the closing line after a block of statistics, if one is configured.
pub fn log_statistic_postfix() {
    let Some(options) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut options) = options.lock() else {
        return;
    };

    if let Some(postfix) = options.postfix {
        let _ = writeln!(options.writer, "{postfix}");
    }
}

/// Returns whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use std::sync::Mutex;

    use convert_case::Case;

    use super::configure_statistic_logging;
    use super::log_statistic;
    use super::log_statistic_postfix;
    use super::should_log_statistics;

    #[derive(Debug, Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .expect("buffer is not poisoned")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    // The configuration is process-wide, so this is the only test which configures it.
    #[test]
    fn writes_prefixed_statistics_in_the_configured_casing() {
        let buffer = SharedBuffer::default();
        configure_statistic_logging(
            "%% stat:",
            Some("%% end"),
            Some(Case::Snake),
            Some(Box::new(buffer.clone())),
        );
        assert!(should_log_statistics());

        log_statistic("numPrimesDrawn", 12);
        log_statistic_postfix();

        let written = String::from_utf8(buffer.0.lock().expect("not poisoned").clone())
            .expect("valid utf-8");
        assert_eq!(written, "%% stat: num_primes_drawn=12\n%% end\n");
    }
}
