use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const OTEL_DIRECTIVES: &str = "info,hyper=off,h2=off,tower=off,opentelemetry=off,sqlx=warn";

/// Keeps the file writer and the log provider alive for the lifetime of the
/// process. Dropping it flushes buffered log lines.
pub struct Logger {
    _guard: WorkerGuard,
    provider: Option<SdkLoggerProvider>,
}

impl Logger {
    pub fn new(component: &str, is_dev: bool) -> Self {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("portal_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        let provider = if !is_dev {
            Some(SdkLoggerProvider::builder().build())
        } else {
            None
        };

        // A subscriber may already be installed (tests, embedding); keep it.
        let _ = match &provider {
            Some(provider) => registry
                .with(
                    OpenTelemetryTracingBridge::new(provider)
                        .with_filter(EnvFilter::new(OTEL_DIRECTIVES)),
                )
                .try_init(),
            None => registry.try_init(),
        };

        Self {
            _guard: guard,
            provider,
        }
    }

    pub fn shutdown(&self) {
        if let Some(provider) = &self.provider {
            if let Err(e) = provider.shutdown() {
                eprintln!("failed to shut down log provider: {e:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn dev_logger_writes_to_local_directory() {
        let logger = Logger::new("logs_test", true);
        tracing::info!("📝 logger smoke line");
        logger.shutdown();
        drop(logger);

        assert!(Path::new("./logs").is_dir());
    }
}
