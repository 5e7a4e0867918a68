use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn build(self) -> AppTracing {
    AppTracing::new(self.console_filter())
  }

  fn console_filter(self) -> EnvFilter {
    self.console_filter.unwrap_or_else(|| {
      EnvFilter::try_from_env("CONSOLE_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
    })
  }
}

pub struct AppTracing;

impl AppTracing {
  fn new(console_filter: EnvFilter) -> Self {
    tracing_subscriber::registry()
      .with(
        tracing_subscriber::fmt::layer()
          .with_writer(std::io::stderr)
          .with_filter(console_filter)
      )
      .init();
    Self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn explicit_console_filter_overrides_the_environment_default() {
    let filter = AppTracingBuilder::default()
      .with_console_filter(EnvFilter::new("debug"))
      .console_filter();
    assert_eq!(filter.to_string(), "debug");
  }
}
