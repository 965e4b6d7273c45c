//! Process-wide tracing subscriber.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins over `level`. Returns `false` when a global subscriber was
/// already installed, in which case nothing changes.
pub fn init(level: LevelFilter) -> bool {
    let env_filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        init(LevelFilter::WARN);
        assert!(!init(LevelFilter::DEBUG));
    }
}
