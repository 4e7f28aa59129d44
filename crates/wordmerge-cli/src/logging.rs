use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug, Default)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise log verbosity above the command default (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// The stderr log level; each ``-v`` raises `default` by one.
    ///
    /// Levels count up from errors only: 1 error, 2 warn, 3 info, 4 debug.
    fn log_level(
        &self,
        default: u8,
    ) -> LogLevelNum {
        match default.saturating_add(self.verbose) {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install ``stderrlog`` for the process.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.log_level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let args = LogArgs::default();
        assert!(matches!(args.log_level(2), LogLevelNum::Warn));
        assert!(matches!(args.log_level(3), LogLevelNum::Info));

        // -v never lowers a command's default level.
        let args = LogArgs {
            verbose: 1,
            ..Default::default()
        };
        assert!(matches!(args.log_level(3), LogLevelNum::Debug));
        assert!(matches!(args.log_level(2), LogLevelNum::Info));

        let args = LogArgs {
            verbose: 2,
            ..Default::default()
        };
        assert!(matches!(args.log_level(2), LogLevelNum::Debug));
        assert!(matches!(args.log_level(3), LogLevelNum::Trace));

        let args = LogArgs {
            verbose: u8::MAX,
            ..Default::default()
        };
        assert!(matches!(args.log_level(0), LogLevelNum::Trace));
    }
}
