use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "gilded-rose")]
#[command(about = "Simulate the Gilded Rose inventory day by day.")]
pub struct CommandLine {
    /// Number of days to simulate after day 0
    #[arg(short, long, default_value_t = 2)]
    pub days: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log a warning for every item that fails a validity check
    #[arg(long)]
    pub validate: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CommandLine::try_parse_from(["gilded-rose"]).unwrap();
        assert_eq!(cli.days, 2);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.validate);
    }

    #[test]
    fn explicit_flags() {
        let cli =
            CommandLine::try_parse_from(["gilded-rose", "--days", "30", "-f", "json", "--validate"])
                .unwrap();
        assert_eq!(cli.days, 30);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.validate);
    }

    #[test]
    fn rejects_negative_days() {
        assert!(CommandLine::try_parse_from(["gilded-rose", "--days", "-1"]).is_err());
    }
}
