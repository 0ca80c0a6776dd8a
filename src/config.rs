use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "schedscrape", about = "Concurrent NFL team schedule scraper")]
pub struct Config {
    /// Worker pool size
    #[arg(long, env = "WORKERS", default_value_t = 10)]
    pub workers: usize,

    /// First season to fetch (inclusive)
    #[arg(long, env = "SEASON_START", default_value_t = 2003)]
    pub season_start: u16,

    /// Last season to fetch (inclusive)
    #[arg(long, env = "SEASON_END", default_value_t = 2021)]
    pub season_end: u16,

    /// Team slug used in the schedule URL
    #[arg(long, env = "TEAM", default_value = "cin")]
    pub team: String,

    /// Schedule URL prefix; team slug and season year are appended
    #[arg(
        long,
        env = "BASE_URL",
        default_value = "https://www.espn.com/nfl/team/schedule/_/name"
    )]
    pub base_url: String,

    /// Repeat the season list this many times to synthesize batch load
    #[arg(long, env = "REPEAT", default_value_t = 1)]
    pub repeat: usize,

    /// Season fetched ad hoc after each batch for inspection
    #[arg(long, env = "SAMPLE_SEASON", default_value_t = 2021)]
    pub sample_season: u16,

    /// Parser variant(s) to run, one timed batch each
    #[arg(long, value_enum, default_value_t = ParserChoice::Both)]
    pub parser: ParserChoice,

    /// Output format for the printed sample table
    #[arg(long, value_enum, default_value_t = SampleFormat::Text)]
    pub format: SampleFormat,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserChoice {
    Both,
    Dom,
    Auto,
}

impl ParserChoice {
    /// Registry names of the selected variants, in run order.
    pub fn variant_names(self) -> &'static [&'static str] {
        match self {
            ParserChoice::Both => &["dom", "auto"],
            ParserChoice::Dom => &["dom"],
            ParserChoice::Auto => &["auto"],
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Text,
    Json,
}
