use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub(crate) struct Args {
    /// URLs to scrape
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Maximum number of pages fetched and parsed at once
    /// (defaults to available cores minus one)
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    /// Words shown per page in the report
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Emit the full store as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Suppress progress logging
    #[arg(short, long)]
    pub quiet: bool,
}
