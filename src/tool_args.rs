use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct ToolArgs {
    /// Determines which group gets enumerated
    #[command(subcommand)]
    pub(crate) group: GroupType,

    /// Skips printing out every item and instead prints out the number of
    /// items the group holds
    #[arg(short, long, global = true)]
    pub(crate) count: bool,

    /// Splits the enumeration across threads
    #[cfg(feature = "rayon")]
    #[arg(short, long, global = true)]
    pub(crate) parallel: bool,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Subcommand)]
pub(crate) enum GroupType {
    /// Every ordered arrangement of k indices out of 0..n
    Permute(Domain),

    /// Every unordered selection of k indices out of 0..n
    Combine(Domain),

    /// Every way of picking one element from each row
    Cartesian {
        /// Rows to combine as a json array of string arrays, e.g.
        /// '[["a0","a1"],["b0","b1","b2"]]'
        #[arg(value_parser = parse_json_to_rows)]
        rows: Rows,
    },
}

#[derive(Args)]
pub(crate) struct Domain {
    /// Size of the set the indices are drawn from
    pub(crate) n: usize,

    /// Number of indices in each item
    pub(crate) k: usize,
}

pub(crate) type Rows = Vec<Vec<String>>;

/// Parses the rows from a single json argument so the shell does not split
/// them
pub(crate) fn parse_json_to_rows(s: &str) -> Result<Rows, String> {
    serde_json::from_str(s).map_err(|e| format!("Failed to collect rows: {e}"))
}
