#![forbid(unsafe_code)]
use std::{
    fmt::Display,
    io::{BufWriter, Write},
};

use clap::Parser;
#[cfg(feature = "rayon")]
use groups_enumerator_rs::groups::{
    cartesian::rayon::par_cartesian, combination::rayon::par_combine,
    permutation::rayon::par_permute,
};
use groups_enumerator_rs::{
    Cartesian, combine,
    counting::{CartesianSize, combination_count, permutation_count},
    permute,
};
use itertools::Itertools;
use tool_args::{Domain, GroupType, ToolArgs};

mod tool_args;

/// Writes one item per line as a bracketed list
fn write_items<T: Display>(items: impl Iterator<Item = Vec<T>>) -> Result<(), String> {
    let mut out = BufWriter::new(std::io::stdout().lock());
    for item in items {
        writeln!(out, "[{}]", item.iter().join(", ")).map_err(|e| e.to_string())?;
    }
    out.flush().map_err(|e| e.to_string())
}

fn main() -> Result<(), String> {
    let parser = ToolArgs::parse();

    env_logger::builder()
        .filter_level(parser.verbose.log_level_filter())
        .init();

    // Only sizing the group, nothing gets enumerated
    if parser.count {
        let count = match &parser.group {
            GroupType::Permute(Domain { n, k }) => permutation_count(*n, *k),
            GroupType::Combine(Domain { n, k }) => combination_count(*n, *k),
            GroupType::Cartesian { rows } => rows.as_slice().cartesian_size(),
        }
        .map_err(|e| e.to_string())?;

        println!("{count}");
        return Ok(());
    }

    match &parser.group {
        GroupType::Permute(Domain { n, k }) => {
            log::info!("Permuting {k} out of {n}");
            #[cfg(feature = "rayon")]
            let permutations = if parser.parallel {
                par_permute(*n, *k)
            } else {
                permute(*n, *k)
            };
            #[cfg(not(feature = "rayon"))]
            let permutations = permute(*n, *k);

            write_items(permutations.map_err(|e| e.to_string())?.into_iter())
        },
        GroupType::Combine(Domain { n, k }) => {
            log::info!("Combining {k} out of {n}");
            #[cfg(feature = "rayon")]
            let combinations = if parser.parallel {
                par_combine(*n, *k)
            } else {
                combine(*n, *k)
            };
            #[cfg(not(feature = "rayon"))]
            let combinations = combine(*n, *k);

            write_items(combinations.map_err(|e| e.to_string())?.into_iter())
        },
        GroupType::Cartesian { rows } => {
            log::info!("Combining {} rows", rows.len());
            #[cfg(feature = "rayon")]
            if parser.parallel {
                let combinations = par_cartesian(rows.as_slice());
                return write_items(combinations.map_err(|e| e.to_string())?.into_iter());
            }

            // Walked lazily so large products never sit in memory at once
            let combinations = Cartesian::<String, _>::new(rows.as_slice())
                .map_err(|e| e.to_string())?;
            write_items(combinations)
        },
    }
}
