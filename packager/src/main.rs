use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use boxstack::entities::{DefaultPackResultComparator, Instance, PackedContainer};
use boxstack::io::{export, import};
use clap::Parser as ClapParser;
use log::{info, warn};
use packager::config::{PackagerConfig, Strategy};
use packager::{EPOCH, io};
use packager::io::cli::{Cli, Mode};
use packager::io::output::PackagerOutput;
use packager::opt::brute_force::BruteForcePackager;
use packager::opt::laff::LaffPackager;
use packager::opt::packager::Packager;
use packager::opt::strategy::PackStrategy;
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PackagerConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    config.validate()?;
    info!("[MAIN] Successfully parsed PackagerConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("invalid input file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import::import(&ext_instance)?;
    info!(
        "[MAIN] instance {} with {} items (volume: {}, weight: {}) and {} containers",
        instance.name,
        instance.total_item_qty(),
        instance.item_volume().separate_with_commas(),
        instance.item_weight().separate_with_commas(),
        instance.containers.len()
    );

    let packed = match config.strategy {
        Strategy::BruteForce => {
            let strategy = BruteForcePackager::new(&config, Arc::new(DefaultPackResultComparator));
            solve(&instance, strategy, config, args.mode)?
        }
        Strategy::LargestAreaFitFirst => {
            solve(&instance, LaffPackager::from_config(&config), config, args.mode)?
        }
    };

    let output = PackagerOutput {
        instance: ext_instance,
        solution: packed.map(|p| export::export(&p, *EPOCH)),
        config,
    };
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))
}

fn solve<S: PackStrategy>(
    instance: &Instance,
    strategy: S,
    config: PackagerConfig,
    mode: Mode,
) -> Result<Option<Vec<PackedContainer>>> {
    let packager = Packager::new(instance.containers.clone(), strategy, config)?;
    let packed = match mode {
        Mode::Single => packager.pack(&instance.items)?.map(|pc| vec![pc]),
        Mode::List => packager.pack_list(&instance.items, config.container_limit)?,
    };
    if packed.is_none() {
        warn!("[MAIN] no solution found for instance {}", instance.name);
    }
    Ok(packed)
}
