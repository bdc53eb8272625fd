use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

use multipack::config::MultipackConfig;
use multipack::io;
use multipack::io::cli::Cli;
use multipack::io::output::MPOutput;
use multipack::io::svg_export::solution_to_svg;
use multipack::io::{export, import};
use multipack::opt::MultiPacker;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            MultipackConfig::default()
        }
        Some(config_file) => io::read_json_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed MultipackConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_json_instance(&args.input_file)?;
    let instance = import::import(&ext_instance)?;
    info!(
        "[MAIN] Imported instance {:?} with {} items",
        instance.name,
        instance.n_items()
    );

    if config.sheet_size.is_none() {
        config.sheet_size = instance.sheet;
    }

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let solution = MultiPacker::new(config, rng).optimize(&instance.items)?;

    {
        let output = MPOutput {
            solution: export::export(&instance, &solution),
            instance: ext_instance,
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let svg = solution_to_svg(&instance, &solution, config.svg_draw_options, &instance.name);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
