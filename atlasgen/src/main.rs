use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use atlas_pack::glyph::build_atlas;
use atlas_pack::io::svg::atlas_to_svg;
use atlas_pack::io::{export, import};
use atlasgen::config::AtlasConfig;
use atlasgen::io;
use atlasgen::io::cli::Cli;
use atlasgen::io::output::AtlasOutput;
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            AtlasConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    args.apply_overrides(&mut config);

    info!("[MAIN] Successfully parsed AtlasConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let charset = import::import(&ext_instance)?;
    let atlas = build_atlas(&charset, &config.settings)?;

    {
        let output = AtlasOutput {
            solution: export::export(&atlas),
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
        let svg = atlas_to_svg(&atlas, config.svg_draw_options, input_file_stem);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
