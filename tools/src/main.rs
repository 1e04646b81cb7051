use std::path::{Path, PathBuf};

use asset_gen::config::GenConfig;
use asset_gen::error::GenError;
use asset_gen::logging::{self, LogLevel};
use asset_gen::pack;
use asset_gen::Step;
use clap::{Parser, Subcommand};

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 2;
const EXIT_IO: i32 = 10;
const EXIT_PAK: i32 = 11;
const EXIT_LEVEL: i32 = 12;
const EXIT_IMAGE: i32 = 13;

#[derive(Parser)]
#[command(
    name = "carnifex-stubs",
    version,
    about = "Placeholder asset generator for the Carnifex engine"
)]
struct Cli {
    /// Output root; overrides `output_root` from the config file.
    #[arg(long, global = true, value_name = "DIR")]
    out: Option<PathBuf>,

    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    #[arg(short, long, global = true)]
    quiet: bool,

    /// Defaults to `all` when omitted.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// progs.dat, silent sounds and scripts/quake.rc
    Bundle,
    /// Placeholder level file and its README
    Level,
    /// Force the level version to 29 and clone it as the start map
    PatchLevel,
    /// Status bar and HUD pictures
    Gfx,
    /// Every generator, in dependency order
    All,
    /// Pack the output tree into a PAK archive
    Pak {
        #[arg(long, value_name = "FILE")]
        out_file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::set_max_level(if cli.verbose {
        LogLevel::Debug
    } else if cli.quiet {
        LogLevel::Warn
    } else {
        LogLevel::Info
    });

    let config = match load_config(cli.config.as_deref(), cli.out) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(EXIT_USAGE);
        }
    };

    let exit_code = match cli.command.unwrap_or(Commands::All) {
        Commands::Bundle => run_generators(&[Step::Bundle], &config),
        Commands::Level => run_generators(&[Step::Level], &config),
        Commands::PatchLevel => run_generators(&[Step::PatchLevel], &config),
        Commands::Gfx => run_generators(&[Step::Graphics], &config),
        Commands::All => run_generators(&Step::ALL, &config),
        Commands::Pak { out_file } => run_pak(&config, out_file),
    };
    std::process::exit(exit_code);
}

fn load_config(path: Option<&Path>, out: Option<PathBuf>) -> Result<GenConfig, GenError> {
    let mut config = match path {
        Some(path) => GenConfig::load(path)?,
        None => GenConfig::default(),
    };
    if let Some(out) = out {
        config.output_root = out;
    }
    Ok(config)
}

fn run_generators(steps: &[Step], config: &GenConfig) -> i32 {
    let writer = match asset_gen::run_steps(steps, config) {
        Ok(writer) => writer,
        Err(err) => {
            let step_names: Vec<&str> = steps.iter().map(|step| step.name()).collect();
            eprintln!("{} failed: {}", step_names.join(", "), err);
            return exit_code_for(&err);
        }
    };

    for step in steps {
        println!("{} ok", step.name());
    }
    println!(
        "wrote {} files ({} bytes) under {}",
        writer.written().len(),
        writer.bytes_written(),
        writer.root().display()
    );
    if steps.contains(&Step::Bundle) || steps.contains(&Step::Level) {
        println!(
            "note: these are placeholders; a real game needs compiled QuakeC, \
             real sounds and compiled maps"
        );
    }
    EXIT_SUCCESS
}

fn run_pak(config: &GenConfig, out_file: Option<PathBuf>) -> i32 {
    let validation = config.validate();
    if !validation.is_ok() {
        eprintln!("config: {}", validation.errors.join("; "));
        return EXIT_USAGE;
    }
    let root = &config.output_root;
    if !root.is_dir() {
        eprintln!("output root not found: {}", root.display());
        return EXIT_IO;
    }
    let pak_path = out_file.unwrap_or_else(|| root.join(&config.pak_name));
    match pack::pack_tree(root, &pak_path) {
        Ok(summary) => {
            println!(
                "packed {} entries into {} ({} bytes)",
                summary.entries,
                summary.pak_path.display(),
                summary.bytes
            );
            EXIT_SUCCESS
        }
        Err(err) => {
            eprintln!("pak failed: {}", err);
            exit_code_for(&err)
        }
    }
}

fn exit_code_for(err: &GenError) -> i32 {
    match err {
        GenError::Io { .. } => EXIT_IO,
        GenError::Lmp { .. } => EXIT_IMAGE,
        GenError::Pak(_) => EXIT_PAK,
        GenError::Bsp { .. } => EXIT_LEVEL,
        GenError::Config(_) => EXIT_USAGE,
    }
}
