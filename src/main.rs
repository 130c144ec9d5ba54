//! # Citation CLI
//!
//! Command-line interface for rendering citations from JSON parameters.
//!
//! ## Usage
//!
//! ```bash
//! # Render main.json with the assets in ./assets
//! citation render main.json
//!
//! # Render without asset files, as an animated GIF
//! citation render main.json --builtin-assets --gif -o out.gif
//!
//! # Show the resolved layout without writing anything
//! citation check main.json --builtin-assets
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use citation::{
    Assets, CitationError,
    assets::DEFAULT_DIR,
    config::CitationParams,
    layout, render,
};

/// Citation - M.O.A. citation renderer
#[derive(Parser, Debug)]
#[command(name = "citation")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct AssetArgs {
    /// Directory holding BMmini.ttf and logo.png
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DIR)]
    assets: PathBuf,

    /// Use the embedded font and logo instead of an asset directory
    #[arg(long, conflicts_with = "assets")]
    builtin_assets: bool,
}

impl AssetArgs {
    fn load(&self) -> Result<Assets, CitationError> {
        if self.builtin_assets {
            Assets::builtin()
        } else {
            Assets::from_dir(&self.assets)
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a citation to PNG or GIF
    Render {
        /// JSON parameter file
        params: PathBuf,

        /// Output file (defaults to citation.png or citation.gif)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Render the slide-in animation regardless of fileType
        #[arg(long)]
        gif: bool,

        /// GIF frames per second
        #[arg(long)]
        frame_rate: Option<u32>,

        #[command(flatten)]
        assets: AssetArgs,
    },

    /// Validate parameters and print the resolved layout
    Check {
        /// JSON parameter file
        params: PathBuf,

        #[command(flatten)]
        assets: AssetArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(command: Commands) -> Result<(), CitationError> {
    match command {
        Commands::Render {
            params,
            output,
            gif,
            frame_rate,
            assets,
        } => {
            let params = CitationParams::from_path(&params)?;
            let citation = params.to_citation()?;
            let assets = assets.load()?;

            let mut options = params.render_options();
            options.animated |= gif;
            if let Some(rate) = frame_rate {
                options.gif.frame_rate = rate;
            }
            let default_output = if options.animated {
                PathBuf::from("citation.gif")
            } else {
                PathBuf::from(params.default_output())
            };
            let output = output.unwrap_or(default_output);
            options.output = Some(output.clone());

            let bytes = render(&citation, &assets, &options)?;
            println!("Wrote {} ({} bytes)", output.display(), bytes.len());
            Ok(())
        }

        Commands::Check { params, assets } => {
            let params = CitationParams::from_path(&params)?;
            let citation = params.to_citation()?;
            let assets = assets.load()?;
            let font = assets.font(citation.geometry.font_size)?;
            let resolution = layout::resolve(&citation, &font);

            println!("size:          {}x{}", citation.width(), resolution.height);
            if resolution.resized() {
                println!("resized from:  {}", resolution.original_height);
            }
            if resolution.clamped {
                println!("clamped at:    {} (reason overflows)", citation.resize_limit);
            }
            println!("reason lines:  {}", resolution.reason_lines());
            println!("font:          {}", font.face().name());
            Ok(())
        }
    }
}
