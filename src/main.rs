use clap::Parser;
use image_manipulator::config::load_config_or_default;
use image_manipulator::logging::init_logging;
use image_manipulator::Pipeline;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "manipulate")]
#[command(about = "Image Manipulator: write a grayscale copy and a thumbnail of an image")]
#[command(version)]
struct Cli {
    /// Input file path (bmp, jpg or png) [default: ./lena.png]
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file directory [default: ./]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Configuration file (TOML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config_or_default(cli.config.as_deref())?;
    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    config.logging = config.logging.with_verbosity(cli.verbose);

    let _guard = init_logging(&config.logging)?;

    let report = Pipeline::new(config)?.run()?;

    for output in report.outputs() {
        if output.saved {
            println!("{} ({}x{})", output.path.display(), output.width, output.height);
        }
    }

    Ok(())
}
