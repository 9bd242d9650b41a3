use clap::{Parser, Subcommand};
use ledwave::color::Brightness;
use ledwave::config::{BRIGHT_THRESHOLD, ON_OFF_RATIO, PORT_WAV, REFERENCE_WAV};
use ledwave::config::{LENGTH_ERROR_MARGIN, VALUE_ERROR_MARGIN};
use ledwave::highlight::{highlight_bright_points_by, load_image, save_image, to_grayscale};
use ledwave::led::{LedPair, default_pairs, led_on_off_test};
use ledwave::wave::{Tolerance, compare_wav_files};
use std::{error::Error, path::PathBuf};

#[derive(Parser)]
#[command(name = "ledwave", about = "Bench checks for LED photos and synthesizer WAV output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Paint bright points of one image red and count them
    Highlight {
        image: PathBuf,
        #[arg(long, default_value_t = BRIGHT_THRESHOLD)]
        threshold: f64,
        #[arg(long, value_enum, default_value_t = Brightness::Lightness)]
        metric: Brightness,
        /// Where to write the highlighted image
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check that each LED-on photo has far more bright points than its LED-off photo
    LedTest {
        /// ON and OFF image paths; defaults to img_{1,2,3}_{on,off}.jpg
        #[arg(long, num_args = 2, value_names = ["ON", "OFF"])]
        pair: Vec<PathBuf>,
        #[arg(long, default_value_t = BRIGHT_THRESHOLD)]
        threshold: f64,
        #[arg(long, default_value_t = ON_OFF_RATIO)]
        ratio: usize,
        /// Directory for highlighted copies of every image
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Compare a reference WAV against a ported implementation's WAV
    CompareWav {
        #[arg(default_value = REFERENCE_WAV)]
        reference: PathBuf,
        #[arg(default_value = PORT_WAV)]
        port: PathBuf,
        #[arg(long, default_value_t = LENGTH_ERROR_MARGIN)]
        length_margin: usize,
        #[arg(long, default_value_t = VALUE_ERROR_MARGIN)]
        value_margin: i64,
    },
    /// Write the grayscale version of an image
    Grayscale { image: PathBuf, output: PathBuf },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Highlight {
            image,
            threshold,
            metric,
            output,
        } => {
            let img = load_image(&image)?;
            let (highlighted, count) = highlight_bright_points_by(&img, threshold, metric);
            println!(
                "Found {} bright points ({:?} > {}).",
                count, metric, threshold
            );
            if let Some(output) = output {
                save_image(&highlighted, output)?;
            }
        }
        Commands::LedTest {
            pair,
            threshold,
            ratio,
            out_dir,
        } => {
            let pairs = if pair.is_empty() {
                default_pairs()
            } else {
                pair.chunks_exact(2)
                    .map(|p| LedPair::new(p[0].clone(), p[1].clone()))
                    .collect()
            };
            led_on_off_test(&pairs, threshold, ratio, out_dir.as_deref())?;
        }
        Commands::CompareWav {
            reference,
            port,
            length_margin,
            value_margin,
        } => {
            let tolerance = Tolerance {
                length_margin,
                value_margin,
            };
            compare_wav_files(&reference, &port, tolerance)?;
        }
        Commands::Grayscale { image, output } => {
            let gray = to_grayscale(&load_image(&image)?);
            gray.save(&output)?;
            println!("Grayscale image saved to {}", output.display());
        }
    }

    Ok(())
}
