use anyhow::Context;
use clap::{Parser, Subcommand};
mod auth;
use pixelveil::{OsRandom, carrier};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pixelveil")]
#[command(
    version,
    about = "Hide encrypted text inside the low bits of PNG images."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encrypts a message and embeds it in a copy of the image
    #[command(arg_required_else_help = true)]
    Hide {
        /// Carrier image to copy (any format the image crate can decode)
        image: PathBuf,
        /// Where to write the image with the embedded message (use .png)
        output: PathBuf,
        /// The message to hide
        message: String,
    },

    /// Extracts and decrypts a hidden message
    #[command(arg_required_else_help = true)]
    Reveal {
        /// Image that holds a hidden message
        image: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let password = auth::read_password()?;
    match args.command {
        Commands::Hide {
            image,
            output,
            message,
        } => {
            let carrier_image = carrier::load(&image)?;
            let hidden = pixelveil::hide(carrier_image, message.as_bytes(), &password, &mut OsRandom)?;
            carrier::save(&hidden, &output)?;
            println!("message hidden in {}", output.display());
        }
        Commands::Reveal { image } => {
            let carrier_image = carrier::load(&image)?;
            let message = pixelveil::reveal(&carrier_image, &password)?;
            let text = String::from_utf8(message).context("hidden data is not valid UTF-8")?;
            println!("{text}");
        }
    }

    Ok(())
}
