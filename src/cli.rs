//! CLI argument parsing with clap.

use clap::{ArgAction, Parser};

use crate::params::{CardParams, DisplayParams};

/// Get two cat pictures with a custom message and put them side by side.
///
/// The card is written to `cat-card.jpg` in the current directory.
#[derive(Parser, Debug)]
#[command(name = "cat-card", version, about, disable_help_flag = true)]
pub struct Cli {
    /// Caption for the first picture.
    #[arg(short, long, default_value = "Hello")]
    pub greeting: String,

    /// Caption for the second picture (who to greet).
    #[arg(short = 'o', long, default_value = "You")]
    pub who: String,

    /// Width of each picture; the second picture is placed at this x offset.
    #[arg(short, long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height of each picture.
    #[arg(short = 'h', long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Text color of the captions (name or #hex).
    #[arg(short, long, default_value = "Pink")]
    pub color: String,

    /// Text size of the captions.
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)] // Consumed by clap; printing help exits before it is read
    help: Option<bool>,
}

impl Cli {
    /// Turn the parsed flags into validated card parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if a caption is empty or the color is malformed.
    pub fn card_params(&self) -> Result<CardParams, String> {
        CardParams::new(
            self.greeting.clone(),
            self.who.clone(),
            DisplayParams {
                width: self.width,
                height: self.height,
                color: self.color.clone(),
                size: self.size,
            },
        )
    }
}
