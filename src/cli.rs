mod calendar;
mod check;
mod source;

use clap::{Parser, Subcommand};

use crate::{
    cli::{calendar::CalendarArgs, check::CheckArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub async fn run(self) -> Result {
        match self.command {
            Command::Check(args) => args.run().await,
            Command::Calendar(args) => args.run().await,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: check whether the stay can be booked in any of the rooms.
    #[clap(name = "check")]
    Check(Box<CheckArgs>),

    /// Show which nights of the room are already booked.
    #[clap(name = "calendar")]
    Calendar(Box<CalendarArgs>),
}
