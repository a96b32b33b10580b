//! A terminal user interface for a todo list.

mod app;
mod config;
mod error;
mod events;
mod state;
mod store;
mod ui;

use anyhow::Result;
use app::App;
use clap::{crate_version, Arg};
use config::Config;

fn main() -> Result<()> {
    let matches = clap::App::new("todo-tui")
        .version(crate_version!())
        .about("A terminal user interface for a todo list")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    App::start(config)
}
