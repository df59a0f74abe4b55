use clap::Parser;
use folio::cli::{Cli, Commands, LaunchOptions};
use folio::config;
use folio::gui::app::AppModel;
use folio::sys::runtime;
use relm4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config_path = cli.config_path()?;

    if let Some(Commands::InitConfig) = cli.command {
        config::write_default_config(&config_path)?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);
    let options = LaunchOptions {
        config_path: config_path.clone(),
        observe: config.intersection && !cli.no_observer,
        section: cli.section,
    };

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(config_path, tx);

    let app = RelmApp::new("dev.iffy.folio");

    app.run::<AppModel>((config, options, rx));
    Ok(())
}
