use clap::Parser;
use todopad::cli::commands::Cli;
use todopad::io::config_io::load_config;
use todopad::io::logging::init_file_logging;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &cli.log_file
        && let Err(e) = init_file_logging(path, config.log.level.as_deref())
    {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = todopad::tui::run(&config, cli.demo) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
