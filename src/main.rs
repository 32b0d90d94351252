use clap::Parser;
use colored::Colorize;
use ipv4_subnet_calc::cli::Cli;
use ipv4_subnet_calc::logging::init_logging;
use ipv4_subnet_calc::{calculate, render, Config};
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => cli.apply(config),
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return ExitCode::from(2);
        }
    };
    if let Err(e) = init_logging(&config, cli.verbose) {
        eprintln!("{e}");
    }
    log::info!("#Start main() cidr={}", cli.cidr);

    let stderr_color = config.color && std::io::stderr().is_terminal();
    let config = Config {
        color: config.color && std::io::stdout().is_terminal(),
        ..config
    };

    match calculate(&cli.cidr, config.edge_policy) {
        Ok(report) => match render(&report, &config) {
            Ok(out) => {
                println!("{out}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("render failed: {e}");
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::info!("{} rejected: {:?}", cli.cidr, e);
            let msg = e.localized(config.lang);
            if stderr_color {
                eprintln!("{}", msg.red());
            } else {
                eprintln!("{msg}");
            }
            ExitCode::FAILURE
        }
    }
}
