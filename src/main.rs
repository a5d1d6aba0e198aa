use cidr_calc::config::{init_logging, Config};
use cidr_calc::output::render;
use cidr_calc::{calculate_all, read_inputs};
use clap::Parser;
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    if config.no_color {
        colored::control::set_override(false);
    }

    let inputs = if config.cidrs.is_empty() {
        log::debug!("No CIDR arguments, reading stdin");
        read_inputs(io::stdin().lock())?
    } else {
        config.cidrs.clone()
    };

    let calculations = calculate_all(inputs);
    let mut failed = 0;
    for calc in &calculations {
        match &calc.result {
            Ok(info) => log::debug!("{} -> {}", calc.input, info.cidr()),
            Err(e) => {
                failed += 1;
                log::warn!("Rejected {:?}: {e}", calc.input);
            }
        }
    }

    let mut stdout = io::stdout().lock();
    render(&mut stdout, &calculations, config.format)?;
    stdout.flush()?;

    log::info!(
        "#End main() {} input(s), {} rejected",
        calculations.len(),
        failed
    );
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
