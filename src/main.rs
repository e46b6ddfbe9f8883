//! Prints the BLEP table as a C array, or its spectrum if any argument is given.

use std::io::{BufWriter, Write};
use std::process::ExitCode;

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use blep_table::output::{write_c_table, write_spectrum};
use blep_table::{generate_spectrum, generate_table, Result, TableConfig};

const TABLE_NAME: &str = "sine_integral";

fn run(spectrum: bool) -> Result<()> {
    let config = TableConfig::default();
    let mut out = BufWriter::new(std::io::stdout().lock());

    if spectrum {
        let bins = generate_spectrum(&config)?;
        write_spectrum(&mut out, &bins)?;
    } else {
        let table = generate_table(&config)?;
        write_c_table(&mut out, &table, TABLE_NAME)?;
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("logger setup failed: {err}");
    }

    let spectrum = std::env::args().len() > 1;

    match run(spectrum) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
