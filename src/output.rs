//! Text renderings of tables and spectra.

use std::io::Write;

use crate::dsp::spectrum::SpectrumBin;
use crate::table::BlepTable;
use crate::Result;

/// Lines of the C array never exceed this many characters.
pub const LINE_WIDTH: usize = 80;

/// Writes the table as a C array definition named `name`.
pub fn write_c_table(mut out: impl Write, table: &BlepTable, name: &str) -> Result<()> {
    writeln!(out, " /*")?;
    writeln!(out, "  * Table generated by blep-table.")?;
    writeln!(out, "  * residual: {:.6} dB", table.residual_db())?;
    writeln!(out, "  */")?;
    writeln!(out)?;
    writeln!(out, "const int {}[{}] = {{", name, table.len())?;

    let mut column = 0;
    for value in table.values.iter() {
        let item = format!("{value},");
        if column > 0 && column + item.len() > LINE_WIDTH {
            writeln!(out)?;
            column = 0;
        }
        out.write_all(item.as_bytes())?;
        column += item.len();
    }
    if column != 0 {
        writeln!(out)?;
    }

    writeln!(out, "}};")?;
    Ok(())
}

/// Writes one `frequency magnitude_db phase` line per bin.
pub fn write_spectrum(mut out: impl Write, bins: &[SpectrumBin]) -> Result<()> {
    for bin in bins {
        writeln!(out, "{} {} {}", bin.frequency, bin.magnitude_db, bin.phase)?;
    }
    Ok(())
}

/// Writes one `index value` line per sample.
pub fn write_gnuplot(mut out: impl Write, x: &[f64]) -> Result<()> {
    for (index, value) in x.iter().enumerate() {
        writeln!(out, "{index} {value}")?;
    }
    Ok(())
}
