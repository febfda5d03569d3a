//! One module per subcommand. Each `run_*` takes its parsed args, the
//! loaded graph where it needs one, and the resolved [`OutputMode`].
//!
//! [`OutputMode`]: crate::output::OutputMode

pub mod closure;
pub mod completions;
pub mod components;
pub mod cycle;
pub mod euler;
pub mod hamilton;
pub mod path;
pub mod random;
pub mod show;
pub mod traverse;

use std::io::{self, Write};

use crate::output::pretty_rule;

/// Text-mode matrix: one row per line, cells as `0`/`1`.
pub fn write_matrix_text(rows: &[Vec<bool>], w: &mut dyn Write) -> io::Result<()> {
    for row in rows {
        let cells: Vec<&str> = row.iter().map(|&set| if set { "1" } else { "0" }).collect();
        writeln!(w, "{}", cells.join(" "))?;
    }
    Ok(())
}

/// Pretty matrix grid with column and row headers; set cells show as `●`.
pub fn write_matrix_pretty(rows: &[Vec<bool>], w: &mut dyn Write) -> io::Result<()> {
    let width = rows.len().saturating_sub(1).to_string().len().max(1);
    write!(w, "{:>width$} │", "")?;
    for col in 0..rows.len() {
        write!(w, " {col:>width$}")?;
    }
    writeln!(w)?;
    writeln!(w, "{}┼{}", "─".repeat(width + 1), "─".repeat((width + 1) * rows.len()))?;
    for (i, row) in rows.iter().enumerate() {
        write!(w, "{i:>width$} │")?;
        for &set in row {
            write!(w, " {:>width$}", if set { "●" } else { "·" })?;
        }
        writeln!(w)?;
    }
    pretty_rule(w)
}
