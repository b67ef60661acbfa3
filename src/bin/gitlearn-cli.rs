//! gitlearn CLI - the simulator on a plain terminal
//!
//! Run with: cargo run --bin gitlearn-cli -- [--config gitlearn.json]
//! Set RUST_LOG=debug to watch dispatch.

use std::io::{self, BufRead, Write};

use gitlearn::error::{GitLearnError, GitLearnResult};
use gitlearn::platform::{flush, Console};
use gitlearn::shell::{Terminal, TerminalLine};
use gitlearn::SimConfig;

/// Prints output lines; input echoes are skipped because the user just typed them
struct Stdout<W: Write> {
    out: W,
}

impl<W: Write> Console for Stdout<W> {
    fn write_lines(&mut self, lines: &[TerminalLine]) -> GitLearnResult<()> {
        for line in lines.iter().filter(|l| !l.is_input) {
            writeln!(self.out, "{}", line.text)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> GitLearnResult<()> {
        write!(self.out, "\x1b[2J\x1b[H")?;
        Ok(())
    }
}

fn load_config() -> GitLearnResult<SimConfig> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().ok_or_else(|| {
                GitLearnError::Io(io::Error::new(io::ErrorKind::InvalidInput, "--config needs a path"))
            })?;
            log::info!("loading config from {}", path);
            return SimConfig::from_json(&std::fs::read_to_string(path)?);
        }
    }
    Ok(SimConfig::default())
}

fn main() -> GitLearnResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut term = Terminal::new(load_config()?);
    let mut console = Stdout { out: io::stdout() };
    flush(&mut term, &mut console)?;

    let stdin = io::stdin();
    loop {
        print!("{}", term.prompt());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        match line.trim() {
            "exit" | "quit" => break,
            _ => {
                term.submit(line.trim_end_matches(['\r', '\n']));
                flush(&mut term, &mut console)?;
            }
        }
    }
    Ok(())
}
