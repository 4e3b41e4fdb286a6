/*
 * Copyright 2018 Ian Johnson
 *
 * This is free software, distributed under the MIT license.  A copy of the
 * license can be found in the LICENSE file in the project root, or at
 * https://opensource.org/licenses/MIT.
 */

//! The `chip8` binary program.
//!
//! A thin driver around the machine: it parses arguments, reads the ROM
//! image, then runs the cooperative loop (an instruction budget per frame,
//! timer ticks per the wall clock, a display snapshot to the terminal).
//! Execution faults are logged and the machine keeps going; only a failure
//! to construct or load the machine exits the process.

extern crate chip8;
extern crate clap;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;

use std::fs::File;
use std::io::{self, Read, Write};
use std::process;
use std::thread;

use clap::{App, Arg, ArgMatches};
use failure::{Error, ResultExt};
use log::LevelFilter;

use chip8::display;
use chip8::timer::Ticker;
use chip8::Machine;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let matches = App::new("chip8")
        .version(VERSION)
        .author("Ian Johnson <ianprime0509@gmail.com>")
        .about("A Chip-8 interpreter")
        .help_message("show this help message and exit")
        .version_message("show version information and exit")
        .arg(
            Arg::with_name("cycles")
                .short("c")
                .long("cycles")
                .value_name("N")
                .help("set instructions executed per frame")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("frequency")
                .long("frequency")
                .value_name("FREQ")
                .help("set timer frequency (in Hz)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("frames")
                .long("frames")
                .value_name("N")
                .help("exit after running N frames")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("increase verbosity"),
        )
        .arg(
            Arg::with_name("FILE")
                .help("set the program file to run")
                .required(true)
                .index(1),
        )
        .get_matches();

    let verbosity = matches.occurrences_of("verbose");
    let filter = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter(None, filter)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        for cause in e.causes().skip(1) {
            info!("caused by: {}", cause);
        }
        trace!("backtrace: {}", e.backtrace());
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let cycles = matches
        .value_of("cycles")
        .map(|n| n.parse::<u32>())
        .unwrap_or(Ok(10))
        .context("invalid cycles argument")?;
    let frequency = matches
        .value_of("frequency")
        .map(|n| n.parse::<u32>())
        .unwrap_or(Ok(60))
        .context("invalid frequency argument")?;
    let frames = matches
        .value_of("frames")
        .map(|n| n.parse::<u64>().map(Some))
        .unwrap_or(Ok(None))
        .context("invalid frames argument")?;

    let filename = matches.value_of("FILE").unwrap();
    let mut file =
        File::open(filename).with_context(|_| format!("could not open file '{}'", filename))?;
    let mut program = Vec::new();
    file.read_to_end(&mut program)
        .with_context(|_| format!("could not read file '{}'", filename))?;

    let mut machine = Machine::new();
    machine
        .load_program(&program)
        .with_context(|_| format!("could not load program from file '{}'", filename))?;
    info!("loaded {} bytes from '{}'", program.len(), filename);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "\x1B[2J")?;

    let mut ticker = Ticker::new(frequency);
    let mut frame = 0u64;
    loop {
        for _ in 0..cycles {
            // The machine has already skipped past a faulting instruction,
            // so a fault is worth a warning and nothing more.
            if let Err(e) = machine.step() {
                warn!("{}", e);
            }
        }
        for _ in 0..ticker.lap() {
            machine.tick();
        }

        render(&mut out, &machine)?;
        if machine.st() > 0 {
            debug!("sound timer active: {}", machine.st());
        }

        frame += 1;
        if let Some(limit) = frames {
            if frame >= limit {
                break;
            }
        }
        thread::yield_now();
    }

    Ok(())
}

/// Draws the machine's display snapshot to the terminal.
fn render<W: Write>(out: &mut W, machine: &Machine) -> Result<(), Error> {
    let mut frame = String::with_capacity((display::WIDTH + 1) * display::HEIGHT);
    for (x, _, on) in machine.display().snapshot() {
        frame.push(if on { '█' } else { ' ' });
        if x == display::WIDTH - 1 {
            frame.push('\n');
        }
    }
    write!(out, "\x1B[H{}", frame)?;
    out.flush()?;
    Ok(())
}
