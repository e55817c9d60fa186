// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Interactive console: loads a program named on the command line and
//! runs it under the ASCII convention, echoing text lines to stdout
//! and reading command lines from stdin whenever the machine blocks
//! awaiting input.

use std::io::BufRead;
use intcode::{ascii::{Console, Event}, machine::parsing, Machine};

fn main() -> Result<(), String> {
	let path = std::env::args().nth(1)
		.ok_or_else(|| "Usage: intcode <program-file>".to_owned())?;
	let text = std::fs::read_to_string(&path)
		.map_err(|err| format!("Could not read {path}: {err}"))?;
	let program = parsing::from_str(text.trim_end())
		.map_err(|err| err.to_string())?;

	let mut console = Console::new(Machine::new(program));
	let stdin = std::io::stdin();
	let mut commands = stdin.lock().lines();
	loop {
		match console.next_event().map_err(|fault| fault.to_string())? {
			Event::Line(line) => println!("{line}"),
			Event::Score(num) => println!("Score: {num}"),
			Event::Prompt => {
				let Some(command) = commands.next() else { return Ok(()) };
				console.send_line(&command.map_err(|err| err.to_string())?);
			}
			Event::End => return Ok(()),
		}
	}
}
