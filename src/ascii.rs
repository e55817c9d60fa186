// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! The ASCII convention layered over the machine: output values in
//! `0..=255` are character codes, and a single value outside that
//! range is a final score rather than a character. The machine itself
//! passes every value through unaltered; only this layer interprets.

use crate::machine::{Fault, Machine, Step};


#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub enum Event {
	/// A full line of text, without its trailing newline.
	Line(String),
	/// A single output value outside the character range.
	Score(i128),
	/// The machine awaits a command line.
	Prompt,
	End,
}

pub struct Console {
	machine: Machine,
	line: String,
}

impl Console {
	pub fn new(machine: Machine) -> Self {
		Self { machine, line: String::new() }
	}

	/// Queues a command line as character-code inputs, newline included.
	pub fn send_line(&mut self, command: &str) {
		for b in command.bytes() {
			self.machine.provide_input(i128::from(b));
		}
		self.machine.provide_input(i128::from(b'\n'));
	}

	pub fn next_event(&mut self) -> Result<Event, Fault> {
		use std::mem::take;
		loop {
			match self.machine.run()? {
				Step::Output(num) => match u8::try_from(num) {
					Ok(b'\n') => return Ok(Event::Line(take(&mut self.line))),
					Ok(b) => self.line.push(char::from(b)),
					Err(_) => return Ok(Event::Score(num)),
				},
				Step::NeedsInput => return Ok(Event::Prompt),
				Step::Halted => return Ok(if self.line.is_empty() { Event::End }
					else { Event::Line(take(&mut self.line)) }),
			}
		}
	}
}
