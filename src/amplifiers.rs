// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Amplifier orchestration: five independent machines, each loaded
//! from the same controller image, chained in series or in a feedback
//! loop. The loop is plain cooperative scheduling; each machine is
//! driven to its next suspension point in round-robin order.

use crate::machine::{Fault, Machine, Step};


#[cfg_attr(test, derive(Debug))]
pub enum Error {
	Machine(Fault),
	/// An amplifier halted before producing its signal.
	NoOutput,
	/// An amplifier requested more input than the chain provides.
	Starved,
}

impl From<Fault> for Error {
	fn from(fault: Fault) -> Self {
		Error::Machine(fault)
	}
}


/// Runs one amplifier per phase setting, feeding each the previous
/// amplifier’s output signal (the first gets 0).
pub fn series_signal(program: &[i128], phases: &[i128]) -> Result<i128, Error> {
	let mut signal = 0;
	for &phase in phases {
		let mut amplifier = Machine::new(program.to_vec());
		amplifier.provide_input(phase);
		amplifier.provide_input(signal);
		signal = match amplifier.run()? {
			Step::Output(num) => num,
			Step::Halted => return Err(Error::NoOutput),
			Step::NeedsInput => return Err(Error::Starved),
		};
	}
	Ok(signal)
}

/// Wires the last amplifier’s output back into the first and drives
/// all five round-robin until one of them halts; the signal in flight
/// at that point is the final one.
pub fn feedback_signal(program: &[i128], phases: &[i128]) -> Result<i128, Error> {
	let prototype = Machine::new(program.to_vec());
	let mut amplifiers = phases.iter()
		.map(|&phase| {
			let mut amplifier = prototype.clone();
			amplifier.provide_input(phase);
			amplifier
		})
		.collect::<Vec<_>>();

	let mut signal = 0;
	'feedback: loop {
		for amplifier in amplifiers.iter_mut() {
			amplifier.provide_input(signal);
			match amplifier.run()? {
				Step::Output(num) => signal = num,
				Step::Halted => break 'feedback,
				Step::NeedsInput => return Err(Error::Starved),
			}
		}
	}
	Ok(signal)
}

pub fn max_series_signal(program: &[i128]) -> Result<i128, Error> {
	use itertools::Itertools as _;
	(0..=4i128).permutations(5)
		.map(|phases| series_signal(program, &phases))
		.fold_ok(i128::MIN, i128::max)
}

pub fn max_feedback_signal(program: &[i128]) -> Result<i128, Error> {
	use itertools::Itertools as _;
	(5..=9i128).permutations(5)
		.map(|phases| feedback_signal(program, &phases))
		.fold_ok(i128::MIN, i128::max)
}
