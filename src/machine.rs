// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! NOTE: The “Intcode computer” of this module is also used by the
//! `amplifiers`, `ascii`, and `droid` modules, and by the console
//! binary; for that reason:
//! - the machine and its snapshots implement `Clone`;
//! - relative (`Rel`) parameter mode and extended memory are always
//!   available (earlier per-puzzle copies drifted apart on both);
//! - generic `Num` support through the `Cell` trait (`i64`, `i128`,
//!   and `num_bigint::BigInt` in the `bignum` module).

use std::fmt::{Debug, Display};


#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub enum Mode { Pos, Imm, Rel }

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub enum Op {
	Add([Mode; 3]),
	Mul([Mode; 3]),
	In(Mode),
	Out(Mode),
	JumpIf(bool, [Mode; 2]),
	Lt([Mode; 3]),
	Eq([Mode; 3]),
	RelAdj(Mode),
	Halt,
}

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub enum OpError {
	/// The word is negative or too large to hold an encoded instruction.
	Format,
	/// The low two digits are not a defined opcode.
	Opcode(u8),
	/// A mode digit is not in {0, 1, 2}.
	Mode { slot: u8, digit: u8 },
}

const MODE_COEFFS: [u32; 3] = [100, 1_000, 10_000];

impl TryFrom<u32> for Op {
	type Error = OpError;
	fn try_from(word: u32) -> Result<Self, Self::Error> {
		fn mode(word: u32, slot: usize) -> Result<Mode, OpError> {
			use Mode::*;
			match (word / MODE_COEFFS[slot] % 10) as u8 {
				0 => Ok(Pos),
				1 => Ok(Imm),
				2 => Ok(Rel),
				digit => Err(OpError::Mode { slot: slot as u8, digit }),
			}
		}

		// All three mode digits must be valid, also for operand slots
		// the opcode does not use. Write targets are only checked when
		// the instruction executes (`Machine::target`).
		let modes = [mode(word, 0)?, mode(word, 1)?, mode(word, 2)?];

		match word % 100 {
			1 => Ok(Op::Add(modes)),
			2 => Ok(Op::Mul(modes)),
			3 => Ok(Op::In(modes[0])),
			4 => Ok(Op::Out(modes[0])),
			5 => Ok(Op::JumpIf(true, [modes[0], modes[1]])),
			6 => Ok(Op::JumpIf(false, [modes[0], modes[1]])),
			7 => Ok(Op::Lt(modes)),
			8 => Ok(Op::Eq(modes)),
			9 => Ok(Op::RelAdj(modes[0])),
			99 => Ok(Op::Halt),
			opcode => Err(OpError::Opcode(opcode as u8)),
		}
	}
}


use std::{ops::{Add, Mul}, str::FromStr};

/// Values stored in the machine’s memory cells.
///
/// Programs compute values past 64-bit range, so the default `Num` is
/// `i128`; `i64` remains available where the caller knows its programs,
/// and `bignum` adds `num_bigint::BigInt` for truly unbounded values.
pub trait Cell: Clone + Default + FromStr + Debug + Display
	+ PartialEq<Self> + PartialOrd<Self>
	+ Add<Self, Output = Self> + Mul<Self, Output = Self> {
	fn from_bool(b: bool) -> Self;
	/// Encoded-instruction domain; `None` if the value cannot be one.
	fn to_word(&self) -> Option<u32>;
	/// Address & offset domain; `None` if the value is out of range.
	fn to_isize(&self) -> Option<isize>;
}

impl Cell for i64 {
	fn from_bool(b: bool) -> Self { Self::from(b) }
	fn to_word(&self) -> Option<u32> { u32::try_from(*self).ok() }
	fn to_isize(&self) -> Option<isize> { isize::try_from(*self).ok() }
}

impl Cell for i128 {
	fn from_bool(b: bool) -> Self { Self::from(b) }
	fn to_word(&self) -> Option<u32> { u32::try_from(*self).ok() }
	fn to_isize(&self) -> Option<isize> { isize::try_from(*self).ok() }
}


use std::collections::{HashMap, VecDeque};

/// Sparse, auto-growing address space: the loaded program image plus
/// a map for every cell written past it. Reads of never-written cells
/// yield zero without materializing anything a reader could observe.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug))]
pub struct Memory<Num> {
	image: Vec<Num>,
	ext: HashMap<usize, Num>,
}

impl<Num: Cell> Memory<Num> {
	pub fn load(program: Vec<Num>) -> Self {
		Self { image: program, ext: HashMap::new() }
	}

	pub fn read(&self, addr: usize) -> Num {
		if addr < self.image.len() { self.image[addr].clone() }
		else { self.ext.get(&addr).cloned().unwrap_or_default() }
	}

	pub fn write(&mut self, addr: usize, num: Num) {
		if addr < self.image.len() { self.image[addr] = num; }
		else { self.ext.insert(addr, num); }
	}
}


/// Fatal machine faults. All of these indicate a corrupt or malformed
/// program; none is retried, and none affects sibling machines.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub enum Fault<Num = i128> {
	InvalidOpcode { addr: usize, word: Num },
	InvalidMode { addr: usize, word: Num, digit: u8 },
	InvalidWriteTarget { addr: usize, word: Num },
	OutOfRangeAddress { addr: usize, word: Num },
}

impl<Num: Display> Display for Fault<Num> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use Fault::*;
		match self {
			InvalidOpcode { addr, word } =>
				write!(f, "invalid opcode in word {word} at address {addr}"),
			InvalidMode { addr, word, digit } =>
				write!(f, "invalid mode digit {digit} in word {word} at address {addr}"),
			InvalidWriteTarget { addr, word } =>
				write!(f, "immediate-mode write target in word {word} at address {addr}"),
			OutOfRangeAddress { addr, word } =>
				write!(f, "word {word} at address {addr} yields an out-of-range address"),
		}
	}
}


/// Where the engine last returned control to its caller.
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub enum Step<Num = i128> {
	/// A value was just emitted; the pointer is already past the
	/// instruction, so the next `run` resumes right after it.
	Output(Num),
	/// The machine is parked on an input instruction with an empty
	/// buffer; `provide_input` then `run` resumes it.
	NeedsInput,
	Halted,
}

/// Detached machine state for forking & backtracking search; restoring
/// never aliases the memory or input buffer of the machine it was
/// taken from.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug))]
pub struct Snapshot<Num = i128> {
	memory: Memory<Num>,
	pointer: usize,
	rel_base: isize,
	input: VecDeque<Num>,
	halted: bool,
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug))]
pub struct Machine<Num = i128> {
	memory: Memory<Num>,
	pointer: usize,
	rel_base: isize,
	input: VecDeque<Num>,
	halted: bool,
}

impl<Num: Cell> Machine<Num> {
	pub fn new(program: Vec<Num>) -> Self {
		Self {
			memory: Memory::load(program),
			pointer: 0,
			rel_base: 0,
			input: VecDeque::new(),
			halted: false,
		}
	}

	pub fn provide_input(&mut self, num: Num) {
		self.input.push_back(num)
	}

	pub fn is_halted(&self) -> bool {
		self.halted
	}

	pub fn read(&self, addr: usize) -> Num {
		self.memory.read(addr)
	}

	pub fn write(&mut self, addr: usize, num: Num) {
		self.memory.write(addr, num)
	}

	pub fn snapshot(&self) -> Snapshot<Num> {
		Snapshot {
			memory: self.memory.clone(),
			pointer: self.pointer,
			rel_base: self.rel_base,
			input: self.input.clone(),
			halted: self.halted,
		}
	}

	pub fn restore(snapshot: Snapshot<Num>) -> Self {
		let Snapshot { memory, pointer, rel_base, input, halted } = snapshot;
		Self { memory, pointer, rel_base, input, halted }
	}

	fn absolute(&self, num: Num, at: usize) -> Result<usize, Fault<Num>> {
		match num.to_isize().and_then(|signed| usize::try_from(signed).ok()) {
			Some(addr) => Ok(addr),
			None => Err(Fault::OutOfRangeAddress { addr: at, word: num }),
		}
	}

	fn relative(&self, num: Num, at: usize) -> Result<usize, Fault<Num>> {
		match num.to_isize()
				.and_then(|signed| self.rel_base.checked_add(signed))
				.and_then(|addr| usize::try_from(addr).ok()) {
			Some(addr) => Ok(addr),
			None => Err(Fault::OutOfRangeAddress { addr: at, word: num }),
		}
	}

	/// Resolves the read operand in the given slot of the instruction
	/// at the current pointer.
	fn value(&self, slot: usize, mode: Mode) -> Result<Num, Fault<Num>> {
		let at = self.pointer + 1 + slot;
		let num = self.memory.read(at);
		Ok(match mode {
			Mode::Imm => num,
			Mode::Pos => self.memory.read(self.absolute(num, at)?),
			Mode::Rel => self.memory.read(self.relative(num, at)?),
		})
	}

	/// Resolves the write-target operand in the given slot to an
	/// address; immediate mode is a fault here, not earlier, so that
	/// decoding stays total over valid mode digits.
	fn target(&self, slot: usize, mode: Mode) -> Result<usize, Fault<Num>> {
		let at = self.pointer + 1 + slot;
		match mode {
			Mode::Imm => Err(Fault::InvalidWriteTarget {
				addr: self.pointer,
				word: self.memory.read(self.pointer),
			}),
			Mode::Pos => self.absolute(self.memory.read(at), at),
			Mode::Rel => self.relative(self.memory.read(at), at),
		}
	}

	/// Decodes & executes the instruction at the current pointer.
	/// `Ok(None)` means the engine may keep running; `Ok(Some(…))`
	/// is one of the suspension points (or the halt signal).
	pub fn step(&mut self) -> Result<Option<Step<Num>>, Fault<Num>> {
		if self.halted { return Ok(Some(Step::Halted)) }

		let word = self.memory.read(self.pointer);
		let op = match word.to_word().ok_or(OpError::Format).and_then(Op::try_from) {
			Ok(op) => op,
			Err(OpError::Mode { digit, .. }) =>
				return Err(Fault::InvalidMode { addr: self.pointer, word, digit }),
			Err(_) =>
				return Err(Fault::InvalidOpcode { addr: self.pointer, word }),
		};

		use Op::*;
		match op {
			op @ (Add(modes) | Mul(modes) | Lt(modes) | Eq(modes)) => {
				let a = self.value(0, modes[0])?;
				let b = self.value(1, modes[1])?;
				let target = self.target(2, modes[2])?;
				let num = match op {
					Add(_) => a + b,
					Mul(_) => a * b,
					Lt(_) => Num::from_bool(a < b),
					Eq(_) => Num::from_bool(a == b),
					_ => unreachable!(),
				};
				self.memory.write(target, num);
				self.pointer += 4;
			}
			In(mode) => {
				// Suspend before consuming: the pointer stays on this
				// instruction until the caller has provided a value.
				let Some(num) = self.input.pop_front() else {
					return Ok(Some(Step::NeedsInput))
				};
				let target = self.target(0, mode)?;
				self.memory.write(target, num);
				self.pointer += 2;
			}
			Out(mode) => {
				let num = self.value(0, mode)?;
				self.pointer += 2;
				return Ok(Some(Step::Output(num)))
			}
			JumpIf(cond, modes) => {
				if (self.value(0, modes[0])? != Num::default()) == cond {
					let num = self.value(1, modes[1])?;
					self.pointer = self.absolute(num, self.pointer + 2)?;
				} else {
					self.pointer += 3;
				}
			}
			RelAdj(mode) => {
				let at = self.pointer + 1;
				let num = self.value(0, mode)?;
				let Some(rel_base) = num.to_isize()
						.and_then(|delta| self.rel_base.checked_add(delta)) else {
					return Err(Fault::OutOfRangeAddress { addr: at, word: num })
				};
				self.rel_base = rel_base;
				self.pointer += 2;
			}
			Halt => {
				self.halted = true;
				return Ok(Some(Step::Halted))
			}
		}

		Ok(None)
	}

	/// Runs until the next suspension point: an emitted output, a
	/// blocking input instruction, or the end of the program. Calling
	/// `run` again on a halted machine keeps returning `Halted`.
	pub fn run(&mut self) -> Result<Step<Num>, Fault<Num>> {
		loop {
			if let Some(step) = self.step()? { return Ok(step) }
		}
	}
}


pub mod parsing {
	use super::Cell;

	/// Load-time failure: some token of the program text is not an
	/// integer. `line` and `column` are 1-based.
	#[derive(Clone)]
	#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
	pub struct MalformedProgram {
		pub line: usize,
		pub column: usize,
		pub token: String,
	}

	impl std::fmt::Display for MalformedProgram {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			let MalformedProgram { line, column, token } = self;
			write!(f, "invalid program token {token:?} at line {line}, column {column}")
		}
	}

	/// Parses comma-separated base-10 integers into an initial memory
	/// image. Newlines may stand in for commas between lines, and a
	/// line may carry a trailing comma, so multi-line program listings
	/// load as-is.
	pub fn from_str<Num: Cell>(s: &str) -> Result<Vec<Num>, MalformedProgram> {
		let mut program = Vec::new();
		for (l, line) in s.lines().enumerate() {
			let mut column = 1;
			for token in line.strip_suffix(',').unwrap_or(line).split(',') {
				program.push(token.parse().map_err(|_| MalformedProgram {
					line: l + 1,
					column,
					token: token.to_owned(),
				})?);
				column += token.len() + 1;
			}
		}
		Ok(program)
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use super::parsing::from_str;

	fn machine(s: &str) -> Machine<i64> {
		Machine::new(from_str(s).unwrap())
	}

	/// Drives a machine to its end, panicking on a blocking input.
	fn outputs(s: &str, input: &[i64]) -> Vec<i64> {
		let mut machine = machine(s);
		for &num in input { machine.provide_input(num) }
		let mut outputs = Vec::new();
		loop {
			match machine.run().unwrap() {
				Step::Output(num) => outputs.push(num),
				Step::Halted => return outputs,
				Step::NeedsInput => panic!("Unexpected end of input"),
			}
		}
	}

	const INPUTS: [&str; 8] = [
		"1002,4,3,4,33",
		"3,9,8,9,10,9,4,9,99,-1,8",
		"3,9,7,9,10,9,4,9,99,-1,8",
		"3,3,1108,-1,8,3,4,3,99",
		"3,3,1107,-1,8,3,4,3,99",
		"3,12,6,12,15,1,13,14,13,4,13,99,-1,0,1,9",
		"3,3,1105,-1,9,1101,0,0,12,4,12,99,1",
		indoc::indoc! { "
			3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,
			1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,
			999,1105,1,46,1101,1000,1,20,4,20,1105,1,46,98,99
		" },
	];

	#[test]
	fn decoding() {
		fn mode(digit: u32) -> Mode {
			[Mode::Pos, Mode::Imm, Mode::Rel][digit as usize]
		}

		// Round-trip over every opcode and mode-digit combination
		for digits in 0u32..27 {
			let [d0, d1, d2] = [digits % 3, digits / 3 % 3, digits / 9];
			let encoded = |opcode| opcode + 100 * d0 + 1_000 * d1 + 10_000 * d2;
			let modes = [mode(d0), mode(d1), mode(d2)];
			for (opcode, op) in [
				(1, Op::Add(modes)),
				(2, Op::Mul(modes)),
				(3, Op::In(modes[0])),
				(4, Op::Out(modes[0])),
				(5, Op::JumpIf(true, [modes[0], modes[1]])),
				(6, Op::JumpIf(false, [modes[0], modes[1]])),
				(7, Op::Lt(modes)),
				(8, Op::Eq(modes)),
				(9, Op::RelAdj(modes[0])),
			] {
				assert_eq!(Op::try_from(encoded(opcode)), Ok(op));
			}
			assert_eq!(Op::try_from(encoded(99)), Ok(Op::Halt));
		}

		assert_eq!(Op::try_from(98), Err(OpError::Opcode(98)));
		assert_eq!(Op::try_from(0), Err(OpError::Opcode(0)));
		assert_eq!(Op::try_from(302), Err(OpError::Mode { slot: 0, digit: 3 }));
		assert_eq!(Op::try_from(90_001), Err(OpError::Mode { slot: 2, digit: 9 }));
	}

	#[test]
	fn memory() {
		// Never-written cells read zero, before and after running
		let mut machine = machine("99");
		assert_eq!(machine.read(123), 0);
		assert_eq!(machine.read(1 << 20), 0);
		assert!(matches!(machine.run(), Ok(Step::Halted)));
		assert_eq!(machine.read(123), 0);
		machine.write(123, -7);
		assert_eq!(machine.read(123), -7);
		assert_eq!(machine.read(122), 0);
	}

	#[test]
	fn arithmetic() {
		// Day 1-style smoke test
		let mut tiny = machine("1,0,0,0,99");
		assert!(matches!(tiny.run(), Ok(Step::Halted)));
		assert_eq!((0..5).map(|addr| tiny.read(addr)).collect::<Vec<_>>(),
			[2, 0, 0, 0, 99]);

		let mut gravity_assist = machine("1,9,10,3,2,3,11,0,99,30,40,50");
		assert!(matches!(gravity_assist.run(), Ok(Step::Halted)));
		assert_eq!(gravity_assist.read(0), 3500);
		assert_eq!(gravity_assist.read(3), 70);

		// Immediate-mode operands, incl. a negative one
		let mut negative_imm = machine("1101,100,-1,4,0");
		assert!(matches!(negative_imm.run(), Ok(Step::Halted)));
		assert_eq!(negative_imm.read(4), 99);

		let mut mul_imm = machine(INPUTS[0]);
		assert!(matches!(mul_imm.run(), Ok(Step::Halted)));
		assert_eq!(mul_imm.read(4), 99);
	}

	#[test]
	fn patching() {
		// Callers may patch noun & verb parameters before running
		let mut machine = machine("1,1,1,4,99,5,6,0,99");
		machine.write(1, 1);
		machine.write(2, 1);
		assert!(matches!(machine.run(), Ok(Step::Halted)));
		assert_eq!(machine.read(0), 30);
	}

	#[test]
	fn comparisons_and_jumps() {
		assert_eq!(outputs(INPUTS[1], &[8]), [1]);
		assert_eq!(outputs(INPUTS[1], &[13]), [0]);
		assert_eq!(outputs(INPUTS[2], &[7]), [1]);
		assert_eq!(outputs(INPUTS[2], &[8]), [0]);
		assert_eq!(outputs(INPUTS[3], &[8]), [1]);
		assert_eq!(outputs(INPUTS[3], &[13]), [0]);
		assert_eq!(outputs(INPUTS[4], &[7]), [1]);
		assert_eq!(outputs(INPUTS[4], &[8]), [0]);
		assert_eq!(outputs(INPUTS[5], &[0]), [0]);
		assert_eq!(outputs(INPUTS[5], &[1337]), [1]);
		assert_eq!(outputs(INPUTS[6], &[0]), [0]);
		assert_eq!(outputs(INPUTS[6], &[1337]), [1]);
		assert_eq!(outputs(INPUTS[7], &[7]), [999]);
		assert_eq!(outputs(INPUTS[7], &[8]), [1000]);
		assert_eq!(outputs(INPUTS[7], &[13]), [1001]);
	}

	#[test]
	fn relative_mode() {
		// Relative writes land at base + offset, far past the image
		let mut machine = Machine::<i128>::new(from_str("109,2000,109,19,204,-34,99").unwrap());
		machine.write(1985, 170_141_183_460_469_231_731_687_303_715);
		assert!(matches!(machine.run(),
			Ok(Step::Output(170_141_183_460_469_231_731_687_303_715))));
		assert!(matches!(machine.run(), Ok(Step::Halted)));

		// The day 9 “quine” exercises relative mode & extended memory
		const QUINE: &str = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99";
		assert_eq!(outputs(QUINE, &[]), from_str::<i64>(QUINE).unwrap());

		// 64-bit arithmetic without truncation
		assert_eq!(outputs("1102,34915192,34915192,7,4,7,99,0", &[]), [1_219_070_632_396_864]);
		assert_eq!(outputs("104,1125899906842624,99", &[]), [1_125_899_906_842_624]);
	}

	#[test]
	fn suspension() {
		// A fresh machine parked on an input instruction is not an
		// error; it resumes once the caller has provided a value
		let mut machine = machine("3,5,4,5,99");
		assert!(matches!(machine.run(), Ok(Step::NeedsInput)));
		assert!(matches!(machine.run(), Ok(Step::NeedsInput)));
		machine.provide_input(-42);
		assert!(matches!(machine.run(), Ok(Step::Output(-42))));
		assert!(matches!(machine.run(), Ok(Step::Halted)));
		assert!(machine.is_halted());
		assert!(matches!(machine.run(), Ok(Step::Halted)));
	}

	#[test]
	fn determinism() {
		let run = || {
			let mut machine = machine(INPUTS[7]);
			machine.provide_input(8);
			let mut outputs = Vec::new();
			while let Ok(Step::Output(num)) = machine.run() { outputs.push(num) }
			(outputs, (0..47).map(|addr| machine.read(addr)).collect::<Vec<_>>())
		};
		assert_eq!(run(), run());
	}

	#[test]
	fn snapshots() {
		let mut machine = machine(INPUTS[1]);
		assert!(matches!(machine.run(), Ok(Step::NeedsInput)));
		let snapshot = machine.snapshot();

		// Restoring resumes exactly where the snapshot was taken…
		let mut restored = Machine::restore(snapshot.clone());
		restored.provide_input(8);
		assert!(matches!(restored.run(), Ok(Step::Output(1))));

		// …mutations never propagate back…
		restored.write(9, 1337);
		assert_eq!(machine.read(9), -1);

		// …and the original continues unaffected, as does a second
		// fork fed a different input
		machine.provide_input(8);
		assert!(matches!(machine.run(), Ok(Step::Output(1))));
		let mut other = Machine::restore(snapshot);
		other.provide_input(13);
		assert!(matches!(other.run(), Ok(Step::Output(0))));
	}

	#[test]
	fn faults() {
		assert_eq!(machine("98").run(),
			Err(Fault::InvalidOpcode { addr: 0, word: 98 }));
		assert_eq!(machine("-1").run(),
			Err(Fault::InvalidOpcode { addr: 0, word: -1 }));
		assert_eq!(machine("1,0,0,0,302,0,0,0").run(),
			Err(Fault::InvalidMode { addr: 4, word: 302, digit: 3 }));
		// Input suspension comes first; the write-target fault fires
		// only once there is a value to consume
		let mut imm_in = machine("103,0,99");
		assert!(matches!(imm_in.run(), Ok(Step::NeedsInput)));
		imm_in.provide_input(1);
		assert_eq!(imm_in.run(),
			Err(Fault::InvalidWriteTarget { addr: 0, word: 103 }));
		assert_eq!(machine("11101,1,1,0,99").run(),
			Err(Fault::InvalidWriteTarget { addr: 0, word: 11101 }));
		assert_eq!(machine("4,-1,99").run(),
			Err(Fault::OutOfRangeAddress { addr: 1, word: -1 }));
		assert_eq!(machine("109,-34,204,0,99").run(),
			Err(Fault::OutOfRangeAddress { addr: 3, word: 0 }));

		// Faults are local: a sibling loaded from the same image is fine
		assert_eq!(outputs("104,7,99", &[]), [7]);
	}

	#[test]
	fn loading() {
		assert_eq!(from_str::<i64>("1,-2,3").unwrap(), [1, -2, 3]);
		assert_eq!(from_str::<i64>(INPUTS[7]).unwrap().len(), 47);
		assert_eq!(from_str::<i64>("1,x,3"), Err(parsing::MalformedProgram {
			line: 1,
			column: 3,
			token: "x".to_owned(),
		}));
		assert_eq!(from_str::<i64>("1,2,\n3 ,4").unwrap_err().token, "3 ");
	}
}
