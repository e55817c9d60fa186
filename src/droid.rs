// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Remote-droid exploration: a breadth-first search that forks the
//! controlling machine at every visited position via snapshots, so
//! each candidate move runs in its own future without rewinding the
//! droid. This is the backtracking pattern the snapshot contract
//! exists for; two forks never observe each other’s state.

use std::collections::HashMap;
use crate::machine::{Fault, Machine, Step};


#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub enum Move { North, South, West, East }

impl Move {
	const ALL: [Self; 4] = [Move::North, Move::South, Move::West, Move::East];

	fn pos_from(&self, pos: &[isize; 2]) -> [isize; 2] {
		use Move::*;
		match self {
			North => [pos[0], pos[1] - 1],
			South => [pos[0], pos[1] + 1],
			West => [pos[0] - 1, pos[1]],
			East => [pos[0] + 1, pos[1]],
		}
	}
}

impl From<Move> for i128 {
	fn from(r#move: Move) -> Self {
		use Move::*;
		match r#move { North => 1, South => 2, West => 3, East => 4 }
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile { Empty, Wall, System }

pub type Tiles = HashMap<[isize; 2], Tile>;

#[cfg_attr(test, derive(Debug))]
pub enum Error {
	Machine(Fault),
	/// The droid reported a status other than 0, 1 or 2.
	InvalidStatus(i128),
	/// The controller halted instead of reporting a status.
	UnexpectedEnd,
	/// The controller asked for a second command before reporting.
	UnexpectedInputRequest,
}

impl From<Fault> for Error {
	fn from(fault: Fault) -> Self {
		Error::Machine(fault)
	}
}


/// The fully explored section: every reachable tile, walls included,
/// plus the system position if one was found. The droid starts at the
/// origin, which is always an empty tile.
pub struct Section {
	pub tiles: Tiles,
	pub system: Option<[isize; 2]>,
}

/// Maps the whole section reachable from the machine’s current state.
/// Each frontier position holds a snapshot taken right after the move
/// that discovered it; probing a neighbor restores a fresh fork.
pub fn explore(machine: &Machine) -> Result<Section, Error> {
	use std::collections::VecDeque;

	let mut tiles = Tiles::new();
	tiles.insert([0, 0], Tile::Empty);
	let mut system = None;

	let mut frontier = VecDeque::new();
	frontier.push_back((machine.snapshot(), [0isize, 0]));

	while let Some((snapshot, pos)) = frontier.pop_front() {
		for r#move in Move::ALL {
			let target = r#move.pos_from(&pos);
			if tiles.contains_key(&target) { continue }

			let mut fork = Machine::restore(snapshot.clone());
			fork.provide_input(r#move.into());
			let tile = match fork.run()? {
				Step::Output(0) => Tile::Wall,
				Step::Output(1) => Tile::Empty,
				Step::Output(2) => Tile::System,
				Step::Output(invalid) => return Err(Error::InvalidStatus(invalid)),
				Step::Halted => return Err(Error::UnexpectedEnd),
				Step::NeedsInput => return Err(Error::UnexpectedInputRequest),
			};

			#[cfg(LOGGING)]
			println!("{pos:?} -> {target:?}: {tile:?}");

			tiles.insert(target, tile);
			if !matches!(tile, Tile::Wall) {
				if matches!(tile, Tile::System) { system = Some(target) }
				frontier.push_back((fork.snapshot(), target));
			}
		}
	}

	Ok(Section { tiles, system })
}

impl Section {
	/// Fewest moves from the origin to the system.
	pub fn shortest_path(&self) -> Option<usize> {
		use std::collections::{HashSet, VecDeque};

		let system = self.system?;
		let mut seen = HashSet::from([[0isize, 0]]);
		let mut frontier = VecDeque::from([([0isize, 0], 0usize)]);
		while let Some((pos, moves)) = frontier.pop_front() {
			if pos == system { return Some(moves) }
			for r#move in Move::ALL {
				let next = r#move.pos_from(&pos);
				match self.tiles.get(&next) {
					Some(Tile::Wall) | None => continue,
					Some(_) => if seen.insert(next) {
						frontier.push_back((next, moves + 1))
					}
				}
			}
		}
		None
	}

	/// Minutes until oxygen spreading from the system has reached
	/// every open tile.
	pub fn fill_time(&self) -> Option<usize> {
		use std::collections::HashSet;

		let mut filled = HashSet::from([self.system?]);
		let mut recently_filled = filled.clone();
		for i in 0.. {
			let mut now_filled = HashSet::new();
			for filled_pos in recently_filled.drain() {
				for r#move in Move::ALL {
					let pos = r#move.pos_from(&filled_pos);
					if matches!(self.tiles.get(&pos), Some(Tile::Empty))
							&& filled.insert(pos) {
						now_filled.insert(pos);
					}
				}
			}
			if now_filled.is_empty() { return Some(i) }
			recently_filled = now_filled;
		}

		unreachable!()
	}
}
