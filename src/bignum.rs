// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Arbitrary-precision memory cells, for programs whose values
//! outgrow even the default 128-bit `Num`.

use num_bigint::BigInt;
use crate::machine::Cell;


impl Cell for BigInt {
	fn from_bool(b: bool) -> Self {
		BigInt::from(u8::from(b))
	}

	fn to_word(&self) -> Option<u32> {
		u32::try_from(self.clone()).ok()
	}

	fn to_isize(&self) -> Option<isize> {
		isize::try_from(self.clone()).ok()
	}
}
