/*
 * Copyright 2018 Ian Johnson
 *
 * This is free software, distributed under the MIT license.  A copy of the
 * license can be found in the LICENSE file in the project root, or at
 * https://opensource.org/licenses/MIT.
 */

//! Main module stuff.

#[macro_use]
extern crate enum_primitive;
extern crate failure;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate log;
extern crate num;
extern crate time;

/// The size of the Chip-8's memory, in bytes.
pub const MEM_SIZE: usize = 0x1000;
/// The address where programs should be loaded.
pub const PROG_START: usize = 0x200;
/// The maximum size of a Chip-8 program, in bytes.
pub const PROG_SIZE: usize = MEM_SIZE - PROG_START;
/// The address where the hex digit sprites are loaded.
pub const FONT_START: usize = 0x050;

pub mod display;
pub mod input;
pub mod instruction;
pub mod machine;
pub mod memory;
pub mod timer;

pub use instruction::{Address, AddressOutOfBoundsError, Instruction, Opcode, Register,
                      UnknownInstructionError};
pub use machine::{Machine, StackOverflowError, StackUnderflowError};
pub use memory::{Memory, ProgramTooLargeError};
