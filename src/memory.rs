/*
 * Copyright 2018 Ian Johnson
 *
 * This is free software, distributed under the MIT license.  A copy of the
 * license can be found in the LICENSE file in the project root, or at
 * https://opensource.org/licenses/MIT.
 */

//! The Chip-8 memory.
//!
//! Memory is a flat, byte-addressable 4KB array.  The region below
//! `PROG_START` is reserved for the interpreter; the hex digit sprites are
//! copied to `FONT_START` when the memory is constructed and programs are
//! expected to leave them alone (nothing enforces this).  The program image
//! lives at `PROG_START` and everything from there up is runtime-writable
//! scratch.  All access is bounds-checked; a 16-bit address can point past
//! the end of memory, and the machine relies on these checks to catch that.

use std::default::Default;

use display::{FONT_HEIGHT, FONT_SPRITES};
use instruction::AddressOutOfBoundsError;
use FONT_START;
use MEM_SIZE;
use PROG_SIZE;
use PROG_START;

/// An error resulting from an input program being too large.
#[derive(Debug, Fail, PartialEq, Eq)]
#[fail(display = "input program is too large")]
pub struct ProgramTooLargeError;

/// The Chip-8 memory.
pub struct Memory {
    /// The underlying bytes.
    bytes: [u8; MEM_SIZE],
}

impl Memory {
    /// Returns a new memory with the font sprites loaded and every other
    /// cell zeroed.
    pub fn new() -> Self {
        let mut mem = Memory {
            bytes: [0; MEM_SIZE],
        };
        mem.load_font();
        mem
    }

    /// Copies the hex digit sprites into the reserved low region.
    fn load_font(&mut self) {
        for (i, sprite) in FONT_SPRITES.iter().enumerate() {
            let start = FONT_START + i * FONT_HEIGHT;
            self.bytes[start..start + sprite.len()].copy_from_slice(sprite);
        }
    }

    /// Loads a program image at `PROG_START`.
    ///
    /// Nothing is copied if the image doesn't fit.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), ProgramTooLargeError> {
        if program.len() > PROG_SIZE {
            return Err(ProgramTooLargeError);
        }
        self.bytes[PROG_START..PROG_START + program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Reads the byte at the given address.
    pub fn read_byte(&self, addr: u16) -> Result<u8, AddressOutOfBoundsError> {
        let addr = addr as usize;
        if addr >= MEM_SIZE {
            Err(AddressOutOfBoundsError(addr))
        } else {
            Ok(self.bytes[addr])
        }
    }

    /// Writes a byte at the given address.
    pub fn write_byte(&mut self, addr: u16, val: u8) -> Result<(), AddressOutOfBoundsError> {
        let addr = addr as usize;
        if addr >= MEM_SIZE {
            Err(AddressOutOfBoundsError(addr))
        } else {
            self.bytes[addr] = val;
            Ok(())
        }
    }

    /// Returns a view of `len` bytes starting at `start`.
    ///
    /// This is how the machine reads sprites; the whole range is checked
    /// before any of it is used.
    pub fn slice(&self, start: usize, len: usize) -> Result<&[u8], AddressOutOfBoundsError> {
        if start + len > MEM_SIZE {
            Err(AddressOutOfBoundsError(start + len - 1))
        } else {
            Ok(&self.bytes[start..start + len])
        }
    }

    /// Returns a reference to the raw memory contents.
    pub fn bytes(&self) -> &[u8; MEM_SIZE] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Memory::new()
    }
}
