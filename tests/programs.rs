/*
 * Copyright 2018 Ian Johnson
 *
 * This is free software, distributed under the MIT license.  A copy of the
 * license can be found in the LICENSE file in the project root, or at
 * https://opensource.org/licenses/MIT.
 */

//! Runs small hand-assembled programs through the machine and checks the
//! resulting state.

extern crate chip8;

use chip8::{Machine, Register};

#[test]
fn load_and_add_immediates() {
    // 6005  LD V0, 5
    // 7003  ADD V0, 3
    let mut machine = Machine::new();
    machine.load_program(&[0x60, 0x05, 0x70, 0x03]).unwrap();

    machine.step().unwrap();
    machine.step().unwrap();
    assert_eq!(machine.register(Register::V0), 8);
    assert_eq!(machine.pc().addr(), 0x204);
}

#[test]
fn add_wraps_modulo_256() {
    // 60FE  LD V0, 0xFE
    // 7005  ADD V0, 5
    let mut machine = Machine::new();
    machine.load_program(&[0x60, 0xFE, 0x70, 0x05]).unwrap();

    machine.step().unwrap();
    machine.step().unwrap();
    assert_eq!(machine.register(Register::V0), 0x03);
}

#[test]
fn draw_font_glyph_at_origin() {
    // A050  LD I, 0x050 (the font base)
    // D015  DRW V0, V1, 5 with (V0, V1) = (0, 0)
    let mut machine = Machine::new();
    machine.load_program(&[0xA0, 0x50, 0xD0, 0x15]).unwrap();

    machine.step().unwrap();
    assert_eq!(machine.i().addr(), 0x050);
    machine.step().unwrap();

    // The top-left corner now holds the '0' glyph.
    let glyph = [0xF0u8, 0x90, 0x90, 0x90, 0xF0];
    let data = machine.display().data();
    for (row, byte) in glyph.iter().enumerate() {
        for bit in 0..8 {
            let expected = byte & (0x80 >> bit) != 0;
            assert_eq!(data[bit][row], expected, "pixel ({}, {})", bit, row);
        }
    }
    assert_eq!(machine.register(Register::VF), 0);
}

#[test]
fn clear_then_draw_single_pixel() {
    // 00E0  CLS
    // A206  LD I, 0x206
    // D011  DRW V0, V1, 1 with (V0, V1) = (0, 0)
    // 80    sprite data: a single on-bit
    let mut machine = Machine::new();
    machine
        .load_program(&[0x00, 0xE0, 0xA2, 0x06, 0xD0, 0x11, 0x80])
        .unwrap();

    for _ in 0..3 {
        machine.step().unwrap();
    }

    let data = machine.display().data();
    assert!(data[0][0]);
    for x in 1..8 {
        assert!(!data[x][0], "pixel ({}, 0)", x);
    }
    assert_eq!(machine.register(Register::VF), 0);
}

#[test]
fn subroutine_round_trip() {
    // 0x200: 2206  CALL 0x206
    // 0x202: 6101  LD V1, 1
    // 0x204: 0000  (never executed)
    // 0x206: 602A  LD V0, 0x2A
    // 0x208: 00EE  RET
    let mut machine = Machine::new();
    machine
        .load_program(&[0x22, 0x06, 0x61, 0x01, 0x00, 0x00, 0x60, 0x2A, 0x00, 0xEE])
        .unwrap();

    machine.step().unwrap();
    assert_eq!(machine.pc().addr(), 0x206);
    machine.step().unwrap();
    machine.step().unwrap();
    assert_eq!(machine.pc().addr(), 0x202);
    machine.step().unwrap();

    assert_eq!(machine.register(Register::V0), 0x2A);
    assert_eq!(machine.register(Register::V1), 1);
    assert_eq!(machine.pc().addr(), 0x204);
}

#[test]
fn unknown_opcode_degrades_gracefully() {
    // 5000 has no implemented instruction; the machine reports it, skips it
    // and keeps going.
    let mut machine = Machine::new();
    machine.load_program(&[0x50, 0x00, 0x60, 0x07]).unwrap();

    assert!(machine.step().is_err());
    machine.step().unwrap();
    assert_eq!(machine.register(Register::V0), 7);
}
