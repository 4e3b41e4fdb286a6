/*
 * Copyright 2018 Ian Johnson
 *
 * This is free software, distributed under the MIT license.  A copy of the
 * license can be found in the LICENSE file in the project root, or at
 * https://opensource.org/licenses/MIT.
 */

//! A wall-clock tick counter.

use std::num::Wrapping;

use time;

/// Counts elapsed ticks of a fixed-frequency clock.
///
/// The machine's timers only decrement when told to; a `Ticker` is how the
/// driver finds out how many decrements are due since it last asked.  It
/// never sleeps and never touches the machine itself.
#[derive(Debug)]
pub struct Ticker {
    /// The frequency of the clock, in Hz.
    frequency: u32,
    /// The tick count at the last lap.
    ticks: Wrapping<u32>,
}

impl Ticker {
    /// Returns a new ticker counting at the given frequency.
    pub fn new(frequency: u32) -> Self {
        let mut ticker = Ticker {
            frequency,
            ticks: Wrapping(0),
        };
        ticker.ticks = ticker.now();
        ticker
    }

    /// Returns the number of ticks which have elapsed since the last call to
    /// this method (or the creation of the ticker).
    pub fn lap(&mut self) -> u32 {
        let old = self.ticks;
        self.ticks = self.now();
        (self.ticks - old).0
    }

    /// Returns the current tick count.
    fn now(&self) -> Wrapping<u32> {
        Wrapping((time::precise_time_ns() as f64 * self.frequency as f64 / 1e9) as u32)
    }
}
