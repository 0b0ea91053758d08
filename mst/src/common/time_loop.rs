// ============================================================================
// This code is part of Rusty-MST.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::time::Duration;

use super::timer::Timer;

/// Repeats `run` until `min_time` has passed (at least once) to warm up,
/// then times `rounds` more runs and returns their mean. `init` runs before
/// and `finish` after every call to `run`, untimed.
pub fn time_loop<I, R, F>(
    name: &str,
    rounds: usize,
    min_time: Duration,
    mut init: I,
    mut run: R,
    mut finish: F,
) -> Duration
where
    I: FnMut(),
    R: FnMut(),
    F: FnMut(),
{
    let mut warmup = Timer::new(name);
    warmup.start();
    loop {
        init();
        run();
        finish();
        if warmup.total_time() >= min_time { break; }
    }
    warmup.stop();

    let rounds = rounds.max(1);
    let mut t = Timer::new(name);
    let mut total = Duration::ZERO;
    for i in 0..rounds {
        init();
        t.start();
        run();
        let d = t.stop();
        finish();
        t.report(d, &format!("round {i}"));
        total += d;
    }
    total / rounds as u32
}
