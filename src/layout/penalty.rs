/// Mask penalty score: the four rules used to compare mask candidates
use crate::layout::canvas::Canvas;

const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

/// Penalty of the data area (quiet zone excluded). Lower is better.
pub fn penalty_score(canvas: &Canvas) -> u32 {
    let size = canvas.size();
    let mut result: i32 = 0;

    // Rows: same-colour runs and finder-like patterns
    for y in 0..size {
        result += line_penalty(size, |i| canvas.is_dark(i, y));
    }
    // Columns
    for x in 0..size {
        result += line_penalty(size, |i| canvas.is_dark(x, i));
    }

    // 2x2 blocks of one colour
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color = canvas.is_dark(x, y);
            if color == canvas.is_dark(x + 1, y)
                && color == canvas.is_dark(x, y + 1)
                && color == canvas.is_dark(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }

    // Dark/light balance, in 5% steps away from 50%
    let dark = canvas.dark_count() as i32;
    let total = (size * size) as i32;
    let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    result += k * PENALTY_N4;

    debug_assert!(result >= 0);
    result as u32
}

/// N1 and N3 contributions of one row or column
fn line_penalty(size: usize, module: impl Fn(usize) -> bool) -> i32 {
    let mut result = 0;
    let mut run_color = false;
    let mut run_len: i32 = 0;
    let mut history = RunHistory::new(size as i32);

    for i in 0..size {
        let color = module(i);
        if color == run_color {
            run_len += 1;
            if run_len == 5 {
                result += PENALTY_N1;
            } else if run_len > 5 {
                result += 1;
            }
        } else {
            history.push(run_len);
            if !run_color {
                result += history.count_finder_like() * PENALTY_N3;
            }
            run_color = color;
            run_len = 1;
        }
    }

    result + history.finish(run_color, run_len) * PENALTY_N3
}

/// Lengths of the last seven runs, newest first, for 1:1:3:1:1 detection
struct RunHistory {
    size: i32,
    runs: [i32; 7],
}

impl RunHistory {
    fn new(size: i32) -> Self {
        Self { size, runs: [0; 7] }
    }

    fn push(&mut self, mut run_len: i32) {
        if self.runs[0] == 0 {
            // Light border before the first run
            run_len += self.size;
        }
        self.runs.copy_within(0..6, 1);
        self.runs[0] = run_len;
    }

    /// Finder-like patterns ending at the newest light run, with a
    /// light run of 4 units on either side
    fn count_finder_like(&self) -> i32 {
        let rh = &self.runs;
        let n = rh[1];
        let core = n > 0 && rh[2] == n && rh[3] == n * 3 && rh[4] == n && rh[5] == n;
        i32::from(core && rh[0] >= n * 4 && rh[6] >= n)
            + i32::from(core && rh[6] >= n * 4 && rh[0] >= n)
    }

    fn finish(mut self, run_color: bool, mut run_len: i32) -> i32 {
        if run_color {
            self.push(run_len);
            run_len = 0;
        }
        // Light border after the last run
        run_len += self.size;
        self.push(run_len);
        self.count_finder_like()
    }
}
