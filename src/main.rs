// main.rs
//
// Walk-through of the engine on the first puzzle: grade the starting attempt
// and a close one, then build the playback timing for the attempt.
// Run with RUST_LOG=debug to see index and scoring logs.

use epicyclic::float_types::Real;
use epicyclic::{
    DEFAULT_SCORE_THRESHOLD, SampleTable, Scorer, Solution, Spinner, SpinnerSet, arc_length,
};

/// Preview window: a tenth of the traced length.
const WINDOW: Real = 0.1;

/// Samples used for timing; far denser than grading for smooth strokes.
const TIMING_SAMPLES: usize = 1000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let solution = Solution::oval()?;
    let scorer = Scorer::default();

    let attempts = [
        ("starting attempt", SpinnerSet::starting_attempt()),
        (
            "close attempt",
            SpinnerSet::new(vec![Spinner::new(0.21, -1, 0.3), Spinner::new(0.6, 1, 0.2)]),
        ),
    ];

    for (name, attempt) in &attempts {
        let result = solution.grade(attempt, &scorer)?;
        let worst = result.distances.iter().copied().fold(0.0, Real::max);
        println!(
            "{name}: score {:.0} / {:.0}, worst distance {worst:.3}, solved: {}",
            result.score * 100.0,
            DEFAULT_SCORE_THRESHOLD * 100.0,
            result.score > DEFAULT_SCORE_THRESHOLD
        );

        let progress = scorer.progress(&result.distances)?;
        let halfway = progress[progress.len() / 2];
        println!("  score bar at t={:.2}: {:.3}", halfway.0, halfway.1);

        let samples = SampleTable::sample(attempt.as_slice(), TIMING_SAMPLES);
        let timing = arc_length::timing_table(&samples)?;
        let windows = arc_length::window(&timing, WINDOW)?;
        let split_rows = (0..windows.len()).filter(|&i| windows.is_split(i)).count();
        println!(
            "  timing: {} rows, half drawn at t={:.3}, {split_rows} rows split at the seam",
            timing.len(),
            time_for_length(&timing, 0.5)
        );
    }

    match arc_length::timing_table(&SampleTable::sample(&[Spinner::new(0.5, 0, 0.0)], 10)) {
        Ok(_) => println!("static spinner unexpectedly produced a timing table"),
        Err(e) => println!("static spinner: {e}"),
    }

    Ok(())
}

/// First time at which at least `fraction` of the curve has been drawn.
fn time_for_length(timing: &arc_length::TimingTable, fraction: Real) -> Real {
    timing
        .entries()
        .iter()
        .find(|e| e.normalized_length >= fraction)
        .map_or(1.0, |e| e.time)
}
