//! Invariants checked over generated inputs

use proptest::prelude::*;

use ndrt_hud::comm::{FileSignalChannel, Signal};
use ndrt_hud::dash::{SteeringParams, SteeringWheelAnimator, TurnIndicator, TurnSignalTimer};
use ndrt_hud::text::{LineComposer, StpTimed, TextCorpus, TextPresenter};

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z]{1,12}", 0..60)
}

proptest! {
    #[test]
    fn test_lines_respect_char_limit(words in words(), limit in 1usize..40) {
        let mut composer = LineComposer::new(TextCorpus::from_words(words.clone()), limit, 200);
        let mut seen = Vec::new();
        loop {
            let line = composer.generate();
            if line.is_empty() {
                break;
            }
            if line.word_count > 1 {
                prop_assert!(line.char_count < limit);
            }
            prop_assert!(line.text.ends_with(" \n"));
            seen.extend(line.text.split_whitespace().map(str::to_string));
        }
        prop_assert_eq!(seen, words);
    }

    #[test]
    fn test_stp_shift_uses_lagged_duration(words in words(), limit in 4usize..30) {
        let composer = LineComposer::new(TextCorpus::from_words(words), limit, 120);
        let mut reference = composer.clone();
        let durations: Vec<f64> = (0..200).map(|_| reference.generate().duration).collect();

        let mut stp = StpTimed::new(composer, 4);
        let first = stp.tick(0.0);
        prop_assert_eq!(stp.next_shift_at(), Some(durations[0]));

        let mut complete = first.complete;
        let mut shifts = 0;
        while !complete && shifts < 150 {
            let Some(at) = stp.next_shift_at() else { break };
            complete = stp.tick(at).complete;
            shifts += 1;
            if !complete {
                let next = stp.next_shift_at().unwrap();
                prop_assert!((next - at - durations[shifts]).abs() < 1e-9);
            }
        }
        prop_assert!(complete);
    }

    #[test]
    fn test_steering_stays_bounded(
        inputs in prop::collection::vec((-3.0f64..3.0, 0.0f64..0.2, any::<bool>()), 1..80),
        max_angle in 10.0f64..900.0,
        max_velocity in 1.0f64..720.0,
    ) {
        let mut wheel = SteeringWheelAnimator::new(SteeringParams {
            max_angle,
            max_velocity,
            anim_scale: 360.0,
            input_scale: 1.0,
        });
        for (raw, dt, direct) in inputs {
            let before = wheel.angle();
            let after = wheel.tick(raw, dt, direct);
            prop_assert!(after.abs() <= max_angle);
            if !direct {
                prop_assert!((after - before).abs() <= max_velocity * dt + 1e-9);
            }
        }
    }

    #[test]
    fn test_turn_signal_shows_latest_side(
        events in prop::collection::vec((any::<bool>(), 0.0f64..2.0, 0.0f64..4.0), 1..30),
    ) {
        let duration = 3.0;
        let mut timer = TurnSignalTimer::new(duration);
        let mut now = 0.0;
        for (left, gap, probe) in events {
            now += gap;
            if left {
                timer.activate_left(now);
            } else {
                timer.activate_right(now);
            }
            let at = now + probe;
            let expected = if probe < duration {
                if left { TurnIndicator::Left } else { TurnIndicator::Right }
            } else {
                TurnIndicator::None
            };
            prop_assert_eq!(timer.display(at), expected);
        }
    }

    #[test]
    fn test_signal_file_round_trip(codes in prop::collection::vec(0i32..6, 1..10)) {
        let dir = tempfile::tempdir().unwrap();
        let channel = FileSignalChannel::new(dir.path().join("SignalFile.txt"));
        for code in codes {
            let signal = Signal::from_code(code);
            channel.write(signal).unwrap();
            prop_assert_eq!(channel.read(), signal);
        }
    }
}
