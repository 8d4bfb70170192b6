//! Cockpit integration tests
//!
//! These drive the cockpit through the shared files the control process
//! uses, the way a real session does.

use std::fs;
use std::path::Path;

use ndrt_hud::comm::{FileSignalChannel, Signal};
use ndrt_hud::resource::ContentPaths;
use ndrt_hud::sound::NullAudio;
use ndrt_hud::tor::{PauseStage, TorState, COMPLETE_TEXT, EMERGENCY_TEXT, RESUMING_TEXT};
use ndrt_hud::{EgoCockpit, Options, VehicleInputs};

const DT: f64 = 1.0 / 60.0;

const TEXT: &str = "\
The quick brown fox jumps over the lazy dog.
Pack my box with five dozen liquor jugs.
";

fn write_content(root: &Path, settings: &str) -> ContentPaths {
    let paths = ContentPaths::new(root);
    fs::create_dir_all(paths.config_dir()).unwrap();
    fs::write(paths.settings_file(), settings).unwrap();
    fs::write(paths.text_file("Text1"), TEXT).unwrap();
    // stale values from a previous session
    fs::write(paths.signal_file(), "3").unwrap();
    fs::write(paths.tts_stream_file(), "TTSOver").unwrap();
    paths
}

fn start(paths: &ContentPaths) -> EgoCockpit {
    EgoCockpit::start(&Options::default(), paths, Box::new(NullAudio::new()))
}

fn signal_file(paths: &ContentPaths) -> String {
    fs::read_to_string(paths.signal_file()).unwrap()
}

fn tick_until(cockpit: &mut EgoCockpit, now: &mut f64, limit: f64, done: impl Fn(&EgoCockpit) -> bool) {
    let inputs = VehicleInputs::default();
    while !done(cockpit) && *now < limit {
        cockpit.tick(*now, DT, &inputs);
        *now += DT;
    }
}

#[test]
fn test_startup_resets_shared_files() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_content(dir.path(), "RSVP: 0\nWPM: 300\nTTS: 0\nTEXTFILE: Text1\n");
    let cockpit = start(&paths);

    assert_eq!(signal_file(&paths), "5");
    assert_eq!(fs::read_to_string(paths.tts_stream_file()).unwrap(), "");
    assert_eq!(cockpit.state(), TorState::Idle);
    assert_eq!(cockpit.settings().wpm, 300);
    assert_eq!(cockpit.presenter_name(), "stp");
    assert!(cockpit.full_text().starts_with("The quick brown fox jumps over the lazy dog.Pack"));
}

#[test]
fn test_stp_run_reports_completion() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_content(dir.path(), "RSVP: 0\nWPM: 600\nTTS: 0\nTEXTFILE: Text1\n");
    let mut cockpit = start(&paths);
    let control = FileSignalChannel::new(paths.signal_file());

    let mut now = 0.0;
    tick_until(&mut cockpit, &mut now, 1.0, |_| false);
    assert_eq!(cockpit.state(), TorState::Idle);

    control.write(Signal::NdrtStart).unwrap();
    tick_until(&mut cockpit, &mut now, 60.0, EgoCockpit::is_complete);

    assert_eq!(cockpit.state(), TorState::Complete);
    assert_eq!(signal_file(&paths), "3");
    let frame = cockpit.tick(now, DT, &VehicleInputs::default());
    assert_eq!(frame.hud.text, COMPLETE_TEXT);
}

#[test]
fn test_takeover_pauses_and_resumes() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_content(dir.path(), "RSVP: 1\nWPM: 60\nTTS: 0\nTEXTFILE: Text1\n");
    let mut cockpit = start(&paths);
    let control = FileSignalChannel::new(paths.signal_file());
    let inputs = VehicleInputs::default();

    control.write(Signal::NdrtStart).unwrap();
    let frame = cockpit.tick(0.0, DT, &inputs);
    assert_eq!(frame.hud.text, "The");

    control.write(Signal::TorIssued).unwrap();
    let frame = cockpit.tick(0.5, DT, &inputs);
    assert_eq!(frame.hud.text, EMERGENCY_TEXT);
    assert!(!frame.hud.hud_visible);

    // the request stays in the file; the controller keeps waiting
    let frame = cockpit.tick(5.0, DT, &inputs);
    assert_eq!(frame.state, TorState::Paused(PauseStage::AwaitingTakeover));

    control.write(Signal::TorComplete).unwrap();
    let frame = cockpit.tick(6.0, DT, &inputs);
    assert_eq!(frame.hud.text, RESUMING_TEXT);

    let frame = cockpit.tick(8.9, DT, &inputs);
    assert_eq!(frame.hud.text, RESUMING_TEXT);

    let frame = cockpit.tick(9.0, DT, &inputs);
    assert_eq!(frame.state, TorState::Running);
    assert!(frame.hud.text.is_empty());

    let frame = cockpit.tick(9.1, DT, &inputs);
    assert_eq!(frame.hud.text, "quick");
    assert_eq!(signal_file(&paths), "2");
}

#[test]
fn test_spoken_rsvp_follows_stream_file() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_content(dir.path(), "RSVP: 1\nWPM: 150\nTTS: 1\nTEXTFILE: Text1\n");
    let mut cockpit = start(&paths);
    let control = FileSignalChannel::new(paths.signal_file());
    let inputs = VehicleInputs::default();
    assert_eq!(cockpit.presenter_name(), "rsvp-tts");

    control.write(Signal::NdrtStart).unwrap();
    fs::write(paths.tts_stream_file(), "quick").unwrap();
    assert_eq!(cockpit.tick(0.0, DT, &inputs).hud.text, "quick");

    fs::write(paths.tts_stream_file(), "TTSOver").unwrap();
    let frame = cockpit.tick(0.1, DT, &inputs);
    assert_eq!(frame.hud.text, COMPLETE_TEXT);
    assert_eq!(signal_file(&paths), "3");
}

#[test]
fn test_missing_content_completes_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ContentPaths::new(dir.path());
    let mut cockpit = start(&paths);
    assert_eq!(cockpit.settings().text_file, "Text1");

    FileSignalChannel::new(paths.signal_file())
        .write(Signal::NdrtStart)
        .unwrap();
    cockpit.tick(0.0, DT, &VehicleInputs::default());
    assert!(cockpit.is_complete());
    assert_eq!(signal_file(&paths), "3");
}

#[test]
fn test_unwritable_config_dir_still_starts() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ContentPaths::new(dir.path());
    fs::write(paths.config_dir(), "not a directory").unwrap();

    let mut cockpit = start(&paths);
    assert_eq!(cockpit.state(), TorState::Idle);
    assert_eq!(cockpit.settings().wpm, 150);

    let frame = cockpit.tick(0.0, DT, &VehicleInputs::default());
    assert_eq!(frame.state, TorState::Idle);
    assert!(frame.hud.text.is_empty());
    assert_eq!(fs::read_to_string(paths.config_dir()).unwrap(), "not a directory");
}
