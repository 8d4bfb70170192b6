use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use ndrt_hud::config::{self, Options, SoundDriver};
use ndrt_hud::logging;
use ndrt_hud::resource::ContentPaths;
use ndrt_hud::sound::{AudioSink, NullAudio};
use ndrt_hud::time::{FixedStep, FrameClock};
use ndrt_hud::{Cli, EgoCockpit, VehicleInputs};

/// Exit status when `--max-seconds` runs out before the task completes
const EXIT_TIMEOUT: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level(), cli.logfile.as_deref().map(Path::new))?;
    tracing::info!("ndrt-hud {} starting", env!("CARGO_PKG_VERSION"));

    let options = config::load_config(&cli.vehicle_config)?;
    let options = cli.merge_into_options(options)?;

    let paths = ContentPaths::new(options.content_dir.as_deref().unwrap_or("Content"));
    tracing::info!("content dir: {}", paths.root().display());
    if let Some(vehicle_config) = &options.vehicle_config {
        tracing::info!("vehicle config: {}", vehicle_config);
    }

    let cockpit = EgoCockpit::start(&options, &paths, open_audio(options.sound_driver));
    tracing::info!(
        "presenter {}, text file {}",
        cockpit.presenter_name(),
        cockpit.settings().text_file
    );

    run(cockpit, &options)
}

fn open_audio(driver: SoundDriver) -> Box<dyn AudioSink> {
    match driver {
        SoundDriver::None => Box::new(NullAudio::new()),
        #[cfg(feature = "rodio-audio")]
        SoundDriver::Rodio => Box::new(ndrt_hud::sound::RodioAudio::start()),
        #[cfg(not(feature = "rodio-audio"))]
        SoundDriver::Rodio => {
            tracing::warn!("built without rodio-audio; sound disabled");
            Box::new(NullAudio::new())
        }
    }
}

/// Tick the cockpit at a fixed rate until the task completes or time runs out.
fn run(mut cockpit: EgoCockpit, options: &Options) -> Result<ExitCode> {
    let mut clock = if options.fast {
        FrameClock::simulated()
    } else {
        FrameClock::real()
    };
    tracing::info!(
        "ticking at {} Hz on a {} clock",
        options.tick_hz,
        if clock.is_simulated() { "simulated" } else { "real-time" }
    );
    let mut step = FixedStep::from_hz(options.tick_hz);
    let dt = step.step();
    let inputs = VehicleInputs::default();

    let mut task_time = 0.0;
    let mut previous = clock.now();
    let mut last_text = String::new();
    let mut last_state = cockpit.state();

    loop {
        clock.wait_until(previous + dt);
        let now = clock.now();
        let steps = step.accumulate(now - previous);
        previous = now;

        for _ in 0..steps {
            task_time += dt;
            let frame = cockpit.tick(task_time, dt, &inputs);

            if frame.state != last_state {
                tracing::info!("t={:.2}s state {}", task_time, frame.state);
                last_state = frame.state;
            }
            if frame.hud.text != last_text {
                tracing::debug!("t={:.2}s hud {:?}", task_time, frame.hud.text);
                last_text = frame.hud.text;
            }

            if cockpit.is_complete() {
                tracing::info!("reading task complete after {:.2}s", task_time);
                return Ok(ExitCode::SUCCESS);
            }
            if options.max_seconds.is_some_and(|max| task_time >= max) {
                tracing::warn!("giving up after {:.2}s in state {}", task_time, frame.state);
                return Ok(ExitCode::from(EXIT_TIMEOUT));
            }
        }
    }
}
