use clap::Parser;
use julia_flywalk::{app, FlyWalkConfig, StartPoint, Vec4, SEED_POINTS};

#[derive(Parser, Debug)]
#[command(
    name = "julia-flywalk",
    about = "Autonomous flight through a 4D Julia/Mandelbrot parameter space"
)]
struct Args {
    /// RNG seed; omit for a different flight every run
    #[arg(long)]
    seed: Option<u64>,
    /// Index into the built-in table of starting points
    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(0..SEED_POINTS.len() as u64),
        conflicts_with = "start"
    )]
    start_point: Option<u64>,
    /// Explicit starting point (4 numbers: ZR ZI CR CI)
    #[arg(long, num_args = 4, value_names = ["ZR", "ZI", "CR", "CI"], allow_hyphen_values = true)]
    start: Option<Vec<f64>>,
    /// Frames per waypoint leg
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    max_step: u32,
    /// Initial zoom accumulator; zoom factor is 2^(setting / 400)
    #[arg(long, default_value_t = -3200.0, allow_hyphen_values = true)]
    zoom_setting: f64,
    /// Frames between diagnostic reports (0 disables them)
    #[arg(long, default_value_t = 120)]
    report_every: u64,
    /// Run without a window
    #[arg(long)]
    headless: bool,
    /// Number of frames to fly in headless mode
    #[arg(long, default_value_t = 3000)]
    frames: u64,
}

impl Args {
    fn config(&self) -> FlyWalkConfig {
        let start_point = match (&self.start, self.start_point) {
            (Some(start), _) => {
                StartPoint::Explicit(Vec4::new(start[0], start[1], start[2], start[3]))
            }
            (None, Some(index)) => StartPoint::Seed(index as usize),
            (None, None) => StartPoint::Random,
        };
        FlyWalkConfig {
            max_step: self.max_step,
            initial_zoom_setting: self.zoom_setting,
            report_every: self.report_every,
            rng_seed: self.seed,
            start_point,
            ..FlyWalkConfig::with_defaults()
        }
    }
}

fn main() {
    julia_flywalk::init_logging();
    let args = Args::parse();
    let config = args.config();
    log::debug!("{config:?}");

    if args.headless {
        let snapshot = app::run_headless(config, args.frames);
        println!("{snapshot}");
        return;
    }

    if let Err(err) = app::run(config) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
