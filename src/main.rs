use std::process::ExitCode;
use std::thread;

use clap::Parser;
use glam::DVec3;
use log::{error, info};

use muscle_lab::{
    AnchorSet, Animator, Muscle, MuscleConfig, MuscleError, MuscleRig, RecordingRenderer,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with muscle geometry and tuning
    #[arg(long)]
    config: Option<String>,

    /// Contraction ratio to show, 0 is extended and 1 fully contracted
    #[arg(long, default_value_t = 0.0)]
    ratio: f64,

    /// Run the contract/extend animation for this many ticks instead
    #[arg(long)]
    sweep: Option<usize>,

    /// Wait one tick between animation steps
    #[arg(long)]
    realtime: bool,

    /// Start anchor as x,y,z
    #[arg(long, value_parser = parse_point)]
    start: Option<DVec3>,

    /// End anchor as x,y,z, defaults to the rest length along x
    #[arg(long, value_parser = parse_point)]
    end: Option<DVec3>,
}

fn parse_point(source: &str) -> Result<DVec3, String> {
    let coordinates = source
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|e| format!("{part:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match coordinates.as_slice() {
        [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got {source:?}")),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), MuscleError> {
    let config = match &args.config {
        Some(path) => MuscleConfig::load(path)?,
        None => MuscleConfig::default(),
    };
    info!("Muscle config:\n{}", config.to_json()?);

    let mut anchors = AnchorSet::new();
    let start = anchors.insert("start", args.start.unwrap_or(DVec3::ZERO));
    let end = anchors.insert(
        "end",
        args.end.unwrap_or(DVec3::new(config.length, 0.0, 0.0)),
    );
    let muscle = Muscle::new(&config)?;
    let mut rig = MuscleRig::new(muscle, start, end, config.arc_shape()?, RecordingRenderer::new());

    let now = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    println!("# Muscle Lab, Created: {now}");

    match args.sweep {
        None => {
            rig.set_contraction(args.ratio);
            let outcome = rig.update(&anchors)?;
            info!("Update {outcome}");
            print_rig(&rig);
        }
        Some(ticks) => {
            let mut animator = Animator::new(&config);
            animator.start();
            for tick in 0..ticks {
                animator.step(rig.muscle_mut());
                let outcome = rig.update(&anchors)?;
                let muscle = rig.muscle();
                println!(
                    "tick {tick}: {} length {} ({outcome})",
                    muscle.contraction_percent(),
                    muscle.current_length()
                );
                if args.realtime {
                    thread::sleep(animator.tick());
                }
            }
            print_rig(&rig);
        }
    }
    Ok(())
}

fn print_rig(rig: &MuscleRig<RecordingRenderer>) {
    println!("{}", rig.muscle());
    for placement in rig.renderer().placements() {
        println!("{placement}");
    }
}
