use std::path::PathBuf;

use log::{error, info, LevelFilter};
use structopt::StructOpt;

use diffuse_rt::output::save_film;
use diffuse_rt::parsing::{load_json, SceneData};
use diffuse_rt::renderer::render;

#[derive(Debug, StructOpt)]
#[structopt(name = "diffuse_rt", about = "Diffuse ray caster for spheres, triangles, cubes and planes")]
struct Opt {
    /// Scene description (JSON). The built-in scene is used when omitted.
    #[structopt(long, parse(from_os_str))]
    scene: Option<PathBuf>,

    /// Output image; the extension selects the format (.ppm, .png or .exr).
    #[structopt(short, long, parse(from_os_str), default_value = "output/render.ppm")]
    output: PathBuf,

    /// Overrides the scene's image width.
    #[structopt(long)]
    width: Option<u32>,

    /// Overrides the scene's image height.
    #[structopt(long)]
    height: Option<u32>,

    /// Overrides the scene's samples per pixel.
    #[structopt(short, long)]
    samples: Option<u32>,

    /// Worker threads. Defaults to the number of logical cores.
    #[structopt(long)]
    threads: Option<usize>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(opt: Opt) -> diffuse_rt::Result<()> {
    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        log::warn!("could not configure thread pool: {}", e);
    }

    let mut data = match &opt.scene {
        Some(path) => {
            info!("loading scene from {}", path.display());
            load_json::<SceneData>(path)?
        }
        None => {
            info!("no scene given, using the built-in scene");
            SceneData::builtin()
        }
    };
    if let Some(width) = opt.width {
        data.image_width = width;
    }
    if let Some(height) = opt.height {
        data.image_height = height;
    }
    if let Some(samples) = opt.samples {
        data.samples_per_pixel = samples;
    }

    let (scene, camera, settings) = data.build()?;
    info!(
        "scene has {} primitives and {} lights",
        scene.primitives().len(),
        scene.lights.len()
    );
    let film = render(&scene, &camera, &settings);
    save_film(&film, &opt.output)
}

fn main() {
    let opt = Opt::from_args();
    init_logger(opt.verbose);

    if let Err(e) = run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
