use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use motioncraft::{
    BarGraph, CancelToken, Circle, EngineConfig, ExportOptions, Fps, Group, Interp, Modifier,
    Outline, Pause, Rect, Resolution, Scene, Strategy, export,
};

#[derive(Parser, Debug)]
#[command(name = "motioncraft", version, about = "Render the built-in demo animation to MP4")]
struct Cli {
    /// Output MP4 path.
    #[arg(long, default_value = "motioncraft-demo.mp4")]
    out: PathBuf,

    /// Render threads; 1 renders and encodes on the main thread.
    #[arg(long, default_value_t = 1)]
    workers: usize,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hide the terminal progress bar.
    #[arg(long)]
    no_progress: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || cancel.cancel()).context("install Ctrl-C handler")?;
    }

    let res = Resolution::new(cli.width, cli.height)?;
    let fps = Fps::integer(cli.fps)?;
    let scenes = [intro_scene(res, &config)?, chart_scene(res, &config)?];

    let strategy = if cli.workers > 1 {
        Strategy::Multi {
            workers: cli.workers,
        }
    } else {
        Strategy::Single
    };
    let options = ExportOptions {
        strategy,
        show_progress: !cli.no_progress,
        cancel,
        notifier: None,
        config,
    };

    match export(&scenes, res, fps, &cli.out, options) {
        Ok(stats) => {
            eprintln!(
                "wrote {} frames ({} skipped) to {}",
                stats.frames_written,
                stats.frames_skipped,
                cli.out.display()
            );
            Ok(())
        }
        Err(e) if e.is_cancelled() => {
            eprintln!("export cancelled");
            std::process::exit(130);
        }
        Err(e) => Err(e.into()),
    }
}

/// A ball rolling across a bar, with a one second hold on each side.
fn intro_scene(res: Resolution, config: &EngineConfig) -> anyhow::Result<Scene> {
    let (w, h) = (i64::from(res.width), i64::from(res.height));
    let mut scene = Scene::with_config(0, 60, 1, Pause { before: 30, after: 30 }, config)?
        .with_motion_blur(true);
    scene.background.keyframe([20, 20, 30, 255], 0);

    let mut floor = Rect::new([0, h * 3 / 4], [w, 8], [200, 200, 200, 255]);
    floor.size.keyframe([0, 8], 0).keyframe([w, 8], 20);
    scene.add(floor);

    let r = h / 12;
    let mut ball = Circle::new([r, h * 3 / 4 - r], r, [230, 80, 60, 255])
        .with_border(Outline::new(3, [255, 255, 255, 255]));
    ball.center
        .keyframe([r, h * 3 / 4 - r], 0)
        .keyframe_with([w - r, h * 3 / 4 - r], 60, Interp::Parabolic)?;
    scene.add(ball);

    let mut badge = Group::with_children([Rect::new([0, 0], [w, h], [60, 120, 220, 255]).into()])
        .placed([w - 120, 20], [100, 60]);
    badge.push(Circle::new([w / 2, h / 2], h / 3, [255, 255, 255, 200]));
    let mut badge: motioncraft::Drawable = badge.into();
    badge.add_modifier(Modifier::gaussian_blur(2));
    scene.add(badge);
    Ok(scene)
}

fn chart_scene(res: Resolution, config: &EngineConfig) -> anyhow::Result<Scene> {
    let (w, h) = (i64::from(res.width), i64::from(res.height));
    let mut scene = Scene::with_config(0, 45, 1, Pause { before: 0, after: 15 }, config)?;
    scene.background.keyframe([245, 245, 245, 255], 0);

    let mut chart = BarGraph::new(
        [w / 8, h / 8],
        [w * 3 / 4, h * 3 / 4],
        &["alpha", "beta", "gamma", "delta"],
        &[0, 0, 0, 0],
        None,
    )?;
    for (bar, target) in chart.values.iter_mut().zip([120, 260, 180, 320]) {
        bar.keyframe(0, 0).keyframe_with(target, 45, Interp::Parabolic)?;
    }
    scene.add(chart);

    let mut flipped =
        motioncraft::Drawable::new(Rect::new([w / 2 - 40, 20], [80, 20], [30, 30, 30, 255]));
    flipped.add_modifier(Modifier::flip(true, false));
    scene.add(flipped);
    Ok(scene)
}
