use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::info;

use sceneboard::config::{ConfigError, SceneConfig};
use sceneboard::{PreShape, Scene, SceneError, Shape, ShapeId, Vector, Viewport};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid command: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scene(#[from] SceneError),
}

#[derive(Parser, Debug)]
#[command(name = "sceneboard", about = "Replay whiteboard scene commands from a JSON-lines script")]
struct Cli {
    /// Script to replay; reads stdin when omitted.
    script: Option<PathBuf>,

    /// Log level for diagnostics written to stderr.
    #[arg(long, env = "SCENE_LOG", default_value = "warn")]
    log_level: tracing::Level,
}

/// One line of a script.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Command {
    Insert { shape: PreShape },
    Remove { ids: Vec<ShapeId> },
    Translate { id: ShapeId, dx: f64, dy: f64 },
    Undo,
    Redo,
    Hit { probe: PreShape },
    Viewport { x: f64, y: f64, scale: f64 },
    List,
    ViewBox,
}

/// One line of output, tagged with the command that produced it.
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Response {
    Insert { shape: Shape },
    Remove { removed: Vec<ShapeId> },
    Translate { moved: bool },
    Undo { applied: bool, cursor: usize },
    Redo { applied: bool, cursor: usize },
    Hit { ids: Vec<ShapeId> },
    Viewport { viewport: Viewport },
    List { shapes: Vec<Shape> },
    ViewBox { view_box: String },
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let config = SceneConfig::from_env()?;
    let mut scene = config.build_scene();

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let mut out = io::stdout().lock();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command: Command =
            serde_json::from_str(trimmed).map_err(|source| CliError::Json { line: index + 1, source })?;
        let response = apply(&mut scene, command)?;
        serde_json::to_writer(&mut out, &response)?;
        writeln!(out)?;
    }

    info!(shapes = scene.len(), history = scene.history().len(), "script finished");
    Ok(())
}

fn apply(scene: &mut Scene, command: Command) -> Result<Response, CliError> {
    let response = match command {
        Command::Insert { shape } => Response::Insert { shape: scene.insert_with_history(shape).shape },
        Command::Remove { ids } => {
            let removed = scene.remove_with_history(|s| ids.contains(&s.id));
            Response::Remove { removed: removed.iter().map(|s| s.id).collect() }
        }
        Command::Translate { id, dx, dy } => Response::Translate { moved: scene.translate(id, Vector::new(dx, dy)) },
        Command::Undo => {
            let applied = scene.undo();
            Response::Undo { applied, cursor: scene.history().cursor() }
        }
        Command::Redo => {
            let applied = scene.redo();
            Response::Redo { applied, cursor: scene.history().cursor() }
        }
        Command::Hit { probe } => Response::Hit { ids: scene.hit_test(&probe).iter().map(|s| s.id).collect() },
        Command::Viewport { x, y, scale } => {
            scene.set_viewport_checked(x, y, scale)?;
            Response::Viewport { viewport: scene.viewport() }
        }
        Command::List => Response::List { shapes: scene.shapes().to_vec() },
        Command::ViewBox => Response::ViewBox { view_box: scene.view_box().to_string() },
    };
    Ok(response)
}
