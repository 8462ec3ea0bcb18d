use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use polyarea::io::{bounding_box, read_points, read_polygon, write_polygon};
use polyarea::optimize::{Augmentation, Objective, OptimizeCfg};
use polyarea::PolygonEngine;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::RunSummary;

#[derive(Parser)]
#[command(name = "polyarea")]
#[command(about = "Simple polygons of minimal and maximal area on integer point sets")]
struct Cmd {
    /// Point file: `(<n> points)` header, then `<index> <x> <y>` lines
    input: Option<PathBuf>,

    /// Directory for output polygons (default: next to the input)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Stop each optimizer run after this many insertions
    #[arg(long)]
    max_insertions: Option<usize>,

    /// Compute and report only; write no files
    #[arg(long)]
    no_write: bool,

    /// Write `<output stem>.provenance.json` next to each polygon
    #[arg(long)]
    provenance: bool,

    /// Check a polygon file (one index per line) against the input instead of optimizing
    #[arg(long, value_name = "POLYGON")]
    check: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let Some(input) = cmd.input.as_deref() else {
        println!("one argument required: input file storing 2D integer points\n");
        Cmd::command().print_help()?;
        return Ok(());
    };
    let engine = load(input)?;
    match &cmd.check {
        Some(polygon) => check(&engine, polygon),
        None => run(&cmd, input, &engine),
    }
}

fn load(input: &Path) -> Result<PolygonEngine> {
    let points = read_points(input).with_context(|| format!("loading {}", input.display()))?;
    let (xmax, ymax) = bounding_box(&points)?;
    println!(
        "Bounding box: {xmax} x {ymax} (area {})",
        i64::from(xmax) * i64::from(ymax)
    );
    Ok(PolygonEngine::new(points))
}

fn tag(objective: Objective) -> &'static str {
    match objective {
        Objective::MinArea => "min",
        Objective::MaxArea => "max",
    }
}

fn run(cmd: &Cmd, input: &Path, engine: &PolygonEngine) -> Result<()> {
    let hull_area = engine.hull_area();
    println!("Area of the convex hull: {hull_area}");

    let cfg = |objective| OptimizeCfg {
        objective,
        max_insertions: cmd.max_insertions,
    };
    let (min, max) = std::thread::scope(|s| {
        let min = s.spawn(|| engine.optimize(cfg(Objective::MinArea)));
        let max = engine.optimize(cfg(Objective::MaxArea));
        (min.join(), max)
    });
    let min = min.map_err(|_| anyhow::anyhow!("minimal-area run panicked"))?;

    for (objective, outcome) in [(Objective::MinArea, min), (Objective::MaxArea, max)] {
        let area = engine.area(&outcome.polygon);
        let valid = engine.check_validity(&outcome.polygon);
        let label = match objective {
            Objective::MinArea => "minimal",
            Objective::MaxArea => "maximal",
        };
        if !valid {
            println!("The {label} polygon is not valid (or not defined)");
        }
        println!("Area of the {label} polygon: {area}");

        if cmd.no_write {
            continue;
        }
        let out = output_path(input, cmd.out_dir.as_deref(), tag(objective));
        if let Some(dir) = cmd.out_dir.as_deref() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output dir {}", dir.display()))?;
        }
        write_polygon(Some(outcome.polygon.as_slice()), &out)
            .with_context(|| format!("writing {}", out.display()))?;
        if cmd.provenance {
            let summary = summarize(input, engine, objective, cmd, hull_area, area, valid, &outcome);
            provenance::write_sidecar(&out, &summary)?;
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn summarize(
    input: &Path,
    engine: &PolygonEngine,
    objective: Objective,
    cmd: &Cmd,
    hull_area: i64,
    area: i64,
    valid: bool,
    outcome: &Augmentation,
) -> RunSummary {
    RunSummary {
        input: input.to_string_lossy().into_owned(),
        points: engine.len(),
        objective: tag(objective),
        max_insertions: cmd.max_insertions,
        hull_area,
        area,
        valid,
        inserted: outcome.inserted,
        stop: format!("{:?}", outcome.stop),
    }
}

fn check(engine: &PolygonEngine, polygon: &Path) -> Result<()> {
    let polygon =
        read_polygon(polygon).with_context(|| format!("loading {}", polygon.display()))?;
    if engine.check_validity(&polygon) {
        println!("Polygon considered as valid");
    } else {
        println!("Polygon considered as invalid");
    }
    if polygon.iter().all(|&v| v < engine.len()) {
        println!("Area of the polygon: {}", engine.area(&polygon));
    }
    Ok(())
}

/// Output file for one objective: `instance` in the file name becomes `tag`;
/// names without it get `<stem>.<tag>.<ext>`. Lands in `out_dir` when given,
/// next to the input otherwise.
fn output_path(input: &Path, out_dir: Option<&Path>, tag: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "points".to_string());
    let derived = if name.contains("instance") {
        name.replace("instance", tag)
    } else {
        let p = Path::new(&name);
        match (p.file_stem(), p.extension()) {
            (Some(stem), Some(ext)) => {
                format!("{}.{tag}.{}", stem.to_string_lossy(), ext.to_string_lossy())
            }
            _ => format!("{name}.{tag}"),
        }
    };
    match out_dir {
        Some(dir) => dir.join(derived),
        None => input.with_file_name(derived),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SQUARE_WITH_CENTER: &str = "instance (5 points)\n\
                                      index x y\n\
                                      0 0 0\n\
                                      1 2 0\n\
                                      2 2 2\n\
                                      3 0 2\n\
                                      4 1 1\n";

    fn cmd(input: &Path) -> Cmd {
        Cmd {
            input: Some(input.to_path_buf()),
            out_dir: None,
            max_insertions: None,
            no_write: false,
            provenance: false,
            check: None,
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn output_names_follow_the_instance_token() {
        let input = Path::new("/data/uniform-0000015-1-instance.txt");
        assert_eq!(
            output_path(input, None, "min"),
            Path::new("/data/uniform-0000015-1-min.txt")
        );
        assert_eq!(
            output_path(input, Some(Path::new("/out")), "max"),
            Path::new("/out/uniform-0000015-1-max.txt")
        );
    }

    #[test]
    fn output_names_without_instance_token_keep_the_input() {
        assert_eq!(
            output_path(Path::new("/data/points.txt"), None, "min"),
            Path::new("/data/points.min.txt")
        );
        assert_eq!(
            output_path(Path::new("points"), None, "max"),
            Path::new("points.max")
        );
    }

    #[test]
    fn run_writes_valid_polygons_and_sidecars() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square-instance.txt");
        fs::write(&input, SQUARE_WITH_CENTER).unwrap();
        let engine = load(&input).unwrap();
        let cmd = Cmd {
            provenance: true,
            ..cmd(&input)
        };
        run(&cmd, &input, &engine).unwrap();

        for tag in ["min", "max"] {
            let out = dir.path().join(format!("square-{tag}.txt"));
            let polygon = read_polygon(&out).unwrap();
            assert!(engine.check_validity(&polygon));
            let sidecar = dir.path().join(format!("square-{tag}.provenance.json"));
            let doc: serde_json::Value =
                serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
            assert_eq!(doc["run"]["points"], 5);
            assert_eq!(doc["run"]["hull_area"], 4);
            assert_eq!(doc["run"]["valid"], true);
        }
    }

    #[test]
    fn no_write_leaves_the_directory_alone() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square-instance.txt");
        fs::write(&input, SQUARE_WITH_CENTER).unwrap();
        let engine = load(&input).unwrap();
        let cmd = Cmd {
            no_write: true,
            ..cmd(&input)
        };
        run(&cmd, &input, &engine).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn check_reads_polygon_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square-instance.txt");
        fs::write(&input, SQUARE_WITH_CENTER).unwrap();
        let engine = load(&input).unwrap();

        let polygon = dir.path().join("hand.txt");
        fs::write(&polygon, "3\n4\n0\n1\n2\n").unwrap();
        check(&engine, &polygon).unwrap();

        fs::write(&polygon, "0\n9\n").unwrap();
        check(&engine, &polygon).unwrap();

        fs::write(&polygon, "zero\n").unwrap();
        assert!(check(&engine, &polygon).is_err());
    }

    #[test]
    fn load_rejects_malformed_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad-instance.txt");
        fs::write(&input, "(3 points)\n0 0 0\n1 1 1\n").unwrap();
        let err = load(&input).unwrap_err();
        assert!(format!("{err:#}").contains("loading"));
    }
}
