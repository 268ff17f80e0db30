use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tetrabook::prelude::*;
use tetrabook::sweep::{
    full_turn_angles, max_inadvertent_deviation, max_relative_deviation, sample_angles, skipped,
};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

/// Smallest accepted `--step` (degrees).
const MIN_STEP_DEG: f64 = 1e-6;

#[derive(Parser)]
#[command(name = "tetrabook")]
#[command(about = "Volumes of the tetrahedra spanned by a page swinging between book covers")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Volume of a tetrahedron from six edge lengths (a b c d e f)
    Volume {
        #[arg(num_args = 6, required = true, allow_negative_numbers = true)]
        edges: Vec<f64>,
        #[command(flatten)]
        unit: UnitArgs,
    },
    /// Sweep the page out and back, write a CSV/Parquet table plus provenance sidecar
    Sweep {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = FacingArg::Up)]
        facing: FacingArg,
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        #[arg(long, default_value_t = 1)]
        passes: usize,
        #[command(flatten)]
        book: BookArgs,
        #[command(flatten)]
        unit: UnitArgs,
    },
    /// Verify the complementary invariant over a full turn for both facings
    Check {
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        /// Relative tolerance on |V0 - V1| / max(V0, V1)
        #[arg(long, default_value_t = 1e-6)]
        tol: f64,
        #[command(flatten)]
        book: BookArgs,
        #[command(flatten)]
        unit: UnitArgs,
    },
    /// Print a small provenance JSON block with the default book and config
    Report,
}

#[derive(Args)]
struct BookArgs {
    /// Spine length (S0 to S1)
    #[arg(long, default_value_t = std::f64::consts::SQRT_2)]
    spine: f64,
    /// Cover-axis length (C0 to C1)
    #[arg(long, default_value_t = 2.0)]
    axis: f64,
}

impl BookArgs {
    fn geometry(&self) -> Result<BookGeometry> {
        if !(self.spine > 0.0 && self.axis > 0.0) {
            bail!("--spine and --axis must be positive");
        }
        Ok(BookGeometry::symmetric(self.spine, self.axis))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Natural,
    Conventional,
}

#[derive(Args)]
struct UnitArgs {
    #[arg(long, value_enum, default_value_t = UnitArg::Natural)]
    unit: UnitArg,
    /// Reference diameter for conventional (cubic) volumes
    #[arg(long, default_value_t = 2.0)]
    diameter: f64,
    /// Relative tolerance for the degeneracy test on the Cayley–Menger determinant
    #[arg(long, default_value_t = 1e-9)]
    rel_tol: f64,
}

impl UnitArgs {
    fn volume_cfg(&self) -> VolumeCfg {
        let unit = match self.unit {
            UnitArg::Natural => VolumeUnit::Natural,
            UnitArg::Conventional => VolumeUnit::Conventional {
                diameter: self.diameter,
            },
        };
        VolumeCfg {
            unit,
            rel_tol: self.rel_tol,
        }
    }

    fn label(&self) -> &'static str {
        match self.unit {
            UnitArg::Natural => "natural",
            UnitArg::Conventional => "conventional",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FacingArg {
    Up,
    Down,
}

impl From<FacingArg> for Facing {
    fn from(f: FacingArg) -> Self {
        match f {
            FacingArg::Up => Facing::Up,
            FacingArg::Down => Facing::Down,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Volume { edges, unit } => volume(&edges, &unit),
        Action::Sweep {
            out,
            facing,
            step,
            passes,
            book,
            unit,
        } => sweep_table(out, facing.into(), step, passes, &book, &unit),
        Action::Check {
            step,
            tol,
            book,
            unit,
        } => check(step, tol, &book, &unit),
        Action::Report => report(),
    }
}

fn volume(edges: &[f64], unit: &UnitArgs) -> Result<()> {
    let [a, b, c, d, e, f] = <[f64; 6]>::try_from(edges)?;
    let set = EdgeLengthSet::new(a, b, c, d, e, f);
    let v = compute(&set, unit.volume_cfg())?;
    tracing::info!(?edges, unit = unit.label(), volume = v, "volume");
    println!("{}", v);
    Ok(())
}

fn check_step(step: f64) -> Result<()> {
    if !(step >= MIN_STEP_DEG && step.is_finite()) {
        bail!(
            "--step must be a finite number of degrees >= {:e}, got {}",
            MIN_STEP_DEG,
            step
        );
    }
    Ok(())
}

fn sweep_table(
    out: PathBuf,
    facing: Facing,
    step: f64,
    passes: usize,
    book_args: &BookArgs,
    unit: &UnitArgs,
) -> Result<()> {
    check_step(step)?;
    let book = book_args.geometry()?;
    let schedule = SweepCfg {
        step_deg: step,
        passes,
        ..SweepCfg::default()
    };
    let samples = sweep(&book, facing, schedule, unit.volume_cfg())?;
    let n_skipped = skipped(&samples);
    if n_skipped > 0 {
        tracing::warn!(skipped = n_skipped, "inadvertent tetrahedron unreachable for some frames");
    }
    let format = table::write_table(&samples, &out)?;
    let params = serde_json::json!({
        "spine": book_args.spine,
        "axis": book_args.axis,
        "facing": facing.to_string(),
        "step_deg": step,
        "passes": passes,
        "unit": unit.label(),
        "diameter": unit.diameter,
        "rel_tol": unit.rel_tol,
    });
    let prov = provenance::write_sidecar(&out, "sweep", params)?;
    tracing::info!(
        frames = samples.len(),
        max_deviation = max_relative_deviation(&samples),
        format = ?format,
        out = %out.display(),
        provenance = %prov.display(),
        "sweep"
    );
    Ok(())
}

fn check(step: f64, tol: f64, book_args: &BookArgs, unit: &UnitArgs) -> Result<()> {
    check_step(step)?;
    let book = book_args.geometry()?;
    let cfg = unit.volume_cfg();
    let angles = full_turn_angles(step)?;
    for facing in [Facing::Up, Facing::Down] {
        let samples = sample_angles(&book, facing, &angles, cfg)?;
        let deviation = max_relative_deviation(&samples);
        let inadvertent = max_inadvertent_deviation(&samples);
        tracing::info!(
            %facing,
            samples = samples.len(),
            max_deviation = deviation,
            max_inadvertent_deviation = inadvertent,
            skipped = skipped(&samples),
            "check"
        );
        if deviation > tol {
            bail!(
                "complementary volumes differ by {:e} (> {:e}) with the page facing {}",
                deviation,
                tol,
                facing
            );
        }
        if inadvertent > tol {
            tracing::warn!(%facing, deviation = inadvertent, "inadvertent volume departs from complementary");
        }
    }
    println!("ok: complementary volumes agree within {:e}", tol);
    Ok(())
}

fn report() -> Result<()> {
    let book = BookGeometry::default();
    let cfg = VolumeCfg::default();
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": tetrabook::VERSION,
        "book": {
            "spine": book.spine_segment().length(),
            "axis": book.axis_segment().length(),
            "rhomb": book.rhomb_length(),
        },
        "volume": {
            "unit": format!("{:?}", cfg.unit),
            "rel_tol": cfg.rel_tol,
        },
        "regular_dihedral_deg": regular_dihedral_deg(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
