use std::time::{Duration, Instant};

use anyhow::Context as _;
use serde_json::json;
use sha2::Digest as _;
use wavyte_motion::{
    AnimationConfig, AnimationKind, CustomParams, DualPhaseRequest, Ease, Evaluator, Fps,
    FrameIndex, FrameRange, Length, Motion, PropertySet, SampleThreading, SpringParams,
    StaggerPlan,
};

#[derive(Clone, Debug)]
struct BenchArgs {
    fps: u32,
    seconds: u32,
    rows: usize,
    columns: usize,
    warmup: u32,
    repeats: u32,
    parallel: bool,
    threads: Option<usize>,
    chunk_size: usize,
}

#[derive(Clone, Debug, Default)]
struct RunMetrics {
    eval_total: Duration,
    digest_total: Duration,
    wall_total: Duration,
    frames_static: u64,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;

    if args.fps == 0 || args.seconds == 0 {
        anyhow::bail!("--fps and --seconds must be > 0");
    }
    if args.rows == 0 || args.columns == 0 {
        anyhow::bail!("--rows and --columns must be > 0");
    }
    if args.chunk_size == 0 {
        anyhow::bail!("--chunk-size must be >= 1");
    }
    if let Some(n) = args.threads
        && n == 0
    {
        anyhow::bail!("--threads must be >= 1 when set");
    }

    let fps = Fps::new(args.fps, 1)?;
    let frames = fps.secs_to_frames_floor(f64::from(args.seconds));
    let evaluator = Evaluator::new(fps);
    let scene = build_scoreboard(&args, frames)?;

    eprintln!(
        "bench: {repeats} run(s) ({profile} build), {frames} frames/run ({seconds}s @ {fps} fps), {motions} motions, mode={mode}, threads={threads}, chunk={chunk}",
        repeats = args.repeats,
        profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
        seconds = args.seconds,
        fps = args.fps,
        motions = scene.len(),
        mode = if args.parallel {
            "parallel"
        } else {
            "sequential"
        },
        threads = args
            .threads
            .map(|n| n.to_string())
            .unwrap_or_else(|| "auto".to_string()),
        chunk = args.chunk_size,
    );

    if args.warmup > 0 {
        eprintln!("warmup: {} run(s)", args.warmup);
        for i in 0..args.warmup {
            let _ = run_once(&args, &evaluator, &scene, frames, i, /*is_warmup=*/ true)?;
        }
    }

    let mut runs = Vec::<RunMetrics>::with_capacity(args.repeats as usize);
    let mut digest = String::new();
    for i in 0..args.repeats {
        let (m, d) = run_once(&args, &evaluator, &scene, frames, i, /*is_warmup=*/ false)?;
        if !digest.is_empty() && digest != d {
            anyhow::bail!("run {i} produced digest {d}, expected {digest} (non-deterministic)");
        }
        digest = d;
        runs.push(m);
    }

    report_percentiles(&runs);

    let evals = frames * scene.len() as u64;
    let eval_p50 = percentile(&sorted(&runs, |m| m.eval_total), 0.50);
    let summary = json!({
        "frames": frames,
        "motions": scene.len(),
        "evaluations_per_run": evals,
        "repeats": args.repeats,
        "parallel": args.parallel,
        "eval_p50_ms": eval_p50.as_secs_f64() * 1000.0,
        "ns_per_evaluation_p50": eval_p50.as_nanos() as f64 / evals.max(1) as f64,
        "frames_static": runs.last().map_or(0, |m| m.frames_static),
        "sha256": digest,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("serialize bench summary")?
    );
    Ok(())
}

/// Rows slide in one after another, their cells pop in with a per-column stagger, and everything
/// leaves in the final second.
fn build_scoreboard(args: &BenchArgs, frames: u64) -> anyhow::Result<Vec<Motion>> {
    let exit_frame = FrameIndex(frames.saturating_sub(u64::from(args.fps)).max(1));
    let row_plan = StaggerPlan::new(6, 4);
    let cell_plan = StaggerPlan::new(14, 2);

    let row_entry = AnimationConfig::new(AnimationKind::FadeSlideUp)
        .with_duration(18)
        .with_easing(Ease::OutCubic)
        .with_custom(CustomParams {
            distance: Some(Length::Px(24.0)),
            ..CustomParams::default()
        });
    let row_exit = AnimationConfig::new(AnimationKind::FadeOut)
        .with_duration(12)
        .with_easing(Ease::InQuad);

    let spring = SpringParams::new(170.0, 14.0, 1.0)?;
    let cell_entry = AnimationConfig::new(AnimationKind::SpringPop).with_easing(spring);
    let cell_exit = AnimationConfig::new(AnimationKind::CollapseRight)
        .with_duration(10)
        .with_easing(Ease::EaseIn);

    let mut scene: Vec<Motion> = Vec::with_capacity(args.rows * (args.columns + 1) + 1);
    for row in 0..args.rows {
        let entry = row_plan.config_for(row, &row_entry);
        scene.push(DualPhaseRequest::new(entry, row_exit, exit_frame).into());
        for col in 0..args.columns {
            let entry = cell_plan.config_for(row * args.columns + col, &cell_entry);
            let exit = cell_exit.with_delay(i64::try_from(col).unwrap_or(i64::MAX));
            scene.push(DualPhaseRequest::new(entry, exit, exit_frame).into());
        }
    }
    // Header flicker.
    scene.push(
        AnimationConfig::new(AnimationKind::Glitch)
            .with_duration(i64::from(args.fps))
            .with_custom(CustomParams {
                seed: Some(7),
                ..CustomParams::default()
            })
            .into(),
    );
    Ok(scene)
}

fn run_once(
    args: &BenchArgs,
    evaluator: &Evaluator,
    scene: &[Motion],
    frames: u64,
    run_idx: u32,
    is_warmup: bool,
) -> anyhow::Result<(RunMetrics, String)> {
    let wall = Instant::now();
    let range = FrameRange::new(FrameIndex(0), FrameIndex(frames))?;
    let threading = SampleThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let mut m = RunMetrics::default();
    let mut hasher = sha2::Sha256::new();
    for motion in scene {
        let t0 = Instant::now();
        let (sets, stats) =
            wavyte_motion::sample_range_with_stats(evaluator, range, motion, &threading)?;
        m.eval_total += t0.elapsed();
        m.frames_static += stats.frames_static;

        let t1 = Instant::now();
        for props in &sets {
            hash_properties(&mut hasher, props);
        }
        m.digest_total += t1.elapsed();
    }
    let digest = hex(&hasher.finalize());

    m.wall_total = wall.elapsed();

    if !is_warmup {
        eprintln!(
            "run {run_idx:03}: wall={wall:.3}s eval={ev:.3}s digest={di:.3}s static={st}",
            wall = m.wall_total.as_secs_f64(),
            ev = m.eval_total.as_secs_f64(),
            di = m.digest_total.as_secs_f64(),
            st = m.frames_static,
        );
    }

    Ok((m, digest))
}

fn hash_properties(hasher: &mut sha2::Sha256, props: &PropertySet) {
    let fp = wavyte_motion::fingerprint_properties(props);
    hasher.update(fp.hi.to_le_bytes());
    hasher.update(fp.lo.to_le_bytes());
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        fps: 30,
        seconds: 10,
        rows: 20,
        columns: 6,
        warmup: 1,
        repeats: 50,
        parallel: false,
        threads: None,
        chunk_size: 64,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--fps" => out.fps = parse_u32(args.next(), "--fps")?,
            "--seconds" => out.seconds = parse_u32(args.next(), "--seconds")?,
            "--rows" => out.rows = parse_usize(args.next(), "--rows")?,
            "--columns" => out.columns = parse_usize(args.next(), "--columns")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--parallel" => out.parallel = true,
            "--threads" => out.threads = Some(parse_usize(args.next(), "--threads")?),
            "--chunk-size" => out.chunk_size = parse_usize(args.next(), "--chunk-size")?,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        r#"wavyte-motion-bench

Samples a staggered scoreboard scene (rows x columns of entry/exit motions) repeatedly and
reports p50/p90/p99 per stage, then prints a JSON summary with a SHA-256 of every property set.

Usage:
  cargo run -q --release
  cargo run -q --release -- --seconds 20 --rows 40
  cargo run -q --release -- --parallel --threads 4

Args:
  --fps N          (default 30)
  --seconds N      (default 10)
  --rows N         (default 20)
  --columns N      (default 6)
  --warmup N       (default 1)
  --repeats N      (default 50)
  --parallel       sample each motion on a rayon pool
  --threads N      worker threads for parallel mode (default auto)
  --chunk-size N   frames per chunk in parallel mode (default 64)
"#
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn parse_usize(v: Option<String>, flag: &str) -> anyhow::Result<usize> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<usize>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn sorted(runs: &[RunMetrics], f: fn(&RunMetrics) -> Duration) -> Vec<Duration> {
    let mut v = runs.iter().map(f).collect::<Vec<_>>();
    v.sort_by_key(|d| d.as_nanos());
    v
}

fn percentile(v: &[Duration], p: f64) -> Duration {
    if v.is_empty() {
        return Duration::ZERO;
    }
    let n = v.len();
    let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
    v[rank - 1]
}

fn report_percentiles(runs: &[RunMetrics]) {
    type Getter = fn(&RunMetrics) -> Duration;
    type Field = (&'static str, Getter);

    fn fmt_ms(d: Duration) -> String {
        format!("{:.3}ms", d.as_secs_f64() * 1000.0)
    }

    let fields: &[Field] = &[
        ("eval_total", |m| m.eval_total),
        ("digest_total", |m| m.digest_total),
        ("wall_total", |m| m.wall_total),
    ];

    eprintln!("\npercentiles across runs (p50/p90/p99):");
    for (name, getter) in fields {
        let v = sorted(runs, *getter);
        eprintln!(
            "  {name:14} p50={p50:>10}  p90={p90:>10}  p99={p99:>10}",
            name = *name,
            p50 = fmt_ms(percentile(&v, 0.50)),
            p90 = fmt_ms(percentile(&v, 0.90)),
            p99 = fmt_ms(percentile(&v, 0.99))
        );
    }
}
