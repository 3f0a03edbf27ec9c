use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use pairalign::align::{self, Align, AlignAlgorithm, AlignConfig, ExtendDirection, ExtendMode, Seed};
use pairalign::dp::band::Band;
use pairalign::dp::FreeEndGaps;
use pairalign::io::fasta::{read_fasta, FastaRecord};
use pairalign::score::{MatrixScore, Scoring, SimpleScore};
use pairalign::util::dna;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "pairalign", author, version, about = "Pairwise sequence alignment (global / local / banded / x-drop / split)", arg_required_else_help = true)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct ScoreArgs {
    #[arg(long = "match", default_value_t = 2, allow_negative_numbers = true)]
    match_score: i32,
    #[arg(long = "mismatch", default_value_t = -3, allow_negative_numbers = true)]
    mismatch_score: i32,
    /// Cost of the first position of a gap (negative)
    #[arg(long = "gap-open", default_value_t = -5, allow_negative_numbers = true)]
    gap_open: i32,
    /// Cost of every further gap position (negative)
    #[arg(long = "gap-ext", default_value_t = -2, allow_negative_numbers = true)]
    gap_extend: i32,
    /// Score of any pair involving N; switches to a DNA substitution matrix
    #[arg(long = "n-score", allow_negative_numbers = true)]
    n_score: Option<i32>,
}

/// 命令行选择的打分方案
enum CliScore {
    Simple(SimpleScore),
    Dna(MatrixScore),
}

impl CliScore {
    fn as_scoring(&self) -> &(dyn Scoring + Sync) {
        match self {
            CliScore::Simple(s) => s,
            CliScore::Dna(m) => m,
        }
    }
}

impl ScoreArgs {
    fn build(self) -> CliScore {
        match self.n_score {
            Some(n) => CliScore::Dna(MatrixScore::dna(self.match_score, self.mismatch_score, n, self.gap_open, self.gap_extend)),
            None => CliScore::Simple(SimpleScore::new(self.match_score, self.mismatch_score, self.gap_open, self.gap_extend)),
        }
    }
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Treat positional inputs as literal sequences instead of FASTA paths
    #[arg(long)]
    literal: bool,
    /// Normalise nucleotides (upper case, U -> T, others -> N)
    #[arg(long)]
    dna: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    Global,
    Local,
    ExtendLeft,
    ExtendRight,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SeedMode {
    Match,
    Ungapped,
    Gapped,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
    Both,
}

impl From<Direction> for ExtendDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Left => ExtendDirection::Left,
            Direction::Right => ExtendDirection::Right,
            Direction::Both => ExtendDirection::Both,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Align two sequences and print the alignment
    Align {
        /// First sequence (horizontal): FASTA path, or literal with --literal
        seq_h: String,
        /// Second sequence (vertical): FASTA path, or literal with --literal
        seq_v: String,
        #[arg(short, long, value_enum, default_value_t = Algorithm::Global)]
        algorithm: Algorithm,
        /// Lower diagonal of the band (col - row); requires --band-upper
        #[arg(long, allow_negative_numbers = true, requires = "band_upper")]
        band_lower: Option<i64>,
        #[arg(long, allow_negative_numbers = true, requires = "band_lower")]
        band_upper: Option<i64>,
        #[arg(long = "x-drop", default_value_t = 20)]
        x_drop: i32,
        /// Leading and trailing gaps of both sequences are free (overlap alignment)
        #[arg(long)]
        free_ends: bool,
        /// Print only the score
        #[arg(long)]
        score_only: bool,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        score: ScoreArgs,
    },
    /// Score every query against every target in parallel
    Batch {
        queries: String,
        targets: String,
        #[arg(short, long, value_enum, default_value_t = Algorithm::Global)]
        algorithm: Algorithm,
        #[arg(long = "x-drop", default_value_t = 20)]
        x_drop: i32,
        /// Output TSV path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        score: ScoreArgs,
    },
    /// Extend a seed (begin_h,begin_v,end_h,end_v) between two sequences
    Extend {
        seq_h: String,
        seq_v: String,
        /// Seed as begin_h,begin_v,end_h,end_v (0-based, end exclusive)
        #[arg(long, value_parser = parse_seed)]
        seed: Seed,
        #[arg(long, value_enum, default_value_t = SeedMode::Gapped)]
        mode: SeedMode,
        #[arg(long, value_enum, default_value_t = Direction::Both)]
        direction: Direction,
        #[arg(long = "x-drop", default_value_t = 20)]
        x_drop: i32,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        score: ScoreArgs,
    },
    /// Find the best breakpoint of a read between two reference pieces
    Split {
        ref_left: String,
        ref_right: String,
        read: String,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        score: ScoreArgs,
    },
}

fn parse_seed(s: &str) -> std::result::Result<Seed, String> {
    let parts: Vec<usize> = s
        .split(',')
        .map(|p| p.trim().parse::<usize>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| format!("invalid seed '{}': {}", s, e))?;
    match parts.as_slice() {
        &[begin_h, begin_v, end_h, end_v] => Ok(Seed::new(begin_h, begin_v, end_h, end_v)),
        _ => Err(format!("seed must be begin_h,begin_v,end_h,end_v, got '{}'", s)),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Align {
            seq_h,
            seq_v,
            algorithm,
            band_lower,
            band_upper,
            x_drop,
            free_ends,
            score_only,
            input,
            score,
        } => {
            let band = match (band_lower, band_upper) {
                (Some(lower), Some(upper)) => Some(Band::new(lower, upper)?),
                _ => None,
            };
            let mut config = AlignConfig::new(select_algorithm(algorithm, band, x_drop)?);
            if free_ends {
                config = config.with_free_end_gaps(FreeEndGaps::all());
            }
            run_align(&seq_h, &seq_v, &input, score.build(), config, score_only)
        }
        Commands::Batch {
            queries,
            targets,
            algorithm,
            x_drop,
            out,
            threads,
            input,
            score,
        } => {
            let config = AlignConfig::new(select_algorithm(algorithm, None, x_drop)?);
            run_batch(&queries, &targets, &input, score.build(), config, out.as_deref(), threads)
        }
        Commands::Extend {
            seq_h,
            seq_v,
            seed,
            mode,
            direction,
            x_drop,
            input,
            score,
        } => {
            let mode = match mode {
                SeedMode::Match => ExtendMode::Match,
                SeedMode::Ungapped => ExtendMode::UngappedXDrop(x_drop),
                SeedMode::Gapped => ExtendMode::GappedXDrop(x_drop),
            };
            run_extend(&seq_h, &seq_v, &input, score.build(), seed, direction.into(), mode)
        }
        Commands::Split {
            ref_left,
            ref_right,
            read,
            input,
            score,
        } => run_split(&ref_left, &ref_right, &read, &input, score.build()),
    }
}

fn select_algorithm(algorithm: Algorithm, band: Option<Band>, x_drop: i32) -> Result<AlignAlgorithm> {
    Ok(match (algorithm, band) {
        (Algorithm::Global, None) => AlignAlgorithm::Global,
        (Algorithm::Global, Some(b)) => AlignAlgorithm::GlobalBanded(b),
        (Algorithm::Local, None) => AlignAlgorithm::Local,
        (Algorithm::Local, Some(b)) => AlignAlgorithm::LocalBanded(b),
        (Algorithm::ExtendLeft | Algorithm::ExtendRight, Some(_)) => {
            bail!("--band-lower/--band-upper cannot be combined with extension")
        }
        (Algorithm::ExtendLeft, None) => AlignAlgorithm::Extend {
            direction: ExtendDirection::Left,
            x_drop,
        },
        (Algorithm::ExtendRight, None) => AlignAlgorithm::Extend {
            direction: ExtendDirection::Right,
            x_drop,
        },
    })
}

/// 读取输入：`--literal` 时参数本身就是序列，否则读取 FASTA 的全部记录
fn load_records(arg: &str, input: &InputArgs) -> Result<Vec<FastaRecord>> {
    let mut records = if input.literal {
        vec![FastaRecord {
            id: "literal".to_string(),
            desc: None,
            seq: arg.as_bytes().to_vec(),
        }]
    } else {
        read_fasta(Path::new(arg))?
    };
    if records.is_empty() {
        bail!("FASTA file '{}' contains no sequences", arg);
    }
    if input.dna {
        for rec in &mut records {
            if !dna::looks_like_dna(&rec.seq) {
                log::warn!("sequence '{}' has non-nucleotide symbols, they become N", rec.id);
            }
            rec.seq = dna::normalize_seq(&rec.seq);
        }
    }
    Ok(records)
}

fn load_one(arg: &str, input: &InputArgs) -> Result<FastaRecord> {
    let mut records = load_records(arg, input)?;
    if records.len() > 1 {
        log::warn!("'{}' has {} records, using the first", arg, records.len());
    }
    Ok(records.swap_remove(0))
}

fn run_align(
    seq_h: &str,
    seq_v: &str,
    input: &InputArgs,
    score: CliScore,
    config: AlignConfig,
    score_only: bool,
) -> Result<()> {
    let h = load_one(seq_h, input)?;
    let v = load_one(seq_v, input)?;
    let scoring = score.as_scoring();

    if score_only {
        let s = align::pair_score(&h.seq, &v.seq, scoring, &config)?;
        println!("{}", s);
        return Ok(());
    }

    let mut alignment = Align::new(&h.seq, &v.seq);
    let s = align::align_pair(&mut alignment, scoring, &config)
        .with_context(|| format!("cannot align '{}' with '{}'", h.id, v.id))?;
    let (row_h, row_v) = (alignment.row(0), alignment.row(1));
    println!(
        "# {} [{}, {}) vs {} [{}, {})",
        h.id,
        row_h.clipped_begin(),
        row_h.clipped_end(),
        v.id,
        row_v.clipped_begin(),
        row_v.clipped_end()
    );
    println!("# score: {}", s);
    print!("{}", alignment);
    Ok(())
}

fn run_batch(
    queries: &str,
    targets: &str,
    input: &InputArgs,
    score: CliScore,
    config: AlignConfig,
    out_path: Option<&str>,
    threads: usize,
) -> Result<()> {
    if threads > 1 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to build thread pool")?;
    }

    let qs = load_records(queries, input)?;
    let ts = load_records(targets, input)?;
    let pairs: Vec<(&[u8], &[u8])> = qs
        .iter()
        .flat_map(|q| ts.iter().map(move |t| (q.seq.as_slice(), t.seq.as_slice())))
        .collect();
    log::info!("scoring {} pairs ({} x {})", pairs.len(), qs.len(), ts.len());

    let scores = align::score_batch(&pairs, score.as_scoring(), &config)?;

    let mut out: Box<dyn Write> = match out_path {
        Some(p) => Box::new(std::io::BufWriter::new(
            std::fs::File::create(p).with_context(|| format!("cannot create '{}'", p))?,
        )),
        None => Box::new(std::io::BufWriter::new(std::io::stdout())),
    };
    writeln!(out, "# pairalign batch {:?} {}", config.algorithm, chrono::Utc::now().to_rfc3339())?;
    writeln!(out, "query\ttarget\tscore")?;
    let names = qs.iter().flat_map(|q| ts.iter().map(move |t| (&q.id, &t.id)));
    for ((q, t), s) in names.zip(&scores) {
        writeln!(out, "{}\t{}\t{}", q, t, s)?;
    }
    out.flush()?;
    Ok(())
}

fn run_extend(
    seq_h: &str,
    seq_v: &str,
    input: &InputArgs,
    score: CliScore,
    mut seed: Seed,
    direction: ExtendDirection,
    mode: ExtendMode,
) -> Result<()> {
    let h = load_one(seq_h, input)?;
    let v = load_one(seq_v, input)?;
    align::extend_seed(&mut seed, &h.seq, &v.seq, direction, mode, score.as_scoring())?;
    println!(
        "{}\t{}\t{}\t{}\t{}",
        seed.begin_h, seed.begin_v, seed.end_h, seed.end_v, seed.score
    );

    // 延伸区域再做一次带回溯的全局比对用于展示
    let mut alignment = Align::new(&h.seq[seed.begin_h..seed.end_h], &v.seq[seed.begin_v..seed.end_v]);
    align::global_alignment(&mut alignment, score.as_scoring())?;
    print!("{}", alignment);
    Ok(())
}

fn run_split(ref_left: &str, ref_right: &str, read: &str, input: &InputArgs, score: CliScore) -> Result<()> {
    let l = load_one(ref_left, input)?;
    let r = load_one(ref_right, input)?;
    let q = load_one(read, input)?;
    let split = align::split_alignment(&l.seq, &r.seq, &q.seq, score.as_scoring());
    let bp = split.breakpoint;
    println!(
        "# breakpoint: read {} | {} end {} | {} begin {} | score {} + {} = {}",
        bp.read_pos,
        l.id,
        bp.left_end,
        r.id,
        bp.right_begin,
        bp.left_score,
        bp.right_score,
        bp.score()
    );
    print!("{}", split.left);
    print!("{}", split.right);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed() {
        assert_eq!(parse_seed("11,7,14,10").unwrap(), Seed::new(11, 7, 14, 10));
        assert!(parse_seed("1,2,3").is_err());
        assert!(parse_seed("a,b,c,d").is_err());
    }

    #[test]
    fn band_rejected_for_extension() {
        let band = Band::new(-2, 2).unwrap();
        assert!(select_algorithm(Algorithm::ExtendLeft, Some(band), 10).is_err());
        assert_eq!(
            select_algorithm(Algorithm::Local, Some(band), 10).unwrap(),
            AlignAlgorithm::LocalBanded(band)
        );
    }

    #[test]
    fn cli_parses_align_command() {
        let cli = Cli::try_parse_from([
            "pairalign", "align", "--literal", "ACGT", "AGT", "--gap-open", "-4", "--band-lower", "-2", "--band-upper", "1",
        ])
        .unwrap();
        match cli.command {
            Commands::Align { band_lower, band_upper, score, input, .. } => {
                assert_eq!((band_lower, band_upper), (Some(-2), Some(1)));
                assert_eq!(score.gap_open, -4);
                assert!(input.literal);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
