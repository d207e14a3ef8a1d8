// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// rtd - k-mer return time distribution (RTD) calculation, one JSON line per FASTA record
pub struct Args {
    /// k-mer length, input FASTA file and optional output JSONL file (default: stdout)
    #[argh(positional)]
    pub positional: Vec<String>,

    /// compute distances to reverse complement k-mers
    #[argh(switch, short = 'r')]
    pub reverse_complement: bool,

    /// compute distances between every pair of k-mers
    #[argh(switch, short = 'p')]
    pub pairwise: bool,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// records processed per parallel batch (default: 1000)
    #[argh(option)]
    pub chunk_size: Option<usize>,

    /// include only records whose id matches regex pattern
    #[argh(option)]
    pub include_records: Option<String>,

    /// exclude records whose id matches regex pattern
    #[argh(option)]
    pub exclude_records: Option<String>,

    /// skip records that fail validation instead of aborting
    #[argh(switch)]
    pub skip_invalid: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// benchmark mode: time the calculation for k = 1..=benchmark-max-k and exit
    #[argh(switch)]
    pub benchmark: bool,

    /// largest k timed in benchmark mode (default: 5)
    #[argh(option, default = "5")]
    pub benchmark_max_k: usize,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// show version and exit
    #[argh(switch)]
    pub version: bool,
}

impl Args {
    /// k-mer length (first positional argument)
    pub fn k(&self) -> Result<Option<usize>, String> {
        self.positional
            .first()
            .map(|k| {
                k.parse::<usize>()
                    .map_err(|_| format!("Invalid k-mer length '{}'", k))
            })
            .transpose()
    }

    /// Input FASTA file (second positional argument)
    pub fn input(&self) -> Option<&str> {
        self.positional.get(1).map(|s| s.as_str())
    }

    /// Output JSONL file (third positional argument)
    pub fn output(&self) -> Option<&str> {
        self.positional.get(2).map(|s| s.as_str())
    }
}
