//! SLURM job script and submission script generation.
//!
//! Job scripts depend only on the case index. The submission script lists
//! every index of the sweep, so its length always tracks the case table.

use std::fmt::Write as FmtWrite;

use borefield_cases::{case_stem, Sweep};

use crate::emit::ScriptFile;
use crate::template::case_file_name;

/// File extension of generated shell scripts.
pub const SCRIPT_EXTENSION: &str = "sh";

/// File name of the aggregate submission script.
pub const SUBMIT_SCRIPT: &str = "submit_all.sh";

/// Returns the job script file name for a case index (`case_007.sh`).
#[must_use]
pub fn job_file_name(index: u32) -> String {
    format!("{}.{SCRIPT_EXTENSION}", case_stem(index))
}

/// Scheduler directives and run command shared by every job script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSettings {
    /// Partition (`-p`).
    pub partition: String,
    /// GPU request (`-G`).
    pub gpus: String,
    /// CPU cores per task (`-c`).
    pub cpus: u32,
    /// Wall-clock limit (`-t`), `hh:mm:ss`.
    pub time_limit: String,
    /// Whether to pass `--requeue`.
    pub requeue: bool,
    /// Standard output file pattern (`-o`).
    pub output: String,
    /// Standard error file pattern (`-e`).
    pub error: String,
    /// Interpreter that runs the generated input.
    pub interpreter: String,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            partition: "mit_preemptable".to_string(),
            gpus: "h200:1".to_string(),
            cpus: 4,
            time_limit: "22:00:00".to_string(),
            requeue: true,
            output: "simulation_%j.out".to_string(),
            error: "simulation_%j.err".to_string(),
            interpreter: "julia".to_string(),
        }
    }
}

/// Generates the job script for one case.
#[must_use]
pub fn job_script(index: u32, settings: &JobSettings) -> String {
    let mut f = ScriptFile::new();
    f.blank();
    f.line("# Request resources");
    let _ = writeln!(f.buf, "#SBATCH -p {}", settings.partition);
    let _ = writeln!(f.buf, "#SBATCH -G {}", settings.gpus);
    let _ = writeln!(f.buf, "#SBATCH -c {}", settings.cpus);
    let _ = writeln!(f.buf, "#SBATCH -t {}", settings.time_limit);
    if settings.requeue {
        f.line("#SBATCH --requeue");
    }
    let _ = writeln!(f.buf, "#SBATCH -J {}", case_stem(index));
    let _ = writeln!(f.buf, "#SBATCH -o {}", settings.output);
    let _ = writeln!(f.buf, "#SBATCH -e {}", settings.error);
    f.blank();
    f.line("# Run your simulation");
    let _ = writeln!(f.buf, "{} {}", settings.interpreter, case_file_name(index));
    f.finish()
}

/// Generates `submit_all.sh`, which submits every case of `sweep` in
/// table order.
#[must_use]
pub fn submit_script(sweep: &Sweep) -> String {
    let indices: Vec<String> = sweep.iter().map(|c| format!("{:03}", c.index)).collect();

    let mut f = ScriptFile::new();
    let _ = writeln!(f.buf, "# Submit all {} cases to SLURM", sweep.len());
    f.blank();
    let _ = writeln!(f.buf, "for i in {}; do", indices.join(" "));
    f.line("    echo \"Submitting case_${i}...\"");
    let _ = writeln!(f.buf, "    sbatch \"case_${{i}}.{SCRIPT_EXTENSION}\"");
    f.line("done");
    f.blank();
    f.line("echo \"All jobs submitted!\"");
    f.finish()
}

/// Extracts the index list from a submission script's `for` line.
///
/// Returns `None` if the script has no `for i in …; do` line.
#[must_use]
pub fn submitted_indices(script: &str) -> Option<Vec<String>> {
    let line = script
        .lines()
        .find_map(|l| l.trim().strip_prefix("for i in "))?;
    let list = line.strip_suffix("; do")?;
    Some(list.split_whitespace().map(str::to_string).collect())
}
