/// A rendered submission script and the number of jobs it launches.
///
/// Created once, submitted at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobScript {
    text: String,
    job_count: usize,
}

impl JobScript {
    /// Join `lines` into a script terminated by a newline.
    pub fn new(lines: Vec<String>, job_count: usize) -> Self {
        let mut text = lines.join("\n");
        text.push('\n');
        Self { text, job_count }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn job_count(&self) -> usize {
        self.job_count
    }

    pub fn is_array(&self) -> bool {
        self.job_count > 1
    }
}

/// What the scheduler printed when accepting a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOutput {
    pub stdout: String,
    pub stderr: String,
}

impl SubmitOutput {
    /// Job id from sbatch's `Submitted batch job <id>` line, if present.
    pub fn job_id(&self) -> Option<&str> {
        self.stdout
            .lines()
            .find_map(|line| line.trim().strip_prefix("Submitted batch job "))
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
