use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// What the scraped report said about one mutant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The suite flagged the mutant; the report carried this diagnostic text.
    Detected(String),
    /// No diagnostic marker in the report: the mutant conforms to the model.
    Survived,
}

#[derive(Debug, Serialize, Clone)]
pub struct MutantOutcome {
    pub index: usize,
    pub jar: String,
    /// Exit code of the Gradle invocation, if the launcher ran at all.
    /// Recorded for the report only; the verdict comes from the HTML.
    pub build_exit: Option<i32>,
    pub status: OutcomeStatus,
    pub diagnostic: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Detected,
    Survived,
    Failed,
}

impl MutantOutcome {
    pub fn from_verdict(index: usize, jar: String, build_exit: Option<i32>, verdict: Verdict) -> Self {
        let (status, diagnostic) = match verdict {
            Verdict::Detected(text) => (OutcomeStatus::Detected, Some(text)),
            Verdict::Survived => (OutcomeStatus::Survived, None),
        };
        Self {
            index,
            jar,
            build_exit,
            status,
            diagnostic,
            error: None,
        }
    }

    pub fn failed(index: usize, jar: String, error: &anyhow::Error) -> Self {
        Self {
            index,
            jar,
            build_exit: None,
            status: OutcomeStatus::Failed,
            diagnostic: None,
            error: Some(format!("{:#}", error)),
        }
    }
}

#[derive(Serialize)]
pub struct RunReport {
    pub reports_dir: String,
    pub outcomes: Vec<MutantOutcome>,
}
