use crate::case::{Case, Descriptor, LoadError, LoadedCase};
use crate::value::Value;

/// What the harness records for one case. Every failure kind is terminal
/// for its case alone; none of them aborts sibling cases.
#[derive(Debug)]
pub enum Outcome {
    Pass,
    /// The function under test returned, but not the expected value.
    Mismatch { expected: Value, actual: Value },
    /// The function under test itself failed rather than returning a
    /// wrong value.
    RuntimeFailure(anyhow::Error),
    /// Fixture setup failed; `invoke` was never attempted.
    LoadFailure(LoadError),
    /// The case carried a skip marker and was not loaded at all.
    Skipped { reason: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_pass() && !self.is_skip()
    }
}

/// One rendered status line per case, the shape a harness prints.
#[derive(Debug)]
pub struct CaseReport {
    pub description: String,
    pub outcome: Outcome,
}

impl std::fmt::Display for CaseReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            Outcome::Pass => write!(f, "PASS {}", self.description),
            Outcome::Mismatch { expected, actual } => {
                write!(f, "FAIL {}: expected {}, got {}", self.description, expected, actual)
            }
            Outcome::RuntimeFailure(err) => write!(f, "FAIL {}: crashed: {}", self.description, err),
            Outcome::LoadFailure(err) => write!(f, "FAIL {}: {}", self.description, err),
            Outcome::Skipped { reason } => write!(f, "SKIP {} ({})", self.description, reason),
        }
    }
}

/// Evaluate one loaded case: fetch its arguments, invoke the function
/// under test with exactly those, and compare the result against the
/// expected value.
pub fn check(case: &dyn Descriptor) -> Outcome {
    match case.invoke(case.args()) {
        Ok(actual) if actual == *case.expected() => Outcome::Pass,
        Ok(actual) => Outcome::Mismatch {
            expected: case.expected().clone(),
            actual,
        },
        Err(err) => Outcome::RuntimeFailure(err),
    }
}

impl<S> LoadedCase<S> {
    /// Evaluate this case. Repeated calls within one load see the same
    /// fixture state and, for a conforming case, the same outcome.
    pub fn check(&self) -> Outcome {
        check(self)
    }
}

impl<S> Case<S> {
    /// The whole single-case sequence: load, then check. A setup failure
    /// becomes a load-failure outcome and the function under test is
    /// never invoked.
    pub fn check(self) -> CaseReport {
        let description = self.description.clone();
        let outcome = match self.load() {
            Ok(loaded) => loaded.check(),
            Err(err) => Outcome::LoadFailure(err),
        };
        CaseReport { description, outcome }
    }
}

struct Entry {
    description: String,
    skip: Option<String>,
    load: Box<dyn FnOnce() -> Result<Box<dyn Descriptor>, LoadError>>,
}

/// An ordered collection of independent cases. Each case loads its own
/// fixture state when its turn comes; nothing is shared between cases
/// and no failure stops the ones after it.
pub struct Suite {
    name: String,
    include_skipped: bool,
    entries: Vec<Entry>,
}

impl Suite {
    pub fn new(name: &str) -> Self {
        Suite {
            name: name.to_string(),
            include_skipped: false,
            entries: Vec::new(),
        }
    }

    pub fn register<S: 'static>(&mut self, case: Case<S>) {
        self.push(None, case);
    }

    /// Register a case carrying a skip marker. Skip lives here, at the
    /// catalog level, not on the case itself: the same definition can be
    /// active in one suite and parked in another.
    pub fn register_skipped<S: 'static>(&mut self, reason: &str, case: Case<S>) {
        self.push(Some(reason.to_string()), case);
    }

    /// Check marked cases anyway instead of reporting them skipped.
    pub fn include_skipped(&mut self) {
        self.include_skipped = true;
    }

    fn push<S: 'static>(&mut self, skip: Option<String>, case: Case<S>) {
        let description = case.description.clone();
        self.entries.push(Entry {
            description,
            skip,
            load: Box::new(move || {
                case.load().map(|loaded| Box::new(loaded) as Box<dyn Descriptor>)
            }),
        });
    }

    /// Load and check every case in registration order. Skipped cases
    /// are reported without loading, so their setup never executes.
    pub fn check_all(self) -> SuiteReport {
        let Suite {
            name,
            include_skipped,
            entries,
        } = self;

        let mut reports = Vec::with_capacity(entries.len());
        for entry in entries {
            let outcome = match entry.skip {
                Some(reason) if !include_skipped => Outcome::Skipped { reason },
                _ => match (entry.load)() {
                    Ok(loaded) => check(loaded.as_ref()),
                    Err(err) => Outcome::LoadFailure(err),
                },
            };
            reports.push(CaseReport {
                description: entry.description,
                outcome,
            });
        }

        SuiteReport { name, reports }
    }
}

/// Per-case reports in suite order, plus the counts a harness summarizes.
#[derive(Debug)]
pub struct SuiteReport {
    pub name: String,
    pub reports: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_failure()).count()
    }

    pub fn skipped(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_skip()).count()
    }

    /// True when nothing failed. Skipped cases do not count against the
    /// suite.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl std::fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for report in &self.reports {
            writeln!(f, "{}", report)?;
        }
        write!(
            f,
            "{}: {} passed, {} failed, {} skipped",
            self.name,
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}
