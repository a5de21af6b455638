// ============================================================
// Layer 2 — CheckUseCase
// ============================================================
// Structural lint for the cheat sheet markup. It looks at
// headings and fences only; the SQL inside code blocks is
// never inspected.
//
//   UnclosedFence     error    a ``` that is never closed swallows the rest
//   MissingTitle      warning  no level-1 heading
//   EmptySection      warning  a heading with nothing under it
//   HeadingLevelJump  warning  e.g. `##` followed directly by `####`
//
// A heading immediately followed by a deeper heading is not
// an EmptySection: it acts as a group title.
//
// A run fails when any finding reaches the threshold: errors
// only by default, warnings too with `--strict`.

use std::fmt;

use anyhow::Result;
use serde::Serialize;

use crate::application::render_use_case::load_document;
use crate::domain::document::Document;
use crate::domain::section::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    UnclosedFence,
    MissingTitle,
    EmptySection,
    HeadingLevelJump,
}

impl FindingKind {
    pub fn severity(self) -> Severity {
        match self {
            FindingKind::UnclosedFence => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind:     FindingKind,
    /// Always `kind.severity()`; stored so the JSON view carries it
    pub severity: Severity,
    /// 1-based line the finding points at; 0 for whole-document findings
    pub line:    usize,
    pub message: String,
}

impl Finding {
    fn new(kind: FindingKind, line: usize, message: impl Into<String>) -> Self {
        Self { kind, severity: kind.severity(), line, message: message.into() }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sev = match self.severity {
            Severity::Error   => "error",
            Severity::Warning => "warning",
        };
        if self.line == 0 {
            write!(f, "{sev}: {}", self.message)
        } else {
            write!(f, "{sev}: line {}: {}", self.line, self.message)
        }
    }
}

/// Run every structural check over a parsed document.
/// Findings come back ordered by line.
pub fn check_document(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    if doc.title.is_none() {
        findings.push(Finding::new(
            FindingKind::MissingTitle,
            0,
            "document has no level-1 title heading",
        ));
    }

    for block in doc.blocks() {
        if let Block::Code(code) = block {
            if !code.closed {
                findings.push(Finding::new(
                    FindingKind::UnclosedFence,
                    code.line,
                    "code fence is never closed",
                ));
            }
        }
    }

    let mut previous_level: Option<u8> = None;
    for (i, section) in doc.sections.iter().enumerate() {
        if let Some(prev) = previous_level {
            if section.level > prev + 1 {
                findings.push(Finding::new(
                    FindingKind::HeadingLevelJump,
                    section.line,
                    format!(
                        "heading '{}' jumps from level {} to level {}",
                        section.title, prev, section.level
                    ),
                ));
            }
        }
        previous_level = Some(section.level);

        let opens_group = doc
            .sections
            .get(i + 1)
            .is_some_and(|next| next.level > section.level);
        if section.blocks.is_empty() && !opens_group {
            findings.push(Finding::new(
                FindingKind::EmptySection,
                section.line,
                format!("section '{}' has no content", section.title),
            ));
        }
    }

    findings.sort_by_key(|f| f.line);
    findings
}

pub struct CheckUseCase {
    input:  String,
    strict: bool,
}

impl CheckUseCase {
    pub fn new(input: impl Into<String>, strict: bool) -> Self {
        Self { input: input.into(), strict }
    }

    /// Load, parse and check the input. Findings are returned, not
    /// raised: deciding whether they fail the run is `failing`'s job.
    pub fn execute(&self) -> Result<Vec<Finding>> {
        let doc = load_document(&self.input)?;
        let findings = check_document(&doc);

        for f in &findings {
            match f.severity {
                Severity::Error   => tracing::warn!("{}: {}", doc.source, f),
                Severity::Warning => tracing::debug!("{}: {}", doc.source, f),
            }
        }
        tracing::info!("Checked '{}': {} findings", doc.source, findings.len());
        Ok(findings)
    }

    /// Lowest severity that fails the run
    pub fn threshold(&self) -> Severity {
        if self.strict { Severity::Warning } else { Severity::Error }
    }

    /// The findings at or above the threshold
    pub fn failing<'a>(&self, findings: &'a [Finding]) -> Vec<&'a Finding> {
        let threshold = self.threshold();
        findings.iter().filter(|f| f.severity >= threshold).collect()
    }
}
