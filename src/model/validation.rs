use std::fmt;

/// A problem with one entry of a power sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetIssue {
    /// Sheet key the issue refers to
    pub key: String,
    pub message: String,
}

/// Problems collected while loading a power sheet.
/// Errors drop the entry; warnings keep it.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<SheetIssue>,
    pub warnings: Vec<SheetIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors.push(SheetIssue {
            key: key.into(),
            message: message.into(),
        });
    }

    pub fn flag(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(SheetIssue {
            key: key.into(),
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    /// Keys whose entries were rejected, in load order
    pub fn rejected_keys(&self) -> Vec<&str> {
        self.errors.iter().map(|i| i.key.as_str()).collect()
    }
}

fn write_issues(f: &mut fmt::Formatter<'_>, title: &str, issues: &[SheetIssue]) -> fmt::Result {
    if issues.is_empty() {
        return Ok(());
    }

    writeln!(f, "{}:", title)?;
    for issue in issues {
        writeln!(f, "  [{}] {}", issue.key, issue.message)?;
    }
    Ok(())
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_issues(f, "Errors", &self.errors)?;
        write_issues(f, "Warnings", &self.warnings)
    }
}
