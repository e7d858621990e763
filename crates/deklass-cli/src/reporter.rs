use colored::Colorize;

use deklass::{Diagnostic, DiagnosticCategory};

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, file: &str, diagnostics: &[Diagnostic]) -> String {
        diagnostics
            .iter()
            .map(|diagnostic| self.format_diagnostic(file, diagnostic))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_diagnostic(&self, file: &str, diagnostic: &Diagnostic) -> String {
        let file = if file.is_empty() { "<unknown>" } else { file };
        format!(
            "{} - {} {}: {}",
            file,
            self.format_category(diagnostic.category),
            self.format_code(diagnostic.code),
            diagnostic.message_text
        )
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let text = category.as_str();
        if !self.color {
            return text.to_string();
        }
        match category {
            DiagnosticCategory::Error => text.red().bold().to_string(),
            DiagnosticCategory::Warning => text.yellow().bold().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        let text = format!("DK{code}");
        if self.color {
            text.bright_black().to_string()
        } else {
            text
        }
    }
}
