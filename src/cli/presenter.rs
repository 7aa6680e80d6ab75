//! CLI presenter for output formatting

use colored::*;

use crate::domain::record::HealthRecord;

/// Presenter for CLI output formatting
#[derive(Debug, Default, Clone, Copy)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print a structured health record to stdout
    pub fn record(&self, record: &HealthRecord, recovered: bool) {
        if recovered {
            self.warn("The model reply could not be parsed; showing the fallback record.");
        }

        println!("\n{}", "Voice Transcript".bold());
        println!("  \"{}\"", record.raw_transcript);

        println!("\n{}", "Symptoms Detected".bold());
        if record.symptoms.is_empty() {
            println!("  (none)");
        }
        for symptom in &record.symptoms {
            println!("  - {}", symptom);
        }

        println!("\n{}", "Medications & Timing".bold());
        if record.medications.is_empty() {
            println!("  (none)");
        }
        for medication in &record.medications {
            println!("  - {} ({})", medication.name, medication.timing);
        }

        println!("\n{}", "Mental State".bold());
        println!("  {}", record.mental_state);

        println!("\n{}", "Lifestyle Notes".bold());
        if record.lifestyle_notes.is_empty() {
            println!("  (none)");
        }
        for note in &record.lifestyle_notes {
            println!("  - {}", note);
        }

        println!("\n{}", "Severity".bold());
        println!("  {}", record.severity);

        println!("\n{}", "Doctor-Ready Summary".bold());
        println!("  {}\n", record.doctor_summary);
    }
}
