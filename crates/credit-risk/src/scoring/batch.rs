use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::domain::LoanApplication;
use super::engine::{ApprovalRecommendation, RiskAssessment, RiskCategory};
use super::service::{ScoringService, ScoringServiceError};

#[derive(Debug, thiserror::Error)]
pub enum BatchScoringError {
    #[error("failed to read application batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid application CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} could not be scored: {source}")]
    Row {
        row: usize,
        #[source]
        source: ScoringServiceError,
    },
}

/// Scores every application in a CSV export. Extra columns are ignored.
pub struct BatchScorer<'a> {
    service: &'a ScoringService,
}

impl<'a> BatchScorer<'a> {
    pub fn new(service: &'a ScoringService) -> Self {
        Self { service }
    }

    pub fn score_path<P: AsRef<Path>>(&self, path: P) -> Result<BatchReport, BatchScoringError> {
        let file = File::open(path)?;
        self.score_reader(file)
    }

    pub fn score_reader<R: Read>(&self, reader: R) -> Result<BatchReport, BatchScoringError> {
        self.score_reader_at(reader, Utc::now())
    }

    /// Every row shares `processed_at`.
    pub fn score_reader_at<R: Read>(
        &self,
        reader: R,
        processed_at: DateTime<Utc>,
    ) -> Result<BatchReport, BatchScoringError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = Vec::new();

        for (index, record) in csv_reader.deserialize::<LoanApplication>().enumerate() {
            let row = index + 1;
            let application = record?;
            let assessment = self
                .service
                .score_at(&application, processed_at)
                .map_err(|source| BatchScoringError::Row { row, source })?;
            entries.push(BatchEntry {
                row,
                application,
                assessment,
            });
        }

        let report = BatchReport::new(entries);
        info!(
            total = report.summary.total,
            approved = report.summary.approved,
            mean_score = report.summary.mean_score,
            "application batch scored"
        );
        Ok(report)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub row: usize,
    pub application: LoanApplication,
    pub assessment: RiskAssessment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub low_risk: usize,
    pub medium_risk: usize,
    pub high_risk: usize,
    pub approved: usize,
    pub mean_score: f64,
}

impl BatchSummary {
    pub fn approval_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.approved as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub summary: BatchSummary,
}

impl BatchReport {
    fn new(entries: Vec<BatchEntry>) -> Self {
        let mut summary = BatchSummary {
            total: entries.len(),
            ..BatchSummary::default()
        };
        let mut score_total = 0u64;

        for entry in &entries {
            let assessment = &entry.assessment;
            score_total += u64::from(assessment.risk_score);
            match assessment.risk_category {
                RiskCategory::Low => summary.low_risk += 1,
                RiskCategory::Medium => summary.medium_risk += 1,
                RiskCategory::High => summary.high_risk += 1,
            }
            if assessment.approval_recommendation == ApprovalRecommendation::Approve {
                summary.approved += 1;
            }
        }

        if summary.total > 0 {
            summary.mean_score = score_total as f64 / summary.total as f64;
        }

        Self { entries, summary }
    }

    /// Write application fields alongside their scores.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for entry in &self.entries {
            csv_writer.serialize(ScoredRow::from(entry))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ScoredRow<'a> {
    row: usize,
    applicant_income: f64,
    loan_amount: f64,
    loan_term_months: u32,
    credit_history_months: u32,
    employment_status: &'a str,
    property_area: &'a str,
    dependents: u32,
    education: &'a str,
    existing_debt: f64,
    debt_to_income_ratio: f64,
    loan_to_income_ratio: f64,
    risk_score: u8,
    risk_category: &'static str,
    approval_recommendation: &'static str,
    confidence: f64,
}

impl<'a> From<&'a BatchEntry> for ScoredRow<'a> {
    fn from(entry: &'a BatchEntry) -> Self {
        let application = &entry.application;
        let assessment = &entry.assessment;
        Self {
            row: entry.row,
            applicant_income: application.applicant_income,
            loan_amount: application.loan_amount,
            loan_term_months: application.loan_term_months,
            credit_history_months: application.credit_history_months,
            employment_status: application.employment_status.label(),
            property_area: application.property_area.label(),
            dependents: application.dependents,
            education: application.education.label(),
            existing_debt: application.existing_debt,
            debt_to_income_ratio: assessment.debt_to_income_ratio,
            loan_to_income_ratio: assessment.loan_to_income_ratio,
            risk_score: assessment.risk_score,
            risk_category: assessment.risk_category.label(),
            approval_recommendation: assessment.approval_recommendation.label(),
            confidence: assessment.confidence,
        }
    }
}
