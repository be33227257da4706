use chrono::Utc;
use clap::Args;
use credit_risk::config::AppConfig;
use credit_risk::error::AppError;
use credit_risk::scoring::{
    BatchScorer, BatchSummary, Education, EmploymentStatus, LoanApplication, PropertyArea,
    RiskAssessment, ScoreCard, ScoringService,
};
use credit_risk::telemetry;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Annual applicant income in USD
    #[arg(long)]
    pub(crate) income: f64,
    /// Requested loan amount in USD
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Loan term in months
    #[arg(long, default_value_t = 360)]
    pub(crate) loan_term: u32,
    /// Length of credit history in months
    #[arg(long, default_value_t = 36)]
    pub(crate) credit_history: u32,
    /// employed, self-employed, unemployed or retired
    #[arg(long, default_value = "employed")]
    pub(crate) employment: String,
    /// urban, semiurban or rural
    #[arg(long, default_value = "urban")]
    pub(crate) property_area: String,
    /// Number of financial dependents
    #[arg(long, default_value_t = 0)]
    pub(crate) dependents: u32,
    /// graduate, postgraduate, undergraduate or other
    #[arg(long, default_value = "graduate")]
    pub(crate) education: String,
    /// Existing debt in USD
    #[arg(long, default_value_t = 0.0)]
    pub(crate) existing_debt: f64,
    /// Print the assessment as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScoreArgs {
    fn application(&self) -> LoanApplication {
        LoanApplication {
            applicant_income: self.income,
            loan_amount: self.loan_amount,
            loan_term_months: self.loan_term,
            credit_history_months: self.credit_history,
            employment_status: EmploymentStatus::parse(&self.employment),
            property_area: PropertyArea::parse(&self.property_area),
            dependents: self.dependents,
            education: Education::parse(&self.education),
            existing_debt: self.existing_debt,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one application per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Write scored rows to this CSV file
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_cli(&config.telemetry)?;

    let service = ScoringService::default();
    let application = args.application();
    let (card, assessment) = service.score_card_at(&application, Utc::now())?;

    if args.json {
        match serde_json::to_string_pretty(&assessment) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Assessment payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_assessment(&assessment, &card);
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { csv, output } = args;
    let config = AppConfig::load()?;
    telemetry::init_cli(&config.telemetry)?;

    let service = ScoringService::default();
    let report = BatchScorer::new(&service).score_path(&csv)?;
    render_batch_summary(&csv, &report.summary);

    if let Some(path) = output {
        let file = File::create(&path)?;
        report.write_csv(file)?;
        println!("\nScored rows written to {}", path.display());
    }

    Ok(())
}

fn render_assessment(assessment: &RiskAssessment, card: &ScoreCard) {
    println!("Credit risk assessment {}", assessment.application_id);
    println!(
        "Risk score {}/100 | {} risk | recommendation {} | confidence {:.0}%",
        assessment.risk_score,
        assessment.risk_category.label(),
        assessment.approval_recommendation.label(),
        assessment.confidence * 100.0
    );
    println!(
        "Debt-to-income {:.1}% | loan-to-income {:.1}x",
        assessment.debt_to_income_ratio, assessment.loan_to_income_ratio
    );

    println!("\nFactor breakdown");
    for factor in &card.factors {
        println!(
            "  - {:<16} {:>+4}  {:<8} {}",
            factor.factor.label(),
            factor.delta,
            factor.polarity.label(),
            factor.detail
        );
    }

    render_headlines("Strengths", &assessment.key_factors.positive);
    render_headlines("Concerns", &assessment.key_factors.negative);
}

fn render_headlines(title: &str, headlines: &[String]) {
    if headlines.is_empty() {
        println!("\n{title}: none");
        return;
    }
    println!("\n{title}");
    for headline in headlines {
        println!("- {headline}");
    }
}

fn render_batch_summary(source: &Path, summary: &BatchSummary) {
    println!("Batch scoring summary for {}", source.display());
    println!(
        "- {} applications | mean score {:.1} | {:.0}% approved",
        summary.total,
        summary.mean_score,
        summary.approval_rate() * 100.0
    );
    println!(
        "- LOW {} | MEDIUM {} | HIGH {}",
        summary.low_risk, summary.medium_risk, summary.high_risk
    );
}
