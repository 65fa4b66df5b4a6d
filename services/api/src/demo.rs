use crate::infra::{parse_language, InMemoryAssessmentRepository};
use chrono::Utc;
use clap::Args;
use keirsey::assessment::insights::{Insights, UnconfiguredInsightProvider};
use keirsey::assessment::participants::{AssessmentService, ParticipantRegistration};
use keirsey::assessment::scoring::rank;
use keirsey::assessment::{
    AnswerOption, AnswerSet, AssessmentScores, Axis, Language, QuestionCatalog, CATALOG_VERSION,
};
use keirsey::error::AppError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file mapping question id to "a" or "b", optionally wrapped in {"answers": ...}
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Report language (en or ms)
    #[arg(long, default_value = "en", value_parser = parse_language)]
    pub(crate) lang: Language,
    /// Print the raw scores as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Validate the catalog and print per-axis counts instead of the questions
    #[arg(long)]
    pub(crate) check: bool,
    /// Question language (en or ms)
    #[arg(long, default_value = "en", value_parser = parse_language)]
    pub(crate) lang: Language,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the question order and the synthetic answers. Random when omitted.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Report language (en or ms)
    #[arg(long, default_value = "en", value_parser = parse_language)]
    pub(crate) lang: Language,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.answers)?;
    let answers = parse_answer_file(&raw)?;

    let catalog = QuestionCatalog::standard();
    let scores = catalog.score(&answers);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        println!("Answered {} of {} questions", answers.len(), catalog.len());
        for line in report_lines(&scores, args.lang) {
            println!("{line}");
        }
    }
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();

    if args.check {
        catalog.validate()?;
        println!("Catalog {CATALOG_VERSION}: {} questions, valid", catalog.len());
        for (axis, count) in catalog.count_by_axis() {
            println!("- {}: {count}", axis.label(args.lang));
        }
        let balance = catalog.balance();
        if balance.is_balanced() {
            println!("Every pole is reachable from the same number of questions");
        } else {
            let poles: Vec<String> = balance
                .underrepresented()
                .iter()
                .map(|pole| pole.letter().to_string())
                .collect();
            println!("Underrepresented poles: {}", poles.join(", "));
        }
        return Ok(());
    }

    for question in catalog.localized_in_order(&catalog.ids(), args.lang) {
        println!("{:>3}. [{}] {}", question.id, question.axis, question.text);
        println!("     a) {}", question.option_a);
        println!("     b) {}", question.option_b);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let catalog = Arc::new(QuestionCatalog::standard());
    catalog.validate()?;

    let service = AssessmentService::new(
        Arc::new(InMemoryAssessmentRepository::default()),
        catalog,
        UnconfiguredInsightProvider,
    );

    let now = Utc::now();
    let record = service.register(demo_registration(args.lang), now)?;
    let participant_id = record.profile.participant_id;
    println!(
        "Registered {} as {}",
        record.profile.full_name, participant_id.0
    );

    let session = service.start_session(&participant_id, seed, now)?;
    let preview: Vec<String> = session
        .question_order
        .iter()
        .take(5)
        .map(u16::to_string)
        .collect();
    println!(
        "Session seed {seed}: first questions {} ...",
        preview.join(", ")
    );

    let answers = synthetic_answers(&session.question_order, seed);
    let snapshot = service.submit(&participant_id, answers, now)?;
    println!("Answered {} questions\n", snapshot.answered);
    for line in report_lines(&snapshot.scores, args.lang) {
        println!("{line}");
    }

    let insights = service.insights(&participant_id)?;
    println!();
    for line in insight_lines(&insights) {
        println!("{line}");
    }

    let stats = service.stats()?;
    println!(
        "\nCompleted assessments: {} of {}",
        stats.completed_assessments, stats.total_participants
    );
    Ok(())
}

fn demo_registration(language: Language) -> ParticipantRegistration {
    ParticipantRegistration {
        full_name: "Demo Participant".to_string(),
        email: "demo.participant@example.com".to_string(),
        phone: None,
        job_title: Some("Project Coordinator".to_string()),
        department: Some("Operations".to_string()),
        organization: None,
        language,
        consent_given: true,
    }
}

fn synthetic_answers(order: &[u16], seed: u64) -> AnswerSet {
    let mut rng = StdRng::seed_from_u64(seed);
    order
        .iter()
        .map(|id| {
            let option = if rng.gen_bool(0.5) {
                AnswerOption::A
            } else {
                AnswerOption::B
            };
            (*id, option)
        })
        .collect()
}

/// Accepts a bare `{"1": "a"}` map or the HTTP shape `{"answers": {...}}`.
pub(crate) fn parse_answer_file(raw: &str) -> Result<AnswerSet, serde_json::Error> {
    let mut value: serde_json::Value = serde_json::from_str(raw)?;
    if let Some(inner) = value.get_mut("answers") {
        value = inner.take();
    }
    serde_json::from_value(value)
}

pub(crate) fn report_lines(scores: &AssessmentScores, language: Language) -> Vec<String> {
    let mut lines = vec![format!("MBTI type: {}", scores.mbti_code)];

    lines.push("\nDimensions".to_string());
    let percentages = scores.dimension_percentages();
    for axis in Axis::ordered() {
        let (first, second) = axis.poles();
        let (first_pct, second_pct) = percentages.for_axis(axis);
        lines.push(format!(
            "- {}: {} {}% | {} {}%",
            axis.label(language),
            first.letter(),
            first_pct,
            second.letter(),
            second_pct
        ));
    }

    lines.push("\nTemperaments".to_string());
    for (temperament, score) in rank(&scores.temperaments) {
        lines.push(format!("- {}: {score}", temperament.label(language)));
    }

    let profile = if scores.is_hybrid { "hybrid" } else { "clear" };
    lines.push(format!(
        "\nDominant: {} ({}), secondary: {} ({}), profile: {profile}",
        scores.dominant_type.label(language),
        scores.dominant_score(),
        scores.secondary_type.label(language),
        scores.secondary_score()
    ));
    lines
}

fn insight_lines(insights: &Insights) -> Vec<String> {
    let content = &insights.content;
    let mut lines = vec![format!("Insights ({:?})", insights.source)];
    for (heading, items) in [
        ("Strengths", &content.strengths),
        ("Weaknesses", &content.weaknesses),
        ("Careers", &content.careers),
        ("Do", &content.dos),
        ("Don't", &content.donts),
    ] {
        lines.push(format!("{heading}:"));
        lines.extend(items.iter().map(|item| format!("  - {item}")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use keirsey::assessment::insights::fallback_insights;
    use keirsey::assessment::Temperament;

    #[test]
    fn answer_file_accepts_bare_and_wrapped_maps() {
        let bare = parse_answer_file(r#"{"1": "a", "2": "B"}"#).expect("bare map parses");
        let wrapped =
            parse_answer_file(r#"{"answers": {"1": "a", "2": "B"}}"#).expect("wrapped parses");
        assert_eq!(bare, wrapped);
        assert_eq!(bare.get(2), Some(AnswerOption::B));

        assert!(parse_answer_file(r#"{"1": "maybe"}"#).is_err());
    }

    #[test]
    fn report_lists_ranked_temperaments_in_language() {
        let catalog = QuestionCatalog::standard();
        let answers: AnswerSet = catalog
            .ids()
            .into_iter()
            .map(|id| (id, AnswerOption::A))
            .collect();
        let scores = catalog.score(&answers);

        let lines = report_lines(&scores, Language::Ms);
        assert_eq!(lines[0], "MBTI type: ESTJ");
        assert!(lines.contains(&"- Ekstraversi vs Introversi: E 100% | I 0%".to_string()));
        assert!(lines.contains(&"- Penguasa: 100".to_string()));
        let last = lines.last().expect("summary line");
        assert!(last.contains("Dominant: Penguasa (100)"));
        assert!(last.ends_with("profile: clear"));
    }

    #[test]
    fn synthetic_answers_cover_every_question_deterministically() {
        let order: Vec<u16> = (1..=100).collect();
        let first = synthetic_answers(&order, 5);
        assert_eq!(first.len(), 100);
        assert_eq!(first, synthetic_answers(&order, 5));
    }

    #[test]
    fn insight_lines_include_every_section() {
        let lines = insight_lines(&fallback_insights(Temperament::Artisan, Language::En));
        assert_eq!(lines[0], "Insights (Fallback)");
        assert_eq!(lines.iter().filter(|line| line.ends_with(':')).count(), 5);
        assert_eq!(lines.len(), 1 + 5 * 6);
    }
}
