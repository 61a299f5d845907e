use crate::infra::{profile_store_from, InMemoryIdentityGateway};
use career_mentor::advisor::assessment::{
    apply_field_mutation, AssessmentService, FieldMutation, MultiValueField, ProfileStore,
    ScalarField, SurveyRecord,
};
use career_mentor::advisor::trends::{DemandCsvImporter, TrendsDataset, TrendsReport, TREND_YEARS};
use career_mentor::config::StorageConfig;
use career_mentor::error::AppError;
use career_mentor::identity::{IdentityGateway, POST_LOGIN_DESTINATION, POST_SIGNUP_DESTINATION};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Persist demo profiles to this JSON file instead of process memory.
    #[arg(long)]
    pub(crate) profile_store: Option<PathBuf>,
    /// Optional demand CSV export to refresh the trends portion of the demo.
    #[arg(long)]
    pub(crate) demand_csv: Option<PathBuf>,
    /// Skip the signup and login portion of the demo.
    #[arg(long)]
    pub(crate) skip_identity: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TrendsReportArgs {
    /// Optional demand CSV export overriding the curated demand figures
    #[arg(long)]
    pub(crate) demand_csv: Option<PathBuf>,
    /// Include the year-by-year adoption table in the output
    #[arg(long)]
    pub(crate) list_growth: bool,
}

pub(crate) fn run_trends_report(args: TrendsReportArgs) -> Result<(), AppError> {
    let TrendsReportArgs {
        demand_csv,
        list_growth,
    } = args;

    let (dataset, imported) = load_trends_dataset_from_path(demand_csv)?;
    let report = TrendsReport::from_dataset(dataset);
    render_trends_report(&report, imported, list_growth);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        profile_store,
        demand_csv,
        skip_identity,
    } = args;

    println!("Career mentor demo");
    let (dataset, imported) = load_trends_dataset_from_path(demand_csv)?;
    let report = TrendsReport::from_dataset(dataset);
    render_trends_report(&report, imported, false);

    if !skip_identity {
        run_identity_flow(&InMemoryIdentityGateway::default());
    }

    let storage = StorageConfig { profile_store };
    let store = Arc::new(profile_store_from(&storage)?);
    run_survey_flow(store);

    Ok(())
}

pub(crate) fn load_trends_dataset_from_path(
    demand_csv: Option<PathBuf>,
) -> Result<(TrendsDataset, bool), AppError> {
    match demand_csv {
        Some(path) => DemandCsvImporter::from_path(path)
            .map(|dataset| (dataset, true))
            .map_err(AppError::from),
        None => Ok((TrendsDataset::standard(), false)),
    }
}

pub(crate) fn render_trends_report(report: &TrendsReport, imported: bool, list_growth: bool) {
    println!("Skill and career trends");

    if imported {
        println!("Data source: demand CSV import");
    } else {
        println!("Data source: curated snapshot (no demand data provided)");
    }

    println!("\nMarket demand");
    for entry in &report.dataset.demand {
        println!("- {}: {}%", entry.skill, entry.demand);
    }

    if let Some(highlights) = &report.highlights {
        println!("\nHighlights");
        println!(
            "- Fastest growing: {} ({}% demand)",
            highlights.fastest_growing.skill, highlights.fastest_growing.demand
        );
        println!(
            "- Career hotspot: {} ({}% demand)",
            highlights.career_hotspot.skill, highlights.career_hotspot.demand
        );
        if !highlights.emerging.is_empty() {
            println!("- Emerging: {}", highlights.emerging.join(", "));
        }
    }

    println!("\nCareer advice");
    for advice in &report.advice {
        println!("- {}: {}", advice.track, advice.tip);
    }

    if list_growth {
        println!("\nAdoption by year");
        for series in &report.dataset.growth {
            print!("- {}:", series.skill);
            for (year, adoption) in TREND_YEARS.iter().zip(series.adoption.iter()) {
                print!(" {year}={adoption}%");
            }
            println!();
        }
    }
}

fn run_identity_flow(gateway: &InMemoryIdentityGateway) {
    println!("\nIdentity demo (in-memory provider)");

    match gateway.register("ada@example.com", "engine1843") {
        Ok(account) => println!(
            "- Registered {} as {} -> {}",
            account.email,
            account.user_id,
            POST_SIGNUP_DESTINATION.path()
        ),
        Err(err) => {
            println!("  Registration rejected: {}", err);
            return;
        }
    }

    if let Err(err) = gateway.sign_in("ada@example.com", "wrong-password") {
        println!("- Rejected bad credentials: {}", err);
    }

    match gateway.sign_in("ada@example.com", "engine1843") {
        Ok(session) => println!(
            "- Signed in {} -> {}",
            session.email,
            POST_LOGIN_DESTINATION.path()
        ),
        Err(err) => {
            println!("  Sign-in failed: {}", err);
            return;
        }
    }

    match gateway.current_session() {
        Ok(Some(session)) => println!("- Active session for {}", session.user_id),
        Ok(None) => println!("- No active session"),
        Err(err) => println!("  Session lookup unavailable: {}", err),
    }
}

fn run_survey_flow<S: ProfileStore + 'static>(store: Arc<S>) {
    let service = AssessmentService::new(store);

    println!("\nSkills survey demo");
    let mut record = SurveyRecord::default();
    let blank = service.progress(&record);
    println!(
        "- Blank form: {:.0}% complete, missing {:?}",
        blank.percent, blank.missing
    );

    for (field, value) in [
        (ScalarField::FullName, "Ada Lovelace"),
        (ScalarField::Email, "ada@example.com"),
        (ScalarField::Location, "London"),
    ] {
        apply_field_mutation(
            &mut record,
            FieldMutation::Scalar {
                field,
                value: value.to_string(),
            },
        );
        println!(
            "- After {}: {:.0}% complete",
            field.wire_name(),
            service.progress(&record).percent
        );
    }

    for (field, value, selected) in [
        (MultiValueField::Skills, "Python", true),
        (MultiValueField::Skills, "React", true),
        (MultiValueField::Skills, "React", false),
        (MultiValueField::Skills, "SQL", true),
        (MultiValueField::AiTools, "Pandas", true),
        (MultiValueField::Interests, "GenAI", true),
    ] {
        apply_field_mutation(
            &mut record,
            FieldMutation::Membership {
                field,
                value: value.to_string(),
                selected,
            },
        );
    }
    println!("- Selected skills after toggling React: {:?}", record.skills);

    let receipt = service.submit(&record);
    println!("- Submitted -> {}", receipt.destination.path());
    if let Some(notice) = &receipt.notice {
        println!("  Notice: {}", notice);
    }

    let profile = service.load_profile();
    println!("\nProfile dashboard");
    println!(
        "- {} | grade {} | {}",
        profile.display_name, profile.grade, profile.email
    );
    println!("- Subjects: {:?}", profile.subjects);
    println!("- Goals:");
    for goal in &profile.goals {
        println!("    [{}] {}", goal.kind.label(), goal.text);
    }
    println!("- Learning streak: {} days", profile.streak);

    match serde_json::to_string_pretty(&profile) {
        Ok(json) => println!("  Dashboard payload:\n{}", json),
        Err(err) => println!("  Dashboard payload unavailable: {}", err),
    }
}
