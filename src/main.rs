use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use skillscope::models::{
    PersonDetails, SkillCompensationResponse, SkillDistributionResponse,
    DEFAULT_PEOPLE_SEARCH_LIMIT,
};
use skillscope::{
    build_router, AppState, Config, DistributionConfig, DistributionEstimator, TorreClient,
};

#[derive(Parser, Debug)]
#[command(name = "skillscope")]
#[command(version)]
#[command(about = "Torre.ai proxy with skill proficiency distribution estimates")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Port to listen on (defaults to PORT or 8080)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Estimate the proficiency distribution for a skill
    Distribution {
        #[arg(short, long)]
        skill: String,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Analyze yearly compensation for a skill
    Compensation {
        #[arg(short, long)]
        skill: String,

        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Fetch a Torre genome bio
    Profile {
        #[arg(short, long)]
        username: String,

        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Search people by free text
    Search {
        #[arg(short, long)]
        query: String,

        #[arg(short, long, default_value_t = DEFAULT_PEOPLE_SEARCH_LIMIT)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("skillscope=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    match args.command {
        Command::Serve { port } => serve(config, port).await?,
        Command::Distribution { skill, format } => {
            let torre = Arc::new(TorreClient::from_config(&config)?);
            let estimator = DistributionEstimator::new(torre, DistributionConfig::from(&config));
            let response: SkillDistributionResponse =
                estimator.estimate_distribution(&skill).await.into();
            output(&response, &format, format_distribution)?;
        }
        Command::Compensation { skill, format } => {
            let torre = TorreClient::from_config(&config)?;
            let response = torre.analyze_compensation(&skill).await?;
            output(&response, &format, format_compensation)?;
        }
        Command::Profile { username, format } => {
            let torre = TorreClient::from_config(&config)?;
            let details = torre.get_person_details(&username).await?;
            output(&details, &format, format_profile)?;
        }
        Command::Search { query, limit } => {
            let torre = TorreClient::from_config(&config)?;
            let people = torre.search_people_stream(&query, limit).await?;
            for person in &people {
                println!(
                    "{} ({}): {}",
                    person.name,
                    person.username.as_deref().unwrap_or(&person.id),
                    person.professional_headline.as_deref().unwrap_or("-")
                );
            }
            tracing::info!("{} people found", people.len());
        }
    }

    Ok(())
}

async fn serve(config: Config, port: Option<u16>) -> anyhow::Result<()> {
    tracing::info!("Starting SkillScope API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config)?;
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", port.unwrap_or(config.port)).parse()?;
    tracing::info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn output<T: Serialize>(value: &T, format: &str, text: fn(&T) -> String) -> anyhow::Result<()> {
    let rendered = match format {
        "json" => serde_json::to_string_pretty(value)?,
        _ => text(value),
    };
    println!("{}", rendered);
    Ok(())
}

fn format_distribution(response: &SkillDistributionResponse) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Proficiency Distribution: {} ===\n\n",
        response.skill
    ));
    output.push_str(&format!("Profiles analyzed: {}\n\n", response.total_profiles));

    if response.distribution.is_empty() {
        output.push_str("No profiles found.\n");
    }
    for level in &response.distribution {
        let bar = "#".repeat((level.percentage / 2) as usize);
        output.push_str(&format!(
            "  {:<13} {:>3}% ({:>3})  {}\n",
            level.level.to_string(),
            level.percentage,
            level.count,
            bar
        ));
    }

    output.push_str(&format!(
        "\nSource: {} | Analyzed on: {}\n",
        response.source,
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_compensation(response: &SkillCompensationResponse) -> String {
    let cur = &response.currency;
    let mut output = format!("\n=== Compensation: {} ===\n\n", response.skill);
    output.push_str(&format!("  Average: {:.0} {}\n", response.average_compensation, cur));
    output.push_str(&format!("  Median:  {:.0} {}\n", response.median_compensation, cur));
    output.push_str(&format!("  Min:     {:.0} {}\n", response.min_compensation, cur));
    output.push_str(&format!("  Max:     {:.0} {}\n", response.max_compensation, cur));
    output.push_str(&format!(
        "\n{} data points ({}), source: {}\n",
        response.data_points, response.periodicity, response.source
    ));
    output
}

fn format_profile(details: &PersonDetails) -> String {
    let mut output = String::new();

    if let Some(ref person) = details.person {
        output.push_str(&format!(
            "\n=== {} ===\n",
            person.name.as_deref().unwrap_or("Unknown")
        ));
        if let Some(ref headline) = person.professional_headline {
            output.push_str(&format!("{}\n", headline));
        }
        if let Some(location) = person.location.as_ref().and_then(|l| l.name.as_deref()) {
            output.push_str(&format!("Location: {}\n", location));
        }
    }

    let strengths = details.strengths.as_deref().unwrap_or_default();
    if !strengths.is_empty() {
        output.push_str("\nStrengths:\n");
        for strength in strengths.iter().take(15) {
            output.push_str(&format!(
                "  - {} ({})\n",
                strength.name.as_deref().unwrap_or("?"),
                strength.proficiency.as_deref().unwrap_or("unrated")
            ));
        }
    }

    let experiences = details.experiences.as_deref().unwrap_or_default();
    if !experiences.is_empty() {
        output.push_str("\nExperience:\n");
        for experience in experiences {
            let org = experience
                .organizations
                .as_ref()
                .and_then(|orgs| orgs.first())
                .and_then(|o| o.name.as_deref())
                .unwrap_or("-");
            output.push_str(&format!(
                "  - {} @ {} ({} - {})\n",
                experience.name.as_deref().unwrap_or("?"),
                org,
                experience.from_year.as_deref().unwrap_or("?"),
                experience.to_year.as_deref().unwrap_or("present")
            ));
        }
    }

    output
}
