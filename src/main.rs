use clap::Parser;
use mundialnet_site::config::cli::{Command, LogFormat, OutputFormat};
use mundialnet_site::core::comparison::build_comparison;
use mundialnet_site::core::coverage::resolve_city;
use mundialnet_site::core::links::ContactLinks;
use mundialnet_site::core::render;
use mundialnet_site::domain::model::{ContactRequest, SignupRequest};
use mundialnet_site::utils::{logger, validation::Validate};
use mundialnet_site::{
    CalculatorOutcome, CliConfig, LeadService, Result, Selection, SimulatedSubmitter, SiteConfig,
    SiteError, SpeedCalculator,
};
use serde::Serialize;

#[derive(Serialize)]
struct RecommendationView<'a> {
    selection: &'a Selection,
    #[serde(flatten)]
    outcome: &'a CalculatorOutcome<'a>,
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Text => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting mundialnet CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證網站配置
    let site = match cli.load_site_config() {
        Ok(site) => site,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = site.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }
    tracing::debug!(
        "Loaded {} plans, {} activities, {} cities",
        site.plans.len(),
        site.activities.len(),
        site.coverage.cities.len()
    );

    match run(cli.command, site).await {
        Ok(output) => print!("{}", output),
        Err(e) => exit_with(&e),
    }

    Ok(())
}

async fn run(command: Command, site: SiteConfig) -> Result<String> {
    let name = command.name();

    match command {
        Command::Plans { format } => match format {
            OutputFormat::Text => Ok(render::plans_text(&site.plans)),
            OutputFormat::Json => render::to_json(&site.plans),
            OutputFormat::Csv => {
                render::csv_to_string(|buffer| render::write_plans_csv(&site.plans, buffer))
            }
        },

        Command::Activities { format } => match format {
            OutputFormat::Text => Ok(render::activities_text(&site.activities)),
            OutputFormat::Json => render::to_json(&site.activities),
            OutputFormat::Csv => unsupported(name, format),
        },

        Command::Recommend {
            activities,
            devices,
            format,
        } => {
            let calculator = SpeedCalculator::with_selection(&site, &activities, devices);
            let outcome = calculator.outcome()?;
            match format {
                OutputFormat::Text => Ok(render::outcome_text(calculator.selection(), &outcome)),
                OutputFormat::Json => render::to_json(&RecommendationView {
                    selection: calculator.selection(),
                    outcome: &outcome,
                }),
                OutputFormat::Csv => unsupported(name, format),
            }
        }

        Command::Compare { format } => {
            let table = build_comparison(&site.plans, &site.comparison)?;
            match format {
                OutputFormat::Text => Ok(render::comparison_text(&table)),
                OutputFormat::Json => render::to_json(&table),
                OutputFormat::Csv => {
                    render::csv_to_string(|buffer| render::write_comparison_csv(&table, buffer))
                }
            }
        }

        Command::Coverage { city, format } => {
            let city = resolve_city(&site, city.as_deref())?;
            match format {
                OutputFormat::Text => Ok(render::coverage_text(city)),
                OutputFormat::Json => render::to_json(city),
                OutputFormat::Csv => unsupported(name, format),
            }
        }

        Command::Contact {
            name: visitor,
            email,
            phone,
            message,
            format,
        } => {
            if format == OutputFormat::Csv {
                return unsupported(name, format);
            }
            let submitter = SimulatedSubmitter::new(&site.forms);
            let service = LeadService::new(submitter, site);

            tracing::info!("Enviando...");
            let receipt = service
                .submit_contact(ContactRequest {
                    name: visitor,
                    email,
                    phone,
                    message,
                })
                .await?;

            match format {
                OutputFormat::Json => render::to_json(&receipt),
                _ => Ok(render::receipt_text(&receipt)),
            }
        }

        Command::Signup {
            plan,
            city,
            name: visitor,
            email,
            address,
            phone,
            format,
        } => {
            if format == OutputFormat::Csv {
                return unsupported(name, format);
            }
            let submitter = SimulatedSubmitter::new(&site.forms);
            let service = LeadService::new(submitter, site);

            tracing::info!("Enviando...");
            let receipt = service
                .submit_signup(SignupRequest {
                    plan,
                    city,
                    name: visitor,
                    email,
                    address,
                    phone,
                })
                .await?;

            match format {
                OutputFormat::Json => render::to_json(&receipt),
                _ => Ok(render::receipt_text(&receipt)),
            }
        }

        Command::Links { format } => {
            let links = ContactLinks::from_company(&site.company)?;
            match format {
                OutputFormat::Text => Ok(render::links_text(&links)),
                OutputFormat::Json => render::to_json(&links),
                OutputFormat::Csv => unsupported(name, format),
            }
        }

        Command::Faq { format } => match format {
            OutputFormat::Text => Ok(render::faq_text(&site.faq)),
            OutputFormat::Json => render::to_json(&site.faq),
            OutputFormat::Csv => unsupported(name, format),
        },

        Command::About { format } => match format {
            OutputFormat::Text => Ok(render::about_text(&site.about)),
            OutputFormat::Json => render::to_json(&site.about),
            OutputFormat::Csv => unsupported(name, format),
        },
    }
}

fn unsupported(command: &str, format: OutputFormat) -> Result<String> {
    Err(SiteError::UnsupportedFormatError {
        command: command.to_string(),
        format: format.to_string(),
    })
}

fn exit_with(e: &SiteError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
