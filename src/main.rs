use clap::{Arg, Command};
use log::LevelFilter;
use mail_classifier::config::DEFAULT_CONFIG_PATH;
use mail_classifier::service::AnalyzeResponse;
use mail_classifier::{AnalysisResult, AnalysisService, Category, Classifier, Config};
use std::io::Read;
use std::process;

fn main() {
    let matches = Command::new("mail-classifier")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Multi-signal email classifier with risk tiers and warning indicators")
        .long_about(
            "Classifies an email body as spam, not_spam, promotional, phishing, newsletter \
             or social by blending keyword, pattern and structural signals, then reports a \
             confidence breakdown, a risk tier and the warning indicators found.",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("test-email")
                .long("test-email")
                .value_name("FILE")
                .help("Classify the email body stored in FILE")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .value_name("CATEGORY")
                .help("Classify the built-in sample email for CATEGORY")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("request")
                .long("request")
                .value_name("FILE")
                .help("Run a JSON request body ({\"email_content\": ...}) through the service")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the JSON response instead of a readable report")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-categories")
                .long("list-categories")
                .help("List the categories and their keyword tables")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-scorer details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_PATH);
    let loaded = load_config(config_path);

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        loaded
            .as_ref()
            .ok()
            .and_then(|(config, _)| config.log_level())
            .unwrap_or(LevelFilter::Info)
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let config = match loaded {
        Ok((config, true)) => config,
        Ok((config, false)) => {
            log::warn!("Configuration file '{config_path}' not found, using default configuration");
            config
        }
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            process::exit(1);
        }
    };

    if matches.get_flag("list-categories") {
        list_categories();
        return;
    }

    let classifier = match Classifier::with_risk_policy(config.analysis.risk_policy) {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("❌ Failed to build classifier: {e}");
            process::exit(1);
        }
    };
    let service = AnalysisService::new(&classifier, &config.analysis);
    let as_json = matches.get_flag("json");

    let response = if let Some(request_file) = matches.get_one::<String>("request") {
        let payload = read_input(Some(request_file));
        service.analyze_payload(&payload)
    } else if let Some(category) = matches.get_one::<String>("sample") {
        match service.sample(category) {
            Ok(sample) => {
                println!("📄 Sample email for '{}':", sample.category);
                println!("{}", sample.content);
                println!();
                service.analyze_content(sample.content).into()
            }
            Err(e) => {
                eprintln!("❌ {e}: {category}");
                process::exit(1);
            }
        }
    } else {
        let content = read_input(matches.get_one::<String>("test-email").map(String::as_str));
        service.analyze_content(&content).into()
    };

    report(&response, as_json);
    if response.status() != 200 {
        process::exit(1);
    }
}

fn load_config(path: &str) -> anyhow::Result<(Config, bool)> {
    if std::path::Path::new(path).exists() {
        Ok((Config::from_file(path)?, true))
    } else {
        Ok((Config::default(), false))
    }
}

fn generate_default_config(path: &str) {
    let config = Config::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Please edit the configuration file to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(1);
        }
    }
}

/// Reads the named file, or standard input when no file is given.
fn read_input(path: Option<&str>) -> String {
    let outcome = match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
        }
    };

    match outcome {
        Ok(content) => content,
        Err(e) => {
            eprintln!("❌ Error reading input: {e}");
            process::exit(1);
        }
    }
}

fn list_categories() {
    println!("📂 Categories (in tie-break order):");
    for category in Category::ALL {
        let info = category.info();
        println!(
            "  {} {:<12} {:<12} weight {:.1}, {} keywords",
            info.icon,
            info.id,
            info.display_name,
            info.weight,
            info.keywords.len()
        );
    }
}

fn report(response: &AnalyzeResponse, as_json: bool) {
    if as_json {
        match response.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("❌ Failed to serialize response: {e}");
                process::exit(1);
            }
        }
        return;
    }

    match response {
        AnalyzeResponse::Success { result, .. } => print_result(result),
        AnalyzeResponse::Failure { error } => println!("❌ {error}"),
    }
}

fn print_result(result: &AnalysisResult) {
    println!("=== RESULTS ===");
    println!(
        "{} Category: {} ({})",
        result.icon,
        result.display_name,
        result.category_id()
    );
    println!("Confidence: {:.2}%", result.confidence);
    println!("Risk level: {}", result.risk_level.to_string().to_uppercase());

    if result.indicators.is_empty() {
        println!("Indicators: none");
    } else {
        println!("Indicators:");
        for indicator in &result.indicators {
            println!("  • {indicator}");
        }
    }

    println!();
    println!("Scores:");
    for row in &result.scores {
        println!("  {:<12} {:>6.2}%", row.display_name, row.score);
    }

    if let Some(features) = &result.features {
        println!();
        println!(
            "Features: {} chars, {} words, {} sentences, {} '!', caps {:.1}%, {} URLs, {} money",
            features.char_count,
            features.word_count,
            features.sentence_count,
            features.exclamation_count,
            features.caps_ratio * 100.0,
            features.url_count,
            features.money_mentions
        );
    }
}
