use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bazaar_names_lib::{GenerateReport, GeneratorConfig, generate};

use crate::cli_types::GenerateArgs;
use crate::error::CliError;
use crate::spinner;

/// Fetch both endpoints and write the conversion table.
pub(crate) fn run_generate(args: GenerateArgs, quiet: bool) -> Result<(), CliError> {
    let config = build_config(args)?;

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))?;

    let pb = spinner::start("Fetching Bazaar products and SkyBlock items...", quiet);
    let result = rt.block_on(generate(&config));
    pb.finish_and_clear();

    let report = result?;
    if !quiet {
        print_report(&report);
    }
    Ok(())
}

/// Config file (if any) first, then flags on top.
pub(crate) fn build_config(args: GenerateArgs) -> Result<GeneratorConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(url) = args.items_url {
        config.endpoints.items_url = url;
    }
    if let Some(url) = args.bazaar_url {
        config.endpoints.bazaar_url = url;
    }
    Ok(config)
}

fn print_report(report: &GenerateReport) {
    println!(
        "Bazaar currently lists {} product IDs.",
        report.listed.if_supports_color(Stdout, |t| t.bold()),
    );
    println!(
        "{} Wrote {} bazaar conversions to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.written,
        report
            .output_path
            .display()
            .if_supports_color(Stdout, |t| t.dimmed()),
    );

    if !report.unmatched.is_empty() {
        println!();
        println!(
            "{} NOTE: {} product IDs not present in items API. Used fallback prettifier.",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            report.unmatched.len(),
        );
        println!("{}", report.unmatched.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(GenerateArgs::default()).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_build_config_flags_override() {
        let args = GenerateArgs {
            output: Some(PathBuf::from("out.json")),
            items_url: Some("http://localhost/items".to_string()),
            bazaar_url: None,
            config: None,
        };
        let config = build_config(args).unwrap();
        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert_eq!(config.endpoints.items_url, "http://localhost/items");
        assert_eq!(
            config.endpoints.bazaar_url,
            GeneratorConfig::default().endpoints.bazaar_url
        );
    }

    #[test]
    fn test_build_config_missing_file() {
        let args = GenerateArgs {
            config: Some(PathBuf::from("/nonexistent/bazaar-names.toml")),
            ..GenerateArgs::default()
        };
        assert!(build_config(args).is_err());
    }
}
