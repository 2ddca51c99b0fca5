pub mod cli;
pub mod convert;
pub mod harness;
pub mod sampling;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cli::Cli;
use convert::ReferenceConverter;
use harness::{Harness, Property, PropertyOutcome};

pub fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    if cli.list {
        for property in Property::ALL {
            println!("{}", property.name());
        }
        return Ok(());
    }

    let properties = selected_properties(&cli.properties);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut harness = Harness::with_samples(ReferenceConverter, rng, cli.samples);
    let outcomes = harness.run(&properties)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print_report(&outcomes);
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} properties failed", outcomes.len());
    }
    Ok(())
}

fn selected_properties(names: &[String]) -> Vec<Property> {
    if names.is_empty() {
        return Property::ALL.to_vec();
    }
    // validate() has already rejected unknown names.
    names
        .iter()
        .filter_map(|name| Property::from_name(name))
        .collect()
}

fn print_report(outcomes: &[PropertyOutcome]) {
    for outcome in outcomes {
        if outcome.passed() {
            println!(
                "PASS {} ({} checks)",
                outcome.property.name(),
                outcome.checked
            );
        } else {
            println!(
                "FAIL {} ({} of {} checks failed)",
                outcome.property.name(),
                outcome.failures.len(),
                outcome.checked
            );
            for failure in &outcome.failures {
                println!("     {failure}");
            }
        }
    }
}
