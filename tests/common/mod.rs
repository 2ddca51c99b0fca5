#![allow(dead_code)]

use thermoprop::cli::Cli;

pub fn seeded_cli(seed: u64) -> Cli {
    Cli {
        properties: Vec::new(),
        samples: 10,
        seed: Some(seed),
        list: false,
        json: false,
    }
}

pub fn named_cli(seed: u64, properties: &[&str]) -> Cli {
    Cli {
        properties: properties.iter().map(ToString::to_string).collect(),
        ..seeded_cli(seed)
    }
}
