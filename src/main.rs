use banded_lev::{cli::Cli, render::render};
use clap::Parser;
use itertools::Itertools;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Cli::parse();
    let (a, b) = args.sequences();
    let runs = args.run(&a, &b)?;

    if args.json {
        let report = args.report(&a, &b, runs);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for run in &runs {
        println!("\n{}", run.band);
        if !args.no_render {
            print!("{}", render(&a, &b, &run.result));
        }
        match run.distance {
            Some(d) => println!("distance: {d}"),
            None => println!("distance: > {}", args.params.max_cost),
        }
        for cigar in &run.alignments {
            println!("  {cigar}");
        }
    }

    let report = args.report(&a, &b, runs);
    let (header, vals) = report.stats.values();
    println!("\n{}\n{}", header.iter().join(" "), vals.iter().join(" "));
    Ok(())
}
