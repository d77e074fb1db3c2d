use std::process;

use clap::Parser;
use serde::Serialize;

use css_fixture_gen::{FixturePlan, GeneratedFile};

#[derive(Parser)]
#[command(name = "css-fixture-gen", version)]
#[command(about = "Generate large CSS files for stress testing")]
struct Cli {
    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Summary<'a> {
    plan: &'a FixturePlan,
    files: &'a [GeneratedFile],
}

fn main() {
    let cli = Cli::parse();
    let plan = FixturePlan::default();

    let files = match css_fixture_gen::generate_with(&plan, |file| {
        eprintln!(
            "wrote {} ({} rules, {} bytes)",
            file.path.display(),
            file.lines,
            file.bytes
        );
    }) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    eprintln!(
        "generated {} fixture(s) in {}",
        files.len(),
        plan.out_dir.display()
    );

    if cli.json {
        let summary = Summary {
            plan: &plan,
            files: &files,
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: cannot encode summary: {e}");
                process::exit(1);
            }
        }
    }
}
