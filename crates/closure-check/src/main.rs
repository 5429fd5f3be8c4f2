use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use relations::{
    Relation,
    formats::{DotGraph, parse},
};

/// Check which of the reflexive, symmetric and transitive properties a
/// relation satisfies, and write a Graphviz graph for the closure of each
/// property it lacks, with the added edges highlighted in red.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the relation description
    input: PathBuf,
    /// Prefix of the generated .dot files
    prefix: String,
}

struct Property {
    name: &'static str,
    suffix: &'static str,
    holds: fn(&Relation) -> bool,
    closure: fn(&Relation) -> Relation,
}

const PROPERTIES: [Property; 3] = [
    Property {
        name: "reflexive",
        suffix: "ref",
        holds: Relation::is_reflexive,
        closure: Relation::reflexive_closure,
    },
    Property {
        name: "symmetric",
        suffix: "sim",
        holds: Relation::is_symmetric,
        closure: Relation::symmetric_closure,
    },
    Property {
        name: "transitive",
        suffix: "tra",
        holds: Relation::is_transitive,
        closure: Relation::transitive_closure,
    },
];

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // usage errors exit with status 1, help and version with 0
            let _ = err.print();
            return if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    println!("reading '{}'...", args.input.display());
    let file = match File::open(&args.input) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error: could not open '{}': {}", args.input.display(), err);
            return ExitCode::FAILURE;
        }
    };
    let relation = match parse(&mut BufReader::new(file)) {
        Ok(Relation::Unsized) => {
            eprintln!("error: the input never declared a set size");
            return ExitCode::FAILURE;
        }
        Ok(relation) => relation,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("the set has {} elements", relation.dim());
    println!("\noriginal matrix:\n{}", relation);

    for property in &PROPERTIES {
        let holds = (property.holds)(&relation);
        println!("{}: {}", property.name, if holds { "yes" } else { "no" });
        if holds {
            continue;
        }

        let closed = (property.closure)(&relation);
        println!("{} closure:\n{}", property.name, closed);
        let path = format!("{}-{}.dot", args.prefix, property.suffix);
        let graph = DotGraph::new(&relation, &closed);
        match fs::write(&path, graph.to_string()) {
            Ok(()) => println!("wrote {}", path),
            // a closure we cannot write out is skipped, the rest still run
            Err(err) => eprintln!("error: could not write '{}': {}", path, err),
        }
    }

    ExitCode::SUCCESS
}
