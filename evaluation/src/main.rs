use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str;

use clap::{Arg, ArgMatches, Command};
use rand::prelude::*;
use rayon::prelude::*;

use exaloglog::{estimate_distinct_count_from_tokens, ExaLogLog};

struct Estimation(u64, f64, String);

impl fmt::Display for Estimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy)]
struct SketchConfig {
    t: u32,
    d: u32,
    p: u32,
}

impl SketchConfig {
    fn from_args(args: &ArgMatches) -> Self {
        let parse = |name| args.value_of(name).unwrap().parse::<u32>().unwrap();
        let config = Self {
            t: parse("t"),
            d: parse("d"),
            p: parse("precision"),
        };
        if let Err(e) = config.create() {
            eprintln!("invalid sketch configuration: {e}");
            std::process::exit(2);
        }
        config
    }

    fn create(&self) -> exaloglog::Result<ExaLogLog> {
        ExaLogLog::new(self.t, self.d, self.p)
    }

    fn label(&self) -> String {
        format!("ell-t{}-d{}-p{}", self.t, self.d, self.p)
    }
}

// Generates random 64-bit hash values and saves them in files
fn generate(args: &ArgMatches) {
    let (count, runs, output) = (
        args.value_of("count").unwrap().parse::<usize>().unwrap(),
        args.value_of("runs").unwrap().parse::<usize>().unwrap(),
        args.value_of("output").unwrap(),
    );

    (0..runs).into_par_iter().for_each(|r| {
        let values: Vec<u64> = (0..count).map(|_| rand::random::<u64>()).collect();
        let filename = format!("hashes-r{}.dat", r);
        save(&values, filename.as_str(), output);
    });
}

// Runs evaluation experiments for ExaLogLog
fn run(args: &ArgMatches) {
    let mode = args.value_of("mode").unwrap();
    let output = args.value_of("output").unwrap();
    let config = SketchConfig::from_args(args);
    let label = config.label();

    match mode {
        "hashes" => {
            let files: Vec<&str> = args.values_of("input").unwrap().collect();

            files.par_iter().for_each(|file| {
                let mut sketch = config.create().unwrap();
                let hashes = load::<u64>(file);

                let estimations = hashes
                    .iter()
                    .enumerate()
                    .map(|(i, num)| {
                        sketch.add(*num);
                        let est = sketch.get_distinct_count_estimate();
                        Estimation((i + 1) as u64, est, label.clone())
                    })
                    .collect();

                let basename = Path::new(file).file_name().unwrap().to_str().unwrap();
                let filename = format!("est-{}-{}", label, basename);
                save(&estimations, filename.as_str(), output);
            });
        }
        "cardinalities" => {
            let (runs, cardinalities) = runs_and_cardinalities(args);

            (0..runs).into_par_iter().for_each(|r| {
                let mut sketch = config.create().unwrap();
                let mut rng = rand::thread_rng();
                let mut c = 0;

                let estimations = cardinalities
                    .iter()
                    .map(|cardinality| {
                        while c < *cardinality {
                            sketch.add(rng.gen::<u64>());
                            c += 1;
                        }
                        let est = sketch.get_distinct_count_estimate();
                        Estimation(c as u64, est, label.clone())
                    })
                    .collect();

                let filename = format!("est-{}-cards-r{}.dat", label, r);
                save(&estimations, filename.as_str(), output);
            });
        }
        "tokens" => {
            let (runs, cardinalities) = runs_and_cardinalities(args);

            (0..runs).into_par_iter().for_each(|r| {
                let mut tokens = BTreeSet::new();
                let mut rng = rand::thread_rng();
                let mut c = 0;

                let estimations = cardinalities
                    .iter()
                    .map(|cardinality| {
                        while c < *cardinality {
                            tokens.insert(ExaLogLog::compute_token(rng.gen::<u64>()));
                            c += 1;
                        }
                        let est = estimate_distinct_count_from_tokens(tokens.iter().copied());
                        Estimation(c as u64, est, "tokens".to_string())
                    })
                    .collect();

                let filename = format!("est-tokens-cards-r{}.dat", r);
                save(&estimations, filename.as_str(), output);
            });
        }
        "merge" => {
            let (runs, cardinalities) = runs_and_cardinalities(args);
            let parts = args
                .value_of("parts")
                .unwrap_or("4")
                .parse::<usize>()
                .unwrap()
                .max(1);

            for r in 0..runs {
                let estimations = cardinalities
                    .iter()
                    .map(|&cardinality| {
                        // every partition fills its own sketch, results are merged afterwards
                        let merged = (0..parts)
                            .into_par_iter()
                            .map(|part| {
                                let mut sketch = config.create().unwrap();
                                let mut rng = rand::thread_rng();
                                let share = cardinality / parts
                                    + usize::from(part < cardinality % parts);
                                for _ in 0..share {
                                    sketch.add(rng.gen::<u64>());
                                }
                                sketch
                            })
                            .reduce_with(|a, b| ExaLogLog::merge(&a, &b).unwrap())
                            .unwrap();
                        let est = merged.get_distinct_count_estimate();
                        Estimation(cardinality as u64, est, label.clone())
                    })
                    .collect();

                let filename = format!("est-{}-merge{}-r{}.dat", label, parts, r);
                save(&estimations, filename.as_str(), output);
            }
        }
        _ => {}
    }
}

fn runs_and_cardinalities(args: &ArgMatches) -> (usize, Vec<usize>) {
    let runs = args.value_of("runs").unwrap().parse::<usize>().unwrap();
    let cardinalities = load::<usize>(args.value_of("cardinalities").unwrap());
    (runs, cardinalities)
}

// Loads values from a file
fn load<T>(filepath: &str) -> Vec<T>
where
    T: str::FromStr + fmt::Debug,
{
    let reader = BufReader::new(File::open(filepath).unwrap());
    let mut nums = Vec::with_capacity(10000);

    for line in reader.lines() {
        nums.push(
            line.unwrap()
                .parse::<T>()
                .map_err(|_| "Parsing line failed")
                .unwrap(),
        );
    }

    nums
}

// Saves values to a file
fn save<T>(values: &[T], filename: &str, output: &str)
where
    T: fmt::Display,
{
    let mut writer = BufWriter::new(File::create(Path::new(output).join(filename)).unwrap());

    for val in values {
        writeln!(writer, "{}", val).unwrap();
    }

    writer.flush().unwrap();
}

fn main() {
    let gen_app = Command::new("gen")
        .about("generate random hash values")
        .arg(
            Arg::new("count")
                .short('c')
                .long("count")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("runs")
                .short('r')
                .long("runs")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .required(true)
                .takes_value(true),
        );

    let run_app = Command::new("run")
        .about("run ExaLogLog evaluation experiments")
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .required(true)
                .takes_value(true)
                .possible_values(["hashes", "cardinalities", "tokens", "merge"]),
        )
        .arg(
            Arg::new("t")
                .short('t')
                .long("t")
                .takes_value(true)
                .default_value("2"),
        )
        .arg(
            Arg::new("d")
                .short('d')
                .long("d")
                .takes_value(true)
                .default_value("20"),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .takes_value(true)
                .multiple_values(true)
                .required_if_eq("mode", "hashes"),
        )
        .arg(
            Arg::new("runs")
                .short('r')
                .long("runs")
                .takes_value(true)
                .required_if_eq_any(&[
                    ("mode", "cardinalities"),
                    ("mode", "tokens"),
                    ("mode", "merge"),
                ]),
        )
        .arg(
            Arg::new("cardinalities")
                .short('c')
                .long("cardinalities")
                .takes_value(true)
                .required_if_eq_any(&[
                    ("mode", "cardinalities"),
                    ("mode", "tokens"),
                    ("mode", "merge"),
                ]),
        )
        .arg(
            Arg::new("parts")
                .short('n')
                .long("parts")
                .takes_value(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .required(true)
                .takes_value(true),
        );

    let matches = Command::new("evl")
        .about("run ExaLogLog evaluation experiments")
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .takes_value(true),
        )
        .subcommand(gen_app)
        .subcommand(run_app)
        .get_matches();

    let jobs = matches
        .value_of("jobs")
        .unwrap_or("1")
        .parse::<usize>()
        .unwrap();

    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .unwrap();

    match matches.subcommand() {
        Some(("gen", sub_matches)) => generate(sub_matches),
        Some(("run", sub_matches)) => run(sub_matches),
        _ => {}
    }
}
