use clap::{value_t, App, AppSettings, Arg};

use growable_arrays_benchmarks::benchmarks::{BenchmarkMode, BenchmarkParams, GeneratorMode, run_benchmarks};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[rustfmt::skip]
    let matches = App::new("Benchmark runner")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(Arg::with_name("bench-mode")
                 .long("bench-mode")
                 .short("b")
                 .default_value("append")
                 .possible_values(&BenchmarkMode::NAMES)
                 .help("Benchmark mode"))
        .arg(Arg::with_name("gen-mode")
                 .long("gen-mode")
                 .short("g")
                 .default_value("avg")
                 .possible_values(&GeneratorMode::NAMES)
                 .help("Generator mode"))
        .arg(Arg::with_name("num-elements")
                 .long("num-elements")
                 .short("n")
                 .default_value("100000")
                 .help("Number of operations per run"))
        .arg(Arg::with_name("measure-every")
                 .long("measure-every")
                 .short("m")
                 .default_value("25")
                 .help("Sampling interval of the elapsed time"))
        .arg(Arg::with_name("num-runs")
                 .long("num-runs")
                 .short("r")
                 .default_value("3")
                 .help("Number of measured runs (plus one warm up run)"))
        .get_matches();

    let bench_mode = matches
        .value_of("bench-mode")
        .and_then(BenchmarkMode::from_name)
        .expect("Illegal benchmark mode");
    let gen_mode = matches
        .value_of("gen-mode")
        .and_then(GeneratorMode::from_name)
        .expect("Illegal generator mode");

    let bench_params = BenchmarkParams {
        n: value_t!(matches, "num-elements", usize).unwrap_or_else(|e| e.exit()),
        measure_every: value_t!(matches, "measure-every", usize).unwrap_or_else(|e| e.exit()),
        num_runs: value_t!(matches, "num-runs", i32).unwrap_or_else(|e| e.exit()),
    };

    if bench_params.measure_every == 0 {
        clap::Error::with_description("measure-every must be positive", clap::ErrorKind::InvalidValue).exit();
    }

    run_benchmarks(bench_mode, bench_params, gen_mode);
}
