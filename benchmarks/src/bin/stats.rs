use clap::{value_t, App, AppSettings, Arg};

use growable_arrays_benchmarks::benchmarks::{
    fill_and_drain_indexed, fill_and_drain_sorted, generate_values, get_num_calls_ordered_array,
    Combatant, CountedOrderedArray, GeneratorMode,
};
use growable_arrays_benchmarks::helpers;

use growable_arrays::UnorderedArray;

fn export(name: &str, gen_mode: GeneratorMode, stats: &helpers::GrowthStats) {
    helpers::export_stats(
        &format!("results/growth_stats_{}_{}.json", name, gen_mode.name()),
        name,
        0,
        "fill_and_drain",
        gen_mode.name(),
        stats,
    );
}

fn run_fill_statistics() {
    #[rustfmt::skip]
    let matches = App::new("Growth statistics")
        .setting(AppSettings::ArgRequiredElseHelp)
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
                 .help("Number of values inserted"))
        .arg(Arg::with_name("measure-every")
                 .long("measure-every")
                 .short("m")
                 .default_value("10")
                 .help("Sampling interval"))
        .get_matches();

    let gen_mode = matches
        .value_of("gen-mode")
        .and_then(GeneratorMode::from_name)
        .expect("Invalid generator mode");
    let n = value_t!(matches, "num-elements", usize).unwrap_or_else(|e| e.exit());
    let measure_every = value_t!(matches, "measure-every", usize).unwrap_or_else(|e| e.exit());
    if measure_every == 0 {
        clap::Error::with_description("measure-every must be positive", clap::ErrorKind::InvalidValue).exit();
    }

    let values = generate_values(gen_mode, n);

    log::info!("Filling and draining {}...", CountedOrderedArray::NAME);
    let stats = fill_and_drain_sorted::<CountedOrderedArray>(&values, measure_every);
    log::info!(
        "{}: {} reallocations, {} comparator calls",
        CountedOrderedArray::NAME,
        stats.total_reallocations(),
        get_num_calls_ordered_array(),
    );
    export(CountedOrderedArray::NAME, gen_mode, &stats);

    log::info!("Filling and draining {}...", <UnorderedArray<f64> as Combatant>::NAME);
    let stats = fill_and_drain_indexed::<UnorderedArray<f64>>(&values, measure_every);
    log::info!(
        "{}: {} reallocations",
        <UnorderedArray<f64> as Combatant>::NAME,
        stats.total_reallocations(),
    );
    export(<UnorderedArray<f64> as Combatant>::NAME, gen_mode, &stats);

    log::info!("Exported statistics to results/");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_fill_statistics();
}
