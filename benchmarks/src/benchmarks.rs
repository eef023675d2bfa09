use super::alternatives::plain_array::PlainArray;
use super::create_cmp;
use super::helpers;
use super::helpers::GrowthStats;

use growable_arrays::{OrdComparator, OrderedArray, UnorderedArray};

use pretty_assertions::assert_eq;
use std::time::Instant;


create_cmp!(
    cmp_ordered_array,
    get_num_calls_ordered_array,
    NUM_CALLS_ORDERED_ARRAY
);
create_cmp!(
    cmp_plain_array,
    get_num_calls_plain_array,
    NUM_CALLS_PLAIN_ARRAY
);

pub type CountedOrderedArray = OrderedArray<f64, OrdComparator<f64>>;
pub type CountedPlainArray = PlainArray<f64, OrdComparator<f64>>;


#[derive(Clone, Copy)]
pub struct BenchmarkParams {
    pub n: usize,
    pub measure_every: usize,
    pub num_runs: i32,
}

/// Operations addressed by position, measured on the unordered containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexedOp {
    Append,
    InsertAt,
    RemoveAt,
}

/// Operations addressed by value, measured on the sorted containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortedOp {
    Insert,
    Remove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BenchmarkMode {
    Indexed(IndexedOp),
    Sorted(SortedOp),
}

impl BenchmarkMode {
    pub const NAMES: [&'static str; 5] = ["append", "insert_at", "remove_at", "sorted_insert", "sorted_remove"];

    pub fn from_name(name: &str) -> Option<BenchmarkMode> {
        match name {
            "append" => Some(BenchmarkMode::Indexed(IndexedOp::Append)),
            "insert_at" => Some(BenchmarkMode::Indexed(IndexedOp::InsertAt)),
            "remove_at" => Some(BenchmarkMode::Indexed(IndexedOp::RemoveAt)),
            "sorted_insert" => Some(BenchmarkMode::Sorted(SortedOp::Insert)),
            "sorted_remove" => Some(BenchmarkMode::Sorted(SortedOp::Remove)),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BenchmarkMode::Indexed(IndexedOp::Append) => "append",
            BenchmarkMode::Indexed(IndexedOp::InsertAt) => "insert_at",
            BenchmarkMode::Indexed(IndexedOp::RemoveAt) => "remove_at",
            BenchmarkMode::Sorted(SortedOp::Insert) => "sorted_insert",
            BenchmarkMode::Sorted(SortedOp::Remove) => "sorted_remove",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorMode {
    Avg,
    Asc,
    Dsc,
}

impl GeneratorMode {
    pub const NAMES: [&'static str; 3] = ["avg", "asc", "dsc"];

    pub fn from_name(name: &str) -> Option<GeneratorMode> {
        match name {
            "avg" => Some(GeneratorMode::Avg),
            "asc" => Some(GeneratorMode::Asc),
            "dsc" => Some(GeneratorMode::Dsc),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GeneratorMode::Avg => "avg",
            GeneratorMode::Asc => "asc",
            GeneratorMode::Dsc => "dsc",
        }
    }
}

pub fn generate_values(gen_mode: GeneratorMode, n: usize) -> Vec<f64> {
    match gen_mode {
        GeneratorMode::Avg => helpers::gen_rand_values(n),
        GeneratorMode::Asc => (0 .. n).map(|x| x as f64 / n as f64).collect(),
        GeneratorMode::Dsc => (0 .. n).map(|x| x as f64 / n as f64).rev().collect(),
    }
}

/// Input shared by all combatants of one run, so they see identical operations.
pub struct Workload {
    pub values: Vec<f64>,
    pub insert_positions: Vec<usize>,
    pub remove_positions: Vec<usize>,
}

impl Workload {
    pub fn generate(gen_mode: GeneratorMode, n: usize) -> Workload {
        Workload {
            values: generate_values(gen_mode, n),
            insert_positions: helpers::gen_insert_positions(n),
            remove_positions: helpers::gen_remove_positions(n),
        }
    }
}


/// What the measurement loop needs to know about a container.
pub trait Combatant {
    const NAME: &'static str;

    fn create() -> Self;
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;

    fn num_cmp_calls() -> u64 {
        0
    }
}

pub trait IndexedCombatant: Combatant {
    fn insert_at(&mut self, index: usize, x: f64);
    fn remove_at(&mut self, index: usize) -> f64;
}

pub trait SortedCombatant: Combatant {
    fn insert(&mut self, x: f64) -> usize;
    fn remove_value(&mut self, x: f64) -> bool;
}

impl Combatant for UnorderedArray<f64> {
    const NAME: &'static str = "UnorderedArray";

    fn create() -> Self {
        UnorderedArray::new()
    }
    fn len(&self) -> usize {
        UnorderedArray::len(self)
    }
    fn capacity(&self) -> usize {
        UnorderedArray::capacity(self)
    }
}

impl IndexedCombatant for UnorderedArray<f64> {
    fn insert_at(&mut self, index: usize, x: f64) {
        if let Err(err) = self.insert(index, x) {
            panic!("Invalid insert position: {}", err);
        }
    }
    fn remove_at(&mut self, index: usize) -> f64 {
        match self.remove(index) {
            Ok(x) => x,
            Err(err) => panic!("Invalid remove position: {}", err),
        }
    }
}

impl Combatant for Vec<f64> {
    const NAME: &'static str = "Vec";

    fn create() -> Self {
        Vec::new()
    }
    fn len(&self) -> usize {
        Vec::len(self)
    }
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
}

impl IndexedCombatant for Vec<f64> {
    fn insert_at(&mut self, index: usize, x: f64) {
        self.insert(index, x);
    }
    fn remove_at(&mut self, index: usize) -> f64 {
        self.remove(index)
    }
}

impl Combatant for CountedOrderedArray {
    const NAME: &'static str = "OrderedArray";

    fn create() -> Self {
        OrderedArray::new(cmp_ordered_array as OrdComparator<f64>, true)
    }
    fn len(&self) -> usize {
        OrderedArray::len(self)
    }
    fn capacity(&self) -> usize {
        OrderedArray::capacity(self)
    }
    fn num_cmp_calls() -> u64 {
        get_num_calls_ordered_array()
    }
}

impl SortedCombatant for CountedOrderedArray {
    fn insert(&mut self, x: f64) -> usize {
        OrderedArray::insert(self, x)
    }
    fn remove_value(&mut self, x: f64) -> bool {
        OrderedArray::remove_value(self, &x).is_some()
    }
}

impl Combatant for CountedPlainArray {
    const NAME: &'static str = "PlainArray";

    fn create() -> Self {
        PlainArray::new(cmp_plain_array as OrdComparator<f64>, 0)
    }
    fn len(&self) -> usize {
        PlainArray::len(self)
    }
    fn capacity(&self) -> usize {
        PlainArray::capacity(self)
    }
    fn num_cmp_calls() -> u64 {
        get_num_calls_plain_array()
    }
}

impl SortedCombatant for CountedPlainArray {
    fn insert(&mut self, x: f64) -> usize {
        PlainArray::insert(self, x)
    }
    fn remove_value(&mut self, x: f64) -> bool {
        PlainArray::remove(self, &x)
    }
}


/// Runs `num_ops` operations, timing each one individually so that the
/// slow operations triggering a reallocation show up in `max_op_times`.
fn measure<C, Op>(set: &mut C, stats: &mut GrowthStats, num_ops: usize, measure_every: usize, mut op: Op)
where
    C: Combatant,
    Op: FnMut(&mut C, usize),
{
    for i in 0 .. num_ops {
        let start = Instant::now();
        op(set, i);
        stats.track(start.elapsed().as_secs_f64(), set.capacity());

        if stats.num_ops() % measure_every == 0 {
            stats.record(set.len(), C::num_cmp_calls());
        }
    }
}

pub fn run_indexed<C>(op: IndexedOp, workload: &Workload, measure_every: usize) -> GrowthStats
where
    C: IndexedCombatant,
{
    let values = &workload.values;
    let mut set = C::create();

    if op == IndexedOp::RemoveAt {
        for x in values {
            let len = set.len();
            set.insert_at(len, *x);
        }
    }

    let mut stats = GrowthStats::new(set.capacity());
    match op {
        IndexedOp::Append => {
            measure(&mut set, &mut stats, values.len(), measure_every, |set, i| {
                let len = set.len();
                set.insert_at(len, values[i]);
            });
            assert_eq!(set.len(), values.len());
        }
        IndexedOp::InsertAt => {
            measure(&mut set, &mut stats, values.len(), measure_every, |set, i| {
                set.insert_at(workload.insert_positions[i], values[i]);
            });
            assert_eq!(set.len(), values.len());
        }
        IndexedOp::RemoveAt => {
            measure(&mut set, &mut stats, values.len(), measure_every, |set, i| {
                set.remove_at(workload.remove_positions[i]);
            });
            assert_eq!(set.len(), 0);
        }
    }
    stats
}

pub fn run_sorted<C>(op: SortedOp, workload: &Workload, measure_every: usize) -> GrowthStats
where
    C: SortedCombatant,
{
    let values = &workload.values;
    let mut set = C::create();

    match op {
        SortedOp::Insert => {
            let mut stats = GrowthStats::new(set.capacity());
            measure(&mut set, &mut stats, values.len(), measure_every, |set, i| {
                set.insert(values[i]);
            });
            assert_eq!(set.len(), values.len());
            stats
        }
        SortedOp::Remove => {
            for x in values {
                set.insert(*x);
            }
            let values_to_remove = helpers::shuffle_clone(values);

            let mut stats = GrowthStats::new(set.capacity());
            measure(&mut set, &mut stats, values.len(), measure_every, |set, i| {
                assert!(set.remove_value(values_to_remove[i]));
            });
            assert_eq!(set.len(), 0);
            stats
        }
    }
}

/// Appends all values and removes them again from the back.
pub fn fill_and_drain_indexed<C>(values: &[f64], measure_every: usize) -> GrowthStats
where
    C: IndexedCombatant,
{
    let mut set = C::create();
    let mut stats = GrowthStats::new(set.capacity());

    measure(&mut set, &mut stats, values.len(), measure_every, |set, i| {
        let len = set.len();
        set.insert_at(len, values[i]);
    });
    assert_eq!(set.len(), values.len());

    measure(&mut set, &mut stats, values.len(), measure_every, |set, _| {
        let len = set.len();
        set.remove_at(len - 1);
    });
    assert_eq!(set.len(), 0);

    stats
}

/// Inserts all values and removes them again in random order.
pub fn fill_and_drain_sorted<C>(values: &[f64], measure_every: usize) -> GrowthStats
where
    C: SortedCombatant,
{
    let mut set = C::create();
    let mut stats = GrowthStats::new(set.capacity());

    measure(&mut set, &mut stats, values.len(), measure_every, |set, i| {
        set.insert(values[i]);
    });
    assert_eq!(set.len(), values.len());

    let values_to_remove = helpers::shuffle_clone(values);
    measure(&mut set, &mut stats, values.len(), measure_every, |set, i| {
        assert!(set.remove_value(values_to_remove[i]));
    });
    assert_eq!(set.len(), 0);

    stats
}


struct BenchmarkTask {
    name: &'static str,
    func: Box<dyn Fn(&Workload, usize) -> GrowthStats>,
}

fn indexed_task<C>(op: IndexedOp) -> BenchmarkTask
where
    C: IndexedCombatant + 'static,
{
    BenchmarkTask {
        name: C::NAME,
        func: Box::new(move |workload: &Workload, measure_every: usize| {
            run_indexed::<C>(op, workload, measure_every)
        }),
    }
}

fn sorted_task<C>(op: SortedOp) -> BenchmarkTask
where
    C: SortedCombatant + 'static,
{
    BenchmarkTask {
        name: C::NAME,
        func: Box::new(move |workload: &Workload, measure_every: usize| {
            run_sorted::<C>(op, workload, measure_every)
        }),
    }
}

fn construct_benchmark_tasks(mode: BenchmarkMode) -> Vec<BenchmarkTask> {
    let mut tasks = match mode {
        BenchmarkMode::Indexed(op) => vec![
            indexed_task::<UnorderedArray<f64>>(op),
            indexed_task::<Vec<f64>>(op),
        ],
        BenchmarkMode::Sorted(op) => vec![
            sorted_task::<CountedOrderedArray>(op),
            sorted_task::<CountedPlainArray>(op),
        ],
    };
    helpers::shuffle(&mut tasks);
    tasks
}


pub fn run_benchmarks(mode: BenchmarkMode, params: BenchmarkParams, gen_mode: GeneratorMode) {
    if cfg!(debug_assertions) {
        log::warn!("Debug assertions are enabled. Benchmarking should be done in `--release`.");
    }
    log::info!("Running benchmark...");
    log::info!("    Benchmark mode: {}", mode.name());
    log::info!("    Generator mode: {}", gen_mode.name());
    log::info!("    N: {}", params.n);
    log::info!("    Measure every: {}", params.measure_every);
    log::info!("    Num runs: {}", params.num_runs);

    for run in 0 ..= params.num_runs {
        let workload = Workload::generate(gen_mode, params.n);

        for task in construct_benchmark_tasks(mode) {
            log::info!("Running benchmark task: {} / {}", task.name, run);

            let stats = (task.func)(&workload, params.measure_every);
            log::debug!("{}: {} reallocations", task.name, stats.total_reallocations());

            // Use zero-th iteration for warm up
            if run > 0 {
                helpers::export_stats(
                    &format!("results/{}_{}_{}_{}.json", mode.name(), gen_mode.name(), task.name, run),
                    task.name,
                    run,
                    mode.name(),
                    gen_mode.name(),
                    &stats,
                );
            }
        }
    }

    if let BenchmarkMode::Sorted(_) = mode {
        log::info!("Num calls ordered array: {:12}", get_num_calls_ordered_array());
        log::info!("Num calls plain array:   {:12}", get_num_calls_plain_array());
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mode_names() {
        for name in BenchmarkMode::NAMES.iter() {
            assert_eq!(BenchmarkMode::from_name(name).map(|mode| mode.name()), Some(*name));
        }
        for name in GeneratorMode::NAMES.iter() {
            assert_eq!(GeneratorMode::from_name(name).map(|mode| mode.name()), Some(*name));
        }
        assert_eq!(BenchmarkMode::from_name("find_rand"), None);
    }

    #[test]
    fn test_fill_and_drain_unordered_counts_all_reallocations() {
        let values = generate_values(GeneratorMode::Asc, 100);
        let stats = fill_and_drain_indexed::<UnorderedArray<f64>>(&values, 10);

        // 1 -> 2 -> 4 -> ... -> 128, four of them before the first sample.
        assert_eq!(stats.total_reallocations(), 7);
        assert_eq!(stats.iters.len(), 20);
        assert_eq!(stats.capacity[0], 16);
        assert_eq!(stats.num_reallocations[0], 4);
        assert_eq!(stats.num_reallocations[9], 7);
        assert_eq!(stats.num_reallocations.last(), Some(&7));
        assert_eq!(stats.capacity.last(), Some(&128));
        assert_eq!(stats.len.last(), Some(&0));
    }

    #[test]
    fn test_fill_and_drain_sorted_counts_all_reallocations() {
        let values = generate_values(GeneratorMode::Avg, 100);
        let stats = fill_and_drain_sorted::<CountedOrderedArray>(&values, 10);

        assert_eq!(stats.total_reallocations(), 7);
        assert_eq!(stats.num_reallocations[0], 4);
        assert_eq!(stats.capacity.last(), Some(&128));
        assert_eq!(stats.len[9], 100);
        assert_eq!(stats.len.last(), Some(&0));
        for w in stats.num_cmp_calls.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn test_indexed_combatants_agree() {
        let workload = Workload::generate(GeneratorMode::Avg, 200);

        let mut set_a = <UnorderedArray<f64> as Combatant>::create();
        let mut set_b = <Vec<f64> as Combatant>::create();
        for (x, pos) in workload.values.iter().zip(&workload.insert_positions) {
            set_a.insert_at(*pos, *x);
            set_b.insert_at(*pos, *x);
        }
        assert_eq!(set_a.collect(), set_b);

        for pos in &workload.remove_positions {
            assert_eq!(set_a.remove_at(*pos), set_b.remove_at(*pos));
        }
        assert!(set_a.is_empty());
        assert!(set_b.is_empty());
    }

    #[test]
    fn test_run_indexed() {
        let workload = Workload::generate(GeneratorMode::Avg, 100);
        for &op in [IndexedOp::Append, IndexedOp::InsertAt, IndexedOp::RemoveAt].iter() {
            let stats_a = run_indexed::<UnorderedArray<f64>>(op, &workload, 10);
            let stats_b = run_indexed::<Vec<f64>>(op, &workload, 10);
            assert_eq!(stats_a.iters, stats_b.iters);
            assert_eq!(stats_a.len, stats_b.len);

            let expected_len = if op == IndexedOp::RemoveAt { 0 } else { 100 };
            assert_eq!(stats_a.len.last(), Some(&expected_len));
            assert_eq!(stats_a.capacity.last(), Some(&128));
            if op == IndexedOp::RemoveAt {
                // Filled before measuring, and removing never shrinks.
                assert_eq!(stats_a.total_reallocations(), 0);
            } else {
                assert_eq!(stats_a.total_reallocations(), 7);
            }
        }
    }

    #[test]
    fn test_run_sorted() {
        let workload = Workload::generate(GeneratorMode::Dsc, 100);
        for &op in [SortedOp::Insert, SortedOp::Remove].iter() {
            let stats_a = run_sorted::<CountedOrderedArray>(op, &workload, 10);
            let stats_b = run_sorted::<CountedPlainArray>(op, &workload, 10);
            assert_eq!(stats_a.iters, stats_b.iters);
            assert_eq!(stats_a.len, stats_b.len);

            let expected_len = if op == SortedOp::Remove { 0 } else { 100 };
            assert_eq!(stats_a.len.last(), Some(&expected_len));
        }
    }
}
