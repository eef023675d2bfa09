use std::fs::{create_dir_all, File};
use std::path::Path;
use serde_json::json;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Defines a comparator for `f64` which counts its invocations.
///
/// The comparison goes through `exp` on purpose, to make comparator calls
/// expensive compared to the bookkeeping of the containers.
#[macro_export]
macro_rules! create_cmp {
    ($func:ident, $get:ident, $count:ident) => {
        static $count: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

        #[inline]
        fn $func(a: &f64, b: &f64) -> std::cmp::Ordering {
            $count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            a.exp().partial_cmp(&b.exp()).unwrap()
        }

        #[allow(dead_code)]
        pub fn $get() -> u64 {
            $count.load(std::sync::atomic::Ordering::Relaxed)
        }
    };
}


pub fn gen_rand_values(n: usize) -> Vec<f64> {
    let mut rng = thread_rng();
    (0 .. n).map(|_| rng.gen()).collect()
}

/// Random values with plenty of duplicates, for exercising tie handling.
pub fn gen_rand_values_i32(n: usize) -> Vec<i32> {
    let mut rng = thread_rng();
    let max_value = (n as i32 / 2).max(1);
    (0 .. n).map(|_| rng.gen_range(0, max_value)).collect()
}

/// Random positions for `n` consecutive inserts: the i-th position lies in `[0, i]`.
pub fn gen_insert_positions(n: usize) -> Vec<usize> {
    let mut rng = thread_rng();
    (0 .. n).map(|i| rng.gen_range(0, i + 1)).collect()
}

/// Random positions for draining `n` elements: the i-th position lies in `[0, n - i)`.
pub fn gen_remove_positions(n: usize) -> Vec<usize> {
    let mut rng = thread_rng();
    (0 .. n).map(|i| rng.gen_range(0, n - i)).collect()
}

pub fn shuffle<T>(v: &mut [T]) {
    let mut rng = thread_rng();
    v.shuffle(&mut rng);
}

pub fn shuffle_clone<T>(v: &[T]) -> Vec<T>
where
    T: Clone
{
    let mut v_cloned = v.to_vec();
    shuffle(&mut v_cloned);
    v_cloned
}


fn write_json(filename: &str, json_data: &serde_json::Value) {
    let path = Path::new(filename);
    if let Some(parent) = path.parent() {
        create_dir_all(parent).expect("Unable to create result directory.");
    }

    let f = File::create(path).expect("Unable to create json file.");
    serde_json::to_writer_pretty(f, json_data).expect("Unable to write json file.");
    log::debug!("Written: {}", filename);
}



/// Time and capacity series of one container under a sequence of operations.
///
/// `track` has to see every single operation, otherwise reallocations
/// happening between two samples are lost. `record` only takes a sample.
pub struct GrowthStats {
    pub iters: Vec<usize>,
    pub times: Vec<f64>,
    pub max_op_times: Vec<f64>,
    pub len: Vec<usize>,
    pub capacity: Vec<usize>,
    pub num_reallocations: Vec<usize>,
    pub num_cmp_calls: Vec<u64>,
    num_ops: usize,
    total_time: f64,
    max_op_time: f64,
    last_capacity: usize,
    reallocations: usize,
}

impl GrowthStats {
    pub fn new(initial_capacity: usize) -> GrowthStats {
        GrowthStats {
            iters: Vec::new(),
            times: Vec::new(),
            max_op_times: Vec::new(),
            len: Vec::new(),
            capacity: Vec::new(),
            num_reallocations: Vec::new(),
            num_cmp_calls: Vec::new(),
            num_ops: 0,
            total_time: 0.0,
            max_op_time: 0.0,
            last_capacity: initial_capacity,
            reallocations: 0,
        }
    }

    pub fn num_ops(&self) -> usize {
        self.num_ops
    }

    pub fn total_reallocations(&self) -> usize {
        self.reallocations
    }

    /// Accounts for one operation and the capacity observed right after it.
    pub fn track(&mut self, op_time: f64, capacity: usize) {
        self.num_ops += 1;
        self.total_time += op_time;
        if op_time > self.max_op_time {
            self.max_op_time = op_time;
        }
        if capacity != self.last_capacity {
            self.reallocations += 1;
            self.last_capacity = capacity;
        }
    }

    /// Takes a sample. The slowest single operation is reset per sample.
    pub fn record(&mut self, len: usize, num_cmp_calls: u64) {
        self.iters.push(self.num_ops);
        self.times.push(self.total_time);
        self.max_op_times.push(self.max_op_time);
        self.len.push(len);
        self.capacity.push(self.last_capacity);
        self.num_reallocations.push(self.reallocations);
        self.num_cmp_calls.push(num_cmp_calls);
        self.max_op_time = 0.0;
    }
}

pub fn export_stats(filename: &str, name: &str, run: i32, mode: &str, gen_mode: &str, stats: &GrowthStats) {
    let json_data = json!({
        "name": name,
        "run": run,
        "mode": mode,
        "gen_mode": gen_mode,
        "iters": stats.iters,
        "times": stats.times,
        "max_op_times": stats.max_op_times,
        "len": stats.len,
        "capacity": stats.capacity,
        "num_reallocations": stats.num_reallocations,
        "num_cmp_calls": stats.num_cmp_calls,
    });
    write_json(filename, &json_data);
}
