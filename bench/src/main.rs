use std::time::Instant;

use costar_core::{compute_shortest_paths, query, CastRecord, Graph};

/// The root every generator guarantees to produce and connect.
const ROOT: &str = "actor_0";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let actor_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: costar-bench [mode] [actor_count]");
        println!();
        println!("Modes:");
        println!("  all        Run all generators and benchmark each (default)");
        println!("  random     Uniform random casting across the pool");
        println!("  ensemble   A few blockbusters with huge casts plus many small films");
        println!("  franchise  Sequel chains sharing one lead (deep paths)");
        println!();
        println!("Default actor_count: 1000000");
        return;
    }

    println!("costar-bench");
    println!("============");
    println!();

    let generators: Vec<(&str, fn(u64) -> Vec<CastRecord>)> = match mode {
        "random" => vec![("Random casting", gen_random)],
        "ensemble" => vec![("Ensemble blockbusters", gen_ensemble)],
        "franchise" => vec![("Franchise chains", gen_franchise)],
        "all" => vec![
            ("Random casting", gen_random as fn(u64) -> Vec<CastRecord>),
            ("Ensemble blockbusters", gen_ensemble),
            ("Franchise chains", gen_franchise),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, actor_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Vec<CastRecord>, actor_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} actors", actor_count);

    let t = Instant::now();
    let records = generator(actor_count);
    let gen_time = t.elapsed();
    println!("Generated {} records in {:.2}s", records.len(), gen_time.as_secs_f64());

    let t = Instant::now();
    let mut graph = match Graph::from_records(records) {
        Ok(g) => g,
        Err(err) => {
            eprintln!("graph build failed: {}", err);
            return;
        }
    };
    println!(
        "Built in {:.2}s — {} nodes, {} edges",
        t.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.edge_count()
    );

    let t = Instant::now();
    if let Err(err) = compute_shortest_paths(&mut graph, ROOT) {
        eprintln!("shortest-path pass failed: {}", err);
        return;
    }
    println!("Tagged in {:.2}s", t.elapsed().as_secs_f64());

    // Query a deterministic spread of actors across the id range.
    let samples = 1000u64.min(actor_count);
    let mut found = 0u64;
    let mut unreachable = 0u64;
    let mut max_separation = 0u32;
    let t = Instant::now();
    for i in 0..samples {
        let target = i * actor_count / samples;
        match query(&graph, &format!("actor_{}", target)) {
            Ok(result) => {
                found += 1;
                max_separation = max_separation.max(result.separation);
            }
            Err(_) => unreachable += 1,
        }
    }
    let elapsed = t.elapsed();
    println!(
        "{} queries in {:.1}ms ({:.1}us each) — {} found, {} unreachable, max separation {}",
        samples,
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1_000_000.0 / samples as f64,
        found,
        unreachable,
        max_separation
    );
    println!();
}

// ---------------------------------------------------------------------------
// Generators — all O(actors + credits), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

fn actor(id: u64) -> String {
    format!("actor_{}", id)
}

fn movie(id: u64) -> String {
    format!("movie_{}", id)
}

/// Uniform random casting: one movie per five actors, eight credits each,
/// sampled uniformly from the whole pool. Baseline topology with a short
/// diameter and a large connected component.
fn gen_random(actor_count: u64) -> Vec<CastRecord> {
    let movie_count = (actor_count / 5).max(1);
    let cast_size = 8u64;
    let mut rng = FastRng::new(42);

    let mut records = Vec::with_capacity(movie_count as usize);
    for m in 0..movie_count {
        let mut cast: Vec<String> = (0..cast_size)
            .map(|_| actor(rng.next(actor_count)))
            .collect();
        // Anchor the root in the first movie so it always exists.
        if m == 0 {
            cast.push(actor(0));
        }
        records.push(CastRecord {
            title: movie(m),
            cast,
        });
    }
    records
}

/// A handful of blockbusters each crediting a big slice of the pool, plus
/// many three-person films. Stress for the wide-frontier case: the first
/// pops fan out to thousands of neighbors.
fn gen_ensemble(actor_count: u64) -> Vec<CastRecord> {
    let blockbusters = 10u64;
    let blockbuster_cast = (actor_count / 100).max(10);
    let mut rng = FastRng::new(12345);

    let mut records = Vec::new();
    for m in 0..blockbusters {
        let mut cast = Vec::with_capacity(blockbuster_cast as usize + 1);
        cast.push(actor(0));
        for _ in 0..blockbuster_cast {
            cast.push(actor(rng.next(actor_count)));
        }
        records.push(CastRecord {
            title: movie(m),
            cast,
        });
    }

    let small_films = actor_count / 3;
    for m in 0..small_films {
        let cast = (0..3).map(|_| actor(rng.next(actor_count))).collect();
        records.push(CastRecord {
            title: movie(blockbusters + m),
            cast,
        });
    }
    records
}

/// Sequel chains: movie i credits actor i and actor i+1, so the graph is
/// one long alternating path. Worst case for path reconstruction depth:
/// separation grows linearly with the actor id.
fn gen_franchise(actor_count: u64) -> Vec<CastRecord> {
    (0..actor_count.saturating_sub(1))
        .map(|i| CastRecord {
            title: movie(i),
            cast: vec![actor(i), actor(i + 1)],
        })
        .collect()
}
