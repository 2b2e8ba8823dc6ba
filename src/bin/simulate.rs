use std::time::Instant;

use corridor::belief::save_distribution;
use corridor::config::SimConfig;
use corridor::constants::{DEFAULT_BOUNDARY, DEFAULT_SEED, DEFAULT_STEPS, DEFAULT_TRIALS};
use corridor::engine::simulate_batch;
use corridor::exact::run_exact;
use corridor::presets::{preset, preset_names};

struct Args {
    steps: usize,
    trials: usize,
    seed: u64,
    boundary: usize,
    preset: Option<String>,
    exact_only: bool,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut steps = DEFAULT_STEPS;
    let mut trials = DEFAULT_TRIALS;
    let mut seed = DEFAULT_SEED;
    let mut boundary = DEFAULT_BOUNDARY;
    let mut preset_name: Option<String> = None;
    let mut exact_only = false;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--steps" => {
                i += 1;
                if i < args.len() {
                    steps = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --steps value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--trials" => {
                i += 1;
                if i < args.len() {
                    trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--boundary" => {
                i += 1;
                if i < args.len() {
                    boundary = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --boundary value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--preset" => {
                i += 1;
                if i < args.len() {
                    preset_name = Some(args[i].clone());
                }
            }
            "--exact" => {
                exact_only = true;
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: corridor-simulate [--steps N] [--trials N] [--seed S] [--boundary N] [--preset NAME] [--exact] [--output FILE]"
                );
                println!();
                println!("Options:");
                println!("  --steps N      Number of time ticks (default: {})", DEFAULT_STEPS);
                println!("  --trials N     Number of simulation trials (default: {})", DEFAULT_TRIALS);
                println!("  --seed S       RNG seed for the empirical path (default: {})", DEFAULT_SEED);
                println!("  --boundary N   Absorbing boundary position (default: {})", DEFAULT_BOUNDARY);
                println!("  --preset NAME  Scenario: {}", preset_names().join(", "));
                println!("  --exact        Compute the exact posterior only (no sampling)");
                println!("  --output FILE  Save the distribution as pretty JSON");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: corridor-simulate [--steps N] [--trials N] [--seed S] [--boundary N] [--preset NAME] [--exact] [--output FILE]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        steps,
        trials,
        seed,
        boundary,
        preset: preset_name,
        exact_only,
        output,
    }
}

fn print_distribution(header: &str, belief: &corridor::Belief) {
    println!("{}", header);
    for (pos, p) in belief.masses().iter().enumerate() {
        println!("  pos {}: {:.4}", pos, p);
    }
}

fn main() {
    let args = parse_args();

    let cfg: SimConfig = match args.preset {
        Some(ref name) => match preset(name) {
            Some(p) => p.to_config(args.steps, args.boundary),
            None => {
                eprintln!(
                    "Unknown preset: '{}'. Available: {}",
                    name,
                    preset_names().join(", ")
                );
                std::process::exit(1);
            }
        },
        None => SimConfig::reference(args.steps),
    };

    println!(
        "Corridor walk: {} steps, boundary {}, movement {:?}",
        cfg.steps, cfg.boundary, cfg.movement
    );
    println!(
        "  Sensor: p_correct_wall={:.2}, p_correct_window={:.2}",
        cfg.p_correct_wall, cfg.p_correct_window
    );
    println!();

    let t_exact = Instant::now();
    let exact = run_exact(&cfg).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let exact_ms = t_exact.elapsed().as_secs_f64() * 1000.0;

    if args.exact_only {
        print_distribution("Exact final position probabilities:", &exact);
        println!();
        println!("  Mean:     {:.4}", exact.mean());
        println!("  Std dev:  {:.4}", exact.std_dev());
        println!("  Elapsed:  {:.2} ms", exact_ms);

        if let Some(ref path) = args.output {
            save_distribution(&exact, path).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            });
            println!("  Saved:    {}", path);
        }
        return;
    }

    println!("Simulating {} trials (seed {})...", args.trials, args.seed);
    let result = simulate_batch(&cfg, args.trials, args.seed).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let per_trial_ns = result.elapsed.as_secs_f64() * 1e9 / args.trials as f64;
    println!(
        "  Elapsed:     {:.1} ms ({:.0} ns/trial)",
        result.elapsed.as_secs_f64() * 1000.0,
        per_trial_ns
    );
    println!();

    print_distribution("Empirical final position probabilities:", &result.belief);
    println!();
    print_distribution("Exact final position probabilities:", &exact);
    println!();

    println!("Results:");
    println!(
        "  Mean:        {:.4} (exact: {:.4}, delta: {:+.4})",
        result.mean,
        exact.mean(),
        result.mean - exact.mean()
    );
    println!("  Std dev:     {:.4}", result.std_dev);

    // Sampling error scales as 1/sqrt(trials); flag anything far outside it.
    let tv = result.belief.tv_distance(&exact);
    let expected_noise = 1.0 / (args.trials as f64).sqrt();
    println!(
        "  TV distance: {:.5}  (~1/sqrt(trials) = {:.5} expected)",
        tv, expected_noise
    );
    if tv > 5.0 * expected_noise {
        eprintln!(
            "WARNING: empirical distribution deviates from exact by {:.1}x the expected noise",
            tv / expected_noise
        );
    }

    if let Some(ref path) = args.output {
        save_distribution(&result.belief, path).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {}", path, e);
            std::process::exit(1);
        });
        println!("  Saved:       {}", path);
    }
}
