//! End-to-end scenarios for the roulette / elite comparison

use peak_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn elite_never_regresses_without_mutation() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = SimpleGAConfig {
            population_size: 10,
            generations: 5,
            mutation_rate: 0.0,
            ..Default::default()
        };

        let ga = SimpleGA::from_config(config, EliteSelection, PeakFitness).unwrap();
        let result = ga.run(&mut rng).unwrap();

        assert!(
            result.best_fitness() >= result.initial_best.fitness(),
            "seed {}: {} < {}",
            seed,
            result.best_fitness(),
            result.initial_best.fitness()
        );
        let history = result.stats.best_fitness_history();
        for pair in history.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }
}

#[test]
fn both_strategies_improve_over_many_generations() {
    let config = SimpleGAConfig {
        population_size: 50,
        generations: 1000,
        mutation_rate: 0.1,
        ..Default::default()
    };

    let trials = 10;
    let mut improved = 0;
    for seed in 0..trials {
        let mut rng = StdRng::seed_from_u64(1000 + seed);
        let comparison = compare_strategies(&config, PeakFitness, &mut rng).unwrap();
        if comparison
            .reports()
            .iter()
            .all(|r| r.fitness > r.initial_best_fitness)
        {
            improved += 1;
        }
    }

    assert!(improved >= 7, "only {} of {} trials improved", improved, trials);
}

#[test]
fn elite_run_converges_near_origin() {
    let mut rng = StdRng::seed_from_u64(77);
    let config = SimpleGAConfig {
        population_size: 100,
        generations: 500,
        mutation_rate: 0.1,
        ..Default::default()
    };

    let comparison = compare_strategies(&config, PeakFitness, &mut rng).unwrap();
    assert!(comparison.elite.fitness > 0.9, "elite fitness {}", comparison.elite.fitness);
}

#[test]
fn custom_objective_plugs_in() {
    let mut rng = StdRng::seed_from_u64(5);
    let shifted = FnFitness::new(|x, y| 1.0 / (1.0 + (x - 2.0).powi(2) + (y + 1.0).powi(2)));
    let config = SimpleGAConfig {
        population_size: 60,
        generations: 400,
        ..Default::default()
    };

    let ga = SimpleGA::from_config(config, EliteSelection, &shifted).unwrap();
    let result = ga.run(&mut rng).unwrap();

    assert!(result.best_fitness() >= result.initial_best.fitness() - 0.05);
    assert_eq!(result.best_fitness(), shifted.evaluate(result.best.point()));
}

#[test]
fn non_positive_objective_still_terminates() {
    let mut rng = StdRng::seed_from_u64(9);
    let config = SimpleGAConfig {
        population_size: 12,
        generations: 20,
        ..Default::default()
    };

    let comparison = compare_strategies(&config, NegatedSphere, &mut rng).unwrap();
    assert!(comparison.roulette.fitness <= 0.0);
    assert!(comparison.elite.fitness <= 0.0);
}

#[test]
fn comparison_serializes_to_json() {
    let mut rng = StdRng::seed_from_u64(3);
    let config = SimpleGAConfig {
        population_size: 8,
        generations: 3,
        ..Default::default()
    };

    let comparison = compare_strategies(&config, PeakFitness, &mut rng).unwrap();
    let json = serde_json::to_value(&comparison).unwrap();

    assert_eq!(json["roulette"]["strategy"], "roulette");
    assert_eq!(json["elite"]["strategy"], "elite");
    assert!(json["elite"]["fitness"].is_f64());
}

#[test]
fn configuration_errors_fail_fast() {
    let mut rng = StdRng::seed_from_u64(1);
    for config in [
        SimpleGAConfig {
            population_size: 0,
            ..Default::default()
        },
        SimpleGAConfig {
            generations: 0,
            ..Default::default()
        },
        SimpleGAConfig {
            mutation_rate: 2.0,
            ..Default::default()
        },
        SimpleGAConfig {
            bounds: Bounds::new(-1e308, 1e308),
            population_size: 4,
            generations: 1,
            ..Default::default()
        },
    ] {
        let err = compare_strategies(&config, PeakFitness, &mut rng).unwrap_err();
        assert!(matches!(err, EvolutionError::Configuration(_)));
    }
}
