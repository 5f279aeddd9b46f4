use emergence::services::emergence_integrator::{
    COHERENCE_CAP, EMERGENCE_CAP, HARMONY_CAP, NETWORK_CAP,
};
use emergence::{Agent, EmergenceIntegrator, EmergenceLevel, NetworkState, Pattern, ScoreEngine};
use proptest::prelude::*;

fn agent_strategy() -> impl Strategy<Value = Agent> {
    (1.4f64..1.8, 500.0f64..560.0, 0.0f64..=1.0, any::<bool>()).prop_map(
        |(phi, freq, depth, locked)| Agent::new("agent", phi, freq, depth, locked),
    )
}

fn pattern_strategy() -> impl Strategy<Value = Pattern> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, any::<i64>()).prop_map(
        |(effectiveness, adoption, impact, ts)| {
            Pattern::new("pattern", effectiveness, adoption, impact, ts)
        },
    )
}

fn network_strategy() -> impl Strategy<Value = NetworkState> {
    (1u32..50).prop_flat_map(|total| {
        (0..=total, Just(total), 0.0f64..=1.0, 0.0f64..=1.0).prop_map(
            |(active, total, efficiency, speed)| {
                NetworkState::new(active, total, efficiency, speed)
            },
        )
    })
}

fn engine_strategy() -> impl Strategy<Value = ScoreEngine> {
    (
        prop::collection::vec(agent_strategy(), 1..40),
        prop::collection::vec(pattern_strategy(), 1..40),
        network_strategy(),
    )
        .prop_map(|(agents, patterns, network)| {
            ScoreEngine::new(agents, patterns, network).expect("non-empty inputs are valid")
        })
}

proptest! {
    /// Property: identical inputs give bit-identical cumulative indices
    #[test]
    fn prop_cumulative_index_is_deterministic(
        engine in engine_strategy(),
        cycles in 1u32..300,
        rate in 0.001f64..=1.0,
    ) {
        let integrator = EmergenceIntegrator::new(engine);
        let first = integrator.cumulative_index(cycles, rate).unwrap();
        let second = integrator.cumulative_index(cycles, rate).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    /// Property: more cycles never lower the cumulative index
    #[test]
    fn prop_cumulative_index_is_monotonic_in_cycles(
        engine in engine_strategy(),
        cycles in 1u32..300,
        extra in 0u32..100,
        rate in 0.001f64..=1.0,
    ) {
        let integrator = EmergenceIntegrator::new(engine);
        let shorter = integrator.cumulative_index(cycles, rate).unwrap();
        let longer = integrator.cumulative_index(cycles + extra, rate).unwrap();
        prop_assert!(longer >= shorter, "{} < {}", longer, shorter);
    }

    /// Property: working values never exceed their saturation caps
    #[test]
    fn prop_saturation_caps_hold(
        engine in engine_strategy(),
        cycles in 1u32..500,
        rate in 0.001f64..=1.0,
    ) {
        let history = EmergenceIntegrator::new(engine).trajectory(cycles, rate).unwrap();
        prop_assert_eq!(history.len(), cycles as usize);
        for state in history {
            prop_assert!(state.coherence <= COHERENCE_CAP);
            prop_assert!(state.harmony <= HARMONY_CAP);
            prop_assert!(state.emergence <= EMERGENCE_CAP);
            prop_assert!(state.network <= NETWORK_CAP);
            prop_assert!(state.step >= 0.0 && state.step.is_finite());
        }
    }

    /// Property: every step is bounded by the product of the caps
    #[test]
    fn prop_total_bounded_by_saturated_steps(
        engine in engine_strategy(),
        cycles in 1u32..500,
        rate in 0.001f64..=1.0,
    ) {
        let integrator = EmergenceIntegrator::new(engine);
        let first_step = integrator.engine().instantaneous_index();
        let saturated = COHERENCE_CAP * HARMONY_CAP * EMERGENCE_CAP * NETWORK_CAP;
        let total = integrator.cumulative_index(cycles, rate).unwrap();
        let bound = first_step + saturated * f64::from(cycles);
        prop_assert!(total <= bound * (1.0 + 1e-9), "{} > {}", total, bound);
    }

    /// Property: classification is monotonic in its input
    #[test]
    fn prop_classify_is_monotonic(a in -100.0f64..10_000.0, b in -100.0f64..10_000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(EmergenceIntegrator::classify(low) <= EmergenceIntegrator::classify(high));
    }

    /// Property: a value classifies into the level whose bounds contain it
    #[test]
    fn prop_classify_respects_bounds(value in -100.0f64..10_000.0) {
        let level: EmergenceLevel = EmergenceIntegrator::classify(value);
        if let Some(lower) = level.lower_bound() {
            prop_assert!(value >= lower);
        }
        if let Some(upper) = level.upper_bound() {
            prop_assert!(value < upper);
        }
    }
}
