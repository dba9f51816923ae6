//! Integration tests for the simulator.
//!
//! Reference strings are the classic operating-systems textbook exercises;
//! expected frames were traced by hand with four frames.

use optimal_paging::{
    simulate, Access, EvictionPolicy, FrameId, LiteralReplacer, OptimalReplacer, Simulator,
    SimulatorConfig,
};

/// Reference string from the standard MIN walkthrough.
const TEXTBOOK: [u32; 20] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];

/// Reference string used to demonstrate Belady's anomaly for FIFO.
const ANOMALY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn literal_simulator() -> Simulator {
    Simulator::from_config(SimulatorConfig::default().policy(EvictionPolicy::Literal))
}

// ============================================================================
// simulate()
// ============================================================================

#[test]
fn test_empty_sequence_yields_empty_history() {
    init_logging();
    let history: Vec<Vec<u32>> = simulate(&[], None);
    assert!(history.is_empty());
}

#[test]
fn test_history_length_matches_sequence() {
    init_logging();
    assert_eq!(simulate(&TEXTBOOK, None).len(), TEXTBOOK.len());
    assert_eq!(
        simulate(&TEXTBOOK, Some(&[7, 0][..])).len(),
        TEXTBOOK.len() + 1
    );
}

#[test]
fn test_no_fault_once_resident() {
    init_logging();
    let history = simulate(&[1, 2, 3, 1, 4], None);

    assert_eq!(history[2], vec![1, 2, 3]);
    assert_eq!(history[3], vec![1, 2, 3]);
    assert_eq!(history[4], vec![1, 2, 3, 4]);
}

#[test]
fn test_evicts_page_never_used_again() {
    init_logging();
    // Frames [0, 1, 2, 3], then 4 arrives; 1 is the only page not needed later.
    let history = simulate(&[4, 0, 2, 3], Some(&[0, 1, 2, 3][..]));

    assert_eq!(history[0], vec![0, 1, 2, 3]);
    assert_eq!(history[1], vec![0, 4, 2, 3]);
    assert_eq!(history[4], vec![0, 4, 2, 3]);
}

#[test]
fn test_seed_is_processed_like_previous_frames() {
    init_logging();
    let history = simulate(&[5, 6, 1, 2, 3, 4, 1, 2], Some(&[1, 2, 3, 4][..]));

    assert_eq!(history.len(), 9);
    // 4 is needed last, so 5 lands in its slot; 5 is never used again.
    assert_eq!(history[1], vec![1, 2, 3, 5]);
    assert_eq!(history[2], vec![1, 2, 3, 6]);
    assert_eq!(history[6], vec![1, 2, 4, 6]);
}

#[test]
fn test_textbook_reference_string() {
    init_logging();
    let run = Simulator::new().run(&TEXTBOOK, None);

    assert_eq!(run.snapshots()[7], vec![3, 0, 4, 2]);
    assert_eq!(run.final_frames(), Some(&[1, 0, 7, 2][..]));
    assert_eq!(run.stats().faults, 8);
    assert_eq!(run.stats().evictions, 4);
    assert_eq!(run.stats().hits, 12);
}

#[test]
fn test_opaque_page_identifiers() {
    init_logging();
    let history = simulate(&["a", "b", "c", "d", "e", "a"], None);
    assert_eq!(history[4], vec!["a", "e", "c", "d"]);

    let negative = simulate(&[-1, -2, -3, -4, -5, -1], None);
    assert_eq!(negative[4], vec![-1, -5, -3, -4]);
}

// ============================================================================
// Optimal vs literal interpretation
// ============================================================================

#[test]
fn test_policies_diverge_when_reused_and_unused_pages_coexist() {
    init_logging();
    let seed = [1, 2, 3, 4];

    let optimal = Simulator::new().run(&[5, 1], Some(&seed[..]));
    let literal = literal_simulator().run(&[5, 1], Some(&seed[..]));

    // Optimal keeps 1 because it is needed next.
    assert_eq!(optimal.snapshots()[1], vec![1, 5, 3, 4]);
    assert_eq!(optimal.stats().faults, 1);

    // Literal ranks "never again" as -1 and throws 1 out.
    assert_eq!(literal.snapshots()[1], vec![5, 2, 3, 4]);
    assert_eq!(literal.snapshots()[2], vec![1, 2, 3, 4]);
    assert_eq!(literal.stats().faults, 2);
}

#[test]
fn test_literal_textbook_prefix() {
    init_logging();
    let run = literal_simulator().run(&[7, 0, 1, 2, 0, 3, 0, 4], None);

    assert_eq!(
        run.into_snapshots(),
        vec![
            vec![7],
            vec![7, 0],
            vec![7, 0, 1],
            vec![7, 0, 1, 2],
            vec![7, 0, 1, 2],
            vec![7, 3, 1, 2],
            vec![0, 3, 1, 2],
            vec![4, 3, 1, 2],
        ]
    );
}

#[test]
fn test_literal_faults_more_on_textbook_string() {
    init_logging();
    let optimal = Simulator::new().run(&TEXTBOOK, None);
    let literal = literal_simulator().run(&TEXTBOOK, None);

    assert_eq!(optimal.stats().faults, 8);
    assert_eq!(literal.stats().faults, 12);
    assert_eq!(literal.final_frames(), Some(&[1, 7, 4, 2][..]));
}

#[test]
fn test_anomaly_string() {
    init_logging();
    let optimal = Simulator::new().run(&ANOMALY, None);
    let literal = literal_simulator().run(&ANOMALY, None);

    assert_eq!(optimal.stats().faults, 6);
    assert_eq!(optimal.stats().evictions, 2);
    assert_eq!(optimal.final_frames(), Some(&[4, 2, 3, 5][..]));

    assert_eq!(literal.stats().faults, 7);
    assert_eq!(literal.stats().evictions, 3);
    assert_eq!(literal.final_frames(), Some(&[5, 2, 3, 4][..]));
}

#[test]
fn test_agree_when_every_page_is_reused() {
    init_logging();
    let sequence = [1, 2, 3, 4, 5, 1, 2, 3, 4, 5];
    let seed = [1, 2, 3, 4];

    // At the first fault every resident page is referenced again.
    let optimal = Simulator::new().run(&sequence[4..], Some(&seed[..]));
    let literal = literal_simulator().run(&sequence[4..], Some(&seed[..]));

    assert_eq!(optimal.snapshots()[1], literal.snapshots()[1]);
    assert_eq!(optimal.snapshots()[1], vec![1, 2, 3, 5]);
}

// ============================================================================
// Custom replacers and capacities
// ============================================================================

#[test]
fn test_custom_replacer_types() {
    init_logging();
    let optimal = Simulator::with_replacer(4, OptimalReplacer).unwrap();
    let literal = Simulator::with_replacer(4, LiteralReplacer).unwrap();

    assert_eq!(
        optimal.run(&TEXTBOOK, None).snapshots(),
        Simulator::new().run(&TEXTBOOK, None).snapshots()
    );
    assert_eq!(
        literal.run(&TEXTBOOK, None).snapshots(),
        literal_simulator().run(&TEXTBOOK, None).snapshots()
    );
}

#[test]
fn test_three_frames_textbook() {
    init_logging();
    let config = SimulatorConfig::with_capacity(3).unwrap();
    let run = Simulator::from_config(config).run(&TEXTBOOK, None);

    assert_eq!(run.stats().faults, 9);
    assert!(run.snapshots().iter().all(|frames| frames.len() <= 3));
}

#[test]
fn test_single_frame_faults_on_every_change() {
    init_logging();
    let config = SimulatorConfig::with_capacity(1).unwrap();
    let run = Simulator::from_config(config).run(&[1, 1, 2, 2, 1], None);

    assert_eq!(run.stats().faults, 3);
    assert_eq!(
        run.steps()[2].access,
        Access::Replaced {
            frame: FrameId::new(0),
            victim: 1
        }
    );
}
