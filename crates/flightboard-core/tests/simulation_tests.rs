mod common;

use std::time::Duration;

use common::{assert_ordered, create_test_board};
use flightboard_core::{
    BoardConfig, Discipline, FlightGenerator, FlightId, FlightStatus, Simulation, Source,
    Timings,
};
use tokio::time::sleep;

fn fast_config(discipline: Discipline) -> BoardConfig {
    BoardConfig {
        discipline,
        timings: Timings {
            tick_ms: 1_000,
            generator_ms: 1_000,
            ..Timings::default()
        },
        ..BoardConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_independent_run_adds_one_flight_per_period() {
    let config = fast_config(Discipline::Independent);
    let (sink, board) = create_test_board(config.clone(), 3);
    let mut simulation = Simulation::new(board.clone(), FlightGenerator::new(&config, Some(3)));

    simulation.run_until(sleep(Duration::from_millis(5_500))).await;

    assert_eq!(board.len().await, 5);
    let summary = simulation.summary().await;
    assert_eq!((summary.added, summary.rejected, summary.remaining), (5, 0, 5));
    // initial empty render, then one per add
    assert_eq!(sink.count(), 6);
    assert!(sink.views()[0].is_empty());
    for view in sink.views() {
        assert_ordered(&view);
    }
    for flight in board.snapshot().await.iter() {
        assert_eq!(flight.status, FlightStatus::Departing);
    }
}

#[tokio::test(start_paused = true)]
async fn test_lockstep_run_ticks_before_adding() {
    let config = fast_config(Discipline::Lockstep);
    let (_sink, board) = create_test_board(config.clone(), 3);
    let mut simulation = Simulation::new(board.clone(), FlightGenerator::new(&config, Some(3)));

    simulation.run_until(sleep(Duration::from_millis(3_500))).await;

    assert_eq!(board.len().await, 3);
    assert_eq!(board.status_of(FlightId(1)).await, Some(FlightStatus::Delayed));
    assert_eq!(board.status_of(FlightId(2)).await, Some(FlightStatus::OnTime));
    assert_eq!(board.status_of(FlightId(3)).await, Some(FlightStatus::Departing));
}

#[tokio::test(start_paused = true)]
async fn test_run_stops_when_shutdown_resolves() {
    let config = fast_config(Discipline::Independent);
    let (sink, board) = create_test_board(config.clone(), 3);
    let mut simulation = Simulation::new(board, FlightGenerator::new(&config, Some(3)));

    simulation.run_until(async {}).await;

    assert!(simulation.board().is_empty().await);
    assert_eq!(sink.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_step_adds_generated_flight() {
    let config = BoardConfig {
        source: Source::Random,
        ..fast_config(Discipline::Independent)
    };
    let (_sink, board) = create_test_board(config.clone(), 3);
    let mut simulation = Simulation::new(board, FlightGenerator::new(&config, Some(3)));

    let id = simulation.step().await.unwrap();

    let view = simulation.board().snapshot().await;
    assert_eq!(view.ids(), vec![id]);
    assert!(view[0].flight_number.starts_with("FL"));
}

#[tokio::test(start_paused = true)]
async fn test_step_skips_rejected_records() {
    let config = fast_config(Discipline::Independent);
    let (sink, board) = create_test_board(config.clone(), 3);
    let bad = BoardConfig {
        date: "31-02".to_string(),
        source: Source::Random,
        ..config
    };
    let mut simulation = Simulation::new(board, FlightGenerator::new(&bad, Some(3)));

    assert_eq!(simulation.step().await, None);
    assert!(simulation.board().is_empty().await);
    assert_eq!(sink.count(), 0);

    let summary = simulation.summary().await;
    assert_eq!((summary.added, summary.rejected, summary.remaining), (0, 1, 0));
}

#[tokio::test(start_paused = true)]
async fn test_empty_template_pool_keeps_running() {
    let (_sink, board) = create_test_board(BoardConfig::default(), 3);
    let generator_config = BoardConfig {
        templates: Some(Vec::new()),
        ..BoardConfig::default()
    };
    let mut simulation = Simulation::new(board, FlightGenerator::new(&generator_config, Some(3)));

    for _ in 0..3 {
        assert!(simulation.step().await.is_some());
    }
    assert_eq!(simulation.board().len().await, 3);
}
