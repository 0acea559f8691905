//! Per-flight timelines for the independent discipline.
//!
//! Each flight gets its own task, started when it is added, so flights added
//! at different moments never share a clock tick:
//!
//! ```text
//! created ─T1─▶ ON_TIME ─T2─▶ coin flip ─┬─ p ──▶ DELAYED ─T3─▶ ARRIVED ─T4─▶ removed
//!                                        └─ 1-p ────────────▶ ARRIVED ─T4─▶ removed
//! ```
//!
//! The task only holds a [`Weak`] reference to the board between steps. Every
//! step goes through `Board::transition` or [`Board::remove`], which check
//! that the flight is still live; once a step reports otherwise the task
//! ends, so a flight removed early never comes back.

use std::sync::{Arc, Weak};

use tokio::time::sleep;

use super::{Board, BoardState};
use crate::{
    config::Timings,
    models::{FlightId, FlightStatus},
};

/// Starts the timeline of flight `id`.
pub(crate) fn spawn(board: Weak<BoardState>, id: FlightId, timings: Timings) {
    tokio::spawn(run(board, id, timings));
}

fn upgrade(board: &Weak<BoardState>) -> Option<Board> {
    board.upgrade().map(|state: Arc<BoardState>| Board { state })
}

async fn step(board: &Weak<BoardState>, id: FlightId, from: FlightStatus, to: FlightStatus) -> bool {
    match upgrade(board) {
        Some(board) => board.transition(id, from, to).await,
        None => false,
    }
}

async fn run(board: Weak<BoardState>, id: FlightId, timings: Timings) {
    sleep(timings.on_time_after()).await;
    if !step(&board, id, FlightStatus::Departing, FlightStatus::OnTime).await {
        return;
    }

    sleep(timings.outcome_after()).await;
    let outcome = {
        let Some(live) = upgrade(&board) else {
            return;
        };
        let outcome = if live.flip_delay().await {
            FlightStatus::Delayed
        } else {
            FlightStatus::Arrived
        };
        if !live.transition(id, FlightStatus::OnTime, outcome).await {
            return;
        }
        outcome
    };

    if outcome == FlightStatus::Delayed {
        sleep(timings.delayed_for()).await;
        if !step(&board, id, FlightStatus::Delayed, FlightStatus::Arrived).await {
            return;
        }
    }

    sleep(timings.retention()).await;
    if let Some(live) = upgrade(&board) {
        live.remove(id).await;
    }
}
