//! Lead Lifecycle
//!
//! Walks a rental request from lead to returned item.
//!
//! Key concepts:
//! - Role-dependent transition options with localized labels
//! - Proposal deadlines and the pickup start-date gate
//! - Pure apply: every step yields a new snapshot plus a history record
//! - Accumulated violations for rejected requests
//! - Checkpointing the final snapshot with its history
//!
//! Run with: cargo run --example lead_lifecycle

use chrono::{DateTime, Duration, TimeZone, Utc};
use rentflow::checkpoint::SnapshotCheckpoint;
use rentflow::core::StateHistory;
use rentflow::enforcement::TransitionRequest;
use rentflow::engine::{workflow_steps, LifecycleEngine};
use rentflow::rental::{ActorRole, RentalSnapshot, RentalStatus};
use std::error::Error;

fn print_options(engine: &LifecycleEngine, rental: &RentalSnapshot, now: DateTime<Utc>) {
    for role in ActorRole::ALL {
        let options = engine.next_transitions_at(rental, role, now);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        println!("    {:<7} -> {:?}", role, labels);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Rental Lead Lifecycle ===\n");

    let day = |d: u32| Utc.with_ymd_and_hms(2024, 3, d, 10, 0, 0);
    let (Some(start), Some(end)) = (day(10).single(), day(12).single()) else {
        return Err("invalid demo dates".into());
    };

    let engine = LifecycleEngine::default();
    let mut history = StateHistory::new();
    let lead = RentalSnapshot {
        renter_id: Some("renter-42".to_string()),
        product_name: "Kayak doble".to_string(),
        renter_name: Some("Marta".to_string()),
        ..RentalSnapshot::new("rent-2024-031", "owner-7", start, end)
    };

    let steps: Vec<&str> = workflow_steps(&lead).iter().map(|s| s.label()).collect();
    println!("Workflow: {}\n", steps.join(" -> "));

    // Step 1: owner sends a proposal valid for three days
    let sent_at = start - Duration::days(7);
    println!("1. {} ({})", lead.status.label(), lead.status.badge_class());
    print_options(&engine, &lead, sent_at);

    let proposal = TransitionRequest::new(ActorRole::Owner, RentalStatus::ProposalPendingRenter)
        .with_proposal_valid_until(sent_at + Duration::days(3));
    let sent = engine.apply_transition(&lead, &proposal, sent_at)?;
    history = sent.record_into(&history);

    // Step 2: a late acceptance is rejected with every reason
    let pending = &sent.snapshot;
    println!("\n2. {} ({})", pending.status.label(), pending.status.badge_class());
    let too_late = sent_at + Duration::days(4);
    let accept = TransitionRequest::new(ActorRole::Renter, RentalStatus::RentalConfirmed);
    if let Err(err) = engine.validate(pending, &accept, too_late) {
        println!("    Accepting after the deadline: {}", err);
        for violation in err.violations() {
            println!("      - {}", violation);
        }
    }

    let accepted_at = sent_at + Duration::days(1);
    print_options(&engine, pending, accepted_at);
    let accepted = engine.apply_transition(pending, &accept, accepted_at)?;
    history = accepted.record_into(&history);

    // Step 3: owner pickup waits for the start date
    let confirmed = &accepted.snapshot;
    println!("\n3. {} ({})", confirmed.status.label(), confirmed.status.badge_class());
    let early = start - Duration::hours(2);
    println!(
        "    Owner pickup two hours early allowed: {}",
        engine.can_transition_at(confirmed, ActorRole::Owner, RentalStatus::RentalActive, early)
    );
    print_options(&engine, confirmed, start);
    let picked_up = engine.apply_transition(
        confirmed,
        &TransitionRequest::new(ActorRole::Owner, RentalStatus::RentalActive),
        start,
    )?;
    history = picked_up.record_into(&history);

    // Step 4: owner marks the return
    let active = &picked_up.snapshot;
    println!("\n4. {} ({})", active.status.label(), active.status.badge_class());
    print_options(&engine, active, end);
    let returned = engine.apply_transition(
        active,
        &TransitionRequest::new(ActorRole::Owner, RentalStatus::RentalCompleted),
        end,
    )?;
    history = returned.record_into(&history);

    let done = &returned.snapshot;
    println!("\n5. {} ({})", done.status.label(), done.status.badge_class());
    print_options(&engine, done, end);

    println!("\nHistory:");
    for transition in history.transitions() {
        println!(
            "    {} -> {} by {} at {}",
            transition.from, transition.to, transition.actor, transition.timestamp
        );
    }

    let checkpoint = SnapshotCheckpoint::new(done.clone(), history, end);
    let json = checkpoint.to_json()?;
    let restored = SnapshotCheckpoint::from_json(&json)?;
    println!(
        "\nCheckpoint {} restored: {} transitions, status {}",
        restored.id,
        restored.history.transitions().len(),
        restored.snapshot.status
    );

    Ok(())
}
