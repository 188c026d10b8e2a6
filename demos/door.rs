//! Door State Machine
//!
//! This example demonstrates a reactive machine driven by caller commands.
//!
//! Key concepts:
//! - Transition bindings declared per (state, event)
//! - Unbound events are ignored (you cannot open a locked door)
//! - An action that decides at runtime whether to transition
//! - Enter/leave handlers observing every transition
//!
//! Run with: RUST_LOG=turnstile=debug cargo run --example door

use std::sync::atomic::{AtomicU32, Ordering};
use tracing_subscriber::EnvFilter;
use turnstile::{state_enum, HandlerError, StateMachine};

state_enum! {
    enum DoorState {
        Open,
        Closed,
        Locked,
        Broken,
    }
}

/// A broken door can only be fixed this many times.
const MAX_FIXES: u32 = 3;

struct Door {
    machine: StateMachine<DoorState, &'static str>,
}

impl Door {
    fn new() -> Self {
        let fix_count = AtomicU32::new(0);
        let mut machine = StateMachine::new(DoorState::Open);

        machine
            .on_transition(DoorState::Open, "close", DoorState::Closed)
            .on_transition(DoorState::Closed, "open", DoorState::Open)
            .on_transition(DoorState::Closed, "lock", DoorState::Locked)
            .on_transition(DoorState::Locked, "unlock", DoorState::Closed)
            .on_transition(DoorState::Locked, "break", DoorState::Broken)
            .on_action(DoorState::Broken, "fix", move |m, ()| {
                let attempt = fix_count.fetch_add(1, Ordering::SeqCst) + 1;
                if attempt > MAX_FIXES {
                    println!("    fix #{attempt}: beyond repair");
                    return Ok(());
                }
                m.transit_to(DoorState::Open)?;
                Ok(())
            })
            .on_enter(DoorState::Broken, |_, ctx| {
                println!("    crash! ({:?} -> {})", ctx.prev, ctx.next);
                Ok(())
            });

        Self { machine }
    }

    fn state(&self) -> String {
        self.machine
            .state()
            .map_or_else(|| "<unset>".to_string(), ToString::to_string)
    }

    fn command(&mut self, event: &'static str) -> Result<&mut Self, HandlerError> {
        self.machine.command(event, ())?;
        Ok(self)
    }

    fn open(&mut self) -> Result<&mut Self, HandlerError> {
        self.command("open")
    }

    fn close(&mut self) -> Result<&mut Self, HandlerError> {
        self.command("close")
    }

    fn lock(&mut self) -> Result<&mut Self, HandlerError> {
        self.command("lock")
    }

    fn unlock(&mut self) -> Result<&mut Self, HandlerError> {
        self.command("unlock")
    }

    fn break_door(&mut self) -> Result<&mut Self, HandlerError> {
        self.command("break")
    }

    fn fix(&mut self) -> Result<&mut Self, HandlerError> {
        self.command("fix")
    }
}

fn main() -> Result<(), HandlerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Door State Machine ===\n");

    let mut door = Door::new();
    println!("start:                 {}", door.state());

    door.close()?;
    println!("close:                 {}", door.state());

    door.lock()?;
    println!("lock:                  {}", door.state());

    door.open()?;
    println!("open (ignored):        {}", door.state());

    door.unlock()?.open()?.lock()?.close()?.lock()?;
    println!("unlock..lock:          {}", door.state());

    door.break_door()?;
    println!("break:                 {}", door.state());

    door.fix()?;
    println!("fix:                   {}", door.state());

    for round in 1..=3 {
        door.close()?.lock()?.break_door()?.fix()?;
        println!("round {round} close..fix:   {}", door.state());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
